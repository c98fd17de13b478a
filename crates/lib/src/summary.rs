use crate::{
    command::{Amount, PassengerType, Station},
    passenger::JourneyCharge,
};
use std::{cmp::Reverse, collections::HashMap};
use strum::IntoEnumIterator;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JourneyRecord {
    pub card_id: String,
    pub passenger_type: PassengerType,
    pub station: Station,
    pub discount: Amount,
    pub cost_of_journey: Amount,
}

/// Order in which passenger types first checked in at one station.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct StationAggregate {
    first_seen_order: Vec<PassengerType>,
}

impl StationAggregate {
    fn observe(&mut self, passenger_type: PassengerType) {
        if !self.first_seen_order.contains(&passenger_type) {
            self.first_seen_order.push(passenger_type);
        }
    }

    fn rank(&self, passenger_type: PassengerType) -> usize {
        self.first_seen_order
            .iter()
            .position(|t| *t == passenger_type)
            .unwrap_or(usize::MAX)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassengerTypeSummary {
    pub passenger_type: PassengerType,
    pub count: usize,
    pub total_charge: Amount,
    pub total_discount: Amount,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationSummary {
    pub station: Station,
    pub total_collected: Amount,
    pub total_discount: Amount,
    /// Highest collection first, earliest seen type first on ties.
    pub passenger_types: Vec<PassengerTypeSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub stations: Vec<StationSummary>,
}

/// Every successful check-in of a run, in processing order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct JourneyLog {
    records: Vec<JourneyRecord>,
    stations: HashMap<Station, StationAggregate>,
}

impl JourneyLog {
    pub fn records(&self) -> &[JourneyRecord] {
        &self.records
    }

    pub fn record_check_in(
        &mut self,
        card_id: &str,
        passenger_type: PassengerType,
        station: Station,
        charge: JourneyCharge,
    ) {
        self.stations
            .entry(station)
            .or_default()
            .observe(passenger_type);
        self.records.push(JourneyRecord {
            card_id: card_id.to_string(),
            passenger_type,
            station,
            discount: charge.discount,
            cost_of_journey: charge.cost_of_journey,
        });
    }

    pub fn build_summary(&self) -> Summary {
        Summary {
            stations: Station::iter()
                .map(|station| self.station_summary(station))
                .collect(),
        }
    }

    fn station_summary(&self, station: Station) -> StationSummary {
        let mut by_type: HashMap<PassengerType, Vec<&JourneyRecord>> = HashMap::new();
        for record in self.records.iter().filter(|r| r.station == station) {
            by_type.entry(record.passenger_type).or_default().push(record);
        }

        let mut passenger_types = by_type
            .into_iter()
            .map(|(passenger_type, journeys)| PassengerTypeSummary {
                passenger_type,
                count: journeys.len(),
                total_charge: journeys.iter().map(|j| j.cost_of_journey).sum(),
                total_discount: journeys.iter().map(|j| j.discount).sum(),
            })
            .collect::<Vec<_>>();

        let aggregate = self.stations.get(&station);
        passenger_types.sort_by_key(|stats| {
            (
                Reverse(stats.total_charge),
                aggregate.map_or(usize::MAX, |a| a.rank(stats.passenger_type)),
            )
        });

        StationSummary {
            station,
            total_collected: passenger_types.iter().map(|s| s.total_charge).sum(),
            total_discount: passenger_types.iter().map(|s| s.total_discount).sum(),
            passenger_types,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn charge(discount: Amount, cost_of_journey: Amount) -> JourneyCharge {
        JourneyCharge {
            discount,
            cost_of_journey,
        }
    }

    fn empty_station(station: Station) -> StationSummary {
        StationSummary {
            station,
            total_collected: 0,
            total_discount: 0,
            passenger_types: vec![],
        }
    }

    #[test]
    fn empty_log_still_lists_both_stations() {
        assert_eq!(
            JourneyLog::default().build_summary(),
            Summary {
                stations: vec![
                    empty_station(Station::Central),
                    empty_station(Station::Airport)
                ]
            }
        );
    }

    #[test]
    fn higher_collection_sorts_first() {
        let mut log = JourneyLog::default();
        log.record_check_in("MC1", PassengerType::Kid, Station::Central, charge(0, 50));
        log.record_check_in("MC2", PassengerType::Adult, Station::Central, charge(0, 200));

        let summary = log.build_summary();
        let central = &summary.stations[0];
        assert_eq!(
            central
                .passenger_types
                .iter()
                .map(|s| s.passenger_type)
                .collect::<Vec<_>>(),
            vec![PassengerType::Adult, PassengerType::Kid]
        );
        assert_eq!(central.total_collected, 250);
        assert_eq!(summary.stations[1], empty_station(Station::Airport));
    }

    #[test]
    fn ties_go_to_the_type_seen_first_at_that_station() {
        let mut log = JourneyLog::default();
        // at AIRPORT the kid shows up first, at CENTRAL the senior does
        log.record_check_in("MC1", PassengerType::Kid, Station::Airport, charge(0, 50));
        log.record_check_in("MC2", PassengerType::SeniorCitizen, Station::Central, charge(50, 50));
        log.record_check_in("MC3", PassengerType::SeniorCitizen, Station::Airport, charge(50, 50));
        log.record_check_in("MC4", PassengerType::Kid, Station::Central, charge(0, 50));

        let summary = log.build_summary();
        let order = |s: &StationSummary| {
            s.passenger_types
                .iter()
                .map(|t| t.passenger_type)
                .collect::<Vec<_>>()
        };
        assert_eq!(
            order(&summary.stations[0]),
            vec![PassengerType::SeniorCitizen, PassengerType::Kid]
        );
        assert_eq!(
            order(&summary.stations[1]),
            vec![PassengerType::Kid, PassengerType::SeniorCitizen]
        );
    }

    #[test]
    fn station_totals_are_the_sum_of_their_types() {
        let mut log = JourneyLog::default();
        log.record_check_in("MC1", PassengerType::Adult, Station::Central, charge(0, 200));
        log.record_check_in("MC1", PassengerType::Adult, Station::Central, charge(100, 100));
        log.record_check_in("MC2", PassengerType::Kid, Station::Central, charge(0, 50));
        log.record_check_in("MC3", PassengerType::SeniorCitizen, Station::Airport, charge(0, 102));

        let summary = log.build_summary();
        for station in &summary.stations {
            assert_eq!(
                station.total_collected,
                station.passenger_types.iter().map(|s| s.total_charge).sum::<Amount>()
            );
            assert_eq!(
                station.total_discount,
                station.passenger_types.iter().map(|s| s.total_discount).sum::<Amount>()
            );
        }
        assert_eq!(
            summary.stations[0].passenger_types[0],
            PassengerTypeSummary {
                passenger_type: PassengerType::Adult,
                count: 2,
                total_charge: 300,
                total_discount: 100,
            }
        );
        assert_eq!(summary.stations[1].total_collected, 102);
        assert_eq!(log.records().len(), 4);
    }
}
