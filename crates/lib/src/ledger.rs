use crate::{
    command::{Amount, PassengerType},
    passenger::{JourneyCharge, Passenger},
};
use std::collections::{hash_map::Entry, HashMap};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Metrocard User Not Registered: {0}")]
    UnregisteredCard(String),
}

#[derive(Default, Debug, Clone, PartialEq)]
pub struct Ledger {
    passengers: HashMap<String, Passenger>,
}

impl Ledger {
    pub fn iter(&self) -> impl Iterator<Item = &Passenger> {
        self.passengers.values()
    }

    pub fn get(&self, card_id: &str) -> Option<&Passenger> {
        self.passengers.get(card_id)
    }

    /// Registers a card, or overwrites the balance of an existing one.
    ///
    /// The journey count of an existing card is kept, so the discount parity
    /// carries over a top-up.
    pub fn open_or_reset_account(&mut self, card_id: &str, balance: Amount) -> &Passenger {
        match self.passengers.entry(card_id.to_string()) {
            Entry::Occupied(entry) => {
                let passenger = entry.into_mut();
                warn!(
                    card = card_id,
                    old_balance = passenger.balance,
                    balance,
                    "balance reset on an existing card"
                );
                passenger.balance = balance;
                passenger
            }
            Entry::Vacant(entry) => {
                debug!(card = card_id, balance, "card registered");
                entry.insert(Passenger::new(card_id, balance))
            }
        }
    }

    pub fn charge_journey(
        &mut self,
        card_id: &str,
        passenger_type: PassengerType,
    ) -> Result<JourneyCharge, LedgerError> {
        let passenger = self
            .passengers
            .get_mut(card_id)
            .ok_or_else(|| LedgerError::UnregisteredCard(card_id.to_string()))?;

        let charge = passenger.charge(passenger_type);
        debug!(
            card = card_id,
            %passenger_type,
            discount = charge.discount,
            cost = charge.cost_of_journey,
            balance = passenger.balance,
            "journey charged"
        );
        Ok(charge)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::{Ledger, LedgerError};
    use crate::{JourneyCharge, Passenger, PassengerType};

    #[allow(non_upper_case_globals)]
    const card: &str = "MC1";

    #[test]
    fn can_open_account_then_charge() {
        let mut ledger = Ledger::default();
        ledger.open_or_reset_account(card, 600);
        assert_eq!(
            ledger.charge_journey(card, PassengerType::Adult),
            Ok(JourneyCharge {
                discount: 0,
                cost_of_journey: 200
            })
        );
        assert_eq!(
            ledger,
            Ledger {
                passengers: HashMap::from([(
                    card.to_string(),
                    Passenger {
                        id: card.to_string(),
                        balance: 400,
                        journey_count: 1,
                    }
                )])
            }
        );
    }

    #[test]
    fn cant_charge_unregistered_card() {
        let mut ledger = Ledger::default();
        ledger.open_or_reset_account("MC2", 100);
        assert_eq!(
            ledger.charge_journey(card, PassengerType::Kid),
            Err(LedgerError::UnregisteredCard(card.to_string()))
        );
        assert_eq!(ledger.get("MC2").map(|p| p.journey_count), Some(0));
    }

    #[test]
    fn reset_overwrites_balance_but_keeps_journey_count() {
        let mut ledger = Ledger::default();
        ledger.open_or_reset_account(card, 600);
        ledger.charge_journey(card, PassengerType::Adult).unwrap();

        let passenger = ledger.open_or_reset_account(card, 50);
        assert_eq!(passenger.balance, 50);
        assert_eq!(passenger.journey_count, 1);

        // still the second journey, so still discounted
        assert_eq!(
            ledger.charge_journey(card, PassengerType::Adult),
            Ok(JourneyCharge {
                discount: 100,
                cost_of_journey: 101
            })
        );
        assert_eq!(ledger.get(card).map(|p| p.balance), Some(0));
    }

    #[test]
    fn cards_are_charged_independently() {
        let mut ledger = Ledger::default();
        ledger.open_or_reset_account("MC1", 600);
        ledger.open_or_reset_account("MC2", 600);

        ledger.charge_journey("MC1", PassengerType::Adult).unwrap();
        assert_eq!(
            ledger.charge_journey("MC2", PassengerType::Adult),
            Ok(JourneyCharge {
                discount: 0,
                cost_of_journey: 200
            })
        );
        assert_eq!(ledger.iter().count(), 2);
    }
}
