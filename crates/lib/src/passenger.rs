use crate::command::{Amount, PassengerType};
use tracing::warn;

/// Every journey with an even sequence number is charged half fare.
const DISCOUNT_EVERY: u32 = 2;
/// The service fee is 2% of the shortfall, i.e. one unit per started 50.
const SERVICE_FEE_DIVISOR: Amount = 50;

/// What a single journey cost the card holder.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct JourneyCharge {
    pub discount: Amount,
    pub cost_of_journey: Amount,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Passenger {
    pub id: String,
    pub balance: Amount,
    pub journey_count: u32,
}

impl Passenger {
    pub fn new(id: impl Into<String>, balance: Amount) -> Self {
        Self {
            id: id.into(),
            balance,
            ..Default::default()
        }
    }

    /// Charges one journey against the card.
    ///
    /// Every second journey gets half the base fare off. When the balance
    /// can't cover the charge, the shortfall is collected on top of what is
    /// left on the card plus a 2% service fee (rounded up), and the balance
    /// drops to zero. The charge itself never fails.
    pub fn charge(&mut self, passenger_type: PassengerType) -> JourneyCharge {
        let fare = passenger_type.fare();
        self.journey_count += 1;

        let discount = if self.journey_count % DISCOUNT_EVERY == 0 {
            fare / 2
        } else {
            0
        };
        let charge = fare - discount;

        let cost_of_journey = match self.balance.checked_sub(charge) {
            Some(remaining) => {
                self.balance = remaining;
                charge
            }
            None => {
                let shortfall = charge - self.balance;
                let service_fee = shortfall.div_ceil(SERVICE_FEE_DIVISOR);
                warn!(
                    card = %self.id,
                    balance = self.balance,
                    shortfall,
                    service_fee,
                    "insufficient balance, recharging card"
                );
                let collected = self.balance + shortfall + service_fee;
                self.balance = 0;
                collected
            }
        };

        JourneyCharge {
            discount,
            cost_of_journey,
        }
    }
}
