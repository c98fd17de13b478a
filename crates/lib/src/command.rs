use strum_macros::{Display, EnumIter, EnumString, EnumVariantNames, IntoStaticStr};

/// Whole currency units. Fares and balances never carry fractions.
pub type Amount = u64;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    EnumVariantNames,
    IntoStaticStr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PassengerType {
    Adult,
    SeniorCitizen,
    Kid,
}

impl PassengerType {
    /// Base fare for a single journey, the same at every station.
    pub const fn fare(self) -> Amount {
        match self {
            PassengerType::Adult => 200,
            PassengerType::SeniorCitizen => 100,
            PassengerType::Kid => 50,
        }
    }
}

/// Check-in origins. Declaration order is the order stations appear in a summary.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    EnumVariantNames,
    IntoStaticStr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Station {
    Central,
    Airport,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Balance(Balance),
    CheckIn(CheckIn),
    PrintSummary,
}

impl Command {
    pub fn new_balance(card_id: impl Into<String>, balance: Amount) -> Self {
        Self::Balance(Balance {
            card_id: card_id.into(),
            balance,
        })
    }
    pub fn new_check_in(
        card_id: impl Into<String>,
        passenger_type: PassengerType,
        station: Station,
    ) -> Self {
        Self::CheckIn(CheckIn {
            card_id: card_id.into(),
            passenger_type,
            station,
        })
    }
    pub fn new_print_summary() -> Self {
        Self::PrintSummary
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::Balance(_) => "BALANCE",
            Command::CheckIn(_) => "CHECK_IN",
            Command::PrintSummary => "PRINT_SUMMARY",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Balance {
    pub card_id: String,
    pub balance: Amount,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckIn {
    pub card_id: String,
    pub passenger_type: PassengerType,
    pub station: Station,
}
