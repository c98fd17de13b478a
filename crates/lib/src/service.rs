use crate::{
    command::{Amount, CheckIn, Command},
    error::Error,
    ledger::{Ledger, LedgerError},
    parser::{validate_command, ParserError, RawCommand},
    passenger::{JourneyCharge, Passenger},
    summary::{JourneyLog, Summary},
    writer::write_summary,
};
use std::io::Write;
use tracing::debug;

/// What a fare card system can be asked to do.
pub trait FareService {
    /// Runs commands in order, writing every summary to `out` as soon as it is
    /// built. Returns the last summary written, or an empty string if there
    /// was none. The first failing command aborts the run.
    fn execute_commands<I, W>(&mut self, commands: I, out: W) -> Result<String, Error>
    where
        I: IntoIterator<Item = Result<RawCommand, ParserError>>,
        W: Write;

    fn open_or_reset_account(&mut self, card_id: &str, balance: Amount) -> &Passenger;

    fn process_check_in(&mut self, check_in: CheckIn) -> Result<JourneyCharge, LedgerError>;

    fn build_summary(&self) -> Summary;
}

#[derive(Default, Debug, Clone)]
pub struct MetroCardService {
    ledger: Ledger,
    journeys: JourneyLog,
}

impl MetroCardService {
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn journeys(&self) -> &JourneyLog {
        &self.journeys
    }
}

impl FareService for MetroCardService {
    fn execute_commands<I, W>(&mut self, commands: I, mut out: W) -> Result<String, Error>
    where
        I: IntoIterator<Item = Result<RawCommand, ParserError>>,
        W: Write,
    {
        let mut output = String::new();
        for raw in commands {
            let command = validate_command(&raw?)?;
            debug!(command = command.name(), "dispatching");
            match command {
                Command::Balance(b) => {
                    self.open_or_reset_account(&b.card_id, b.balance);
                }
                Command::CheckIn(c) => {
                    self.process_check_in(c)?;
                }
                Command::PrintSummary => {
                    let mut buf = Vec::new();
                    write_summary(&self.build_summary(), &mut buf)?;
                    out.write_all(&buf)?;
                    out.flush()?;
                    output = String::from_utf8_lossy(&buf).into_owned();
                }
            }
        }
        Ok(output)
    }

    fn open_or_reset_account(&mut self, card_id: &str, balance: Amount) -> &Passenger {
        self.ledger.open_or_reset_account(card_id, balance)
    }

    fn process_check_in(&mut self, check_in: CheckIn) -> Result<JourneyCharge, LedgerError> {
        let charge = self
            .ledger
            .charge_journey(&check_in.card_id, check_in.passenger_type)?;
        self.journeys.record_check_in(
            &check_in.card_id,
            check_in.passenger_type,
            check_in.station,
            charge,
        );
        Ok(charge)
    }

    fn build_summary(&self) -> Summary {
        self.journeys.build_summary()
    }
}
