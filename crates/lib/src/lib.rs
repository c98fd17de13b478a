mod command;
mod error;
mod ledger;
mod parser;
mod passenger;
mod service;
mod summary;
mod writer;

pub use command::*;
pub use error::Error;
pub use ledger::*;
pub use parser::{parse_commands, validate_command, ParserError, RawCommand, ValidationError};
pub use passenger::*;
pub use service::*;
pub use summary::*;
pub use writer::write_summary;

/// Runs a whole command file, writing every summary to `writer` as it is
/// printed. Returns the last summary.
pub fn execute<R: std::io::Read, W: std::io::Write>(
    reader: R,
    writer: W,
) -> Result<String, Error> {
    let commands = parse_commands(std::io::BufReader::new(reader));
    MetroCardService::default().execute_commands(commands, writer)
}
