use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    ParserError(#[from] crate::parser::ParserError),
    #[error(transparent)]
    ValidationError(#[from] crate::parser::ValidationError),
    #[error(transparent)]
    LedgerError(#[from] crate::ledger::LedgerError),
    #[error("Failed to write summary: {0}")]
    OutputError(#[from] std::io::Error),
}
