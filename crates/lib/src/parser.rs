use crate::command::*;
use std::{io::BufRead, str::FromStr};
use strum::VariantNames;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParserError {
    #[error("Some error occurred while processing the input file: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid command `{0}`. Please check the input.")]
    InvalidCommand(String),
    #[error("{command} command requires exactly {expected} argument(s), got {actual}")]
    WrongArgumentCount {
        command: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("Balance must be a non-negative number, got `{0}`")]
    InvalidBalance(String),
    #[error(
        "Invalid passenger type `{0}`. Allowed types: {allowed}",
        allowed = PassengerType::VARIANTS.join(", ")
    )]
    InvalidPassengerType(String),
    #[error(
        "Invalid station `{0}`. Allowed stations: {allowed}",
        allowed = Station::VARIANTS.join(", ")
    )]
    InvalidStation(String),
}

/// One input line split into its command name and arguments, not yet validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCommand {
    pub name: String,
    pub args: Vec<String>,
}

impl RawCommand {
    pub fn new(name: impl Into<String>, args: &[&str]) -> Self {
        Self {
            name: name.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// Lazily splits the input into commands, skipping blank lines and `#` comments.
pub fn parse_commands<R: BufRead>(
    reader: R,
) -> impl Iterator<Item = Result<RawCommand, ParserError>> {
    reader
        .lines()
        .filter_map(|line| match line {
            Ok(line) => parse_line(&line).map(Ok),
            Err(e) => Some(Err(ParserError::from(e))),
        })
}

#[inline]
fn parse_line(line: &str) -> Option<RawCommand> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let mut tokens = line.split_whitespace().map(str::to_string);
    Some(RawCommand {
        name: tokens.next()?,
        args: tokens.collect(),
    })
}

pub fn validate_command(raw: &RawCommand) -> Result<Command, ValidationError> {
    let args = raw.args.as_slice();
    Ok(match raw.name.as_str() {
        //case sensitive, the input format only knows upper case
        "BALANCE" => {
            expect_args("BALANCE", args, 2)?;
            Command::new_balance(&args[0], parse_balance(&args[1])?)
        }
        "CHECK_IN" => {
            expect_args("CHECK_IN", args, 3)?;
            let passenger_type = PassengerType::from_str(&args[1])
                .map_err(|_| ValidationError::InvalidPassengerType(args[1].clone()))?;
            let station = Station::from_str(&args[2])
                .map_err(|_| ValidationError::InvalidStation(args[2].clone()))?;
            Command::new_check_in(&args[0], passenger_type, station)
        }
        "PRINT_SUMMARY" => {
            expect_args("PRINT_SUMMARY", args, 0)?;
            Command::new_print_summary()
        }
        _ => return Err(ValidationError::InvalidCommand(raw.name.clone())),
    })
}

fn expect_args(
    command: &'static str,
    args: &[String],
    expected: usize,
) -> Result<(), ValidationError> {
    if args.len() != expected {
        return Err(ValidationError::WrongArgumentCount {
            command,
            expected,
            actual: args.len(),
        });
    }
    Ok(())
}

/// The token must read as a non-negative number: decimal, exponent or a
/// `0x`/`0o`/`0b` literal. The balance is its leading run of decimal digits,
/// so `12.9` is 12, `1e3` is 1 and `0x10` is 0.
fn parse_balance(token: &str) -> Result<Amount, ValidationError> {
    let invalid = || ValidationError::InvalidBalance(token.to_string());

    let is_number = match token.parse::<f64>() {
        Ok(value) => value.is_finite() && value >= 0.0,
        Err(_) => is_radix_literal(token),
    };
    if !is_number {
        return Err(invalid());
    }

    let unsigned = token
        .strip_prefix('+')
        .or_else(|| token.strip_prefix('-'))
        .unwrap_or(token);
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    unsigned[..end].parse().map_err(|_| invalid())
}

fn is_radix_literal(token: &str) -> bool {
    let radix = match token.get(..2).map(str::to_ascii_lowercase).as_deref() {
        Some("0x") => 16,
        Some("0o") => 8,
        Some("0b") => 2,
        _ => return false,
    };
    let digits = &token[2..];
    !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix))
}
