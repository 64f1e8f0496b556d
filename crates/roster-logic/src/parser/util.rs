//! Field parsers shared by the command parsers. Each trims its input before
//! validating.

use roster_core::{
  cca::SessionCount,
  field::{Address, CcaName, Email, Name, Phone, Role},
};

use crate::{error::ParseError, index::Index};

pub fn parse_index(input: &str) -> Result<Index, ParseError> {
  input
    .trim()
    .parse::<usize>()
    .ok()
    .and_then(Index::from_one_based)
    .ok_or(ParseError::InvalidIndex)
}

pub fn parse_name(input: &str) -> Result<Name, ParseError> { Ok(Name::new(input.trim())?) }

pub fn parse_phone(input: &str) -> Result<Phone, ParseError> { Ok(Phone::new(input.trim())?) }

pub fn parse_email(input: &str) -> Result<Email, ParseError> { Ok(Email::new(input.trim())?) }

pub fn parse_address(input: &str) -> Result<Address, ParseError> {
  Ok(Address::new(input.trim())?)
}

pub fn parse_cca_name(input: &str) -> Result<CcaName, ParseError> {
  Ok(CcaName::new(input.trim())?)
}

pub fn parse_role(input: &str) -> Result<Role, ParseError> { Ok(Role::new(input.trim())?) }

pub fn parse_session_count(input: &str) -> Result<SessionCount, ParseError> {
  let value = input
    .trim()
    .parse::<i64>()
    .map_err(|_| ParseError::Validation(session_count_error()))?;
  Ok(SessionCount::new(value)?)
}

/// A signed attendance adjustment.
pub fn parse_amount(input: &str) -> Result<i64, ParseError> {
  input
    .trim()
    .parse::<i64>()
    .map_err(|_| ParseError::InvalidAmount)
}

fn session_count_error() -> roster_core::Error {
  roster_core::Error::Validation {
    field:   "session count",
    message: SessionCount::MESSAGE_CONSTRAINTS,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn index_must_be_positive_integer() {
    assert_eq!(parse_index(" 3 ").unwrap().one_based(), 3);
    assert_eq!(parse_index("0"), Err(ParseError::InvalidIndex));
    assert_eq!(parse_index("-1"), Err(ParseError::InvalidIndex));
    assert_eq!(parse_index("1 2"), Err(ParseError::InvalidIndex));
    assert_eq!(parse_index("a"), Err(ParseError::InvalidIndex));
  }

  #[test]
  fn fields_are_trimmed() {
    assert_eq!(parse_name("  Alice  ").unwrap().as_str(), "Alice");
    assert_eq!(parse_cca_name(" Choir ").unwrap().as_str(), "Choir");
  }

  #[test]
  fn invalid_field_reports_constraint() {
    let err = parse_phone("12").unwrap_err();
    assert_eq!(err.to_string(), Phone::MESSAGE_CONSTRAINTS);
  }

  #[test]
  fn session_counts() {
    assert_eq!(parse_session_count("12").unwrap().value(), 12);
    assert!(parse_session_count("-1").is_err());
    assert!(parse_session_count("twelve").is_err());
  }

  #[test]
  fn amounts_may_be_negative() {
    assert_eq!(parse_amount("-2"), Ok(-2));
    assert_eq!(parse_amount("+3"), Ok(3));
    assert_eq!(parse_amount("1.5"), Err(ParseError::InvalidAmount));
  }
}
