//! Error types for `roster-logic`.
//!
//! [`ParseError`] covers input that never reached the model; every variant
//! is user-correctable. [`CommandError`] covers commands that parsed but
//! could not be applied to the current roster.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
  #[error("Invalid command format!\n{usage}")]
  InvalidFormat { usage: &'static str },

  #[error("Unknown command: {0}")]
  UnknownCommand(String),

  #[error("Index is not a non-zero unsigned integer.")]
  InvalidIndex,

  #[error("Amount should be a whole number, e.g. 2 or -1.")]
  InvalidAmount,

  #[error("Multiple values specified for the following single-valued field(s): {}", .0.join(" "))]
  DuplicatePrefixes(Vec<&'static str>),

  #[error("At least one field to edit must be provided.")]
  NothingToEdit,

  /// A field value failed its format rule.
  #[error(transparent)]
  Validation(#[from] roster_core::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
  #[error("The person index provided is invalid")]
  InvalidPersonIndex,

  #[error("This person already exists in the address book")]
  DuplicatePerson,

  #[error("This CCA already exists in the address book")]
  DuplicateCca,

  #[error("The CCA {0} does not exist")]
  UnknownCca(String),

  #[error("{person} is already enrolled in {cca}")]
  AlreadyEnrolled { person: String, cca: String },

  #[error(transparent)]
  Model(#[from] roster_core::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error(transparent)]
  Parse(#[from] ParseError),

  #[error(transparent)]
  Command(#[from] CommandError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
