//! Error types for `roster-core`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  /// A field value does not satisfy its format rule. `message` is the
  /// user-facing constraint text.
  #[error("{message}")]
  Validation {
    field:   &'static str,
    message: &'static str,
  },

  #[error("person already exists: {0}")]
  DuplicatePerson(String),

  #[error("person not found: {0}")]
  PersonNotFound(String),

  #[error("CCA already exists: {0}")]
  DuplicateCca(String),

  #[error("CCA not found: {0}")]
  CcaNotFound(String),

  /// A person holds a record for a CCA the address book does not contain.
  #[error("{person} has a record for unknown CCA {cca}")]
  UnknownCca { person: String, cca: String },

  #[error("{person} is not enrolled in {cca}")]
  NotEnrolled { person: String, cca: String },
}

impl Error {
  /// Whether this error means the caller broke a precondition it was
  /// expected to check first (duplicate add, missing target, dangling
  /// reference), as opposed to bad user input or a domain rule.
  pub fn is_precondition(&self) -> bool {
    matches!(
      self,
      Self::DuplicatePerson(_)
        | Self::PersonNotFound(_)
        | Self::DuplicateCca(_)
        | Self::CcaNotFound(_)
        | Self::UnknownCca { .. }
    )
  }

  pub fn is_validation(&self) -> bool {
    matches!(self, Self::Validation { .. })
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
