//! Error type for `roster-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// Stored rows decoded to values the domain rejects: an invalid field,
  /// a duplicate, or a record for a CCA that is not stored.
  #[error("stored address book is invalid: {0}")]
  Core(#[from] roster_core::Error),

  #[error("database error: {0}")]
  Database(#[from] rusqlite::Error),

  #[error("io error: {0}")]
  Io(#[from] std::io::Error),

  #[error("unsupported schema version {found} (expected {expected})")]
  SchemaVersion { found: i64, expected: i64 },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
