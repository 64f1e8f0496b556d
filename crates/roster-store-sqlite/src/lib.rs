//! SQLite backend for Roster snapshots.
//!
//! Each save rewrites the whole address book inside one transaction; each
//! read rebuilds it through the validating constructors in `roster-core`.

mod encode;
mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::SqliteStorage;

#[cfg(test)]
mod tests;
