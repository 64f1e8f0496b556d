//! Core types for the Roster contact and CCA manager.
//!
//! This crate holds the in-memory model: validated entity values, the
//! [`AddressBook`](address_book::AddressBook) aggregate, and the
//! [`ModelManager`](model::ModelManager) facade that every command goes
//! through. It has no storage, terminal or parsing dependencies; those live
//! in the outer crates and talk to this one through [`model::Model`] and
//! [`storage::AddressBookStorage`].

pub mod address_book;
pub mod cca;
pub mod error;
pub mod field;
pub mod model;
pub mod person;
pub mod predicate;
pub mod prefs;
pub mod storage;
mod unique_list;

pub use error::{Error, Result};

#[cfg(test)]
mod tests;
