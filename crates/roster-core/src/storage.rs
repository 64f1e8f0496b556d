//! The `AddressBookStorage` trait.
//!
//! Implemented by persistence backends (e.g. `roster-store-sqlite`). The
//! shell depends on this abstraction, never on a concrete backend.

use std::path::Path;

use crate::address_book::{AddressBook, ReadOnlyAddressBook};

pub trait AddressBookStorage {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Where this backend keeps its data.
  fn address_book_file_path(&self) -> &Path;

  /// Load the last saved snapshot. Returns `None` if nothing has ever been
  /// saved, so the caller can decide what a first run looks like.
  fn read_address_book(&self) -> Result<Option<AddressBook>, Self::Error>;

  /// Replace the stored snapshot with `address_book`.
  fn save_address_book(
    &mut self,
    address_book: &dyn ReadOnlyAddressBook,
  ) -> Result<(), Self::Error>;
}
