//! Ties the model, the command layer and storage together.

use anyhow::{Context as _, Result};
use roster_core::{
  address_book::AddressBook,
  model::{Model, ModelManager},
  storage::AddressBookStorage,
};
use roster_logic::{CommandResult, parse_command};
use tracing::{info, warn};

use crate::sample::sample_address_book;

// ─── Startup ─────────────────────────────────────────────────────────────────

/// The roster to start with: the saved one, the sample roster if nothing has
/// been saved yet, or an empty one if the saved data cannot be read.
pub fn initial_address_book<S: AddressBookStorage>(storage: &S) -> AddressBook {
  let path = storage.address_book_file_path().display();
  match storage.read_address_book() {
    Ok(Some(book)) => book,
    Ok(None) => {
      info!(%path, "no saved data, starting with the sample roster");
      sample_address_book().unwrap_or_else(|err| {
        warn!(error = %err, "sample roster is invalid, starting empty");
        AddressBook::new()
      })
    }
    Err(err) => {
      warn!(%path, error = %err, "saved data could not be read, starting empty");
      AddressBook::new()
    }
  }
}

// ─── App ─────────────────────────────────────────────────────────────────────

pub struct App<S> {
  model:   ModelManager,
  storage: S,
}

impl<S: AddressBookStorage> App<S> {
  pub fn new(model: ModelManager, storage: S) -> Self { Self { model, storage } }

  pub fn model(&self) -> &ModelManager { &self.model }

  /// Parse and run one line of input. The address book is saved after every
  /// successful command that can change it.
  pub fn execute(&mut self, input: &str) -> Result<CommandResult> {
    let command = parse_command(input)?;
    let result = command.execute(&mut self.model)?;

    if command.mutates_address_book() {
      self
        .storage
        .save_address_book(self.model.address_book())
        .with_context(|| {
          format!(
            "could not save data to {}",
            self.storage.address_book_file_path().display()
          )
        })?;
    }
    Ok(result)
  }
}
