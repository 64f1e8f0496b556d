//! The `AddressBook` aggregate: the authoritative persons and CCAs.

use tracing::debug;

use crate::{
  Error, Result,
  cca::Cca,
  field::CcaName,
  person::Person,
  unique_list::UniqueList,
};

// ─── Read-only view ──────────────────────────────────────────────────────────

/// Read access to an address book snapshot. Storage backends hand one of
/// these to the model at startup and receive one at save time.
pub trait ReadOnlyAddressBook {
  fn person_list(&self) -> &[Person];

  fn cca_list(&self) -> &[Cca];
}

// ─── AddressBook ─────────────────────────────────────────────────────────────

/// Persons and CCAs, each unique by identity.
///
/// Every CCA record held by a person should name a CCA in [`cca_list`]. The
/// model keeps that true as it mutates the book, and [`reset_data`] checks it
/// for whole snapshots.
///
/// [`cca_list`]: ReadOnlyAddressBook::cca_list
/// [`reset_data`]: AddressBook::reset_data
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
  persons: UniqueList<Person>,
  ccas:    UniqueList<Cca>,
}

impl AddressBook {
  pub fn new() -> Self { Self::default() }

  /// Build an address book from raw collections, validating uniqueness and
  /// CCA references.
  pub fn with_data(
    persons: impl IntoIterator<Item = Person>,
    ccas: impl IntoIterator<Item = Cca>,
  ) -> Result<Self> {
    let ccas = UniqueList::from_items(ccas)?;
    let persons = UniqueList::from_items(persons)?;

    for person in persons.as_slice() {
      if let Some(missing) = person.ccas().find(|cca| !ccas.contains(cca)) {
        return Err(Error::UnknownCca {
          person: person.name().to_string(),
          cca:    missing.name().to_string(),
        });
      }
    }

    Ok(Self { persons, ccas })
  }

  /// Copy of another snapshot, validated.
  pub fn from_snapshot(other: &(impl ReadOnlyAddressBook + ?Sized)) -> Result<Self> {
    Self::with_data(other.person_list().to_vec(), other.cca_list().to_vec())
  }

  /// Replace both collections with those of `other`. On error `self` is left
  /// untouched.
  pub fn reset_data(&mut self, other: &(impl ReadOnlyAddressBook + ?Sized)) -> Result<()> {
    *self = Self::from_snapshot(other)?;
    debug!(
      persons = self.persons.as_slice().len(),
      ccas = self.ccas.as_slice().len(),
      "address book reset"
    );
    Ok(())
  }

  // ── Persons ───────────────────────────────────────────────────────────────

  pub fn has_person(&self, person: &Person) -> bool { self.persons.contains(person) }

  pub fn add_person(&mut self, person: Person) -> Result<()> { self.persons.add(person) }

  /// Replace `target` with `edited`, keeping its position.
  pub fn set_person(&mut self, target: &Person, edited: Person) -> Result<()> {
    self.persons.set(target, edited)
  }

  pub fn remove_person(&mut self, target: &Person) -> Result<()> {
    self.persons.remove(target)
  }

  // ── CCAs ──────────────────────────────────────────────────────────────────

  pub fn has_cca(&self, cca: &Cca) -> bool { self.ccas.contains(cca) }

  pub fn add_cca(&mut self, cca: Cca) -> Result<()> { self.ccas.add(cca) }

  pub fn set_cca(&mut self, target: &Cca, edited: Cca) -> Result<()> {
    self.ccas.set(target, edited)
  }

  pub fn remove_cca(&mut self, target: &Cca) -> Result<()> { self.ccas.remove(target) }

  pub fn find_cca(&self, name: &CcaName) -> Option<&Cca> {
    self.ccas.as_slice().iter().find(|cca| cca.name() == name)
  }
}

impl ReadOnlyAddressBook for AddressBook {
  fn person_list(&self) -> &[Person] { self.persons.as_slice() }

  fn cca_list(&self) -> &[Cca] { self.ccas.as_slice() }
}
