//! The `Model` trait and its in-memory implementation, [`ModelManager`].
//!
//! Commands mutate the roster only through [`Model`]. The manager owns the
//! [`AddressBook`] outright; callers get shared borrows of it and of the
//! filtered person view, never a mutable handle.

use std::{
  fmt,
  path::{Path, PathBuf},
  sync::Arc,
};

use tracing::debug;

use crate::{
  Error, Result,
  address_book::{AddressBook, ReadOnlyAddressBook},
  cca::Cca,
  person::Person,
  predicate::{PersonPredicate, show_all_persons},
  prefs::{GuiSettings, UserPrefs},
};

// ─── Trait ───────────────────────────────────────────────────────────────────

pub trait Model {
  // ── User prefs ────────────────────────────────────────────────────────

  fn user_prefs(&self) -> &UserPrefs;

  fn set_user_prefs(&mut self, user_prefs: &UserPrefs);

  fn gui_settings(&self) -> &GuiSettings;

  fn set_gui_settings(&mut self, gui_settings: GuiSettings);

  fn address_book_file_path(&self) -> &Path;

  fn set_address_book_file_path(&mut self, path: PathBuf);

  // ── Address book ──────────────────────────────────────────────────────

  fn address_book(&self) -> &AddressBook;

  /// Replace the whole roster with `address_book`, validating it first.
  fn set_address_book(&mut self, address_book: &dyn ReadOnlyAddressBook) -> Result<()>;

  /// Whether a person with the same identity exists.
  fn has_person(&self, person: &Person) -> bool;

  /// Add a person and reset the filtered view to show everyone.
  fn add_person(&mut self, person: Person) -> Result<()>;

  /// Remove exactly `target`.
  fn delete_person(&mut self, target: &Person) -> Result<()>;

  /// Replace `target` with `edited`. `edited` must not share an identity
  /// with any other person.
  fn set_person(&mut self, target: &Person, edited: Person) -> Result<()>;

  fn has_cca(&self, cca: &Cca) -> bool;

  fn add_cca(&mut self, cca: Cca) -> Result<()>;

  /// Remove `target` and every person's record for it. Either the whole
  /// cascade applies or nothing does.
  fn delete_cca(&mut self, target: &Cca) -> Result<()>;

  /// Replace `target` with `edited` and move every person's record for
  /// `target` over to `edited`. Either the whole rename applies or nothing
  /// does.
  fn set_cca(&mut self, target: &Cca, edited: Cca) -> Result<()>;

  /// Add `amount` (possibly negative) to the sessions `person` attended in
  /// `cca`. Fails with [`Error::NotEnrolled`] if the person has no record
  /// for the CCA, and with a validation error if the count would go below
  /// zero. Nothing is mutated on failure.
  fn record_attendance(&mut self, cca: &Cca, person: &Person, amount: i64) -> Result<()>;

  fn cca_list(&self) -> &[Cca];

  // ── Filtered view ─────────────────────────────────────────────────────

  fn filtered_person_list(&self) -> FilteredPersonList<'_>;

  fn update_filtered_person_list(&mut self, predicate: Arc<dyn PersonPredicate>);
}

// ─── Filtered view ───────────────────────────────────────────────────────────

/// The persons accepted by the active predicate, evaluated on every read
/// against the current address book.
#[derive(Clone, Copy)]
pub struct FilteredPersonList<'a> {
  persons:   &'a [Person],
  predicate: &'a dyn PersonPredicate,
}

impl<'a> FilteredPersonList<'a> {
  pub fn iter(&self) -> impl Iterator<Item = &'a Person> + use<'a> {
    let predicate = self.predicate;
    self.persons.iter().filter(move |p| predicate.test(p))
  }

  pub fn len(&self) -> usize { self.iter().count() }

  pub fn is_empty(&self) -> bool { self.iter().next().is_none() }

  /// The person at zero-based `index` within the filtered view.
  pub fn get(&self, index: usize) -> Option<&'a Person> { self.iter().nth(index) }

  pub fn contains(&self, person: &Person) -> bool { self.iter().any(|p| p == person) }

  pub fn to_vec(&self) -> Vec<&'a Person> { self.iter().collect() }
}

impl PartialEq for FilteredPersonList<'_> {
  fn eq(&self, other: &Self) -> bool { self.iter().eq(other.iter()) }
}

impl fmt::Debug for FilteredPersonList<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.iter()).finish()
  }
}

// ─── ModelManager ────────────────────────────────────────────────────────────

/// In-memory [`Model`] over one [`AddressBook`] and one [`UserPrefs`].
#[derive(Clone)]
pub struct ModelManager {
  address_book: AddressBook,
  user_prefs:   UserPrefs,
  predicate:    Arc<dyn PersonPredicate>,
}

impl ModelManager {
  pub fn new(address_book: AddressBook, user_prefs: UserPrefs) -> Self {
    debug!(
      persons = address_book.person_list().len(),
      ccas = address_book.cca_list().len(),
      data_path = %user_prefs.address_book_file_path().display(),
      "initialising model"
    );
    Self {
      address_book,
      user_prefs,
      predicate: show_all_persons(),
    }
  }

  /// Build a model from a snapshot, validating it.
  pub fn from_snapshot(
    address_book: &dyn ReadOnlyAddressBook,
    user_prefs: UserPrefs,
  ) -> Result<Self> {
    Ok(Self::new(AddressBook::from_snapshot(address_book)?, user_prefs))
  }

  /// The predicate currently applied to the filtered view.
  pub fn predicate(&self) -> &dyn PersonPredicate { self.predicate.as_ref() }
}

impl Default for ModelManager {
  fn default() -> Self { Self::new(AddressBook::new(), UserPrefs::default()) }
}

impl Model for ModelManager {
  // ── User prefs ────────────────────────────────────────────────────────

  fn user_prefs(&self) -> &UserPrefs { &self.user_prefs }

  fn set_user_prefs(&mut self, user_prefs: &UserPrefs) { self.user_prefs.reset_data(user_prefs); }

  fn gui_settings(&self) -> &GuiSettings { self.user_prefs.gui_settings() }

  fn set_gui_settings(&mut self, gui_settings: GuiSettings) {
    self.user_prefs.set_gui_settings(gui_settings);
  }

  fn address_book_file_path(&self) -> &Path { self.user_prefs.address_book_file_path() }

  fn set_address_book_file_path(&mut self, path: PathBuf) {
    self.user_prefs.set_address_book_file_path(path);
  }

  // ── Address book ──────────────────────────────────────────────────────

  fn address_book(&self) -> &AddressBook { &self.address_book }

  fn set_address_book(&mut self, address_book: &dyn ReadOnlyAddressBook) -> Result<()> {
    self.address_book.reset_data(address_book)
  }

  fn has_person(&self, person: &Person) -> bool { self.address_book.has_person(person) }

  fn add_person(&mut self, person: Person) -> Result<()> {
    debug!(name = %person.name(), "adding person");
    self.address_book.add_person(person)?;
    self.update_filtered_person_list(show_all_persons());
    Ok(())
  }

  fn delete_person(&mut self, target: &Person) -> Result<()> {
    debug!(name = %target.name(), "deleting person");
    self.address_book.remove_person(target)
  }

  fn set_person(&mut self, target: &Person, edited: Person) -> Result<()> {
    debug!(from = %target.name(), to = %edited.name(), "replacing person");
    self.address_book.set_person(target, edited)
  }

  fn has_cca(&self, cca: &Cca) -> bool { self.address_book.has_cca(cca) }

  fn add_cca(&mut self, cca: Cca) -> Result<()> {
    debug!(cca = %cca, "adding CCA");
    self.address_book.add_cca(cca)
  }

  fn delete_cca(&mut self, target: &Cca) -> Result<()> {
    // Stage on a copy so a failure part-way leaves the live book untouched.
    let mut staged = self.address_book.clone();
    staged.remove_cca(target)?;

    let affected: Vec<Person> = staged
      .person_list()
      .iter()
      .filter(|p| p.has_cca(target))
      .cloned()
      .collect();
    for person in &affected {
      staged.set_person(person, person.without_cca(target))?;
    }

    debug!(cca = %target, cascaded = affected.len(), "deleted CCA");
    self.address_book = staged;
    Ok(())
  }

  fn set_cca(&mut self, target: &Cca, edited: Cca) -> Result<()> {
    let mut staged = self.address_book.clone();
    staged.set_cca(target, edited.clone())?;

    let enrolled: Vec<Person> = staged
      .person_list()
      .iter()
      .filter(|p| p.has_cca(target))
      .cloned()
      .collect();
    for person in &enrolled {
      let Some(info) = person.cca_information_for(target) else {
        continue;
      };
      let moved = person
        .without_cca(target)
        .with_cca_information(info.with_cca(edited.clone()));
      staged.set_person(person, moved)?;
    }

    debug!(from = %target, to = %edited, moved = enrolled.len(), "replaced CCA");
    self.address_book = staged;
    Ok(())
  }

  fn record_attendance(&mut self, cca: &Cca, person: &Person, amount: i64) -> Result<()> {
    let info = person
      .cca_information_for(cca)
      .ok_or_else(|| Error::NotEnrolled {
        person: person.name().to_string(),
        cca:    cca.name().to_string(),
      })?;
    let attendance = info.attendance().record(amount)?;
    let edited = person.with_cca_information(info.with_attendance(attendance));

    debug!(
      cca = %cca,
      name = %person.name(),
      amount,
      attendance = %attendance,
      "recording attendance"
    );
    self.address_book.set_person(person, edited)
  }

  fn cca_list(&self) -> &[Cca] { self.address_book.cca_list() }

  // ── Filtered view ─────────────────────────────────────────────────────

  fn filtered_person_list(&self) -> FilteredPersonList<'_> {
    FilteredPersonList {
      persons:   self.address_book.person_list(),
      predicate: self.predicate.as_ref(),
    }
  }

  fn update_filtered_person_list(&mut self, predicate: Arc<dyn PersonPredicate>) {
    debug!(?predicate, "updating person filter");
    self.predicate = predicate;
  }
}

impl PartialEq for ModelManager {
  fn eq(&self, other: &Self) -> bool {
    self.address_book == other.address_book
      && self.user_prefs == other.user_prefs
      && self.filtered_person_list() == other.filtered_person_list()
  }
}

impl fmt::Debug for ModelManager {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ModelManager")
      .field("address_book", &self.address_book)
      .field("user_prefs", &self.user_prefs)
      .field("predicate", &self.predicate)
      .finish()
  }
}
