use std::sync::Arc;

use roster_core::{
  address_book::AddressBook,
  field::{Address, Email, Name, Phone},
  model::Model,
  person::Person,
  predicate::{NameContainsKeywords, show_all_persons},
};

use super::{CommandResult, person_at};
use crate::{error::CommandError, index::Index};

/// The identity fields an `edit` replaces. Unset fields keep their value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditPersonDescriptor {
  pub name:    Option<Name>,
  pub phone:   Option<Phone>,
  pub email:   Option<Email>,
  pub address: Option<Address>,
}

impl EditPersonDescriptor {
  pub fn is_any_field_edited(&self) -> bool {
    self.name.is_some() || self.phone.is_some() || self.email.is_some() || self.address.is_some()
  }

  fn apply(&self, person: &Person) -> Person {
    person.with_identity(
      self.name.clone().unwrap_or_else(|| person.name().clone()),
      self.phone.clone().unwrap_or_else(|| person.phone().clone()),
      self.email.clone().unwrap_or_else(|| person.email().clone()),
      self
        .address
        .clone()
        .unwrap_or_else(|| person.address().clone()),
    )
  }
}

pub(super) fn add<M: Model + ?Sized>(
  model: &mut M,
  person: Person,
) -> Result<CommandResult, CommandError> {
  if model.has_person(&person) {
    return Err(CommandError::DuplicatePerson);
  }
  let feedback = format!("New person added: {person}");
  model.add_person(person)?;
  Ok(CommandResult::new(feedback))
}

pub(super) fn delete<M: Model + ?Sized>(
  model: &mut M,
  index: Index,
) -> Result<CommandResult, CommandError> {
  let person = person_at(model, index)?;
  model.delete_person(&person)?;
  Ok(CommandResult::new(format!("Deleted Person: {person}")))
}

pub(super) fn edit<M: Model + ?Sized>(
  model: &mut M,
  index: Index,
  edit: &EditPersonDescriptor,
) -> Result<CommandResult, CommandError> {
  let person = person_at(model, index)?;
  let edited = edit.apply(&person);
  if !person.is_same_person(&edited) && model.has_person(&edited) {
    return Err(CommandError::DuplicatePerson);
  }

  let feedback = format!("Edited Person: {edited}");
  model.set_person(&person, edited)?;
  model.update_filtered_person_list(show_all_persons());
  Ok(CommandResult::new(feedback))
}

pub(super) fn list<M: Model + ?Sized>(model: &mut M) -> Result<CommandResult, CommandError> {
  model.update_filtered_person_list(show_all_persons());
  Ok(CommandResult::new("Listed all persons"))
}

pub(super) fn find<M: Model + ?Sized>(
  model: &mut M,
  predicate: &NameContainsKeywords,
) -> Result<CommandResult, CommandError> {
  model.update_filtered_person_list(Arc::new(predicate.clone()));
  let shown = model.filtered_person_list().len();
  Ok(CommandResult::new(format!("{shown} persons listed!")))
}

pub(super) fn clear<M: Model + ?Sized>(model: &mut M) -> Result<CommandResult, CommandError> {
  model.set_address_book(&AddressBook::new())?;
  Ok(CommandResult::new("Address book has been cleared!"))
}

#[cfg(test)]
mod tests {
  use roster_core::{
    address_book::ReadOnlyAddressBook,
    model::ModelManager,
    prefs::UserPrefs,
  };

  use crate::{Error, command::Command, execute};

  use super::*;

  fn model() -> ModelManager {
    let mut model = ModelManager::new(AddressBook::new(), UserPrefs::default());
    for line in [
      "add n/Alice Pauline p/94351253 e/alice@example.com a/123, Jurong West Ave 6",
      "add n/Benson Meier p/98765432 e/johnd@example.com a/311, Clementi Ave 2",
      "add n/Carl Kurz p/95352563 e/heinz@example.com a/wall street",
    ] {
      execute(line, &mut model).unwrap();
    }
    model
  }

  #[test]
  fn add_rejects_duplicate() {
    let mut model = model();
    let result = execute(
      "add n/Alice Pauline p/94351253 e/alice@example.com a/123, Jurong West Ave 6",
      &mut model,
    );
    assert_eq!(result, Err(Error::Command(CommandError::DuplicatePerson)));
    assert_eq!(model.address_book().person_list().len(), 3);
  }

  #[test]
  fn delete_uses_filtered_index() {
    let mut model = model();
    execute("find carl", &mut model).unwrap();

    let result = execute("delete 1", &mut model).unwrap();
    assert!(result.feedback.starts_with("Deleted Person: Carl Kurz"));
    assert_eq!(model.address_book().person_list().len(), 2);
    assert!(model.filtered_person_list().is_empty());
  }

  #[test]
  fn delete_out_of_range() {
    let mut model = model();
    assert_eq!(
      execute("delete 4", &mut model),
      Err(Error::Command(CommandError::InvalidPersonIndex))
    );
  }

  #[test]
  fn edit_keeps_unset_fields() {
    let mut model = model();
    execute("edit 2 p/91234567", &mut model).unwrap();

    let benson = &model.address_book().person_list()[1];
    assert_eq!(benson.phone().as_str(), "91234567");
    assert_eq!(benson.name().as_str(), "Benson Meier");
  }

  #[test]
  fn edit_keeps_cca_records() {
    let mut model = model();
    execute("addcca c/Choir", &mut model).unwrap();
    execute("enrol 1 c/Choir t/4", &mut model).unwrap();
    execute("edit 1 n/Alice Tan", &mut model).unwrap();

    let alice = &model.address_book().person_list()[0];
    assert_eq!(alice.name().as_str(), "Alice Tan");
    assert_eq!(alice.ccas().count(), 1);
  }

  #[test]
  fn edit_into_existing_identity_fails() {
    let mut model = model();
    let before = model.clone();
    let result = execute(
      "edit 2 n/Alice Pauline p/94351253 e/alice@example.com a/123, Jurong West Ave 6",
      &mut model,
    );
    assert_eq!(result, Err(Error::Command(CommandError::DuplicatePerson)));
    assert_eq!(model, before);
  }

  #[test]
  fn find_and_list() {
    let mut model = model();
    let found = execute("find alice CARL", &mut model).unwrap();
    assert_eq!(found.feedback, "2 persons listed!");
    assert_eq!(model.filtered_person_list().len(), 2);

    execute("list", &mut model).unwrap();
    assert_eq!(model.filtered_person_list().len(), 3);
  }

  #[test]
  fn clear_empties_book() {
    let mut model = model();
    execute("addcca c/Choir", &mut model).unwrap();
    execute("clear", &mut model).unwrap();
    assert!(model.address_book().person_list().is_empty());
    assert!(model.address_book().cca_list().is_empty());
  }

  #[test]
  fn read_only_commands_do_not_mutate() {
    assert!(!Command::List.mutates_address_book());
    assert!(Command::Clear.mutates_address_book());
  }
}
