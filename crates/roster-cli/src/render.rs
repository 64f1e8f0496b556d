//! Plain-text rendering of the roster for the terminal.

use roster_core::{cca::Cca, model::FilteredPersonList};
use roster_logic::syntax::CommandWord;
use strum::IntoEnumIterator as _;

/// The filtered person list, numbered the way commands index it.
pub fn person_list(persons: FilteredPersonList<'_>) -> String {
  if persons.is_empty() {
    return "(no persons to show)".to_owned();
  }
  persons
    .iter()
    .enumerate()
    .map(|(i, person)| format!("{:>3}. {person}", i + 1))
    .collect::<Vec<_>>()
    .join("\n")
}

pub fn cca_list(ccas: &[Cca]) -> String {
  if ccas.is_empty() {
    return "CCAs: (none)".to_owned();
  }
  let names: Vec<String> = ccas.iter().map(ToString::to_string).collect();
  format!("CCAs: {}", names.join(", "))
}

/// Usage for every command.
pub fn help() -> String {
  CommandWord::iter()
    .map(CommandWord::usage)
    .collect::<Vec<_>>()
    .join("\n\n")
}

#[cfg(test)]
mod tests {
  use roster_core::{
    address_book::ReadOnlyAddressBook,
    model::{Model, ModelManager},
    prefs::UserPrefs,
  };

  use super::*;
  use crate::sample::sample_address_book;

  #[test]
  fn persons_are_numbered_from_one() {
    let model = ModelManager::new(sample_address_book().unwrap(), UserPrefs::default());
    let text = person_list(model.filtered_person_list());
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 6);
    assert!(lines[0].starts_with("  1. Alex Yeoh;"));
    assert!(lines[5].starts_with("  6. Roy Balakrishnan;"));
    assert!(!text.ends_with('\n'));
  }

  #[test]
  fn empty_list() {
    let model = ModelManager::default();
    assert_eq!(person_list(model.filtered_person_list()), "(no persons to show)");
  }

  #[test]
  fn ccas_are_listed_in_order() {
    let book = sample_address_book().unwrap();
    assert_eq!(cca_list(book.cca_list()), "CCAs: Choir, Chess Club, Football");
    assert_eq!(cca_list(&[]), "CCAs: (none)");
  }

  #[test]
  fn help_covers_every_command() {
    let text = help();
    assert!(text.starts_with("add:"));
    assert!(text.contains("\n\nattend:"));
    assert!(text.ends_with("exit: Exits the program."));
  }
}
