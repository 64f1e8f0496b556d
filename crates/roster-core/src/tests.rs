//! Cross-module behaviour of the model: the enrolment/attendance/cascade
//! lifecycle and snapshot round trips.

use std::sync::Arc;

use crate::{
  Error,
  address_book::{AddressBook, ReadOnlyAddressBook},
  cca::{Attendance, Cca, CcaInformation, SessionCount},
  field::{Address, CcaName, Email, Name, Phone, Role},
  model::{Model, ModelManager},
  person::Person,
  predicate::{InCca, NameContainsKeywords},
  prefs::UserPrefs,
};

fn person(name: &str, phone: &str) -> Person {
  Person::new(
    Name::new(name).unwrap(),
    Phone::new(phone).unwrap(),
    Email::new("student@example.com").unwrap(),
    Address::new("Kent Ridge Hall").unwrap(),
    [],
  )
}

fn cca(name: &str) -> Cca { Cca::new(CcaName::new(name).unwrap()) }

fn member(cca: Cca, role: &str, attended: u32, total: u32) -> CcaInformation {
  CcaInformation::new(
    cca,
    Role::new(role).unwrap(),
    Attendance::new(SessionCount::from(attended), SessionCount::from(total)),
  )
}

fn current<'a>(model: &'a ModelManager, like: &Person) -> &'a Person {
  model
    .address_book()
    .person_list()
    .iter()
    .find(|p| p.is_same_person(like))
    .expect("person present")
}

// ─── Choir walkthrough ───────────────────────────────────────────────────────

#[test]
fn choir_lifecycle() {
  let alice = person("Alice", "91234567");
  let mut model = ModelManager::default();
  model.add_person(alice.clone()).unwrap();

  model.add_cca(cca("Choir")).unwrap();
  assert!(model.has_cca(&cca("Choir")));

  // Not enrolled yet.
  let err = model
    .record_attendance(&cca("Choir"), &alice, 1)
    .unwrap_err();
  assert!(matches!(err, Error::NotEnrolled { .. }));
  assert_eq!(current(&model, &alice), &alice);

  let enrolled = alice.with_cca_information(member(cca("Choir"), "Member", 0, 10));
  model.set_person(&alice, enrolled.clone()).unwrap();

  model.record_attendance(&cca("Choir"), &enrolled, 3).unwrap();
  let attendance = *current(&model, &alice)
    .cca_information_for(&cca("Choir"))
    .unwrap()
    .attendance();
  assert_eq!(
    attendance,
    Attendance::new(SessionCount::from(3), SessionCount::from(10))
  );

  model.delete_cca(&cca("Choir")).unwrap();
  assert!(!model.has_cca(&cca("Choir")));
  assert!(!current(&model, &alice).has_cca(&cca("Choir")));
}

#[test]
fn added_person_is_visible() {
  let mut model = ModelManager::default();
  model.update_filtered_person_list(Arc::new(InCca::new(CcaName::new("Band").unwrap())));

  let bob = person("Bob", "98765432");
  model.add_person(bob.clone()).unwrap();

  assert!(model.has_person(&bob));
  assert!(model.filtered_person_list().contains(&bob));
}

#[test]
fn delete_cca_leaves_other_records_alone() {
  let mut model = ModelManager::default();
  for name in ["Choir", "Chess", "Band"] {
    model.add_cca(cca(name)).unwrap();
  }
  let alice = person("Alice", "91234567")
    .with_cca_information(member(cca("Choir"), "President", 5, 8))
    .with_cca_information(member(cca("Band"), "Member", 2, 8));
  let bob = person("Bob", "98765432")
    .with_cca_information(member(cca("Chess"), "Member", 1, 2));
  model.add_person(alice.clone()).unwrap();
  model.add_person(bob.clone()).unwrap();

  model.delete_cca(&cca("Choir")).unwrap();

  let after_alice = current(&model, &alice);
  assert_eq!(after_alice, &alice.without_cca(&cca("Choir")));
  assert_eq!(current(&model, &bob), &bob);
  assert_eq!(model.cca_list(), [cca("Chess"), cca("Band")]);

  // Every remaining record still points at a known CCA.
  assert!(AddressBook::from_snapshot(model.address_book()).is_ok());
}

#[test]
fn filtered_view_is_live() {
  let mut model = ModelManager::default();
  model.add_cca(cca("Chess")).unwrap();
  let alice = person("Alice", "91234567");
  model.add_person(alice.clone()).unwrap();
  model.update_filtered_person_list(Arc::new(InCca::new(CcaName::new("Chess").unwrap())));
  assert!(model.filtered_person_list().is_empty());

  let enrolled = alice.with_cca_information(member(cca("Chess"), "Member", 0, 3));
  model.set_person(&alice, enrolled.clone()).unwrap();
  assert_eq!(model.filtered_person_list().to_vec(), [&enrolled]);

  model.delete_cca(&cca("Chess")).unwrap();
  assert!(model.filtered_person_list().is_empty());
}

#[test]
fn filtered_index_follows_predicate() {
  let mut model = ModelManager::default();
  model.add_person(person("Alice Tan", "91234567")).unwrap();
  model.add_person(person("Bob Tan", "98765432")).unwrap();
  model.add_person(person("Carl Lim", "95352563")).unwrap();

  model.update_filtered_person_list(Arc::new(NameContainsKeywords::new(["Lim", "Bob"])));
  let view = model.filtered_person_list();
  assert_eq!(view.len(), 2);
  assert_eq!(view.get(0).unwrap().name().as_str(), "Bob Tan");
  assert_eq!(view.get(1).unwrap().name().as_str(), "Carl Lim");
  assert!(view.get(2).is_none());
}

// ─── Snapshots ───────────────────────────────────────────────────────────────

#[test]
fn reset_data_round_trip() {
  let choir = cca("Choir");
  let source = AddressBook::with_data(
    [
      person("Alice", "91234567").with_cca_information(member(choir.clone(), "Member", 1, 2)),
      person("Bob", "98765432"),
    ],
    [choir, cca("Chess")],
  )
  .unwrap();

  let mut book = AddressBook::new();
  book.reset_data(&source).unwrap();

  assert_eq!(book.person_list(), source.person_list());
  assert_eq!(book.cca_list(), source.cca_list());
  for (copied, source_person) in book.person_list().iter().zip(source.person_list()) {
    assert!(copied.is_same_person(source_person));
  }
}

#[test]
fn model_from_invalid_snapshot_fails() {
  struct Dangling(Vec<Person>);
  impl ReadOnlyAddressBook for Dangling {
    fn person_list(&self) -> &[Person] { &self.0 }

    fn cca_list(&self) -> &[Cca] { &[] }
  }

  let orphan = person("Alice", "91234567")
    .with_cca_information(member(cca("Choir"), "Member", 0, 1));
  let result = ModelManager::from_snapshot(&Dangling(vec![orphan]), UserPrefs::default());
  assert!(matches!(result, Err(Error::UnknownCca { .. })));
}
