//! Integration tests for `SqliteStorage`.

use roster_core::{
  address_book::{AddressBook, ReadOnlyAddressBook},
  cca::{Attendance, Cca, CcaInformation, SessionCount},
  field::{Address, CcaName, Email, Name, Phone, Role},
  person::Person,
  storage::AddressBookStorage,
};

use crate::{Error, SqliteStorage};

fn store() -> SqliteStorage { SqliteStorage::open_in_memory().expect("in-memory store") }

fn cca(name: &str) -> Cca { Cca::new(CcaName::new(name).unwrap()) }

fn person(name: &str, phone: &str, records: Vec<CcaInformation>) -> Person {
  Person::new(
    Name::new(name).unwrap(),
    Phone::new(phone).unwrap(),
    Email::new("someone@example.com").unwrap(),
    Address::new("Blk 30 Geylang Street 29").unwrap(),
    records,
  )
}

fn record(cca_name: &str, role: &str, attended: u32, total: u32) -> CcaInformation {
  CcaInformation::new(
    cca(cca_name),
    Role::new(role).unwrap(),
    Attendance::new(attended.into(), total.into()),
  )
}

fn sample() -> AddressBook {
  AddressBook::with_data(
    [
      person("Alice Pauline", "94351253", vec![record("Choir", "Captain", 3, 10)]),
      person("Benson Meier", "98765432", vec![
        record("Choir", "Member", 0, 10),
        record("Chess", "Treasurer", 5, 6),
      ]),
      person("Carl Kurz", "95352563", vec![]),
    ],
    [cca("Choir"), cca("Chess"), cca("Drama")],
  )
  .unwrap()
}

// ─── Round trips ─────────────────────────────────────────────────────────────

#[test]
fn fresh_store_has_no_snapshot() {
  let s = store();
  assert_eq!(s.read_address_book().unwrap(), None);
}

#[test]
fn saved_empty_book_reads_back_empty() {
  let mut s = store();
  s.save_address_book(&AddressBook::new()).unwrap();
  assert_eq!(s.read_address_book().unwrap(), Some(AddressBook::new()));
}

#[test]
fn round_trip_in_memory() {
  let mut s = store();
  let book = sample();
  s.save_address_book(&book).unwrap();

  let read = s.read_address_book().unwrap().unwrap();
  assert_eq!(read, book);
  assert_eq!(read.person_list()[1].ccas().count(), 2);
}

#[test]
fn save_replaces_previous_snapshot() {
  let mut s = store();
  s.save_address_book(&sample()).unwrap();

  let smaller = AddressBook::with_data(
    [person("Dana Lim", "81234567", vec![])],
    [cca("Drama")],
  )
  .unwrap();
  s.save_address_book(&smaller).unwrap();

  assert_eq!(s.read_address_book().unwrap(), Some(smaller));
}

#[test]
fn round_trip_through_file() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("nested").join("roster.db");

  {
    let mut s = SqliteStorage::open(&path).unwrap();
    assert_eq!(s.address_book_file_path(), path);
    s.save_address_book(&sample()).unwrap();
  }

  let reopened = SqliteStorage::open(&path).unwrap();
  assert_eq!(reopened.read_address_book().unwrap(), Some(sample()));
}

// ─── Corrupt data ────────────────────────────────────────────────────────────

#[test]
fn dangling_cca_reference_is_rejected() {
  let mut s = store();
  s.save_address_book(&sample()).unwrap();
  s.conn()
    .execute("DELETE FROM ccas WHERE name = 'Chess'", [])
    .unwrap();

  let err = s.read_address_book().unwrap_err();
  assert!(matches!(
    err,
    Error::Core(roster_core::Error::UnknownCca { ref cca, .. }) if cca == "Chess"
  ));
}

#[test]
fn invalid_field_is_rejected() {
  let mut s = store();
  s.save_address_book(&sample()).unwrap();
  s.conn()
    .execute("UPDATE persons SET phone = '12' WHERE position = 0", [])
    .unwrap();

  let err = s.read_address_book().unwrap_err();
  assert!(matches!(err, Error::Core(ref e) if e.is_validation()));
}

#[test]
fn negative_attendance_is_rejected() {
  let mut s = store();
  s.save_address_book(&sample()).unwrap();
  s.conn()
    .execute("UPDATE cca_information SET attended = -1", [])
    .unwrap();

  assert!(matches!(s.read_address_book(), Err(Error::Core(_))));
}

#[test]
fn unknown_schema_version_is_rejected() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("roster.db");
  {
    let s = SqliteStorage::open(&path).unwrap();
    s.conn().pragma_update(None, "user_version", 99).unwrap();
  }

  assert!(matches!(
    SqliteStorage::open(&path),
    Err(Error::SchemaVersion { found: 99, .. })
  ));
}

#[test]
fn attendance_may_exceed_total() {
  let mut s = store();
  let book = AddressBook::with_data(
    [person("Alice Pauline", "94351253", vec![record("Choir", "Member", 12, 10)])],
    [cca("Choir")],
  )
  .unwrap();
  s.save_address_book(&book).unwrap();

  let read = s.read_address_book().unwrap().unwrap();
  let info = read.person_list()[0].cca_information_for(&cca("Choir")).unwrap();
  assert_eq!(info.attendance().sessions_attended(), SessionCount::from(12));
}
