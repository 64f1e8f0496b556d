//! [`SqliteStorage`], the SQLite implementation of [`AddressBookStorage`].

use std::{
  collections::HashMap,
  fs,
  path::{Path, PathBuf},
};

use rusqlite::{Connection, OptionalExtension as _, params};
use tracing::info;

use roster_core::{
  address_book::{AddressBook, ReadOnlyAddressBook},
  cca::CcaInformation,
  storage::AddressBookStorage,
};

use crate::{
  Error, Result,
  encode::{RawCcaInformation, RawPerson, decode_cca, encode_attendance},
  schema::{SCHEMA, SCHEMA_VERSION},
};

const IN_MEMORY: &str = ":memory:";

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Roster address book kept in a single SQLite file.
pub struct SqliteStorage {
  conn: Connection,
  path: PathBuf,
}

impl SqliteStorage {
  /// Open (or create) a store at `path`, creating parent directories and
  /// running schema initialisation.
  pub fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref().to_path_buf();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
      fs::create_dir_all(parent)?;
    }
    let conn = Connection::open(&path)?;
    let store = Self { conn, path };
    store.init_schema()?;
    info!(path = %store.path.display(), "opened address book storage");
    Ok(store)
  }

  /// Open an in-memory store, useful for testing.
  pub fn open_in_memory() -> Result<Self> {
    let conn = Connection::open_in_memory()?;
    let store = Self {
      conn,
      path: PathBuf::from(IN_MEMORY),
    };
    store.init_schema()?;
    Ok(store)
  }

  #[cfg(test)]
  pub(crate) fn conn(&self) -> &Connection { &self.conn }

  fn init_schema(&self) -> Result<()> {
    let version: i64 = self
      .conn
      .query_row("PRAGMA user_version", [], |r| r.get(0))?;
    if version != 0 && version != SCHEMA_VERSION {
      return Err(Error::SchemaVersion {
        found:    version,
        expected: SCHEMA_VERSION,
      });
    }
    self.conn.execute_batch(SCHEMA)?;
    self
      .conn
      .pragma_update(None, "user_version", SCHEMA_VERSION)?;
    Ok(())
  }

  fn has_snapshot(&self) -> Result<bool> {
    Ok(
      self
        .conn
        .query_row("SELECT 1 FROM snapshot WHERE id = 1", [], |_| Ok(()))
        .optional()?
        .is_some(),
    )
  }

  /// Every stored CCA record, grouped by the owning person's position.
  fn read_cca_information(&self) -> Result<HashMap<i64, Vec<CcaInformation>>> {
    let mut stmt = self.conn.prepare(
      "SELECT person, cca_name, role, attended, total
       FROM cca_information ORDER BY person, cca_name",
    )?;
    let rows = stmt
      .query_map([], |r| {
        Ok(RawCcaInformation {
          person:   r.get(0)?,
          cca_name: r.get(1)?,
          role:     r.get(2)?,
          attended: r.get(3)?,
          total:    r.get(4)?,
        })
      })?
      .collect::<rusqlite::Result<Vec<_>>>()?;

    let mut by_person: HashMap<i64, Vec<CcaInformation>> = HashMap::new();
    for raw in rows {
      let person = raw.person;
      by_person
        .entry(person)
        .or_default()
        .push(raw.into_cca_information()?);
    }
    Ok(by_person)
  }
}

// ─── AddressBookStorage impl ─────────────────────────────────────────────────

impl AddressBookStorage for SqliteStorage {
  type Error = Error;

  fn address_book_file_path(&self) -> &Path { &self.path }

  fn read_address_book(&self) -> Result<Option<AddressBook>> {
    if !self.has_snapshot()? {
      return Ok(None);
    }

    let ccas = {
      let mut stmt = self
        .conn
        .prepare("SELECT name FROM ccas ORDER BY position")?;
      let names = stmt
        .query_map([], |r| r.get::<_, String>(0))?
        .collect::<rusqlite::Result<Vec<_>>>()?;
      names.into_iter().map(decode_cca).collect::<Result<Vec<_>>>()?
    };

    let mut records = self.read_cca_information()?;
    let persons = {
      let mut stmt = self.conn.prepare(
        "SELECT position, name, phone, email, address
         FROM persons ORDER BY position",
      )?;
      let rows = stmt
        .query_map([], |r| {
          Ok(RawPerson {
            position: r.get(0)?,
            name:     r.get(1)?,
            phone:    r.get(2)?,
            email:    r.get(3)?,
            address:  r.get(4)?,
          })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;
      rows
        .into_iter()
        .map(|raw| {
          let info = records.remove(&raw.position).unwrap_or_default();
          raw.into_person(info)
        })
        .collect::<Result<Vec<_>>>()?
    };

    let book = AddressBook::with_data(persons, ccas)?;
    info!(
      path = %self.path.display(),
      persons = book.person_list().len(),
      ccas = book.cca_list().len(),
      "read address book"
    );
    Ok(Some(book))
  }

  fn save_address_book(&mut self, address_book: &dyn ReadOnlyAddressBook) -> Result<()> {
    let persons = address_book.person_list();
    let ccas = address_book.cca_list();

    let tx = self.conn.transaction()?;
    tx.execute_batch(
      "DELETE FROM cca_information;
       DELETE FROM persons;
       DELETE FROM ccas;
       DELETE FROM snapshot;",
    )?;
    {
      let mut insert_cca = tx.prepare("INSERT INTO ccas (position, name) VALUES (?1, ?2)")?;
      for (position, cca) in ccas.iter().enumerate() {
        insert_cca.execute(params![position, cca.name().as_str()])?;
      }

      let mut insert_person = tx.prepare(
        "INSERT INTO persons (position, name, phone, email, address)
         VALUES (?1, ?2, ?3, ?4, ?5)",
      )?;
      let mut insert_info = tx.prepare(
        "INSERT INTO cca_information (person, cca_name, role, attended, total)
         VALUES (?1, ?2, ?3, ?4, ?5)",
      )?;
      for (position, person) in persons.iter().enumerate() {
        insert_person.execute(params![
          position,
          person.name().as_str(),
          person.phone().as_str(),
          person.email().as_str(),
          person.address().as_str(),
        ])?;
        for info in person.cca_information() {
          let (attended, total) = encode_attendance(info.attendance());
          insert_info.execute(params![
            position,
            info.cca().name().as_str(),
            info.role().as_str(),
            attended,
            total,
          ])?;
        }
      }
    }
    tx.execute(
      "INSERT INTO snapshot (id, persons, ccas) VALUES (1, ?1, ?2)",
      params![persons.len(), ccas.len()],
    )?;
    tx.commit()?;

    info!(
      path = %self.path.display(),
      persons = persons.len(),
      ccas = ccas.len(),
      "saved address book"
    );
    Ok(())
  }
}
