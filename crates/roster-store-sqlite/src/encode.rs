//! Conversions between domain types and the column values stored in SQLite.
//!
//! Decoding goes through the validating constructors, so a hand-edited
//! database cannot produce a value the parser would have rejected.

use roster_core::{
  cca::{Attendance, Cca, CcaInformation, SessionCount},
  field::{Address, CcaName, Email, Name, Phone, Role},
  person::Person,
};

use crate::Result;

// ─── Persons ─────────────────────────────────────────────────────────────────

/// Raw strings read directly from a `persons` row.
pub struct RawPerson {
  pub position: i64,
  pub name:     String,
  pub phone:    String,
  pub email:    String,
  pub address:  String,
}

impl RawPerson {
  pub fn into_person(self, cca_information: Vec<CcaInformation>) -> Result<Person> {
    Ok(Person::new(
      Name::new(self.name)?,
      Phone::new(self.phone)?,
      Email::new(self.email)?,
      Address::new(self.address)?,
      cca_information,
    ))
  }
}

// ─── CCA records ─────────────────────────────────────────────────────────────

/// Raw values read directly from a `cca_information` row.
pub struct RawCcaInformation {
  pub person:   i64,
  pub cca_name: String,
  pub role:     String,
  pub attended: i64,
  pub total:    i64,
}

impl RawCcaInformation {
  pub fn into_cca_information(self) -> Result<CcaInformation> {
    Ok(CcaInformation::new(
      decode_cca(self.cca_name)?,
      Role::new(self.role)?,
      Attendance::new(
        SessionCount::new(self.attended)?,
        SessionCount::new(self.total)?,
      ),
    ))
  }
}

pub fn encode_attendance(attendance: &Attendance) -> (i64, i64) {
  (
    i64::from(attendance.sessions_attended().value()),
    i64::from(attendance.total_sessions().value()),
  )
}

// ─── CCAs ────────────────────────────────────────────────────────────────────

pub fn decode_cca(name: String) -> Result<Cca> { Ok(Cca::new(CcaName::new(name)?)) }
