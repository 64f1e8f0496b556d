//! The `Person` entity.
//!
//! A person's identity is the (name, phone, email, address) tuple. Their CCA
//! records are part of the value but not of the identity, so two entries for
//! the same real-world person can differ only in enrolments, and that still
//! counts as a duplicate.

use std::{collections::BTreeMap, fmt};

use crate::{
  cca::{Cca, CcaInformation},
  field::{Address, CcaName, Email, Name, Phone},
};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Person {
  name:            Name,
  phone:           Phone,
  email:           Email,
  address:         Address,
  /// At most one record per CCA, keyed by CCA name.
  cca_information: BTreeMap<CcaName, CcaInformation>,
}

impl Person {
  /// Build a person. If `cca_information` holds several records for the same
  /// CCA, the last one wins.
  pub fn new(
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    cca_information: impl IntoIterator<Item = CcaInformation>,
  ) -> Self {
    let cca_information = cca_information
      .into_iter()
      .map(|info| (info.cca().name().clone(), info))
      .collect();
    Self {
      name,
      phone,
      email,
      address,
      cca_information,
    }
  }

  pub fn name(&self) -> &Name { &self.name }

  pub fn phone(&self) -> &Phone { &self.phone }

  pub fn email(&self) -> &Email { &self.email }

  pub fn address(&self) -> &Address { &self.address }

  /// CCA records in CCA-name order.
  pub fn cca_information(&self) -> impl Iterator<Item = &CcaInformation> {
    self.cca_information.values()
  }

  pub fn ccas(&self) -> impl Iterator<Item = &Cca> {
    self.cca_information.values().map(CcaInformation::cca)
  }

  pub fn has_cca(&self, cca: &Cca) -> bool {
    self.cca_information.contains_key(cca.name())
  }

  pub fn cca_information_for(&self, cca: &Cca) -> Option<&CcaInformation> {
    self.cca_information.get(cca.name())
  }

  /// A copy with `info` added, replacing any existing record for its CCA.
  pub fn with_cca_information(&self, info: CcaInformation) -> Self {
    let mut next = self.clone();
    next
      .cca_information
      .insert(info.cca().name().clone(), info);
    next
  }

  /// A copy without the record for `cca`. Returns an equal person if there
  /// was none.
  pub fn without_cca(&self, cca: &Cca) -> Self {
    let mut next = self.clone();
    next.cca_information.remove(cca.name());
    next
  }

  /// A copy with new identity fields and the same CCA records.
  pub fn with_identity(
    &self,
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
  ) -> Self {
    Self {
      name,
      phone,
      email,
      address,
      cca_information: self.cca_information.clone(),
    }
  }

  /// Identity check used for duplicate detection. Weaker than `==`, which
  /// also compares CCA records.
  pub fn is_same_person(&self, other: &Person) -> bool {
    self.name == other.name
      && self.phone == other.phone
      && self.email == other.email
      && self.address == other.address
  }
}

impl fmt::Display for Person {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{}; Phone: {}; Email: {}; Address: {}",
      self.name, self.phone, self.email, self.address
    )?;
    if !self.cca_information.is_empty() {
      f.write_str("; CCAs: ")?;
      for (i, info) in self.cca_information.values().enumerate() {
        if i > 0 {
          f.write_str(", ")?;
        }
        write!(f, "{info}")?;
      }
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{
    cca::{Attendance, SessionCount},
    field::Role,
  };

  fn alice() -> Person {
    Person::new(
      Name::new("Alice Pauline").unwrap(),
      Phone::new("94351253").unwrap(),
      Email::new("alice@example.com").unwrap(),
      Address::new("123, Jurong West Ave 6, #08-111").unwrap(),
      [],
    )
  }

  fn choir() -> Cca { Cca::new(CcaName::new("Choir").unwrap()) }

  fn member_of(cca: Cca, attended: u32, total: u32) -> CcaInformation {
    CcaInformation::new(
      cca,
      Role::default(),
      Attendance::new(SessionCount::from(attended), SessionCount::from(total)),
    )
  }

  #[test]
  fn same_person_ignores_ccas() {
    let plain = alice();
    let enrolled = plain.with_cca_information(member_of(choir(), 0, 10));
    assert!(plain.is_same_person(&enrolled));
    assert_ne!(plain, enrolled);
  }

  #[test]
  fn same_person_requires_every_identity_field() {
    let base = alice();
    let other_phone = base.with_identity(
      base.name().clone(),
      Phone::new("99999999").unwrap(),
      base.email().clone(),
      base.address().clone(),
    );
    assert!(!base.is_same_person(&other_phone));
  }

  #[test]
  fn one_record_per_cca() {
    let person = alice()
      .with_cca_information(member_of(choir(), 0, 10))
      .with_cca_information(member_of(choir(), 4, 10));
    assert_eq!(person.cca_information().count(), 1);
    let info = person.cca_information_for(&choir()).unwrap();
    assert_eq!(info.attendance().sessions_attended().value(), 4);
  }

  #[test]
  fn constructor_keeps_last_duplicate() {
    let base = alice();
    let person = Person::new(
      base.name().clone(),
      base.phone().clone(),
      base.email().clone(),
      base.address().clone(),
      [member_of(choir(), 1, 5), member_of(choir(), 2, 5)],
    );
    assert_eq!(person.cca_information().count(), 1);
    assert_eq!(
      person
        .cca_information_for(&choir())
        .unwrap()
        .attendance()
        .sessions_attended()
        .value(),
      2
    );
  }

  #[test]
  fn without_cca_only_removes_that_cca() {
    let chess = Cca::new(CcaName::new("Chess").unwrap());
    let person = alice()
      .with_cca_information(member_of(choir(), 0, 10))
      .with_cca_information(member_of(chess.clone(), 1, 3));
    let trimmed = person.without_cca(&choir());
    assert!(!trimmed.has_cca(&choir()));
    assert_eq!(
      trimmed.cca_information_for(&chess),
      person.cca_information_for(&chess)
    );
  }

  #[test]
  fn display_lists_ccas() {
    let person = alice().with_cca_information(member_of(choir(), 3, 10));
    let shown = person.to_string();
    assert!(shown.starts_with("Alice Pauline; Phone: 94351253"));
    assert!(shown.ends_with("CCAs: Choir (Member, attended 3/10)"));
  }
}
