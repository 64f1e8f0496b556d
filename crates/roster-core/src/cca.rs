//! CCA entities and the per-person attendance records that reference them.
//!
//! All values are immutable. Recording attendance builds a new
//! [`Attendance`], wraps it in a new [`CcaInformation`], and the owning
//! [`Person`](crate::person::Person) is replaced as a whole.

use std::fmt;

use crate::{
  Error, Result,
  field::{CcaName, Role},
};

// ─── SessionCount ────────────────────────────────────────────────────────────

/// A non-negative number of CCA sessions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SessionCount(u32);

impl SessionCount {
  pub const MESSAGE_CONSTRAINTS: &'static str =
    "Session counts should be non-negative integers";

  /// Build a count from a signed value, rejecting negatives and values that
  /// do not fit in a `u32`.
  pub fn new(value: i64) -> Result<Self> {
    u32::try_from(value).map(Self).map_err(|_| Error::Validation {
      field:   "session count",
      message: Self::MESSAGE_CONSTRAINTS,
    })
  }

  pub const fn zero() -> Self { Self(0) }

  pub fn value(self) -> u32 { self.0 }

  /// Shift the count by `amount`, which may be negative.
  pub fn offset(self, amount: i64) -> Result<Self> {
    Self::new(i64::from(self.0).saturating_add(amount))
  }
}

impl From<u32> for SessionCount {
  fn from(value: u32) -> Self { Self(value) }
}

impl fmt::Display for SessionCount {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

// ─── Attendance ──────────────────────────────────────────────────────────────

/// Sessions attended out of the total sessions held.
///
/// `attended <= total` is expected but not enforced: totals are entered at
/// enrolment and attendance corrections may legitimately run ahead of them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Attendance {
  attended: SessionCount,
  total:    SessionCount,
}

impl Attendance {
  pub fn new(attended: SessionCount, total: SessionCount) -> Self {
    Self { attended, total }
  }

  pub fn sessions_attended(&self) -> SessionCount { self.attended }

  pub fn total_sessions(&self) -> SessionCount { self.total }

  /// A copy with `amount` added to the attended count. The total is kept.
  pub fn record(&self, amount: i64) -> Result<Self> {
    Ok(Self {
      attended: self.attended.offset(amount)?,
      total:    self.total,
    })
  }
}

impl fmt::Display for Attendance {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}/{}", self.attended, self.total)
  }
}

// ─── Cca ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cca {
  name: CcaName,
}

impl Cca {
  pub fn new(name: CcaName) -> Self { Self { name } }

  pub fn name(&self) -> &CcaName { &self.name }

  /// Identity check used for duplicate detection: two CCAs are the same if
  /// they share a name.
  pub fn is_same_cca(&self, other: &Cca) -> bool { self.name == other.name }
}

impl fmt::Display for Cca {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.name)
  }
}

// ─── CcaInformation ──────────────────────────────────────────────────────────

/// One person's membership in one CCA.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CcaInformation {
  cca:        Cca,
  role:       Role,
  attendance: Attendance,
}

impl CcaInformation {
  pub fn new(cca: Cca, role: Role, attendance: Attendance) -> Self {
    Self { cca, role, attendance }
  }

  pub fn cca(&self) -> &Cca { &self.cca }

  pub fn role(&self) -> &Role { &self.role }

  pub fn attendance(&self) -> &Attendance { &self.attendance }

  pub fn with_attendance(&self, attendance: Attendance) -> Self {
    Self {
      cca: self.cca.clone(),
      role: self.role.clone(),
      attendance,
    }
  }

  /// The same record pointed at a different CCA; used when a CCA is renamed.
  pub fn with_cca(&self, cca: Cca) -> Self {
    Self {
      cca,
      role: self.role.clone(),
      attendance: self.attendance,
    }
  }
}

impl fmt::Display for CcaInformation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} ({}, attended {})", self.cca, self.role, self.attendance)
  }
}
