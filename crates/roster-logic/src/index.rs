//! One-based positions into the filtered person list.

use std::{fmt, num::NonZeroUsize};

/// A position as the user types it (starting at 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Index(NonZeroUsize);

impl Index {
  pub fn from_one_based(value: usize) -> Option<Self> { NonZeroUsize::new(value).map(Self) }

  pub fn from_zero_based(value: usize) -> Self {
    Self(NonZeroUsize::MIN.saturating_add(value))
  }

  pub fn one_based(self) -> usize { self.0.get() }

  pub fn zero_based(self) -> usize { self.0.get() - 1 }
}

impl fmt::Display for Index {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn conversions() {
    assert!(Index::from_one_based(0).is_none());
    let first = Index::from_one_based(1).unwrap();
    assert_eq!(first.zero_based(), 0);
    assert_eq!(first, Index::from_zero_based(0));
    assert_eq!(Index::from_zero_based(4).one_based(), 5);
  }
}
