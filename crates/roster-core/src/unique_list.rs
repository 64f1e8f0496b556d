//! An ordered list that rejects entries sharing an identity.

use crate::{
  Error, Result,
  cca::Cca,
  person::Person,
};

/// Entities that carry a weaker "same real-world thing" check alongside `==`.
pub(crate) trait Identity: Clone + PartialEq {
  fn is_same(&self, other: &Self) -> bool;

  fn duplicate_error(&self) -> Error;

  fn not_found_error(&self) -> Error;
}

impl Identity for Person {
  fn is_same(&self, other: &Self) -> bool { self.is_same_person(other) }

  fn duplicate_error(&self) -> Error { Error::DuplicatePerson(self.name().to_string()) }

  fn not_found_error(&self) -> Error { Error::PersonNotFound(self.name().to_string()) }
}

impl Identity for Cca {
  fn is_same(&self, other: &Self) -> bool { self.is_same_cca(other) }

  fn duplicate_error(&self) -> Error { Error::DuplicateCca(self.name().to_string()) }

  fn not_found_error(&self) -> Error { Error::CcaNotFound(self.name().to_string()) }
}

/// Insertion-ordered, identity-unique list. Lookups for removal and
/// replacement use full equality; duplicate checks use identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct UniqueList<T> {
  items: Vec<T>,
}

impl<T> Default for UniqueList<T> {
  fn default() -> Self { Self { items: Vec::new() } }
}

impl<T: Identity> UniqueList<T> {
  /// Build a list from `items`, failing on the first identity collision.
  pub(crate) fn from_items(items: impl IntoIterator<Item = T>) -> Result<Self> {
    let mut list = Self::default();
    for item in items {
      list.add(item)?;
    }
    Ok(list)
  }

  pub(crate) fn contains(&self, item: &T) -> bool {
    self.items.iter().any(|existing| existing.is_same(item))
  }

  pub(crate) fn add(&mut self, item: T) -> Result<()> {
    if self.contains(&item) {
      return Err(item.duplicate_error());
    }
    self.items.push(item);
    Ok(())
  }

  /// Replace `target` with `edited` at the same position.
  pub(crate) fn set(&mut self, target: &T, edited: T) -> Result<()> {
    let index = self.position(target)?;
    let collides = self
      .items
      .iter()
      .enumerate()
      .any(|(i, existing)| i != index && existing.is_same(&edited));
    if collides {
      return Err(edited.duplicate_error());
    }
    self.items[index] = edited;
    Ok(())
  }

  pub(crate) fn remove(&mut self, target: &T) -> Result<()> {
    let index = self.position(target)?;
    self.items.remove(index);
    Ok(())
  }

  pub(crate) fn as_slice(&self) -> &[T] { &self.items }

  fn position(&self, target: &T) -> Result<usize> {
    self
      .items
      .iter()
      .position(|existing| existing == target)
      .ok_or_else(|| target.not_found_error())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::field::CcaName;

  fn cca(name: &str) -> Cca { Cca::new(CcaName::new(name).unwrap()) }

  #[test]
  fn add_rejects_duplicates() {
    let mut list = UniqueList::default();
    list.add(cca("Choir")).unwrap();
    assert_eq!(
      list.add(cca("Choir")),
      Err(Error::DuplicateCca("Choir".into()))
    );
    assert_eq!(list.as_slice().len(), 1);
  }

  #[test]
  fn set_preserves_position() {
    let mut list =
      UniqueList::from_items([cca("Art"), cca("Band"), cca("Chess")]).unwrap();
    list.set(&cca("Band"), cca("Bowling")).unwrap();
    let names: Vec<_> = list.as_slice().iter().map(|c| c.name().as_str()).collect();
    assert_eq!(names, ["Art", "Bowling", "Chess"]);
  }

  #[test]
  fn set_to_itself_is_allowed() {
    let mut list = UniqueList::from_items([cca("Art")]).unwrap();
    list.set(&cca("Art"), cca("Art")).unwrap();
    assert_eq!(list.as_slice().len(), 1);
  }

  #[test]
  fn set_rejects_collision_with_other_entry() {
    let mut list = UniqueList::from_items([cca("Art"), cca("Band")]).unwrap();
    assert_eq!(
      list.set(&cca("Art"), cca("Band")),
      Err(Error::DuplicateCca("Band".into()))
    );
  }

  #[test]
  fn set_and_remove_fail_on_missing_target() {
    let mut list = UniqueList::from_items([cca("Art")]).unwrap();
    assert_eq!(
      list.set(&cca("Band"), cca("Chess")),
      Err(Error::CcaNotFound("Band".into()))
    );
    assert_eq!(
      list.remove(&cca("Band")),
      Err(Error::CcaNotFound("Band".into()))
    );
  }

  #[test]
  fn from_items_rejects_duplicates() {
    assert!(UniqueList::from_items([cca("Art"), cca("Art")]).is_err());
  }
}
