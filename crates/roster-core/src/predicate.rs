//! Predicates that drive the filtered person view.

use std::{fmt, sync::Arc};

use crate::{field::CcaName, person::Person};

/// A test applied to each person when the filtered view is read.
pub trait PersonPredicate: fmt::Debug + Send + Sync {
  fn test(&self, person: &Person) -> bool;
}

/// Accepts every person.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShowAllPersons;

impl PersonPredicate for ShowAllPersons {
  fn test(&self, _person: &Person) -> bool { true }
}

/// The predicate the model starts with and returns to after `add_person`.
pub fn show_all_persons() -> Arc<dyn PersonPredicate> { Arc::new(ShowAllPersons) }

/// Accepts persons whose name contains any of the keywords as a whole word,
/// ignoring case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameContainsKeywords {
  keywords: Vec<String>,
}

impl NameContainsKeywords {
  pub fn new(keywords: impl IntoIterator<Item = impl Into<String>>) -> Self {
    Self {
      keywords: keywords.into_iter().map(Into::into).collect(),
    }
  }

  pub fn keywords(&self) -> &[String] { &self.keywords }
}

impl PersonPredicate for NameContainsKeywords {
  fn test(&self, person: &Person) -> bool {
    let name = person.name().as_str();
    self.keywords.iter().any(|keyword| {
      name
        .split_whitespace()
        .any(|word| word.eq_ignore_ascii_case(keyword))
    })
  }
}

/// Accepts persons enrolled in the named CCA.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InCca {
  cca_name: CcaName,
}

impl InCca {
  pub fn new(cca_name: CcaName) -> Self { Self { cca_name } }
}

impl PersonPredicate for InCca {
  fn test(&self, person: &Person) -> bool {
    person.ccas().any(|cca| cca.name() == &self.cca_name)
  }
}
