//! Splits an argument string into a preamble and prefixed values.
//!
//! `"1 c/Choir s/2"` with prefixes `c/` and `s/` becomes preamble `"1"`,
//! `c/` → `["Choir"]`, `s/` → `["2"]`. A prefix only counts at the start of
//! the string or after whitespace, so `a/` inside `data/x` is plain text.

use std::collections::HashMap;

use crate::{error::ParseError, syntax::Prefix};

#[derive(Debug, Default)]
pub struct ArgumentMultimap {
  preamble: String,
  values:   HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
  pub fn preamble(&self) -> &str { &self.preamble }

  /// The last value given for `prefix`.
  pub fn value(&self, prefix: Prefix) -> Option<&str> {
    self
      .values
      .get(&prefix)
      .and_then(|values| values.last())
      .map(String::as_str)
  }

  pub fn all_values(&self, prefix: Prefix) -> &[String] {
    self.values.get(&prefix).map(Vec::as_slice).unwrap_or_default()
  }

  pub fn has(&self, prefix: Prefix) -> bool { self.values.contains_key(&prefix) }

  /// Reject any of `prefixes` that appear more than once.
  pub fn verify_no_duplicate_prefixes_for(&self, prefixes: &[Prefix]) -> Result<(), ParseError> {
    let duplicated: Vec<&'static str> = prefixes
      .iter()
      .filter(|p| self.all_values(**p).len() > 1)
      .map(|p| p.as_str())
      .collect();
    if duplicated.is_empty() {
      Ok(())
    } else {
      Err(ParseError::DuplicatePrefixes(duplicated))
    }
  }
}

/// Tokenize `args` against `prefixes`. Values and the preamble are trimmed.
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
  let mut positions: Vec<(usize, Prefix)> = prefixes
    .iter()
    .flat_map(|&prefix| {
      args
        .match_indices(prefix.as_str())
        .filter(|(at, _)| starts_token(args, *at))
        .map(move |(at, _)| (at, prefix))
    })
    .collect();
  positions.sort_by_key(|(at, _)| *at);

  let preamble_end = positions.first().map_or(args.len(), |(at, _)| *at);
  let mut map = ArgumentMultimap {
    preamble: args[..preamble_end].trim().to_owned(),
    values:   HashMap::new(),
  };

  for (i, (at, prefix)) in positions.iter().enumerate() {
    let start = at + prefix.as_str().len();
    let end = positions.get(i + 1).map_or(args.len(), |(next, _)| *next);
    map
      .values
      .entry(*prefix)
      .or_default()
      .push(args[start..end].trim().to_owned());
  }

  map
}

fn starts_token(args: &str, at: usize) -> bool {
  args[..at]
    .chars()
    .next_back()
    .is_none_or(char::is_whitespace)
}
