//! Parsers for the CCA commands.

use roster_core::cca::SessionCount;

use super::{
  invalid_format,
  tokenizer::tokenize,
  util::{parse_amount, parse_cca_name, parse_index, parse_role, parse_session_count},
};
use crate::{
  command::Command,
  error::ParseError,
  syntax::{CommandWord, PREFIX_CCA, PREFIX_NAME, PREFIX_ROLE, PREFIX_SESSIONS, PREFIX_TOTAL_SESSIONS},
};

/// `addcca c/CCA_NAME`
pub(super) fn parse_add_cca(args: &str) -> Result<Command, ParseError> {
  let map = tokenize(args, &[PREFIX_CCA]);
  let Some(name) = map.value(PREFIX_CCA) else {
    return Err(invalid_format(CommandWord::AddCca));
  };
  if !map.preamble().is_empty() {
    return Err(invalid_format(CommandWord::AddCca));
  }
  map.verify_no_duplicate_prefixes_for(&[PREFIX_CCA])?;

  Ok(Command::AddCca {
    cca_name: parse_cca_name(name)?,
  })
}

/// `enrol INDEX c/CCA_NAME [r/ROLE] [t/TOTAL_SESSIONS]`
pub(super) fn parse_enrol(args: &str) -> Result<Command, ParseError> {
  let prefixes = [PREFIX_CCA, PREFIX_ROLE, PREFIX_TOTAL_SESSIONS];
  let map = tokenize(args, &prefixes);

  let Some(name) = map.value(PREFIX_CCA) else {
    return Err(invalid_format(CommandWord::Enrol));
  };
  if map.preamble().is_empty() {
    return Err(invalid_format(CommandWord::Enrol));
  }
  let index = parse_index(map.preamble()).map_err(|_| invalid_format(CommandWord::Enrol))?;
  map.verify_no_duplicate_prefixes_for(&prefixes)?;

  Ok(Command::Enrol {
    index,
    cca_name: parse_cca_name(name)?,
    role: map
      .value(PREFIX_ROLE)
      .map(parse_role)
      .transpose()?
      .unwrap_or_default(),
    total_sessions: map
      .value(PREFIX_TOTAL_SESSIONS)
      .map(parse_session_count)
      .transpose()?
      .unwrap_or(SessionCount::zero()),
  })
}

/// `deletecca c/CCA_NAME`
pub(super) fn parse_delete_cca(args: &str) -> Result<Command, ParseError> {
  let map = tokenize(args, &[PREFIX_CCA]);
  let Some(name) = map.value(PREFIX_CCA) else {
    return Err(invalid_format(CommandWord::DeleteCca));
  };
  if !map.preamble().is_empty() {
    return Err(invalid_format(CommandWord::DeleteCca));
  }
  map.verify_no_duplicate_prefixes_for(&[PREFIX_CCA])?;

  Ok(Command::DeleteCca {
    cca_name: parse_cca_name(name)?,
  })
}

/// `editcca c/CCA_NAME n/NEW_NAME`
pub(super) fn parse_edit_cca(args: &str) -> Result<Command, ParseError> {
  let prefixes = [PREFIX_CCA, PREFIX_NAME];
  let map = tokenize(args, &prefixes);
  let (Some(name), Some(new_name)) = (map.value(PREFIX_CCA), map.value(PREFIX_NAME)) else {
    return Err(invalid_format(CommandWord::EditCca));
  };
  if !map.preamble().is_empty() {
    return Err(invalid_format(CommandWord::EditCca));
  }
  map.verify_no_duplicate_prefixes_for(&prefixes)?;

  Ok(Command::EditCca {
    cca_name: parse_cca_name(name)?,
    new_name: parse_cca_name(new_name)?,
  })
}

/// `attend INDEX c/CCA_NAME s/AMOUNT`
pub(super) fn parse_attend(args: &str) -> Result<Command, ParseError> {
  let prefixes = [PREFIX_CCA, PREFIX_SESSIONS];
  let map = tokenize(args, &prefixes);
  let (Some(name), Some(amount)) = (map.value(PREFIX_CCA), map.value(PREFIX_SESSIONS)) else {
    return Err(invalid_format(CommandWord::Attend));
  };
  let index = parse_index(map.preamble()).map_err(|_| invalid_format(CommandWord::Attend))?;
  map.verify_no_duplicate_prefixes_for(&prefixes)?;

  Ok(Command::Attend {
    index,
    cca_name: parse_cca_name(name)?,
    amount: parse_amount(amount)?,
  })
}

/// `findcca c/CCA_NAME`
pub(super) fn parse_find_cca(args: &str) -> Result<Command, ParseError> {
  let map = tokenize(args, &[PREFIX_CCA]);
  let Some(name) = map.value(PREFIX_CCA) else {
    return Err(invalid_format(CommandWord::FindCca));
  };
  if !map.preamble().is_empty() {
    return Err(invalid_format(CommandWord::FindCca));
  }
  map.verify_no_duplicate_prefixes_for(&[PREFIX_CCA])?;

  Ok(Command::FindCca {
    cca_name: parse_cca_name(name)?,
  })
}
