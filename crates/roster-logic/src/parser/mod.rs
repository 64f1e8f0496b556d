//! Turns a command line into a [`Command`].
//!
//! Parsing validates every field it builds but never looks at the model, so
//! an index out of range or an unknown CCA only surfaces at execution.

mod cca;
pub mod tokenizer;
pub mod util;

use roster_core::{person::Person, predicate::NameContainsKeywords};
use tracing::debug;

use crate::{
  command::{Command, EditPersonDescriptor},
  error::ParseError,
  syntax::{CommandWord, PREFIX_ADDRESS, PREFIX_EMAIL, PREFIX_NAME, PREFIX_PHONE},
};
use tokenizer::tokenize;
use util::{parse_address, parse_email, parse_index, parse_name, parse_phone};

/// Parse one line of user input.
pub fn parse_command(input: &str) -> Result<Command, ParseError> {
  let input = input.trim();
  let (word, args) = input
    .split_once(char::is_whitespace)
    .unwrap_or((input, ""));

  if word.is_empty() {
    return Err(ParseError::InvalidFormat {
      usage: CommandWord::Help.usage(),
    });
  }

  let word: CommandWord = word
    .parse()
    .map_err(|_| ParseError::UnknownCommand(word.to_owned()))?;
  debug!(%word, "parsing command");

  match word {
    CommandWord::Add => parse_add(args),
    CommandWord::AddCca => cca::parse_add_cca(args),
    CommandWord::Enrol => cca::parse_enrol(args),
    CommandWord::Delete => parse_delete(args),
    CommandWord::DeleteCca => cca::parse_delete_cca(args),
    CommandWord::Edit => parse_edit(args),
    CommandWord::EditCca => cca::parse_edit_cca(args),
    CommandWord::Attend => cca::parse_attend(args),
    CommandWord::List => Ok(Command::List),
    CommandWord::Find => parse_find(args),
    CommandWord::FindCca => cca::parse_find_cca(args),
    CommandWord::Clear => Ok(Command::Clear),
    CommandWord::Help => Ok(Command::Help),
    CommandWord::Exit => Ok(Command::Exit),
  }
}

fn invalid_format(word: CommandWord) -> ParseError {
  ParseError::InvalidFormat {
    usage: word.usage(),
  }
}

// ─── Person commands ─────────────────────────────────────────────────────────

fn parse_add(args: &str) -> Result<Command, ParseError> {
  let prefixes = [PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS];
  let map = tokenize(args, &prefixes);

  let (Some(name), Some(phone), Some(email), Some(address)) = (
    map.value(PREFIX_NAME),
    map.value(PREFIX_PHONE),
    map.value(PREFIX_EMAIL),
    map.value(PREFIX_ADDRESS),
  ) else {
    return Err(invalid_format(CommandWord::Add));
  };
  if !map.preamble().is_empty() {
    return Err(invalid_format(CommandWord::Add));
  }
  map.verify_no_duplicate_prefixes_for(&prefixes)?;

  let person = Person::new(
    parse_name(name)?,
    parse_phone(phone)?,
    parse_email(email)?,
    parse_address(address)?,
    [],
  );
  Ok(Command::Add { person })
}

fn parse_delete(args: &str) -> Result<Command, ParseError> {
  let index = parse_index(args).map_err(|_| invalid_format(CommandWord::Delete))?;
  Ok(Command::Delete { index })
}

fn parse_edit(args: &str) -> Result<Command, ParseError> {
  let prefixes = [PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS];
  let map = tokenize(args, &prefixes);

  let index = parse_index(map.preamble()).map_err(|_| invalid_format(CommandWord::Edit))?;
  map.verify_no_duplicate_prefixes_for(&prefixes)?;

  let edit = EditPersonDescriptor {
    name:    map.value(PREFIX_NAME).map(parse_name).transpose()?,
    phone:   map.value(PREFIX_PHONE).map(parse_phone).transpose()?,
    email:   map.value(PREFIX_EMAIL).map(parse_email).transpose()?,
    address: map.value(PREFIX_ADDRESS).map(parse_address).transpose()?,
  };
  if !edit.is_any_field_edited() {
    return Err(ParseError::NothingToEdit);
  }

  Ok(Command::Edit { index, edit })
}

fn parse_find(args: &str) -> Result<Command, ParseError> {
  let keywords: Vec<&str> = args.split_whitespace().collect();
  if keywords.is_empty() {
    return Err(invalid_format(CommandWord::Find));
  }
  Ok(Command::Find {
    predicate: NameContainsKeywords::new(keywords),
  })
}
