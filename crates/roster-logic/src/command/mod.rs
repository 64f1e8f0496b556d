//! Parsed commands and how they apply to a [`Model`].

mod cca;
mod person;

use roster_core::{
  cca::{Cca, SessionCount},
  field::{CcaName, Role},
  model::Model,
  person::Person,
  predicate::NameContainsKeywords,
};
use tracing::debug;

pub use self::person::EditPersonDescriptor;
use crate::{error::CommandError, index::Index, syntax::CommandWord};

// ─── Command ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
  Add {
    person: Person,
  },
  AddCca {
    cca_name: CcaName,
  },
  Enrol {
    index:          Index,
    cca_name:       CcaName,
    role:           Role,
    total_sessions: SessionCount,
  },
  Delete {
    index: Index,
  },
  DeleteCca {
    cca_name: CcaName,
  },
  Edit {
    index: Index,
    edit:  EditPersonDescriptor,
  },
  EditCca {
    cca_name: CcaName,
    new_name: CcaName,
  },
  Attend {
    index:    Index,
    cca_name: CcaName,
    amount:   i64,
  },
  List,
  Find {
    predicate: NameContainsKeywords,
  },
  FindCca {
    cca_name: CcaName,
  },
  Clear,
  Help,
  Exit,
}

impl Command {
  pub fn word(&self) -> CommandWord {
    match self {
      Self::Add { .. } => CommandWord::Add,
      Self::AddCca { .. } => CommandWord::AddCca,
      Self::Enrol { .. } => CommandWord::Enrol,
      Self::Delete { .. } => CommandWord::Delete,
      Self::DeleteCca { .. } => CommandWord::DeleteCca,
      Self::Edit { .. } => CommandWord::Edit,
      Self::EditCca { .. } => CommandWord::EditCca,
      Self::Attend { .. } => CommandWord::Attend,
      Self::List => CommandWord::List,
      Self::Find { .. } => CommandWord::Find,
      Self::FindCca { .. } => CommandWord::FindCca,
      Self::Clear => CommandWord::Clear,
      Self::Help => CommandWord::Help,
      Self::Exit => CommandWord::Exit,
    }
  }

  /// Whether a successful run of this command can change the address book.
  /// The shell only saves after these.
  pub fn mutates_address_book(&self) -> bool {
    !matches!(
      self,
      Self::List | Self::Find { .. } | Self::FindCca { .. } | Self::Help | Self::Exit
    )
  }

  /// Apply the command. On error the model is left as it was.
  pub fn execute<M: Model + ?Sized>(&self, model: &mut M) -> Result<CommandResult, CommandError> {
    debug!(word = %self.word(), "executing command");
    match self {
      Self::Add { person } => person::add(model, person.clone()),
      Self::AddCca { cca_name } => cca::add_cca(model, cca_name),
      Self::Enrol {
        index,
        cca_name,
        role,
        total_sessions,
      } => cca::enrol(model, *index, cca_name, role, *total_sessions),
      Self::Delete { index } => person::delete(model, *index),
      Self::DeleteCca { cca_name } => cca::delete_cca(model, cca_name),
      Self::Edit { index, edit } => person::edit(model, *index, edit),
      Self::EditCca { cca_name, new_name } => cca::edit_cca(model, cca_name, new_name),
      Self::Attend {
        index,
        cca_name,
        amount,
      } => cca::attend(model, *index, cca_name, *amount),
      Self::List => person::list(model),
      Self::Find { predicate } => person::find(model, predicate),
      Self::FindCca { cca_name } => cca::find_cca(model, cca_name),
      Self::Clear => person::clear(model),
      Self::Help => Ok(CommandResult {
        feedback:  "Showing help.".into(),
        show_help: true,
        exit:      false,
      }),
      Self::Exit => Ok(CommandResult {
        feedback:  "Exiting as requested ...".into(),
        show_help: false,
        exit:      true,
      }),
    }
  }
}

// ─── Result ──────────────────────────────────────────────────────────────────

/// What the shell should show or do after a command succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
  pub feedback:  String,
  pub show_help: bool,
  pub exit:      bool,
}

impl CommandResult {
  pub fn new(feedback: impl Into<String>) -> Self {
    Self {
      feedback:  feedback.into(),
      show_help: false,
      exit:      false,
    }
  }
}

// ─── Lookups ─────────────────────────────────────────────────────────────────

/// The person at `index` in the filtered view.
fn person_at<M: Model + ?Sized>(model: &M, index: Index) -> Result<Person, CommandError> {
  model
    .filtered_person_list()
    .get(index.zero_based())
    .cloned()
    .ok_or(CommandError::InvalidPersonIndex)
}

fn cca_named<M: Model + ?Sized>(model: &M, name: &CcaName) -> Result<Cca, CommandError> {
  model
    .address_book()
    .find_cca(name)
    .cloned()
    .ok_or_else(|| CommandError::UnknownCca(name.to_string()))
}
