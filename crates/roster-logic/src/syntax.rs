//! Command words, argument prefixes and usage strings.

use std::fmt;

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

// ─── Prefixes ────────────────────────────────────────────────────────────────

/// Marks the start of an argument, e.g. `n/` in `n/Alice`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(&'static str);

impl Prefix {
  pub const fn new(prefix: &'static str) -> Self { Self(prefix) }

  pub fn as_str(self) -> &'static str { self.0 }
}

impl fmt::Display for Prefix {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.0) }
}

pub const PREFIX_NAME: Prefix = Prefix::new("n/");
pub const PREFIX_PHONE: Prefix = Prefix::new("p/");
pub const PREFIX_EMAIL: Prefix = Prefix::new("e/");
pub const PREFIX_ADDRESS: Prefix = Prefix::new("a/");
pub const PREFIX_CCA: Prefix = Prefix::new("c/");
pub const PREFIX_ROLE: Prefix = Prefix::new("r/");
pub const PREFIX_TOTAL_SESSIONS: Prefix = Prefix::new("t/");
pub const PREFIX_SESSIONS: Prefix = Prefix::new("s/");

// ─── Command words ───────────────────────────────────────────────────────────

/// The first word of every command line. Matching is case-sensitive.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum CommandWord {
  Add,
  AddCca,
  Enrol,
  Delete,
  DeleteCca,
  Edit,
  EditCca,
  Attend,
  List,
  Find,
  FindCca,
  Clear,
  Help,
  Exit,
}

impl CommandWord {
  pub fn usage(self) -> &'static str {
    match self {
      Self::Add => {
        "add: Adds a person to the address book.\n\
         Parameters: n/NAME p/PHONE e/EMAIL a/ADDRESS\n\
         Example: add n/John Doe p/98765432 e/johnd@example.com a/311, Clementi Ave 2, #02-25"
      }
      Self::AddCca => {
        "addcca: Adds a CCA to the address book.\n\
         Parameters: c/CCA_NAME\n\
         Example: addcca c/Choir"
      }
      Self::Enrol => {
        "enrol: Enrols the person identified by the index number used in the displayed person \
         list into an existing CCA.\n\
         Parameters: INDEX (must be a positive integer) c/CCA_NAME [r/ROLE] [t/TOTAL_SESSIONS]\n\
         Example: enrol 1 c/Choir r/Treasurer t/12"
      }
      Self::Delete => {
        "delete: Deletes the person identified by the index number used in the displayed person \
         list.\n\
         Parameters: INDEX (must be a positive integer)\n\
         Example: delete 1"
      }
      Self::DeleteCca => {
        "deletecca: Deletes a CCA and removes it from every person enrolled in it.\n\
         Parameters: c/CCA_NAME\n\
         Example: deletecca c/Choir"
      }
      Self::Edit => {
        "edit: Edits the details of the person identified by the index number used in the \
         displayed person list. Existing values will be overwritten by the input values.\n\
         Parameters: INDEX (must be a positive integer) [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS]\n\
         Example: edit 1 p/91234567 e/johndoe@example.com"
      }
      Self::EditCca => {
        "editcca: Renames a CCA, keeping every enrolment in it.\n\
         Parameters: c/CCA_NAME n/NEW_NAME\n\
         Example: editcca c/Choir n/Chamber Choir"
      }
      Self::Attend => {
        "attend: Records attendance for the person identified by the index number used in the \
         displayed person list. A negative amount corrects earlier records.\n\
         Parameters: INDEX (must be a positive integer) c/CCA_NAME s/AMOUNT\n\
         Example: attend 1 c/Choir s/1"
      }
      Self::List => "list: Lists all persons.",
      Self::Find => {
        "find: Finds all persons whose names contain any of the specified keywords \
         (case-insensitive) and displays them as a list with index numbers.\n\
         Parameters: KEYWORD [MORE_KEYWORDS]...\n\
         Example: find alice bob charlie"
      }
      Self::FindCca => {
        "findcca: Lists all persons enrolled in the given CCA.\n\
         Parameters: c/CCA_NAME\n\
         Example: findcca c/Choir"
      }
      Self::Clear => "clear: Clears the address book.",
      Self::Help => "help: Shows program usage instructions.",
      Self::Exit => "exit: Exits the program.",
    }
  }
}
