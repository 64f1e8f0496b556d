//! Command parsing and execution for Roster.
//!
//! Text in, [`CommandResult`] out:
//!
//! ```text
//! "attend 2 c/Choir s/1"
//!   └─ parser::parse_command()   → Command::Attend { .. }
//!        └─ Command::execute()    → Model::record_attendance(..)
//!             └─ CommandResult     → feedback for the shell
//! ```
//!
//! Parsing never touches the model; execution touches it only through
//! [`roster_core::model::Model`].

pub mod command;
pub mod error;
pub mod index;
pub mod parser;
pub mod syntax;

pub use command::{Command, CommandResult};
pub use error::{CommandError, Error, ParseError, Result};
pub use parser::parse_command;

use roster_core::model::Model;

/// Parse `input` and run it against `model`.
pub fn execute<M: Model + ?Sized>(input: &str, model: &mut M) -> Result<CommandResult> {
  let command = parse_command(input)?;
  Ok(command.execute(model)?)
}
