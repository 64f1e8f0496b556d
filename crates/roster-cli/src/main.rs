//! `roster`: a terminal shell for managing students and their CCAs.
//!
//! # Usage
//!
//! ```
//! roster
//! roster --prefs ~/.config/roster/preferences.toml --data ~/roster.db
//! RUST_LOG=debug roster
//! ```

mod app;
mod prefs;
mod render;
mod sample;

use std::{
  io::{self, BufRead, Write},
  path::PathBuf,
};

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use roster_core::{
  model::{Model, ModelManager},
  storage::AddressBookStorage,
};
use roster_store_sqlite::SqliteStorage;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "roster", version, about = "Manage students and their CCAs")]
struct Args {
  /// Path to the TOML preferences file. Created on exit if missing.
  #[arg(long, value_name = "FILE", env = "ROSTER_PREFS", default_value = "preferences.toml")]
  prefs: PathBuf,

  /// Path to the SQLite data file for this session. Not saved to the
  /// preferences file.
  #[arg(long, value_name = "FILE", env = "ROSTER_DATA")]
  data: Option<PathBuf>,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> Result<()> {
  // Logs go to stderr at `warn` by default so they stay out of the REPL.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .with_writer(io::stderr)
    .init();

  let args = Args::parse();

  let stored_prefs = prefs::load_stored(&args.prefs)?;
  let user_prefs = prefs::load(&args.prefs)?;
  let data_path = prefs::data_path(&user_prefs, args.data.as_deref());
  let storage = SqliteStorage::open(&data_path)
    .with_context(|| format!("failed to open data file {}", data_path.display()))?;
  let address_book = app::initial_address_book(&storage);
  info!(data = %data_path.display(), "starting roster");

  let mut app = App::new(ModelManager::new(address_book, user_prefs), storage);
  run_repl(&mut app)?;

  prefs::save(&args.prefs, &stored_prefs)
}

// ─── REPL ─────────────────────────────────────────────────────────────────────

/// Read commands until `exit` or end of input.
fn run_repl<S: AddressBookStorage>(app: &mut App<S>) -> Result<()> {
  let mut stdout = io::stdout().lock();
  let mut lines = io::stdin().lock().lines();

  writeln!(stdout, "{}", render::person_list(app.model().filtered_person_list()))?;
  writeln!(stdout, "{}", render::cca_list(app.model().cca_list()))?;

  loop {
    write!(stdout, "> ")?;
    stdout.flush()?;

    let Some(line) = lines.next() else {
      break;
    };
    let line = line.context("failed to read input")?;
    if line.trim().is_empty() {
      continue;
    }

    match app.execute(&line) {
      Ok(result) => {
        writeln!(stdout, "{}", result.feedback)?;
        if result.exit {
          break;
        }
        if result.show_help {
          writeln!(stdout, "{}", render::help())?;
          continue;
        }
        writeln!(stdout, "{}", render::person_list(app.model().filtered_person_list()))?;
        writeln!(stdout, "{}", render::cca_list(app.model().cca_list()))?;
      }
      Err(err) => writeln!(stdout, "{err:#}")?,
    }
  }

  Ok(())
}
