//! Loading and saving [`UserPrefs`] as TOML.

use std::{
  fs,
  path::{Path, PathBuf},
};

use anyhow::{Context as _, Result};
use config::{Config, Environment, File, FileFormat};
use roster_core::prefs::UserPrefs;

/// Environment variables with this prefix override the file, e.g.
/// `ROSTER_ADDRESS_BOOK_FILE_PATH`.
const ENV_PREFIX: &str = "ROSTER";

/// Preferences as stored in `path`. A missing file yields the defaults. This
/// is what [`save`] writes back on exit.
pub fn load_stored(path: &Path) -> Result<UserPrefs> { build(path, None) }

/// Stored preferences layered with `ROSTER_*` environment overrides. The
/// session runs with these; they are never saved.
pub fn load(path: &Path) -> Result<UserPrefs> {
  build(path, Some(Environment::with_prefix(ENV_PREFIX)))
}

/// The data file for this session: `--data` if given, else the preferences.
pub fn data_path(prefs: &UserPrefs, override_path: Option<&Path>) -> PathBuf {
  override_path
    .unwrap_or_else(|| prefs.address_book_file_path())
    .to_path_buf()
}

fn build(path: &Path, env: Option<Environment>) -> Result<UserPrefs> {
  let mut builder =
    Config::builder().add_source(File::from(path).format(FileFormat::Toml).required(false));
  if let Some(env) = env {
    builder = builder.add_source(env);
  }
  let settings = builder
    .build()
    .with_context(|| format!("failed to read preferences from {}", path.display()))?;

  settings
    .try_deserialize()
    .context("failed to deserialise preferences")
}

/// Write `prefs` to `path`, creating parent directories.
pub fn save(path: &Path, prefs: &UserPrefs) -> Result<()> {
  if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
    fs::create_dir_all(parent)
      .with_context(|| format!("failed to create {}", parent.display()))?;
  }
  let raw = toml::to_string_pretty(prefs).context("failed to serialise preferences")?;
  fs::write(path, raw).with_context(|| format!("failed to write {}", path.display()))
}
