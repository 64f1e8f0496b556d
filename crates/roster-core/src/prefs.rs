//! User preferences: window geometry and the data file location.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Top-left corner of the main window, in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowPosition {
  pub x: i32,
  pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuiSettings {
  window_width:    f64,
  window_height:   f64,
  /// `None` lets the shell pick a position.
  window_position: Option<WindowPosition>,
}

impl GuiSettings {
  pub const DEFAULT_HEIGHT: f64 = 600.0;
  pub const DEFAULT_WIDTH: f64 = 740.0;

  pub fn new(
    window_width: f64,
    window_height: f64,
    window_position: Option<WindowPosition>,
  ) -> Self {
    Self {
      window_width,
      window_height,
      window_position,
    }
  }

  pub fn window_width(&self) -> f64 { self.window_width }

  pub fn window_height(&self) -> f64 { self.window_height }

  pub fn window_position(&self) -> Option<WindowPosition> { self.window_position }
}

impl Default for GuiSettings {
  fn default() -> Self { Self::new(Self::DEFAULT_WIDTH, Self::DEFAULT_HEIGHT, None) }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPrefs {
  gui_settings:           GuiSettings,
  address_book_file_path: PathBuf,
}

impl UserPrefs {
  pub const DEFAULT_DATA_PATH: &'static str = "data/roster.db";

  pub fn gui_settings(&self) -> &GuiSettings { &self.gui_settings }

  pub fn set_gui_settings(&mut self, gui_settings: GuiSettings) {
    self.gui_settings = gui_settings;
  }

  pub fn address_book_file_path(&self) -> &Path { &self.address_book_file_path }

  pub fn set_address_book_file_path(&mut self, path: impl Into<PathBuf>) {
    self.address_book_file_path = path.into();
  }

  /// Overwrite every setting with those of `other`.
  pub fn reset_data(&mut self, other: &UserPrefs) { self.clone_from(other); }
}

impl Default for UserPrefs {
  fn default() -> Self {
    Self {
      gui_settings:           GuiSettings::default(),
      address_book_file_path: PathBuf::from(Self::DEFAULT_DATA_PATH),
    }
  }
}
