//! The canonical settings model.
//!
//! [`Settings`] is the validated form of what a user declares about their
//! deployment. It is built from raw input through [`Settings::new`] or from a
//! flat [`SettingsRecord`], and is the only input the renderers and the share
//! link codec accept.

mod record;
mod store;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{DEFAULT_DISPLAY_NAME, DEFAULT_ENDPOINT};
use crate::endpoints::{ValidationError, check_endpoints, split_endpoints};

pub use record::SettingsRecord;
pub use store::{SettingsStore, StoreError};

/// Errors raised where raw input becomes a [`Settings`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
  #[error("at least one endpoint is required")]
  NoEndpoints,

  #[error(transparent)]
  InvalidEndpoints(#[from] ValidationError),
}

/// How a deployed instance picks its default among several endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
  /// Use the first configured endpoint.
  #[default]
  DefaultFirst,
  /// Pick one of the configured endpoints at random.
  DefaultRandom,
}

impl SelectionMode {
  pub const ALL: [SelectionMode; 2] = [SelectionMode::DefaultFirst, SelectionMode::DefaultRandom];

  pub fn as_str(&self) -> &'static str {
    match self {
      SelectionMode::DefaultFirst => "default_first",
      SelectionMode::DefaultRandom => "default_random",
    }
  }
}

impl fmt::Display for SelectionMode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown selection mode '{0}' (expected default_first or default_random)")]
pub struct UnknownSelectionMode(pub String);

impl FromStr for SelectionMode {
  type Err = UnknownSelectionMode;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    SelectionMode::ALL
      .into_iter()
      .find(|mode| mode.as_str() == s)
      .ok_or_else(|| UnknownSelectionMode(s.to_string()))
  }
}

/// Non-fatal remarks about a [`Settings`] value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
  /// The display name is blank once trimmed.
  EmptyName,
}

impl fmt::Display for Advisory {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Advisory::EmptyName => write!(f, "display name is empty"),
    }
  }
}

/// Validated deployment settings.
///
/// The endpoint list is never empty and every non-empty endpoint is a bare
/// origin. Fields are private so every mutation goes back through the same
/// checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
  display_name: String,
  endpoints: Vec<String>,
  lock_to_default_endpoints: bool,
  selection_mode: SelectionMode,
}

impl Default for Settings {
  fn default() -> Self {
    Self {
      display_name: DEFAULT_DISPLAY_NAME.to_string(),
      endpoints: vec![DEFAULT_ENDPOINT.to_string()],
      lock_to_default_endpoints: false,
      selection_mode: SelectionMode::default(),
    }
  }
}

impl Settings {
  /// Build settings from raw user input.
  ///
  /// # Errors
  ///
  /// Returns [`SettingsError::InvalidEndpoints`] if a segment of
  /// `raw_endpoints` is not a bare origin, and [`SettingsError::NoEndpoints`]
  /// if every segment is empty.
  pub fn new(
    display_name: impl Into<String>,
    raw_endpoints: &str,
    lock_to_default_endpoints: bool,
    selection_mode: SelectionMode,
  ) -> Result<Self, SettingsError> {
    Ok(Self {
      display_name: display_name.into(),
      endpoints: parse_endpoints(raw_endpoints)?,
      lock_to_default_endpoints,
      selection_mode,
    })
  }

  pub fn display_name(&self) -> &str {
    &self.display_name
  }

  pub fn endpoints(&self) -> &[String] {
    &self.endpoints
  }

  pub fn lock_to_default_endpoints(&self) -> bool {
    self.lock_to_default_endpoints
  }

  pub fn selection_mode(&self) -> SelectionMode {
    self.selection_mode
  }

  /// Endpoints joined back into a single field, without whitespace.
  pub fn endpoints_joined(&self) -> String {
    self.endpoints.join(",")
  }

  /// Whether the selection mode has any effect.
  pub fn has_multiple_endpoints(&self) -> bool {
    self.endpoints.len() > 1
  }

  pub fn set_display_name(&mut self, display_name: impl Into<String>) {
    self.display_name = display_name.into();
  }

  /// Replace the endpoint list from a raw comma-separated field.
  ///
  /// Leaves the current list untouched on error.
  pub fn set_endpoints(&mut self, raw_endpoints: &str) -> Result<(), SettingsError> {
    self.endpoints = parse_endpoints(raw_endpoints)?;
    Ok(())
  }

  pub fn set_lock_to_default_endpoints(&mut self, lock: bool) {
    self.lock_to_default_endpoints = lock;
  }

  pub fn set_selection_mode(&mut self, selection_mode: SelectionMode) {
    self.selection_mode = selection_mode;
  }

  pub fn advisories(&self) -> Vec<Advisory> {
    let mut advisories = Vec::new();
    if self.display_name.trim().is_empty() {
      advisories.push(Advisory::EmptyName);
    }
    advisories
  }
}

fn parse_endpoints(raw: &str) -> Result<Vec<String>, SettingsError> {
  check_endpoints(raw)?;

  let endpoints = split_endpoints(raw);
  if endpoints.iter().all(|endpoint| endpoint.is_empty()) {
    return Err(SettingsError::NoEndpoints);
  }

  Ok(endpoints)
}
