use serde::{Deserialize, Serialize};

use super::{SelectionMode, Settings, SettingsError};
use crate::render::Format;

/// The flat, unvalidated record a front end edits and persists.
///
/// Endpoints are kept as the raw comma-separated field the user typed. Missing
/// fields deserialize to their defaults so older files keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsRecord {
  pub display_name: String,
  pub raw_endpoints: String,
  pub lock_to_default_endpoints: bool,
  pub selection_mode: SelectionMode,
  pub selected_format: Format,
}

impl Default for SettingsRecord {
  fn default() -> Self {
    Self::from_settings(&Settings::default(), Format::default())
  }
}

impl SettingsRecord {
  pub fn from_settings(settings: &Settings, selected_format: Format) -> Self {
    Self {
      display_name: settings.display_name().to_string(),
      raw_endpoints: settings.endpoints_joined(),
      lock_to_default_endpoints: settings.lock_to_default_endpoints(),
      selection_mode: settings.selection_mode(),
      selected_format,
    }
  }

  /// Validate the record into [`Settings`].
  pub fn to_settings(&self) -> Result<Settings, SettingsError> {
    Settings::new(
      self.display_name.clone(),
      &self.raw_endpoints,
      self.lock_to_default_endpoints,
      self.selection_mode,
    )
  }
}

impl TryFrom<&SettingsRecord> for Settings {
  type Error = SettingsError;

  fn try_from(record: &SettingsRecord) -> Result<Self, Self::Error> {
    record.to_settings()
  }
}
