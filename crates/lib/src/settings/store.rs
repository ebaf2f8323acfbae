//! Persistence of the flat settings record.
//!
//! # Storage Layout
//!
//! ```text
//! {config_dir}/
//! └── deploy-settings.json   # SettingsRecord
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use super::SettingsRecord;
use crate::consts::STORAGE_KEY;
use crate::paths::config_dir;

#[derive(Debug, Error)]
pub enum StoreError {
  #[error("could not determine a configuration directory (set HOME or BLORP_DEPLOY_CONFIG_DIR)")]
  NoConfigDir,

  #[error("failed to create directory {}: {source}", path.display())]
  CreateDir { path: PathBuf, source: io::Error },

  #[error("failed to read {}: {source}", path.display())]
  Read { path: PathBuf, source: io::Error },

  #[error("failed to write {}: {source}", path.display())]
  Write { path: PathBuf, source: io::Error },

  #[error("failed to parse {}: {source}", path.display())]
  Parse { path: PathBuf, source: serde_json::Error },

  #[error("failed to serialize settings: {0}")]
  Serialize(#[source] serde_json::Error),
}

/// Reads and writes a [`SettingsRecord`] as JSON.
#[derive(Debug, Clone)]
pub struct SettingsStore {
  base_path: PathBuf,
}

impl SettingsStore {
  /// Create a store rooted at `base_path`.
  pub fn new(base_path: PathBuf) -> Self {
    Self { base_path }
  }

  /// Create a store at the platform config directory.
  pub fn default_store() -> Result<Self, StoreError> {
    config_dir().map(Self::new).ok_or(StoreError::NoConfigDir)
  }

  pub fn base_path(&self) -> &Path {
    &self.base_path
  }

  /// Path of the settings file.
  pub fn path(&self) -> PathBuf {
    self.base_path.join(format!("{}.json", STORAGE_KEY))
  }

  /// Load the stored record.
  ///
  /// Returns the default record if nothing has been saved yet.
  pub fn load(&self) -> Result<SettingsRecord, StoreError> {
    let path = self.path();

    let content = match fs::read_to_string(&path) {
      Ok(content) => content,
      Err(e) if e.kind() == io::ErrorKind::NotFound => {
        debug!(path = %path.display(), "no saved settings, using defaults");
        return Ok(SettingsRecord::default());
      }
      Err(source) => return Err(StoreError::Read { path, source }),
    };

    let record = serde_json::from_str(&content).map_err(|source| StoreError::Parse {
      path: path.clone(),
      source,
    })?;
    debug!(path = %path.display(), "loaded settings");

    Ok(record)
  }

  /// Save `record`, replacing whatever was stored.
  ///
  /// Writes to a temp file and renames it over the target.
  pub fn save(&self, record: &SettingsRecord) -> Result<(), StoreError> {
    fs::create_dir_all(&self.base_path).map_err(|source| StoreError::CreateDir {
      path: self.base_path.clone(),
      source,
    })?;

    let path = self.path();
    let temp_path = self.base_path.join(format!("{}.json.tmp", STORAGE_KEY));

    let content = serde_json::to_string_pretty(record).map_err(StoreError::Serialize)?;
    fs::write(&temp_path, &content).map_err(|source| StoreError::Write {
      path: temp_path.clone(),
      source,
    })?;
    fs::rename(&temp_path, &path).map_err(|source| StoreError::Write {
      path: path.clone(),
      source,
    })?;
    debug!(path = %path.display(), "saved settings");

    Ok(())
  }

  /// Remove the stored record so the next load yields defaults.
  ///
  /// Returns `true` if a file was removed.
  pub fn clear(&self) -> Result<bool, StoreError> {
    let path = self.path();
    match fs::remove_file(&path) {
      Ok(()) => {
        debug!(path = %path.display(), "cleared settings");
        Ok(true)
      }
      Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
      Err(source) => Err(StoreError::Write { path, source }),
    }
  }
}
