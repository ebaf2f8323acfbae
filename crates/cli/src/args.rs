//! Flags shared by every command that reads settings.

use anyhow::{Context, Result};
use clap::Args;

use blorp_deploy_lib::render::Format;
use blorp_deploy_lib::settings::{SelectionMode, Settings, SettingsRecord, SettingsStore};

use crate::output::print_warning;

/// Per-invocation overrides applied on top of the saved settings.
#[derive(Args, Debug, Default)]
pub struct SettingsArgs {
  /// Display name of the deployed app
  #[arg(long)]
  pub name: Option<String>,

  /// Comma-separated endpoint origins, e.g. "https://lemmy.world,https://lemmy.ml"
  #[arg(long)]
  pub endpoints: Option<String>,

  /// Only allow logging in to the configured endpoints
  #[arg(long, conflicts_with = "no_lock")]
  pub lock: bool,

  /// Allow logging in to any endpoint
  #[arg(long)]
  pub no_lock: bool,

  /// How to pick the default among several endpoints (default_first, default_random)
  #[arg(long)]
  pub selection_mode: Option<SelectionMode>,
}

impl SettingsArgs {
  pub fn apply(&self, record: &mut SettingsRecord) {
    if let Some(name) = &self.name {
      record.display_name = name.clone();
    }
    if let Some(endpoints) = &self.endpoints {
      record.raw_endpoints = endpoints.clone();
    }
    if self.lock {
      record.lock_to_default_endpoints = true;
    }
    if self.no_lock {
      record.lock_to_default_endpoints = false;
    }
    if let Some(mode) = self.selection_mode {
      record.selection_mode = mode;
    }
  }
}

pub fn open_store() -> Result<SettingsStore> {
  SettingsStore::default_store().context("Failed to locate settings")
}

/// Load the saved record and apply `args` and `format` on top.
pub fn load_record(store: &SettingsStore, args: &SettingsArgs, format: Option<Format>) -> Result<SettingsRecord> {
  let mut record = store.load().context("Failed to load saved settings")?;
  args.apply(&mut record);
  if let Some(format) = format {
    record.selected_format = format;
  }
  Ok(record)
}

/// Validate `record`, printing advisories as warnings.
pub fn build_settings(record: &SettingsRecord) -> Result<Settings> {
  let settings = record.to_settings().context("Invalid settings")?;
  for advisory in settings.advisories() {
    print_warning(&advisory.to_string());
  }
  Ok(settings)
}
