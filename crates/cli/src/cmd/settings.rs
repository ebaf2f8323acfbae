//! Implementation of the `blorp-deploy settings` commands.
//!
//! These manage the record that `render` and `share` start from.

use anyhow::{Context, Result};
use clap::Subcommand;
use tracing::info;

use blorp_deploy_lib::render::Format;

use crate::args::{SettingsArgs, build_settings, load_record, open_store};
use crate::output::{OutputFormat, print_info, print_json, print_stat, print_success};
use crate::prompts::confirm;

#[derive(Subcommand, Debug)]
pub enum SettingsCommand {
  /// Show the saved settings
  Show {
    /// Output format
    #[arg(short = 'o', long, value_enum, default_value = "text")]
    output: OutputFormat,
  },

  /// Update and save settings
  Set {
    #[command(flatten)]
    settings: SettingsArgs,

    /// Format `render` uses when none is given
    #[arg(short, long)]
    format: Option<Format>,
  },

  /// Restore the default settings
  Reset {
    /// Skip confirmation prompt
    #[arg(long)]
    force: bool,
  },
}

pub fn cmd_settings(command: SettingsCommand) -> Result<()> {
  match command {
    SettingsCommand::Show { output } => cmd_show(output),
    SettingsCommand::Set { settings, format } => cmd_set(&settings, format),
    SettingsCommand::Reset { force } => cmd_reset(force),
  }
}

fn cmd_show(output: OutputFormat) -> Result<()> {
  let store = open_store()?;
  let record = store.load().context("Failed to load saved settings")?;

  if output.is_json() {
    return print_json(&record);
  }

  println!("Settings ({}):", store.path().display());
  print_stat("Name", &record.display_name);
  print_stat("Endpoints", &record.raw_endpoints);
  print_stat("Lock to endpoints", &record.lock_to_default_endpoints.to_string());
  print_stat("Selection mode", record.selection_mode.as_str());
  print_stat("Format", record.selected_format.as_str());

  Ok(())
}

fn cmd_set(args: &SettingsArgs, format: Option<Format>) -> Result<()> {
  let store = open_store()?;
  let record = load_record(&store, args, format)?;

  // refuse to persist anything render would reject
  build_settings(&record)?;

  store.save(&record).context("Failed to save settings")?;
  info!(path = %store.path().display(), "settings saved");
  print_success(&format!("Saved settings to {}", store.path().display()));

  Ok(())
}

fn cmd_reset(force: bool) -> Result<()> {
  let store = open_store()?;

  if !confirm("Reset saved settings to defaults?", force)? {
    print_info("Reset cancelled");
    return Ok(());
  }

  if store.clear().context("Failed to reset settings")? {
    print_success("Settings reset to defaults");
  } else {
    print_info("No saved settings; already using defaults");
  }

  Ok(())
}
