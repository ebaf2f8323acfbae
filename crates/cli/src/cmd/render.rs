//! Implementation of the `blorp-deploy render` command.
//!
//! Renders the saved settings, with any flag overrides, as one deployment
//! artifact on stdout.

use anyhow::Result;
use tracing::debug;

use blorp_deploy_lib::render::{Format, render};

use crate::args::{SettingsArgs, build_settings, load_record, open_store};
use crate::output::{OutputFormat, print_json};

pub fn cmd_render(args: &SettingsArgs, format: Option<Format>, output: OutputFormat) -> Result<()> {
  let store = open_store()?;
  let record = load_record(&store, args, format)?;
  let settings = build_settings(&record)?;

  let artifact = render(record.selected_format, &settings);
  debug!(format = %artifact.format, bytes = artifact.text.len(), "rendered artifact");

  if output.is_json() {
    let json_output = serde_json::json!({
      "format": artifact.format,
      "language": artifact.language(),
      "text": artifact.text,
    });
    print_json(&json_output)?;
  } else {
    print!("{}", artifact.text);
  }

  Ok(())
}
