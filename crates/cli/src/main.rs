mod args;
mod cmd;
mod output;
mod prompts;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use blorp_deploy_lib::render::Format;

use crate::args::SettingsArgs;
use crate::cmd::{SettingsCommand, cmd_render, cmd_settings, cmd_share, cmd_validate};
use crate::output::OutputFormat;

/// blorp-deploy - Generate deployment files for Blorp
#[derive(Parser)]
#[command(name = "blorp-deploy")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose logging
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Print a deployment artifact for the current settings
  Render {
    #[command(flatten)]
    settings: SettingsArgs,

    /// Artifact to generate (docker, dockerfile, compose, kubernetes)
    #[arg(short, long)]
    format: Option<Format>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value = "text")]
    output: OutputFormat,
  },

  /// Check a comma-separated endpoint list (the saved one if omitted)
  Validate {
    endpoints: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value = "text")]
    output: OutputFormat,
  },

  /// Print a share link for previewing the current settings
  Share {
    #[command(flatten)]
    settings: SettingsArgs,

    /// Prefix the query with this URL, e.g. https://blorpblorp.xyz
    #[arg(long)]
    base_url: Option<String>,
  },

  /// Manage saved settings
  #[command(subcommand)]
  Settings(SettingsCommand),
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  let default_level = if cli.verbose { "debug" } else { "warn" };
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  match cli.command {
    Commands::Render {
      settings,
      format,
      output,
    } => cmd_render(&settings, format, output),
    Commands::Validate { endpoints, output } => {
      if !cmd_validate(endpoints.as_deref(), output)? {
        std::process::exit(1);
      }
      Ok(())
    }
    Commands::Share { settings, base_url } => cmd_share(&settings, base_url.as_deref()),
    Commands::Settings(command) => cmd_settings(command),
  }
}
