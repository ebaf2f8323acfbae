//! Implementation of the `blorp-deploy share` command.

use anyhow::{Context, Result};
use url::Url;

use blorp_deploy_lib::share::{encode, share_url};

use crate::args::{SettingsArgs, build_settings, load_record, open_store};

/// Print a share link query, or a full link when `base_url` is given.
pub fn cmd_share(args: &SettingsArgs, base_url: Option<&str>) -> Result<()> {
  let store = open_store()?;
  let record = load_record(&store, args, None)?;
  let settings = build_settings(&record)?;

  match base_url {
    Some(base) => {
      let base = Url::parse(base).with_context(|| format!("Invalid base URL: {}", base))?;
      println!("{}", share_url(&base, &settings));
    }
    None => println!("{}", encode(&settings)),
  }

  Ok(())
}
