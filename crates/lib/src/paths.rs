//! Platform-specific directories.

use std::path::PathBuf;

use crate::consts::APP_NAME;

/// Overrides the config directory entirely when set.
pub const CONFIG_DIR_ENV: &str = "BLORP_DEPLOY_CONFIG_DIR";

/// Returns the user's home directory
#[cfg(windows)]
pub fn home_dir() -> Option<PathBuf> {
  std::env::var_os("USERPROFILE").map(PathBuf::from)
}

/// Returns the user's home directory
#[cfg(not(windows))]
pub fn home_dir() -> Option<PathBuf> {
  std::env::var_os("HOME").map(PathBuf::from)
}

/// Returns the directory for configuration files for the application
///
/// Returns `None` if neither the override nor any platform location can be
/// determined.
pub fn config_dir() -> Option<PathBuf> {
  if let Some(path) = std::env::var_os(CONFIG_DIR_ENV) {
    return Some(PathBuf::from(path));
  }

  default_config_dir()
}

#[cfg(windows)]
fn default_config_dir() -> Option<PathBuf> {
  std::env::var_os("APPDATA").map(|appdata| PathBuf::from(appdata).join(APP_NAME))
}

#[cfg(not(windows))]
fn default_config_dir() -> Option<PathBuf> {
  let config_home = std::env::var_os("XDG_CONFIG_HOME")
    .map(PathBuf::from)
    .or_else(|| home_dir().map(|home| home.join(".config")))?;
  Some(config_home.join(APP_NAME))
}
