//! Share links: settings carried in a URL query string.
//!
//! A running instance of the app reads these keys to preview a configuration
//! without deploying it. Keys are always written in the same order, and the
//! selection mode is written even for a single endpoint.

use thiserror::Error;
use url::{Url, form_urlencoded};

use crate::consts::{DEFAULT_DISPLAY_NAME, DEFAULT_ENDPOINT};
use crate::render::lock_value;
use crate::settings::{SelectionMode, Settings, SettingsError, UnknownSelectionMode};

pub const KEY_NAME: &str = "name";
pub const KEY_DEFAULT_INSTANCE: &str = "default_instance";
pub const KEY_LOCK_TO_DEFAULT_INSTANCE: &str = "lock_to_default_instance";
pub const KEY_INSTANCE_SELECTION_MODE: &str = "instance_selection_mode";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShareLinkError {
  #[error("invalid lock_to_default_instance value '{0}' (expected 0 or 1)")]
  InvalidLock(String),

  #[error("invalid instance_selection_mode value '{0}'")]
  InvalidSelectionMode(String),

  #[error(transparent)]
  Settings(#[from] SettingsError),
}

/// Encode `settings` as a query string (without the leading `?`).
pub fn encode(settings: &Settings) -> String {
  form_urlencoded::Serializer::new(String::new())
    .append_pair(KEY_NAME, settings.display_name())
    .append_pair(KEY_DEFAULT_INSTANCE, &settings.endpoints_joined())
    .append_pair(KEY_LOCK_TO_DEFAULT_INSTANCE, lock_value(settings.lock_to_default_endpoints()))
    .append_pair(KEY_INSTANCE_SELECTION_MODE, settings.selection_mode().as_str())
    .finish()
}

/// `base` with its query replaced by the encoded settings.
pub fn share_url(base: &Url, settings: &Settings) -> Url {
  let mut url = base.clone();
  url.set_query(Some(&encode(settings)));
  url
}

/// Decode a query string produced by [`encode`].
///
/// A leading `?` is accepted. Unknown keys are ignored and missing keys take
/// their default; when a key repeats, the last value wins.
pub fn decode(query: &str) -> Result<Settings, ShareLinkError> {
  let query = query.strip_prefix('?').unwrap_or(query);

  let mut name = DEFAULT_DISPLAY_NAME.to_string();
  let mut endpoints = DEFAULT_ENDPOINT.to_string();
  let mut lock = false;
  let mut selection_mode = SelectionMode::default();

  for (key, value) in form_urlencoded::parse(query.as_bytes()) {
    match &*key {
      KEY_NAME => name = value.into_owned(),
      KEY_DEFAULT_INSTANCE => endpoints = value.into_owned(),
      KEY_LOCK_TO_DEFAULT_INSTANCE => {
        lock = match &*value {
          "1" => true,
          "0" => false,
          other => return Err(ShareLinkError::InvalidLock(other.to_string())),
        }
      }
      KEY_INSTANCE_SELECTION_MODE => {
        selection_mode = value
          .parse()
          .map_err(|e: UnknownSelectionMode| ShareLinkError::InvalidSelectionMode(e.0))?
      }
      _ => {}
    }
  }

  Ok(Settings::new(name, &endpoints, lock, selection_mode)?)
}
