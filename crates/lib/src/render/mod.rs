//! Deployment artifact renderers.
//!
//! Each renderer projects a [`Settings`] value into the text of one target
//! format:
//! - `docker`: a single `docker run` invocation
//! - `dockerfile`: an image definition deriving from the published image
//! - `compose`: a one-service compose manifest
//! - `kubernetes`: a Deployment and a NodePort Service
//!
//! Rendering is pure: the same settings always produce byte-identical text.

mod compose;
mod docker;
mod dockerfile;
mod env;
mod kubernetes;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::settings::{SelectionMode, Settings};

pub use env::{EnvEntry, EnvSyntax, env_entries, lock_value};

/// Target artifact format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
  #[default]
  Docker,
  Dockerfile,
  Compose,
  Kubernetes,
}

impl Format {
  pub const ALL: [Format; 4] = [Format::Docker, Format::Dockerfile, Format::Compose, Format::Kubernetes];

  pub fn as_str(&self) -> &'static str {
    match self {
      Format::Docker => "docker",
      Format::Dockerfile => "dockerfile",
      Format::Compose => "compose",
      Format::Kubernetes => "kubernetes",
    }
  }

  /// Syntax highlighting tag for the rendered text.
  pub fn language(&self) -> &'static str {
    match self {
      Format::Docker => "bash",
      Format::Dockerfile => "dockerfile",
      Format::Compose | Format::Kubernetes => "yaml",
    }
  }
}

impl fmt::Display for Format {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown format '{0}' (expected docker, dockerfile, compose or kubernetes)")]
pub struct UnknownFormat(pub String);

impl FromStr for Format {
  type Err = UnknownFormat;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Format::ALL
      .into_iter()
      .find(|format| format.as_str() == s)
      .ok_or_else(|| UnknownFormat(s.to_string()))
  }
}

/// The normalized view every renderer reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderInput<'a> {
  /// Display name, already trimmed.
  pub name: &'a str,
  /// Endpoints joined with `,`.
  pub endpoints: String,
  pub lock: bool,
  pub selection_mode: SelectionMode,
  pub has_multiple_endpoints: bool,
}

impl<'a> From<&'a Settings> for RenderInput<'a> {
  fn from(settings: &'a Settings) -> Self {
    Self {
      name: settings.display_name().trim(),
      endpoints: settings.endpoints_joined(),
      lock: settings.lock_to_default_endpoints(),
      selection_mode: settings.selection_mode(),
      has_multiple_endpoints: settings.has_multiple_endpoints(),
    }
  }
}

/// Rendered artifact text with its format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifact {
  pub format: Format,
  pub text: String,
}

impl Artifact {
  pub fn language(&self) -> &'static str {
    self.format.language()
  }
}

/// Render `settings` as a `format` artifact.
pub fn render(format: Format, settings: &Settings) -> Artifact {
  let input = RenderInput::from(settings);
  let text = match format {
    Format::Docker => docker::render(&input),
    Format::Dockerfile => dockerfile::render(&input),
    Format::Compose => compose::render(&input),
    Format::Kubernetes => kubernetes::render(&input),
  };
  Artifact { format, text }
}
