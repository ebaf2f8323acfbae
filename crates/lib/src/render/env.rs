//! Environment entries shared by every artifact.
//!
//! The four formats differ only in how a `NAME=value` pair is spelled. Which
//! pairs appear, and in what order, is decided here once.

use super::RenderInput;
use crate::consts::{ENV_DEFAULT_INSTANCE, ENV_INSTANCE_SELECTION_MODE, ENV_LOCK_TO_DEFAULT_INSTANCE, ENV_NAME};

/// A single environment variable as it will appear in an artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvEntry {
  pub name: &'static str,
  pub value: String,
}

/// How an artifact spells one environment entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvSyntax {
  /// `  -e NAME="value" \` on a shell command line
  Flag,
  /// `ENV NAME="value"` in an image definition
  Declaration,
  /// `NAME: "value"` under a compose `environment:` mapping
  MappingEntry,
  /// `- name: NAME` / `value: "value"` under a container `env:` sequence
  ManifestEntry,
}

impl EnvSyntax {
  /// Spell `entry`, prefixing every emitted line with `indent`.
  ///
  /// The value is escaped so the deployed app receives it byte for byte.
  pub fn line(&self, entry: &EnvEntry, indent: &str) -> String {
    let name = entry.name;
    let value = self.quote(&entry.value);
    match self {
      EnvSyntax::Flag => format!("{indent}-e {name}={value} \\"),
      EnvSyntax::Declaration => format!("{indent}ENV {name}={value}"),
      EnvSyntax::MappingEntry => format!("{indent}{name}: {value}"),
      EnvSyntax::ManifestEntry => format!("{indent}- name: {name}\n{indent}  value: {value}"),
    }
  }

  /// Wrap `value` in double quotes using this syntax's escaping rules.
  pub fn quote(&self, value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
      match self {
        EnvSyntax::Flag => push_shell_char(&mut quoted, c),
        EnvSyntax::Declaration => push_dockerfile_char(&mut quoted, c),
        EnvSyntax::MappingEntry | EnvSyntax::ManifestEntry => push_yaml_char(&mut quoted, c),
      }
    }
    quoted.push('"');
    quoted
  }
}

// POSIX double quotes keep everything literal except these four.
fn push_shell_char(out: &mut String, c: char) {
  if matches!(c, '\\' | '"' | '$' | '`') {
    out.push('\\');
  }
  out.push(c);
}

// Dockerfile double quotes only honor `\` before `\`, `"` and `$`; a
// backslash before anything else is kept literally.
fn push_dockerfile_char(out: &mut String, c: char) {
  if matches!(c, '\\' | '"' | '$') {
    out.push('\\');
  }
  out.push(c);
}

fn push_yaml_char(out: &mut String, c: char) {
  match c {
    '\\' => out.push_str("\\\\"),
    '"' => out.push_str("\\\""),
    '\n' => out.push_str("\\n"),
    '\r' => out.push_str("\\r"),
    '\t' => out.push_str("\\t"),
    c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
    c => out.push(c),
  }
}

/// The entries every artifact carries, in emission order.
///
/// The selection mode is only included when more than one endpoint is
/// configured.
pub fn env_entries(input: &RenderInput<'_>) -> Vec<EnvEntry> {
  let mut entries = vec![
    EnvEntry {
      name: ENV_NAME,
      value: input.name.to_string(),
    },
    EnvEntry {
      name: ENV_DEFAULT_INSTANCE,
      value: input.endpoints.clone(),
    },
    EnvEntry {
      name: ENV_LOCK_TO_DEFAULT_INSTANCE,
      value: lock_value(input.lock).to_string(),
    },
  ];

  if input.has_multiple_endpoints {
    entries.push(EnvEntry {
      name: ENV_INSTANCE_SELECTION_MODE,
      value: input.selection_mode.as_str().to_string(),
    });
  }

  entries
}

/// Render every entry of `input` in `syntax`, one element per entry.
pub fn env_lines(input: &RenderInput<'_>, syntax: EnvSyntax, indent: &str) -> Vec<String> {
  env_entries(input)
    .iter()
    .map(|entry| syntax.line(entry, indent))
    .collect()
}

/// Lock flags are read back as strings by the deployed app.
pub fn lock_value(lock: bool) -> &'static str {
  if lock { "1" } else { "0" }
}
