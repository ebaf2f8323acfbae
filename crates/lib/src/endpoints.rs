//! Parsing and validation of the comma-separated endpoint field.
//!
//! An endpoint is a bare origin: scheme, host and optional port. The raw field
//! is split on `,` and each segment trimmed; empty segments are kept by
//! [`split_endpoints`] and skipped by the validator.

use thiserror::Error;
use url::Url;

/// Why an endpoint field was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
  #[error("invalid URL '{endpoint}': {reason}")]
  MalformedUrl { endpoint: String, reason: String },

  #[error("endpoint '{endpoint}' must not include a path (found '{path}')")]
  PathNotAllowed { endpoint: String, path: String },
}

/// Split a raw endpoint field into trimmed segments, preserving order and
/// empty segments.
///
/// A string without commas always yields exactly one segment.
pub fn split_endpoints(raw: &str) -> Vec<String> {
  raw.split(',').map(|segment| segment.trim().to_string()).collect()
}

/// Check every non-empty segment of `raw`, stopping at the first failure.
///
/// An input with no non-empty segments passes; whether an empty list is
/// acceptable is decided where a [`Settings`](crate::settings::Settings) is
/// built.
pub fn check_endpoints(raw: &str) -> Result<(), ValidationError> {
  raw
    .split(',')
    .map(str::trim)
    .filter(|segment| !segment.is_empty())
    .try_for_each(check_endpoint)
}

/// Boolean form of [`check_endpoints`], for callers that only show validity.
pub fn is_valid_endpoints(raw: &str) -> bool {
  check_endpoints(raw).is_ok()
}

fn check_endpoint(endpoint: &str) -> Result<(), ValidationError> {
  let url = Url::parse(endpoint).map_err(|e| ValidationError::MalformedUrl {
    endpoint: endpoint.to_string(),
    reason: e.to_string(),
  })?;

  let path = url.path();
  if !matches!(path, "" | "/") {
    return Err(ValidationError::PathNotAllowed {
      endpoint: endpoint.to_string(),
      path: path.to_string(),
    });
  }

  Ok(())
}
