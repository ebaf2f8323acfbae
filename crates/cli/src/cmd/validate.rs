//! Implementation of the `blorp-deploy validate` command.

use anyhow::Result;

use blorp_deploy_lib::endpoints::{check_endpoints, split_endpoints};

use crate::args::open_store;
use crate::output::{OutputFormat, print_error, print_json, print_success, print_warning};

/// Check an endpoint field, or the saved one when `raw` is `None`.
///
/// Returns whether the field is valid; the caller decides the exit code.
pub fn cmd_validate(raw: Option<&str>, output: OutputFormat) -> Result<bool> {
  let raw = match raw {
    Some(raw) => raw.to_string(),
    None => open_store()?.load()?.raw_endpoints,
  };

  let result = check_endpoints(&raw);
  let endpoints: Vec<String> = split_endpoints(&raw)
    .into_iter()
    .filter(|endpoint| !endpoint.is_empty())
    .collect();

  if output.is_json() {
    let json_output = serde_json::json!({
      "valid": result.is_ok(),
      "endpoints": endpoints,
      "error": result.as_ref().err().map(|e| e.to_string()),
    });
    print_json(&json_output)?;
    return Ok(result.is_ok());
  }

  match &result {
    Ok(()) => {
      print_success(&format!("{} endpoint(s) valid", endpoints.len()));
      if endpoints.is_empty() {
        print_warning("no endpoints given; at least one is needed to render");
      }
    }
    Err(e) => print_error(&e.to_string()),
  }

  Ok(result.is_ok())
}
