use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn validate_accepts_origins() {
  let env = TestEnv::new();
  env
    .cmd()
    .args(["validate", "https://lemmy.world, https://lemmy.ml"])
    .assert()
    .success()
    .stderr(predicate::str::contains("2 endpoint(s) valid"));
}

#[test]
fn validate_rejects_path() {
  let env = TestEnv::new();
  env
    .cmd()
    .args(["validate", "https://a.com,https://b.com/x"])
    .assert()
    .code(1)
    .stderr(predicate::str::contains("https://b.com/x"));
}

#[test]
fn validate_rejects_malformed_url() {
  let env = TestEnv::new();
  env
    .cmd()
    .args(["validate", "not a url"])
    .assert()
    .code(1)
    .stderr(predicate::str::contains("invalid URL"));
}

#[test]
fn validate_empty_input_passes_with_warning() {
  let env = TestEnv::new();
  env
    .cmd()
    .args(["validate", ""])
    .assert()
    .success()
    .stderr(predicate::str::contains("no endpoints given"));
}

#[test]
fn validate_json_output() {
  let env = TestEnv::new();
  let output = env
    .cmd()
    .args(["validate", "https://a.com/x", "-o", "json"])
    .assert()
    .code(1)
    .get_output()
    .stdout
    .clone();

  let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
  assert_eq!(json["valid"], false);
  assert_eq!(json["endpoints"], serde_json::json!(["https://a.com/x"]));
  assert!(json["error"].as_str().unwrap().contains("/x"));
}

#[test]
fn validate_defaults_to_saved_endpoints() {
  let env = TestEnv::new();
  env.write_settings(r#"{ "rawEndpoints": "https://a.com/nope" }"#);

  env.cmd().arg("validate").assert().code(1);
}
