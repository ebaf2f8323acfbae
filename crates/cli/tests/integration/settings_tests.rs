use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn show_defaults_as_json() {
  let env = TestEnv::new();
  let stdout = env.stdout(&["settings", "show", "-o", "json"]);

  let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
  assert_eq!(
    json,
    serde_json::json!({
      "displayName": "Blorp",
      "rawEndpoints": "https://lemmy.world",
      "lockToDefaultEndpoints": false,
      "selectionMode": "default_first",
      "selectedFormat": "docker",
    })
  );
}

#[test]
fn set_persists_and_render_picks_it_up() {
  let env = TestEnv::new();
  env
    .cmd()
    .args([
      "settings",
      "set",
      "--name",
      "Acme",
      "--endpoints",
      "https://a.com,https://b.com",
      "--lock",
      "--selection-mode",
      "default_random",
      "--format",
      "dockerfile",
    ])
    .assert()
    .success()
    .stderr(predicate::str::contains("Saved settings"));

  let saved = env.read_settings();
  assert_eq!(saved["displayName"], "Acme");
  assert_eq!(saved["rawEndpoints"], "https://a.com,https://b.com");
  assert_eq!(saved["lockToDefaultEndpoints"], true);
  assert_eq!(saved["selectionMode"], "default_random");
  assert_eq!(saved["selectedFormat"], "dockerfile");

  let stdout = env.stdout(&["render"]);
  assert!(stdout.starts_with("FROM christianjuth/blorp:latest"));
  assert!(stdout.contains(r#"ENV REACT_APP_INSTANCE_SELECTION_MODE="default_random""#));
}

#[test]
fn set_rejects_invalid_endpoints_without_saving() {
  let env = TestEnv::new();
  env
    .cmd()
    .args(["settings", "set", "--endpoints", "https://a.com/path"])
    .assert()
    .failure();

  assert!(!env.settings_path().exists());
}

#[test]
fn set_merges_with_previous_values() {
  let env = TestEnv::new();
  env.cmd().args(["settings", "set", "--name", "Acme"]).assert().success();
  env.cmd().args(["settings", "set", "--lock"]).assert().success();

  let saved = env.read_settings();
  assert_eq!(saved["displayName"], "Acme");
  assert_eq!(saved["lockToDefaultEndpoints"], true);
}

#[test]
fn lock_and_no_lock_conflict() {
  let env = TestEnv::new();
  env
    .cmd()
    .args(["settings", "set", "--lock", "--no-lock"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn reset_requires_force_without_terminal() {
  let env = TestEnv::new();
  env.write_settings(r#"{ "displayName": "Acme" }"#);

  env
    .cmd()
    .args(["settings", "reset"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("--force"));

  assert!(env.settings_path().exists());
}

#[test]
fn reset_with_force_restores_defaults() {
  let env = TestEnv::new();
  env.write_settings(r#"{ "displayName": "Acme" }"#);

  env
    .cmd()
    .args(["settings", "reset", "--force"])
    .assert()
    .success()
    .stderr(predicate::str::contains("reset to defaults"));

  assert!(!env.settings_path().exists());
  let stdout = env.stdout(&["render"]);
  assert!(stdout.contains(r#"REACT_APP_NAME="Blorp""#));
}
