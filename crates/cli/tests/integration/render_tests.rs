use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn render_docker_matches_default_scenario() {
  let env = TestEnv::new();
  let stdout = env.stdout(&["render", "--format", "docker"]);

  assert!(stdout.contains(r#"-e REACT_APP_NAME="Blorp""#));
  assert!(stdout.contains(r#"-e REACT_APP_DEFAULT_INSTANCE="https://lemmy.world""#));
  assert!(stdout.contains(r#"-e REACT_APP_LOCK_TO_DEFAULT_INSTANCE="0""#));
  assert!(!stdout.contains("REACT_APP_INSTANCE_SELECTION_MODE"));
}

#[test]
fn render_kubernetes_with_overrides() {
  let env = TestEnv::new();
  let stdout = env.stdout(&[
    "render",
    "--format",
    "kubernetes",
    "--name",
    "Acme",
    "--endpoints",
    "https://a.com, https://b.com",
    "--lock",
    "--selection-mode",
    "default_random",
  ]);

  assert_eq!(stdout.matches("\n---\n").count(), 1);
  assert!(stdout.contains("type: NodePort"));
  assert!(stdout.contains("nodePort: 30080"));
  assert!(stdout.contains(r#"value: "default_random""#));
  assert!(stdout.contains(r#"value: "https://a.com,https://b.com""#));
}

#[test]
fn render_uses_saved_format() {
  let env = TestEnv::new();
  env.write_settings(r#"{ "selectedFormat": "compose" }"#);

  let stdout = env.stdout(&["render"]);
  assert!(stdout.starts_with("services:\n"));
}

#[test]
fn render_is_stable_across_runs() {
  let env = TestEnv::new();
  let args = ["render", "--format", "dockerfile", "--endpoints", "https://a.com,https://b.com"];
  assert_eq!(env.stdout(&args), env.stdout(&args));
}

#[test]
fn render_json_includes_language() {
  let env = TestEnv::new();
  let stdout = env.stdout(&["render", "--format", "compose", "-o", "json"]);

  let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
  assert_eq!(json["format"], "compose");
  assert_eq!(json["language"], "yaml");
  assert!(json["text"].as_str().unwrap().starts_with("services:"));
}

#[test]
fn render_rejects_endpoint_with_path() {
  let env = TestEnv::new();
  env
    .cmd()
    .args(["render", "--endpoints", "https://a.com,https://b.com/x"])
    .assert()
    .failure()
    .stdout(predicate::str::is_empty())
    .stderr(predicate::str::contains("must not include a path"));
}

#[test]
fn render_rejects_empty_endpoint_list() {
  let env = TestEnv::new();
  env
    .cmd()
    .args(["render", "--endpoints", " , "])
    .assert()
    .failure()
    .stderr(predicate::str::contains("at least one endpoint is required"));
}

#[test]
fn render_warns_on_blank_name() {
  let env = TestEnv::new();
  env
    .cmd()
    .args(["render", "--name", "  "])
    .assert()
    .success()
    .stderr(predicate::str::contains("display name is empty"))
    .stdout(predicate::str::contains(r#"REACT_APP_NAME="""#));
}

#[test]
fn render_fails_on_corrupt_settings_file() {
  let env = TestEnv::new();
  env.write_settings("{ not json");

  env
    .cmd()
    .arg("render")
    .assert()
    .failure()
    .stderr(predicate::str::contains("Failed to load saved settings"));
}
