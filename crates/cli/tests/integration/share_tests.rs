use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn share_prints_query_for_defaults() {
  let env = TestEnv::new();
  let stdout = env.stdout(&["share"]);

  assert_eq!(
    stdout.trim_end(),
    "name=Blorp&default_instance=https%3A%2F%2Flemmy.world&lock_to_default_instance=0&instance_selection_mode=default_first"
  );
}

#[test]
fn share_with_base_url() {
  let env = TestEnv::new();
  let stdout = env.stdout(&["share", "--base-url", "https://blorpblorp.xyz", "--name", "Acme Co"]);

  assert!(stdout.starts_with("https://blorpblorp.xyz/?name=Acme+Co&"), "{}", stdout);
}

#[test]
fn share_rejects_bad_base_url() {
  let env = TestEnv::new();
  env
    .cmd()
    .args(["share", "--base-url", "not a url"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("Invalid base URL"));
}
