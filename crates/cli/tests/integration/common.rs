//! Shared test helpers for CLI integration tests.

use std::path::PathBuf;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

/// Isolated test environment.
///
/// Each test gets its own config directory, so saved settings never leak
/// between tests.
pub struct TestEnv {
  pub temp: TempDir,
}

impl TestEnv {
  pub fn new() -> Self {
    Self {
      temp: TempDir::new().unwrap(),
    }
  }

  /// Config directory handed to the binary.
  pub fn config_dir(&self) -> PathBuf {
    self.temp.path().join("config")
  }

  /// Path of the saved settings file.
  pub fn settings_path(&self) -> PathBuf {
    self.config_dir().join("deploy-settings.json")
  }

  /// Write a raw settings file.
  pub fn write_settings(&self, content: &str) {
    std::fs::create_dir_all(self.config_dir()).unwrap();
    std::fs::write(self.settings_path(), content).unwrap();
  }

  /// Read the saved settings file as JSON.
  pub fn read_settings(&self) -> serde_json::Value {
    let content = std::fs::read_to_string(self.settings_path()).unwrap();
    serde_json::from_str(&content).unwrap()
  }

  /// A Command for the binary, pointed at this environment.
  pub fn cmd(&self) -> Command {
    let mut cmd = cargo_bin_cmd!("blorp-deploy");
    cmd.env("BLORP_DEPLOY_CONFIG_DIR", self.config_dir());
    cmd.env_remove("RUST_LOG");
    cmd
  }

  /// Run the binary with `args`, assert success and return stdout.
  pub fn stdout(&self, args: &[&str]) -> String {
    let output = self.cmd().args(args).assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
  }
}
