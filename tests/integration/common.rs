//! Common test utilities.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Variables that would leak the developer's own locale into a test.
const AMBIENT_VARS: [&str; 6] =
    ["BUOY_LOCALE", "BUOY_HOST_LOCALE", "LC_ALL", "LC_MESSAGES", "LANGUAGE", "LANG"];

/// Create a temporary configuration directory for tests.
pub fn temp_config_dir() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("buoy-i18n").join("config.yaml");
    (temp_dir, config_path)
}

/// Write a user config file under `dir`.
pub fn write_user_config(config_path: &Path, contents: &str) {
    std::fs::create_dir_all(config_path.parent().expect("config path has a parent"))
        .expect("Failed to create config dir");
    std::fs::write(config_path, contents).expect("Failed to write config");
}

/// A `buoy-i18n` command isolated from the caller's locale and config.
pub fn isolated_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("buoy-i18n"));
    for var in AMBIENT_VARS {
        cmd.env_remove(var);
    }
    cmd.env("XDG_CONFIG_HOME", dir.path()).current_dir(dir.path());
    cmd
}
