//! Integration tests for the `buoy-i18n` CLI.

#![allow(clippy::unwrap_used)] // Tests can use unwrap for cleaner assertions

mod common;

use common::{isolated_cmd, temp_config_dir, write_user_config};
use predicates::prelude::*;

/// Test that the CLI shows help.
#[test]
fn test_help() {
    let (dir, _) = temp_config_dir();
    isolated_cmd(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("resolve"));
}

/// Test that the CLI shows version.
#[test]
fn test_version() {
    let (dir, _) = temp_config_dir();
    isolated_cmd(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

/// Test that unrecognized commands fail with a usage exit code.
#[test]
fn test_unknown_command() {
    let (dir, _) = temp_config_dir();
    isolated_cmd(&dir)
        .arg("unknown-command")
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_resolve_without_signals_uses_default() {
    let (dir, _) = temp_config_dir();
    isolated_cmd(&dir)
        .args(["-o", "json", "resolve"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""locale": "en""#))
        .stdout(predicate::str::contains(r#""source": "default""#));
}

#[test]
fn test_host_hint_beats_environment() {
    let (dir, _) = temp_config_dir();
    isolated_cmd(&dir)
        .env("LANG", "en_US.UTF-8")
        .args(["--host-locale", "fr-CA", "-o", "json", "resolve"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""locale": "fr""#))
        .stdout(predicate::str::contains(r#""source": "host-hint""#));
}

#[test]
fn test_environment_preference_from_lang() {
    let (dir, _) = temp_config_dir();
    isolated_cmd(&dir)
        .env("LANG", "de_DE.UTF-8")
        .args(["show", "direction"])
        .assert()
        .success()
        .stdout("Richtung\n");
}

#[test]
fn test_unsupported_environment_falls_back() {
    let (dir, _) = temp_config_dir();
    isolated_cmd(&dir)
        .args(["--lang", "xx-XX", "show", "refresh"])
        .assert()
        .success()
        .stdout("Refresh buoys data\n");
}

#[test]
fn test_locale_prefix_bypasses_resolution() {
    let (dir, _) = temp_config_dir();
    isolated_cmd(&dir)
        .env("BUOY_HOST_LOCALE", "fr-FR")
        .args(["@es", "show", "title"])
        .assert()
        .success()
        .stdout("La Boya\n");
}

#[test]
fn test_unsupported_explicit_locale_warns_and_falls_back() {
    let (dir, _) = temp_config_dir();
    isolated_cmd(&dir)
        .args(["--locale", "xx", "show", "poweredBy"])
        .assert()
        .success()
        .stdout("Powered by\n")
        .stderr(predicate::str::contains("Unsupported locale 'xx'"));
}

#[test]
fn test_unknown_key_is_invalid_argument() {
    let (dir, _) = temp_config_dir();
    isolated_cmd(&dir)
        .args(["show", "nope"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Unknown translation key 'nope'"));
}

#[test]
fn test_show_json_is_full_dictionary() {
    let (dir, _) = temp_config_dir();
    let output = isolated_cmd(&dir)
        .args(["@it", "-o", "json", "show"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 19);
    assert_eq!(object["viewAllReadings"], "Visualizza tutte le letture della boa");
}

#[test]
fn test_locales_table_marks_default() {
    let (dir, _) = temp_config_dir();
    isolated_cmd(&dir)
        .arg("locales")
        .assert()
        .success()
        .stdout(predicate::str::contains("Deutsch"))
        .stdout(predicate::str::is_match(r"(?m)^en\s+English\s+English\s+\*").unwrap());
}

#[test]
fn test_keys_lists_canonical_set() {
    let (dir, _) = temp_config_dir();
    isolated_cmd(&dir)
        .arg("keys")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("refresh\nwaveHeight\n"));
}

#[test]
fn test_check_passes() {
    let (dir, _) = temp_config_dir();
    isolated_cmd(&dir)
        .arg("check")
        .assert()
        .success()
        .stderr(predicate::str::contains("5 locales, 19 keys each"));
}

#[test]
fn test_completion_bash() {
    let (dir, _) = temp_config_dir();
    isolated_cmd(&dir)
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("buoy-i18n"));
}

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn test_user_config_host_locale() {
        let (dir, config_path) = temp_config_dir();
        write_user_config(&config_path, "host_locale: it-CH\n");

        isolated_cmd(&dir)
            .args(["show", "seeMore"])
            .assert()
            .success()
            .stdout("Vedi altro su\n");
    }

    #[test]
    fn test_project_config_overrides_user_config() {
        let (dir, config_path) = temp_config_dir();
        write_user_config(&config_path, "locale: de\n");
        std::fs::write(dir.path().join(".buoy-i18n.yaml"), "locale: fr\n").unwrap();

        isolated_cmd(&dir)
            .args(["show", "feet"])
            .assert()
            .success()
            .stdout("Pieds\n");
    }

    #[test]
    fn test_project_output_format_overrides_user_config() {
        let (dir, config_path) = temp_config_dir();
        write_user_config(&config_path, "output:\n  format: json\n  color: never\n");
        std::fs::write(
            dir.path().join(".buoy-i18n.yaml"),
            "output:\n  format: table\n",
        )
        .unwrap();

        isolated_cmd(&dir)
            .args(["@es", "show", "hours"])
            .assert()
            .success()
            .stdout("h\n");
    }

    #[test]
    fn test_cli_flag_overrides_config() {
        let (dir, config_path) = temp_config_dir();
        write_user_config(&config_path, "locale: de\noutput:\n  format: json\n");

        isolated_cmd(&dir)
            .args(["--locale", "es", "-o", "table", "show", "hours"])
            .assert()
            .success()
            .stdout("h\n");
    }

    #[test]
    fn test_invalid_config_is_reported() {
        let (dir, config_path) = temp_config_dir();
        write_user_config(&config_path, "locale: [unterminated\n");

        isolated_cmd(&dir)
            .arg("resolve")
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("Failed to parse config file"));
    }
}
