//! CLI integration tests for storefront-subscribe

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to escape path for TOML on Windows
fn escape_path(path: &std::path::Path) -> String {
    path.to_string_lossy().replace('\\', "\\\\")
}

/// Test environment with a fast config file
fn setup_test_env() -> (TempDir, String) {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    fs::write(
        &config_path,
        r#"
[form]
submit_delay_ms = 5
success_reset_ms = 20
"#,
    )
    .unwrap();

    let path = escape_path(&config_path);
    (temp_dir, path)
}

fn subscribe(config_path: &str) -> Command {
    let mut cmd = Command::cargo_bin("storefront-subscribe").unwrap();
    cmd.env("STOREFRONT_CONFIG", config_path)
        .env_remove("STOREFRONT_LOG_LEVEL")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_subscribes_valid_address() {
    let (_temp_dir, config_path) = setup_test_env();

    subscribe(&config_path)
        .arg("user@example.com")
        .assert()
        .success()
        .stdout("subscribed: user@example.com\n");
}

#[test]
fn test_surrounding_whitespace_is_trimmed() {
    let (_temp_dir, config_path) = setup_test_env();

    subscribe(&config_path)
        .arg("  user@example.com  ")
        .assert()
        .success()
        .stdout(predicate::str::contains("subscribed: user@example.com\n"));
}

#[test]
fn test_reads_address_from_stdin() {
    let (_temp_dir, config_path) = setup_test_env();

    subscribe(&config_path)
        .write_stdin("user@example.com\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("subscribed: user@example.com"));
}

#[test]
fn test_empty_address_exits_3() {
    let (_temp_dir, config_path) = setup_test_env();

    subscribe(&config_path)
        .write_stdin("")
        .assert()
        .code(3)
        .stdout("")
        .stderr(predicate::str::contains("Please enter your email."));
}

#[test]
fn test_malformed_address_exits_3() {
    let (_temp_dir, config_path) = setup_test_env();

    subscribe(&config_path)
        .arg("not-an-email")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Please enter a valid email address."));
}

#[test]
fn test_invalid_config_exits_2() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[form\nsubmit_delay_ms = ").unwrap();

    subscribe(&escape_path(&config_path))
        .arg("user@example.com")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_missing_config_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("absent.toml");

    subscribe(&escape_path(&config_path))
        .args(["user@example.com", "--submit-delay-ms", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("subscribed: user@example.com"));
}

#[test]
fn test_invalid_format_rejected_by_clap() {
    let (_temp_dir, config_path) = setup_test_env();

    subscribe(&config_path)
        .args(["user@example.com", "--format", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'yaml'"));
}

#[test]
fn test_help_lists_exit_codes() {
    Command::cargo_bin("storefront-subscribe")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("EXIT CODES"));
}

#[test]
fn test_wait_reset_exits_once_form_is_idle_again() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[form]\nsubmit_delay_ms = 0\nsuccess_reset_ms = 1\n").unwrap();
    let config_path = escape_path(&config_path);

    for _ in 0..20 {
        subscribe(&config_path)
            .arg("user@example.com")
            .arg("--wait-reset")
            .timeout(std::time::Duration::from_secs(5))
            .assert()
            .success()
            .stdout(predicate::str::contains("subscribed: user@example.com"));
    }
}
