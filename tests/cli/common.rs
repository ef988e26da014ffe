//! Cross-cutting CLI tests (help, version, error handling)

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help() {
    cargo_bin_cmd!("fastdown")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fastdown converts Markdown"));
}

#[test]
fn test_version() {
    cargo_bin_cmd!("fastdown")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_subcommand() {
    cargo_bin_cmd!("fastdown")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_invalid_subcommand() {
    cargo_bin_cmd!("fastdown")
        .arg("invalid")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_convert_help() {
    cargo_bin_cmd!("fastdown")
        .args(["convert", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Convert a Markdown document"));
}

#[test]
fn test_invalid_dialect() {
    cargo_bin_cmd!("fastdown")
        .args(["convert", "--dialect", "gfm"])
        .write_stdin("text")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_missing_explicit_config_fails() {
    cargo_bin_cmd!("fastdown")
        .args(["convert", "--config", "/nonexistent/fastdown.toml"])
        .write_stdin("text")
        .assert()
        .failure();
}
