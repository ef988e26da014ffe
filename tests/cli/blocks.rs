//! Tests for the blocks subcommand

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_blocks_lists_kinds() {
    cargo_bin_cmd!("fastdown")
        .arg("blocks")
        .write_stdin("# Title\n\ntext\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("kind: Header"))
        .stdout(predicate::str::contains("kind: Paragraph"));
}

#[test]
fn test_blocks_shows_hidden_definitions() {
    cargo_bin_cmd!("fastdown")
        .arg("blocks")
        .write_stdin("[a]: http://example.com\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("kind: Reference"))
        .stdout(predicate::str::contains("hidden: true"));
}

#[test]
fn test_blocks_missing_file() {
    cargo_bin_cmd!("fastdown")
        .args(["blocks", "/nonexistent/missing.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("source file not found"));
}
