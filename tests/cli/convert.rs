//! Tests for the convert subcommand

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_convert_stdin_to_stdout() {
    cargo_bin_cmd!("fastdown")
        .arg("convert")
        .write_stdin("# Hello\n\nSome *text*.\n")
        .assert()
        .success()
        .stdout("<h1>Hello</h1>\n<p>Some <i>text</i>.</p>\n");
}

#[test]
fn test_convert_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("doc.md");
    fs::write(&input, "- a\n- b\n").unwrap();

    cargo_bin_cmd!("fastdown")
        .arg("convert")
        .arg(&input)
        .assert()
        .success()
        .stdout("<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n");
}

#[test]
fn test_convert_missing_file() {
    cargo_bin_cmd!("fastdown")
        .args(["convert", "/nonexistent/missing.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("source file not found"));
}

#[test]
fn test_out_dir_uses_file_stem() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("notes.md");
    fs::write(&input, "text").unwrap();
    let out_dir = dir.path().join("site").join("nested");

    cargo_bin_cmd!("fastdown")
        .arg("convert")
        .arg(&input)
        .arg("--out-dir")
        .arg(&out_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("notes.html"));

    let written = fs::read_to_string(out_dir.join("notes.html")).unwrap();
    assert_eq!(written, "<p>text</p>");
}

#[test]
fn test_out_dir_with_name() {
    let dir = TempDir::new().unwrap();

    cargo_bin_cmd!("fastdown")
        .arg("convert")
        .arg("--out-dir")
        .arg(dir.path())
        .args(["--name", "index"])
        .write_stdin("# Home")
        .assert()
        .success();

    let written = fs::read_to_string(dir.path().join("index.html")).unwrap();
    assert_eq!(written, "<h1>Home</h1>");
}

#[test]
fn test_name_with_leading_whitespace_is_rejected() {
    let dir = TempDir::new().unwrap();

    cargo_bin_cmd!("fastdown")
        .arg("convert")
        .arg("--out-dir")
        .arg(dir.path())
        .args(["--name", " page"])
        .write_stdin("text")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid output name"));
}

#[test]
fn test_safe_mode_by_default() {
    cargo_bin_cmd!("fastdown")
        .arg("convert")
        .write_stdin("<b>bold</b>")
        .assert()
        .success()
        .stdout("<p>&lt;b&gt;bold&lt;/b&gt;</p>\n");
}

#[test]
fn test_unsafe_allows_markup() {
    cargo_bin_cmd!("fastdown")
        .args(["convert", "--unsafe"])
        .write_stdin("<b>bold</b>")
        .assert()
        .success()
        .stdout("<p><b>bold</b></p>\n");
}

#[test]
fn test_escape_markup_overrides_unsafe() {
    cargo_bin_cmd!("fastdown")
        .args(["convert", "--unsafe", "--escape-markup"])
        .write_stdin("<b>bold</b>")
        .assert()
        .success()
        .stdout("<p>&lt;b&gt;bold&lt;/b&gt;</p>\n");
}

#[test]
fn test_no_breaks_and_no_autolinks() {
    cargo_bin_cmd!("fastdown")
        .args(["convert", "--no-breaks", "--no-autolinks"])
        .write_stdin("a\nhttp://x.org")
        .assert()
        .success()
        .stdout("<p>a\nhttp://x.org</p>\n");
}

#[test]
fn test_extended_dialect_flag() {
    cargo_bin_cmd!("fastdown")
        .args(["convert", "--dialect", "extended"])
        .write_stdin("## Title {#top}")
        .assert()
        .success()
        .stdout("<h2 id=\"top\">Title</h2>\n");
}

#[test]
fn test_config_file_next_to_input() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".fastdown.toml"), "dialect = \"extended\"\n").unwrap();
    let input = dir.path().join("doc.md");
    fs::write(&input, "Term\n: Meaning\n").unwrap();

    cargo_bin_cmd!("fastdown")
        .arg("convert")
        .arg(&input)
        .assert()
        .success()
        .stdout("<dl>\n<dt>Term</dt>\n<dd>Meaning</dd>\n</dl>\n");
}

#[test]
fn test_explicit_config() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("custom.toml");
    fs::write(&config, "breaks_enabled = false\n").unwrap();

    cargo_bin_cmd!("fastdown")
        .arg("convert")
        .arg("--config")
        .arg(&config)
        .write_stdin("a\nb")
        .assert()
        .success()
        .stdout("<p>a\nb</p>\n");
}

#[test]
fn test_invalid_config_is_an_error() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("bad.toml");
    fs::write(&config, "dialect = \"gfm\"\n").unwrap();

    cargo_bin_cmd!("fastdown")
        .arg("convert")
        .arg("--config")
        .arg(&config)
        .write_stdin("text")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));
}
