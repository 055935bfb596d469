//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn rs_flatten() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("rs-flatten"));
    cmd.env_remove("RUST_LOG");
    for (key, _) in std::env::vars_os() {
        if key.to_string_lossy().starts_with("RS_FLATTEN_") {
            cmd.env_remove(key);
        }
    }
    cmd
}

#[test]
fn test_cli_version() {
    let mut cmd = rs_flatten();
    cmd.arg("--version");
    cmd.assert().success().stdout(predicate::str::contains("rs-flatten"));
}

#[test]
fn test_cli_help() {
    let mut cmd = rs_flatten();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Flatten a Rust project"))
        .stdout(predicate::str::contains("--output"))
        .stdout(predicate::str::contains("[DIRECTORY]"));
}

#[test]
fn test_root_that_is_a_file_fails() {
    let temp = TempDir::new().expect("temp dir");
    let file = temp.path().join("main.rs");
    fs::write(&file, "fn main() {}\n").expect("write main.rs");

    let mut cmd = rs_flatten();
    cmd.arg(&file);
    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("is not a valid directory"));
}

#[test]
fn test_missing_root_fails_without_creating_output() {
    let temp = TempDir::new().expect("temp dir");
    let output = temp.path().join("out/flat.md");

    let mut cmd = rs_flatten();
    cmd.arg(temp.path().join("does-not-exist")).arg("--output").arg(&output);
    cmd.assert().failure().code(1).stderr(predicate::str::contains("is not a valid directory"));
    assert!(!output.exists());
}

#[test]
fn test_empty_directory_succeeds_with_diagnostic() {
    let temp = TempDir::new().expect("temp dir");
    fs::write(temp.path().join("notes.txt"), "not rust\n").expect("write notes");

    let mut cmd = rs_flatten();
    cmd.arg(temp.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("no Cargo.toml or .rs files found"));
}

#[test]
fn test_empty_directory_writes_no_output_file() {
    let temp = TempDir::new().expect("temp dir");
    let out = TempDir::new().expect("temp out");
    let output = out.path().join("flat.md");

    let mut cmd = rs_flatten();
    cmd.arg(temp.path()).args(["-o", output.to_str().expect("utf8 path")]);
    cmd.assert().success().stderr(predicate::str::contains("no Cargo.toml or .rs files found"));
    assert!(!output.exists());
}

#[test]
fn test_unwritable_output_fails() {
    let temp = TempDir::new().expect("temp dir");
    fs::write(temp.path().join("lib.rs"), "pub fn lib() {}\n").expect("write lib.rs");
    // The parent of the output path is a regular file, so it cannot be created.
    let blocker = temp.path().join("blocker");
    fs::write(&blocker, "").expect("write blocker");

    let mut cmd = rs_flatten();
    cmd.arg(temp.path()).arg("--output").arg(blocker.join("flat.md"));
    cmd.assert().failure().code(1).stderr(predicate::str::contains("cannot write to"));
}

#[test]
fn test_invalid_explicit_config_fails() {
    let temp = TempDir::new().expect("temp dir");
    fs::write(temp.path().join("lib.rs"), "pub fn lib() {}\n").expect("write lib.rs");
    let config = temp.path().join("custom.toml");
    fs::write(&config, "follow_symlinks = [1, 2]\n").expect("write config");

    let mut cmd = rs_flatten();
    cmd.arg(temp.path()).arg("--config").arg(&config);
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("failed to load configuration"));
}

#[test]
fn test_invalid_root_config_is_ignored_with_warning() {
    let temp = TempDir::new().expect("temp dir");
    fs::write(temp.path().join("lib.rs"), "pub fn lib() {}\n").expect("write lib.rs");
    fs::write(temp.path().join(".rs-flatten.yaml"), "follow_symlinks: [oops\n")
        .expect("write config");

    let mut cmd = rs_flatten();
    cmd.arg(temp.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("lib.rs\n```rust\npub fn lib() {}\n```\n"))
        .stderr(predicate::str::contains("ignoring config file"));
}

#[test]
fn test_completions_are_generated() {
    let mut cmd = rs_flatten();
    cmd.args(["--completions", "bash"]);
    cmd.assert().success().stdout(predicate::str::contains("rs-flatten"));
}
