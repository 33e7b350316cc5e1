//! Tests for error reporting and global flags.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    let t = Test::new();

    t.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("init-git"))
        .stdout(predicate::str::contains("folders"));
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    t.cmd().arg("unknown-command").assert().failure();
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    t.cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pouch"));
}

#[test]
fn test_completions_bash_outputs_script() {
    let t = Test::new();

    t.cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pouch"));
}

#[test]
fn test_uninitialized_context_interactive() {
    let t = Test::new();

    let output = t.list();
    assert_failure(&output);
    assert_stderr_contains(&output, "context 'DEFAULT' is not initialized");
    assert_stderr_contains(&output, "pouch init");
}

#[test]
fn test_uninitialized_context_json() {
    let t = Test::new();

    let (output, value) = t.json(&["list"]);
    assert_eq!(output.status.code(), Some(0));
    assert_envelope_err(&value, "not initialized");
}

#[test]
fn test_missing_section() {
    let t = Test::with_store();

    let (_, value) = t.json(&["list", "-c", "nope"]);
    assert_envelope_err(&value, "cannot load context 'nope'");
}

#[test]
fn test_store_directory_removed() {
    let t = Test::with_store();
    std::fs::remove_dir_all(t.store_path()).unwrap();

    let output = t.run(&["folders"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "not initialized");
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let t = Test::with_store();
    t.seed(&["github.gpg"]);

    let (output, value) = t.json(&["--verbose", "list"]);
    assert_envelope_ok(&value);
    assert_stderr_contains(&output, "scanned store");
}

#[test]
fn test_config_flag_overrides_env() {
    let t = Test::with_store();
    let other = t.dir.path().join("other.ini");

    let output = t
        .cmd()
        .args(["contexts", "--json", "--config"])
        .arg(&other)
        .output()
        .unwrap();
    assert_success(&output);
    assert!(other.exists());
}
