//! Tests for contexts and configuration bootstrap.

use crate::support::*;
use std::fs;

#[test]
fn test_contexts_bootstraps_config() {
    let t = Test::new();

    let output = t.run(&["contexts"]);
    assert_success(&output);
    assert_stdout_contains(&output, "* DEFAULT");

    let contents = fs::read_to_string(t.config_path()).unwrap();
    assert!(contents.starts_with("[DEFAULT]\n"));
    assert!(contents.contains("usegit = False"));
}

#[test]
fn test_contexts_marks_selected_section() {
    let t = Test::with_store();
    t.add_context("work", &t.dir.path().join("work-store"));

    let output = t.run(&["contexts", "-c", "work"]);
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("  DEFAULT"));
    assert!(out.contains("* work"));
}

#[test]
fn test_contexts_json_lists_names() {
    let t = Test::with_store();
    t.add_context("work", &t.dir.path().join("work-store"));
    t.add_context("home", &t.dir.path().join("home-store"));

    let (_, value) = t.json(&["contexts"]);
    assert_envelope_ok(&value);
    assert_eq!(value["data"], serde_json::json!(["DEFAULT", "work", "home"]));
}

#[test]
fn test_contexts_use_separate_stores() {
    let t = Test::with_store();
    t.seed(&["github.gpg"]);
    let other = t.dir.path().join("work-store");
    t.add_context("work", &other);
    fs::write(other.join("vpn.gpg"), PLACEHOLDER_CIPHERTEXT).unwrap();

    let (_, value) = t.json(&["list", "-c", "work"]);
    let names: Vec<&str> = value["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["f_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["vpn"]);
}
