//! Tests for password file commands that are resolved before decryption.

use crate::support::*;

#[test]
fn test_list_shows_every_file() {
    let t = Test::with_store();
    t.seed(STANDARD_TREE);

    let output = t.list();
    assert_success(&output);
    let out = stdout(&output);
    for name in ["github", "gitlab", "router", "vpn", "jira"] {
        assert!(out.contains(name), "missing {} in {}", name, out);
    }
    assert_stdout_contains(&output, "git is not configured");
}

#[test]
fn test_list_filter_is_case_insensitive() {
    let t = Test::with_store();
    t.seed(STANDARD_TREE);

    let output = t.run(&["list", "GIT"]);
    assert_success(&output);
    assert_stdout_contains(&output, "github");
    assert_stdout_contains(&output, "gitlab");
    assert_stdout_excludes(&output, "vpn");
}

#[test]
fn test_list_json_order_and_shape() {
    let t = Test::with_store();
    t.seed(STANDARD_TREE);

    let (_, value) = t.json(&["list"]);
    assert_envelope_ok(&value);
    let data = value["data"].as_array().unwrap();
    let pairs: Vec<(&str, &str)> = data
        .iter()
        .map(|e| (e["root_name"].as_str().unwrap(), e["f_name"].as_str().unwrap()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("", "github"),
            ("", "gitlab"),
            ("home", "router"),
            ("work", "jira"),
            ("work", "vpn"),
        ]
    );
    assert_eq!(data[0]["f"], "github.gpg");
    assert!(data[3]["path"].as_str().unwrap().ends_with("jira.gpg"));
}

#[test]
fn test_list_json_has_no_warning() {
    let t = Test::with_store();

    let (output, value) = t.json(&["list"]);
    assert_envelope_ok(&value);
    assert_stdout_excludes(&output, "git is not configured");
}

#[test]
fn test_list_ignores_other_files() {
    let t = Test::with_store();
    t.seed(&["notes.txt", ".hidden/secret.gpg", "github.gpg"]);

    let (_, value) = t.json(&["list"]);
    assert_eq!(value["data"].as_array().unwrap().len(), 1);
}

#[test]
fn test_ls_alias() {
    let t = Test::with_store();
    t.seed(&["github.gpg"]);

    let output = t.run(&["ls"]);
    assert_success(&output);
    assert_stdout_contains(&output, "github");
}

#[test]
fn test_show_ambiguous_in_json() {
    let t = Test::with_store();
    t.seed(STANDARD_TREE);

    let (output, value) = t.json(&["show", "git"]);
    assert!(output.status.success());
    assert_envelope_err(&value, "2 passwords match 'git'");
}

#[test]
fn test_pass_no_match() {
    let t = Test::with_store();
    t.seed(STANDARD_TREE);

    let (_, value) = t.json(&["pass", "bank"]);
    assert_envelope_err(&value, "no password matches 'bank'");
}

#[test]
fn test_delete_ambiguous_keeps_files() {
    let t = Test::with_store();
    t.seed(STANDARD_TREE);

    let (_, value) = t.json(&["delete", "git"]);
    assert_envelope_err(&value, "match 'git'");
    assert!(t.store_path().join("github.gpg").exists());
    assert!(t.store_path().join("gitlab.gpg").exists());
}

#[test]
fn test_delete_unique_match() {
    let t = Test::with_store();
    t.seed(STANDARD_TREE);

    let (_, value) = t.json(&["delete", "router"]);
    assert_envelope_ok(&value);
    assert_eq!(value["message"], "Password file <router> has been deleted");
    assert!(!t.store_path().join("home/router.gpg").exists());
    assert!(t.store_path().join("home").is_dir());
}

#[test]
fn test_generate_requires_fields_in_json() {
    let t = Test::with_store();
    t.seed(&["work/"]);

    let (_, value) = t.json(&["generate", "--name", "bank"]);
    assert_envelope_err(&value, "missing value for User name");
    assert!(!t.store_path().join("work/bank.gpg").exists());
}

#[test]
fn test_generate_needs_a_folder() {
    let t = Test::with_store();

    let (_, value) = t.json(&["generate", "--name", "bank", "--user", "a", "--url", "b"]);
    assert_envelope_err(&value, "no folder matches");
}

#[test]
fn test_edit_refuses_json() {
    let t = Test::with_store();
    t.seed(&["github.gpg"]);

    let (_, value) = t.json(&["edit", "github"]);
    assert_envelope_err(&value, "interactive terminal");
}
