//! Tests for `pouch folders`.

use crate::support::*;

#[test]
fn test_folders_defaults_to_list() {
    let t = Test::with_store();
    t.seed(STANDARD_TREE);

    let output = t.run(&["folders"]);
    assert_success(&output);
    assert_stdout_contains(&output, "home");
    assert_stdout_contains(&output, "work");
}

#[test]
fn test_folders_list_skips_hidden() {
    let t = Test::with_store();
    t.seed(&["work/", ".git/", ".cache/"]);

    let (_, value) = t.json(&["folders", "list"]);
    assert_envelope_ok(&value);
    let data = value["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["name"], "work");
}

#[test]
fn test_folders_empty_store() {
    let t = Test::with_store();

    let output = t.folders();
    assert_success(&output);
    assert_stdout_contains(&output, "no data available");
}

#[test]
fn test_folder_create() {
    let t = Test::with_store();

    let (output, value) = t.json(&["folders", "create", "--name", "bank"]);
    assert!(output.status.success());
    assert_envelope_ok(&value);
    assert_eq!(value["message"], "Folder <bank> has been created");
    assert!(t.store_path().join("bank").is_dir());
}

#[test]
fn test_folder_create_twice_fails() {
    let t = Test::with_store();
    t.seed(&["bank/"]);

    let (_, value) = t.json(&["folders", "create", "--name", "bank"]);
    assert_envelope_err(&value, "folder already exists");
}

#[test]
fn test_folder_create_rejects_nested_name() {
    let t = Test::with_store();

    let (_, value) = t.json(&["folders", "create", "--name", "a/b"]);
    assert_envelope_err(&value, "invalid name");
    assert!(!t.store_path().join("a").exists());
}

#[test]
fn test_folder_delete_by_prefix() {
    let t = Test::with_store();
    t.seed(STANDARD_TREE);

    let output = t.run(&["folders", "delete", "--name", "WO", "--yes"]);
    assert_success(&output);
    assert_stdout_contains(&output, "Folder <work> has been deleted");
    assert!(!t.store_path().join("work").exists());
    assert!(t.store_path().join("home").exists());
}

#[test]
fn test_folder_delete_ambiguous_in_json() {
    let t = Test::with_store();
    t.seed(&["work/", "workspace/"]);

    let (output, value) = t.json(&["folders", "delete", "--name", "wor"]);
    assert!(output.status.success());
    assert_envelope_err(&value, "2 folders match 'wor'");
    assert!(t.store_path().join("work").exists());
    assert!(t.store_path().join("workspace").exists());
}

#[test]
fn test_folder_delete_longer_prefix_is_unique() {
    let t = Test::with_store();
    t.seed(&["work/", "workspace/", "workspace/vpn.gpg"]);

    let (_, value) = t.json(&["folders", "delete", "--name", "works"]);
    assert_envelope_ok(&value);
    assert!(t.store_path().join("work").exists());
    assert!(!t.store_path().join("workspace").exists());
}

#[test]
fn test_folder_delete_requires_name_in_json() {
    let t = Test::with_store();
    t.seed(&["work/", "home/"]);

    let (_, value) = t.json(&["folders", "delete"]);
    assert_envelope_err(&value, "missing value for folder");
}
