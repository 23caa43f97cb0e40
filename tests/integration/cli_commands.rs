//! End-to-end runs of the ledgercheck binary.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

use super::test_utils::{write_config, FULL_DOCUMENT};

fn run_ledgercheck(args: &[&str], configuration_file: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ledgercheck"))
        .arg("--quiet")
        .arg("--configuration-file")
        .arg(configuration_file)
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn test_validate_reports_loaded_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(temp_dir.path(), "config.json", FULL_DOCUMENT);

    let output = run_ledgercheck(&["validate"], &path);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("loaded configuration file"));
    assert!(stdout.contains("Bitcoin:Testnet3"));
    assert!(stdout.contains("3 workflows"));
}

#[test]
fn test_invalid_document_exits_with_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(
        temp_dir.path(),
        "config.json",
        r#"{"construction": {"workflows": [{"name": "create_account", "concurrency": 3}]}}"#,
    );

    let output = run_ledgercheck(&["validate"], &path);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: invalid configuration"));
    assert!(stderr.contains("create_account"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_show_json_is_machine_readable() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(temp_dir.path(), "config.json", FULL_DOCUMENT);

    let output = run_ledgercheck(&["show", "--format", "json"], &path);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["network"]["network"], "Testnet3");
    assert_eq!(value["data"]["inactive_discrepency_search_disabled"], true);
    assert_eq!(value["construction"]["workflows"][2]["name"], "transfer");
    assert!(value["construction"]["prefunded_accounts"][0]["privkey"].is_string());
}

#[test]
fn test_show_text_lists_sections() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(temp_dir.path(), "config.json", FULL_DOCUMENT);

    let output = run_ledgercheck(&["show"], &path);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Data check"));
    assert!(stdout.contains("Construction check"));
    assert!(stdout.contains("request_funds"));
}

#[test]
fn test_missing_file_exits_with_error() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_ledgercheck(&["validate"], &temp_dir.path().join("missing.json"));

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unable to load configuration"));
}
