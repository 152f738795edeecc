//! Integration tests for the config command and config file handling

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::phonebook_cmd;

#[test]
fn test_config_list_defaults() {
    let temp = TempDir::new().unwrap();

    phonebook_cmd()
        .current_dir(temp.path())
        .args(["config", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("file = phone_book.txt"))
        .stdout(predicate::str::contains("delimiter = ;"));
}

#[test]
fn test_config_set_and_get() {
    let temp = TempDir::new().unwrap();

    phonebook_cmd()
        .current_dir(temp.path())
        .args(["config", "delimiter", "|"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set delimiter = |"));

    let content = fs::read_to_string(temp.path().join("phonebook.toml")).unwrap();
    assert!(content.contains("delimiter = \"|\""));

    phonebook_cmd()
        .current_dir(temp.path())
        .args(["config", "delimiter"])
        .assert()
        .success()
        .stdout(predicate::str::diff("|\n"));
}

#[test]
fn test_config_invalid_key() {
    let temp = TempDir::new().unwrap();

    phonebook_cmd()
        .current_dir(temp.path())
        .args(["config", "color", "red"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_config_rejects_digit_delimiter() {
    let temp = TempDir::new().unwrap();

    phonebook_cmd()
        .current_dir(temp.path())
        .args(["config", "delimiter", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("digit"));
}

#[test]
fn test_config_file_drives_commands() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("phonebook.toml"),
        "file = \"contacts.txt\"\ndelimiter = \",\"\n",
    )
    .unwrap();
    fs::write(temp.path().join("contacts.txt"), "Ann,555,Boss").unwrap();

    phonebook_cmd()
        .current_dir(temp.path())
        .args(["add", "-n", "Bo", "-p", "777", "-c", "x;y"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(temp.path().join("contacts.txt")).unwrap(),
        "Ann,555,Boss\nBo,777,x;y"
    );
}

#[test]
fn test_explicit_config_path() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("custom.toml");
    let book = temp.path().join("custom.txt");
    fs::write(&config, format!("file = {:?}\n", book.display().to_string())).unwrap();
    fs::write(&book, "Cy;123;c").unwrap();

    phonebook_cmd()
        .current_dir(temp.path())
        .arg("--config")
        .arg(&config)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Cy"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let temp = TempDir::new().unwrap();

    phonebook_cmd()
        .current_dir(temp.path())
        .args(["--config", "absent.toml", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn test_flag_overrides_config_file() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("phonebook.toml"), "delimiter = \",\"\n").unwrap();
    fs::write(temp.path().join("phone_book.txt"), "Ann;555;Boss").unwrap();

    phonebook_cmd()
        .current_dir(temp.path())
        .args(["-d", ";", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Ann"));
}

#[test]
fn test_config_set_creates_explicit_config_file() {
    let temp = TempDir::new().unwrap();

    phonebook_cmd()
        .current_dir(temp.path())
        .args(["--config", "custom.toml", "config", "delimiter", "|"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set delimiter = |"));

    let content = fs::read_to_string(temp.path().join("custom.toml")).unwrap();
    assert!(content.contains("delimiter = \"|\""));
    assert!(!temp.path().join("phonebook.toml").exists());
}

#[test]
fn test_config_set_repairs_broken_config_file() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("phonebook.toml"), "delimiter = \"7\"\n").unwrap();

    phonebook_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .failure();

    phonebook_cmd()
        .current_dir(temp.path())
        .args(["config", "delimiter", ";"])
        .assert()
        .success();

    fs::write(temp.path().join("phone_book.txt"), "Ann;555;Boss").unwrap();
    phonebook_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Ann"));
}
