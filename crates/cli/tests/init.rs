// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;
use common::*;

#[test]
fn creates_work_dir() {
    let temp = TempDir::new().unwrap();

    numref()
        .arg("init")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized donation numbering"))
        .stdout(predicate::str::contains("Example: DON0501-0001"));

    assert!(temp.path().join(".numref").exists());
    assert!(temp.path().join(".numref/config.toml").exists());
    assert!(temp.path().join(".numref/donations.db").exists());
}

#[test]
fn fails_if_already_initialized() {
    let temp = init_temp();

    numref()
        .arg("init")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

#[test]
fn custom_prefix_is_saved() {
    let temp = TempDir::new().unwrap();

    numref()
        .args(["init", "--prefix", "GIFT"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Prefix: GIFT"));

    let config = std::fs::read_to_string(temp.path().join(".numref/config.toml")).unwrap();
    assert!(config.contains("prefix = \"GIFT\""));
}

#[test]
fn invalid_prefix_fails() {
    let temp = TempDir::new().unwrap();

    numref()
        .args(["init", "--prefix", "D0N"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid prefix"));

    assert!(!temp.path().join(".numref").exists());
}

#[test]
fn init_with_path() {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir(temp.path().join("books")).unwrap();

    numref()
        .args(["init", "--path", "books"])
        .current_dir(temp.path())
        .assert()
        .success();

    assert!(temp.path().join("books/.numref/config.toml").exists());
}

#[test]
fn commands_fail_when_not_initialized() {
    let temp = TempDir::new().unwrap();

    numref()
        .arg("next")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("numref init"));
}
