// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub fn numref() -> Command {
    let mut cmd = cargo_bin_cmd!("numref");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Helper to create an initialized temp directory with the donation prefix
pub fn init_temp() -> TempDir {
    let temp = TempDir::new().unwrap();
    numref()
        .arg("init")
        .current_dir(temp.path())
        .assert()
        .success();
    temp
}

/// Helper to record a donation and return its reference
pub fn add_donation(temp: &TempDir, date: &str) -> String {
    let output = numref()
        .args(["add", "--amount-cents", "1000", "--date", date])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success(), "add failed: {:?}", output);

    String::from_utf8_lossy(&output.stdout)
        .split_whitespace()
        .find(|s| s.starts_with("DON"))
        .unwrap()
        .to_string()
}

/// Store a reference directly, bypassing allocation (legacy data).
pub fn insert_raw(temp: &TempDir, reference: &str) {
    let db_path = temp.path().join(".numref").join("donations.db");
    let db = numref_core::Database::open(&db_path).unwrap();
    let new = numref_core::NewDonation {
        entity: 1,
        date: chrono::NaiveDate::from_ymd_opt(2005, 1, 15).unwrap(),
        amount_cents: 100,
        donor: None,
    };
    db.insert_donation(reference, &new).unwrap();
}
