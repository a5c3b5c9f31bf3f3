// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod add;
pub mod check;
pub mod init;
pub mod list;
pub mod numbering;

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use numref_core::Database;

use crate::config::{find_work_dir_from, get_db_path, Config};
use crate::error::{Error, Result};

/// Helper to open the database for the project containing `base`.
pub fn open_db(base: &Path) -> Result<(Database, Config, PathBuf)> {
    let work_dir = find_work_dir_from(base)?;
    let config = Config::load(&work_dir)?;
    let db_path = get_db_path(&work_dir, &config);
    tracing::debug!(path = %db_path.display(), "opening database");
    let db = Database::open(&db_path)?;
    Ok((db, config, work_dir))
}

/// Parse a `YYYY-MM-DD` business date, defaulting to today.
pub fn parse_date(value: Option<&str>) -> Result<NaiveDate> {
    match value {
        None => Ok(Local::now().date_naive()),
        Some(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| Error::InvalidDate {
            value: s.to_string(),
        }),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
