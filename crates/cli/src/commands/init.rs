// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use numref_core::Database;

use crate::config::{get_db_path, init_work_dir, Config};
use crate::error::Result;

pub fn run(base: &Path, prefix: &str, entity: i64, path: Option<&str>) -> Result<()> {
    let target_path = match path {
        Some(p) => base.join(p),
        None => base.to_path_buf(),
    };

    let work_dir = init_work_dir(&target_path, prefix, entity)?;
    let config = Config::load(&work_dir)?;

    // Initialize the database
    Database::open(&get_db_path(&work_dir, &config))?;

    println!("Initialized donation numbering at {}", work_dir.display());
    println!("Prefix: {}", config.numbering.prefix);
    println!("Example: {}", config.numbering.example());
    Ok(())
}
