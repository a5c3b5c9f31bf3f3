// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reference queries: next, last, example and format description.

use std::path::Path;

use numref_core::{Allocator, NumberingScheme};

use super::{open_db, parse_date};
use crate::config::{find_work_dir_from, Config};
use crate::error::{Error, Result};

/// Print the next free reference for a business date.
pub fn next(base: &Path, date: Option<&str>, entity: Option<i64>) -> Result<()> {
    let date = parse_date(date)?;
    let (db, config, _) = open_db(base)?;
    let allocator = Allocator::new(config.numbering.clone(), &db);
    let reference = allocator.next(&config.scope_for(entity), date)?;
    println!("{}", reference);
    Ok(())
}

/// Print the last allocated reference; prints nothing when there is none.
pub fn last(base: &Path, entity: Option<i64>) -> Result<()> {
    let (db, config, _) = open_db(base)?;
    let allocator = Allocator::new(config.numbering.clone(), &db);
    if let Some(reference) = allocator.last(&config.scope_for(entity))? {
        println!("{}", reference);
    }
    Ok(())
}

pub fn example(base: &Path) -> Result<()> {
    println!("{}", scheme_for(base)?.example());
    Ok(())
}

pub fn info(base: &Path) -> Result<()> {
    let scheme = scheme_for(base)?;
    println!("{}", scheme.describe());
    println!("Example: {}", scheme.example());
    Ok(())
}

/// Scheme of the enclosing project, or the default donation scheme outside one.
fn scheme_for(base: &Path) -> Result<NumberingScheme> {
    match find_work_dir_from(base) {
        Ok(work_dir) => Ok(Config::load(&work_dir)?.numbering),
        Err(Error::NotInitialized) => Ok(NumberingScheme::default()),
        Err(e) => Err(e),
    }
}
