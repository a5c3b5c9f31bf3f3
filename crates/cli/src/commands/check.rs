// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use numref_core::{Activation, Allocator};

use super::open_db;
use crate::error::{Error, Result};

/// Verify that stored references fit the configured scheme.
pub fn run(base: &Path, entity: Option<i64>) -> Result<()> {
    let (db, config, _) = open_db(base)?;
    let allocator = Allocator::new(config.numbering.clone(), &db);

    match allocator.can_be_activated(&config.scope_for(entity))? {
        Activation::Compatible => {
            println!(
                "compatible: stored references follow {}",
                config.numbering.format_label()
            );
            Ok(())
        }
        Activation::Incompatible { diagnostic, .. } => Err(Error::Incompatible { diagnostic }),
    }
}
