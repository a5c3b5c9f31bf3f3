// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use super::open_db;
use crate::cli::OutputFormat;
use crate::error::Result;

pub fn run(base: &Path, entity: Option<i64>, output: OutputFormat) -> Result<()> {
    let (db, config, _) = open_db(base)?;
    let donations = db.list_donations(&config.scope_for(entity))?;

    match output {
        OutputFormat::Text => {
            if donations.is_empty() {
                println!("No donations found.");
                return Ok(());
            }
            for d in &donations {
                let donor = d.donor.as_deref().unwrap_or("-");
                println!(
                    "{}  {}  {:>10}  {}",
                    d.reference,
                    d.date,
                    format_amount(d.amount_cents),
                    donor
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&donations)?);
        }
    }
    Ok(())
}

/// Render cents as a decimal amount, e.g. 2500 -> "25.00".
pub fn format_amount(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
