// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use numref_core::NewDonation;

use super::{list::format_amount, open_db, parse_date};
use crate::cli::OutputFormat;
use crate::error::Result;

pub fn run(
    base: &Path,
    amount_cents: i64,
    donor: Option<String>,
    date: Option<&str>,
    entity: Option<i64>,
    output: OutputFormat,
) -> Result<()> {
    let date = parse_date(date)?;
    let (db, config, _) = open_db(base)?;
    let entity = entity.unwrap_or(config.entity);

    let new = NewDonation {
        entity,
        date,
        amount_cents,
        donor,
    };
    let donation = db.create_donation(
        &config.numbering,
        &config.scope_for(Some(entity)),
        &new,
        config.max_attempts,
    )?;
    tracing::info!(reference = %donation.reference, entity, "donation recorded");

    match output {
        OutputFormat::Text => {
            println!(
                "Recorded donation {} ({}, {})",
                donation.reference,
                donation.date,
                format_amount(donation.amount_cents)
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&donation)?);
        }
    }
    Ok(())
}
