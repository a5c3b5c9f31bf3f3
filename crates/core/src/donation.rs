// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Donation records.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::store::EntityId;

/// A stored donation and the reference it was numbered with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Donation {
    pub id: i64,
    pub reference: String,
    pub entity: EntityId,
    /// Business date of the donation; drives the reference's date window.
    pub date: NaiveDate,
    pub amount_cents: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub donor: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A donation that has not been numbered yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDonation {
    pub entity: EntityId,
    pub date: NaiveDate,
    pub amount_cents: i64,
    pub donor: Option<String>,
}
