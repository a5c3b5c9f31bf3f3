// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! numref-core: Sequential reference numbering for donation records
//!
//! This crate allocates references of the form `DONyymm-nnnn`: a fixed
//! prefix, a date window taken from the record's business date, and a
//! counter that continues across windows. It also checks whether data
//! already in storage is compatible with a numbering scheme before the
//! scheme is switched on.

pub mod allocator;
pub mod db;
pub mod donation;
pub mod error;
pub mod reference;
pub mod scheme;
pub mod store;

pub use allocator::{allocate_with_retry, Activation, Allocator, Mode};
pub use db::Database;
pub use donation::{Donation, NewDonation};
pub use error::{Error, Result};
pub use reference::{extract_suffix, ParsedReference};
pub use scheme::{validate_prefix, NumberingScheme};
pub use store::{EntityId, ReferenceStore, Scope};
