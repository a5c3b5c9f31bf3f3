// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for numref-core operations.

use thiserror::Error;

/// All possible errors that can occur in numref-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid mode: '{0}'\n  hint: valid modes are: next, last")]
    InvalidMode(String),

    #[error("invalid prefix: '{0}'\n  hint: a prefix is 1 to 8 ASCII letters")]
    InvalidPrefix(String),

    #[error("invalid numbering scheme: {0}")]
    InvalidScheme(String),

    #[error("business date {date} does not fit a {width}-character date window")]
    DateOutOfRange { date: chrono::NaiveDate, width: usize },

    #[error("donation not found: {0}")]
    DonationNotFound(String),

    #[error("reference already exists: {0}")]
    DuplicateReference(String),

    #[error("no free reference found after {attempts} attempts")]
    AllocationExhausted { attempts: u32 },

    #[error("storage read failed: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupted data: {0}")]
    CorruptedData(String),
}

/// A specialized Result type for numref-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
