// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sequential reference allocation.
//!
//! The [`Allocator`] reads the current maximum suffix from a
//! [`ReferenceStore`] and proposes `max + 1` inside the date window of the
//! record's business date. It never writes and never reserves: two callers
//! racing on the same scope can receive the same candidate, and the store's
//! uniqueness constraint decides which insert wins.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::reference::ParsedReference;
use crate::scheme::NumberingScheme;
use crate::store::{ReferenceStore, Scope};

/// Which value [`Allocator::get_next_value`] resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// The next unused reference.
    Next,
    /// The most recently allocated reference.
    Last,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Next => "next",
            Mode::Last => "last",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "next" => Ok(Mode::Next),
            "last" => Ok(Mode::Last),
            _ => Err(Error::InvalidMode(s.to_string())),
        }
    }
}

/// Outcome of [`Allocator::can_be_activated`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// Stored references are consistent with the scheme.
    Compatible,
    /// A stored reference breaks the scheme and would corrupt numbering.
    Incompatible { value: String, diagnostic: String },
}

impl Activation {
    pub fn is_ok(&self) -> bool {
        matches!(self, Activation::Compatible)
    }

    /// Message for an administrator; empty when compatible.
    pub fn diagnostic(&self) -> &str {
        match self {
            Activation::Compatible => "",
            Activation::Incompatible { diagnostic, .. } => diagnostic,
        }
    }
}

/// Reference allocator for one numbering scheme over one store.
pub struct Allocator<S> {
    scheme: NumberingScheme,
    store: S,
}

impl<S: ReferenceStore> Allocator<S> {
    pub fn new(scheme: NumberingScheme, store: S) -> Self {
        Allocator { scheme, store }
    }

    pub fn scheme(&self) -> &NumberingScheme {
        &self.scheme
    }

    /// Resolve the next or last reference for `scope`.
    ///
    /// `date` is the record's business date and only matters for
    /// [`Mode::Next`]. [`Mode::Next`] always yields a value; [`Mode::Last`]
    /// yields `None` when nothing has been allocated yet.
    pub fn get_next_value(
        &self,
        scope: &Scope,
        date: NaiveDate,
        mode: Mode,
    ) -> Result<Option<String>> {
        tracing::debug!(mode = %mode, prefix = %self.scheme.prefix, "get_next_value");
        match mode {
            Mode::Next => self.next(scope, date).map(Some),
            Mode::Last => self.last(scope),
        }
    }

    /// Like [`get_next_value`](Self::get_next_value), with the mode given as text.
    ///
    /// An unknown mode fails before the store is touched.
    pub fn get_next_value_str(
        &self,
        scope: &Scope,
        date: NaiveDate,
        mode: &str,
    ) -> Result<Option<String>> {
        let mode: Mode = mode.parse()?;
        self.get_next_value(scope, date, mode)
    }

    /// Next reference in the window of `date`.
    pub fn next(&self, scope: &Scope, date: NaiveDate) -> Result<String> {
        let max = self.current_max(scope)?;
        let window = self.scheme.window_for(date)?;
        let reference = self.scheme.compose(&window, max.saturating_add(1));
        tracing::debug!(%reference, max, "next reference");
        Ok(reference)
    }

    /// Most recently allocated reference, in whatever window it was issued.
    ///
    /// When several windows hold the current maximum suffix, the
    /// lexicographically greatest reference wins.
    pub fn last(&self, scope: &Scope) -> Result<Option<String>> {
        let max = self.current_max(scope)?;
        let suffix = self.scheme.format_suffix(max);
        let found = self
            .store
            .latest_with_suffix(&self.scheme, scope, &suffix)?;
        tracing::debug!(suffix = %suffix, found = ?found, "last reference");
        Ok(found)
    }

    /// Illustrative reference; does not read the store.
    pub fn example(&self) -> String {
        self.scheme.example()
    }

    /// Check that existing references would not break this scheme.
    pub fn can_be_activated(&self, scope: &Scope) -> Result<Activation> {
        let Some(value) = self.store.max_reference(&self.scheme, scope)? else {
            return Ok(Activation::Compatible);
        };

        let compatible = ParsedReference::parse(&self.scheme, &value)
            .map(|parsed| {
                parsed.prefix.eq_ignore_ascii_case(&self.scheme.prefix)
                    && parsed.window_is_numeric()
            })
            .unwrap_or(false);

        if compatible {
            Ok(Activation::Compatible)
        } else {
            tracing::warn!(%value, "stored reference is not compatible with numbering scheme");
            let diagnostic = format!(
                "reference '{}' already in the database does not match the format {}; \
                 numbering would not work with this scheme",
                value,
                self.scheme.format_label()
            );
            Ok(Activation::Incompatible { value, diagnostic })
        }
    }

    fn current_max(&self, scope: &Scope) -> Result<u64> {
        Ok(self.store.max_suffix(&self.scheme, scope)?.unwrap_or(0))
    }
}

/// Allocate the next reference and hand it to `insert`, retrying while the
/// store reports the reference as taken.
///
/// Each attempt re-reads the maximum, so a reference inserted concurrently
/// by another writer is skipped on the following attempt.
pub fn allocate_with_retry<S, T, F>(
    allocator: &Allocator<S>,
    scope: &Scope,
    date: NaiveDate,
    max_attempts: u32,
    mut insert: F,
) -> Result<T>
where
    S: ReferenceStore,
    F: FnMut(&str) -> Result<T>,
{
    for attempt in 1..=max_attempts {
        let reference = allocator.next(scope, date)?;
        match insert(&reference) {
            Err(Error::DuplicateReference(taken)) => {
                tracing::warn!(reference = %taken, attempt, "reference already taken, retrying");
            }
            other => return other,
        }
    }
    Err(Error::AllocationExhausted {
        attempts: max_attempts,
    })
}

#[cfg(test)]
#[path = "allocator_tests.rs"]
mod tests;
