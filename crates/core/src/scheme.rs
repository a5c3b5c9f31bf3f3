// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Numbering scheme configuration.
//!
//! A [`NumberingScheme`] describes the shape of every reference it produces:
//! `<prefix><window>-<suffix>`, where the window is derived from a business
//! date and the suffix is a zero-padded counter.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Prefix used for donations.
pub const DEFAULT_PREFIX: &str = "DON";

const MAX_PREFIX_LEN: usize = 8;

/// Date used to render [`NumberingScheme::example`].
const EXAMPLE_YEAR: i32 = 2005;
const EXAMPLE_MONTH: u32 = 1;

/// Configuration of one reference numbering sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberingScheme {
    /// Fixed alphabetic code at the start of every reference (e.g. "DON").
    pub prefix: String,
    /// Width of the date window: 4 for `YYMM`, 6 for `YYYYMM`.
    #[serde(default = "default_date_window_width")]
    pub date_window_width: usize,
    /// Number of digits the suffix is zero-padded to.
    #[serde(default = "default_padding_width")]
    pub padding_width: usize,
    /// Suffixes at or above this value are rendered without padding.
    #[serde(default = "default_padding_ceiling")]
    pub padding_ceiling: u64,
}

fn default_date_window_width() -> usize {
    4
}

fn default_padding_width() -> usize {
    4
}

fn default_padding_ceiling() -> u64 {
    9999
}

impl Default for NumberingScheme {
    fn default() -> Self {
        NumberingScheme {
            prefix: DEFAULT_PREFIX.to_string(),
            date_window_width: default_date_window_width(),
            padding_width: default_padding_width(),
            padding_ceiling: default_padding_ceiling(),
        }
    }
}

/// Validate that a prefix is 1 to 8 ASCII letters.
pub fn validate_prefix(prefix: &str) -> bool {
    !prefix.is_empty()
        && prefix.len() <= MAX_PREFIX_LEN
        && prefix.chars().all(|c| c.is_ascii_alphabetic())
}

impl NumberingScheme {
    /// Creates a scheme with the given prefix and default widths.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPrefix`] if the prefix is not 1 to 8 ASCII letters.
    pub fn new(prefix: impl Into<String>) -> Result<Self> {
        let scheme = NumberingScheme {
            prefix: prefix.into(),
            ..NumberingScheme::default()
        };
        scheme.validate()?;
        Ok(scheme)
    }

    /// Checks a scheme built by hand or loaded from a config file.
    pub fn validate(&self) -> Result<()> {
        if !validate_prefix(&self.prefix) {
            return Err(Error::InvalidPrefix(self.prefix.clone()));
        }
        if self.date_window_width != 4 && self.date_window_width != 6 {
            return Err(Error::InvalidScheme(format!(
                "date window width must be 4 (YYMM) or 6 (YYYYMM), got {}",
                self.date_window_width
            )));
        }
        if self.padding_width == 0 {
            return Err(Error::InvalidScheme(
                "padding width must be at least 1".to_string(),
            ));
        }
        if self.padding_ceiling == 0 {
            return Err(Error::InvalidScheme(
                "padding ceiling must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Renders the date window for a business date.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DateOutOfRange`] when the rendered window is not
    /// exactly `date_window_width` characters, e.g. a year past 9999 in a
    /// `YYYYMM` window. Such a reference would not parse back.
    pub fn window_for(&self, date: NaiveDate) -> Result<String> {
        let pattern = if self.date_window_width == 6 {
            "%Y%m"
        } else {
            "%y%m"
        };
        let window = date.format(pattern).to_string();
        if window.len() != self.date_window_width
            || !window.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(Error::DateOutOfRange {
                date,
                width: self.date_window_width,
            });
        }
        Ok(window)
    }

    /// Renders a suffix: zero-padded below the ceiling, raw from the ceiling on.
    pub fn format_suffix(&self, n: u64) -> String {
        if n >= self.padding_ceiling {
            n.to_string()
        } else {
            format!("{:0width$}", n, width = self.padding_width)
        }
    }

    /// Assembles a full reference from its window and counter.
    pub fn compose(&self, window: &str, n: u64) -> String {
        format!("{}{}-{}", self.prefix, window, self.format_suffix(n))
    }

    /// Illustrative reference, independent of any stored data.
    pub fn example(&self) -> String {
        let window = NaiveDate::from_ymd_opt(EXAMPLE_YEAR, EXAMPLE_MONTH, 1)
            .and_then(|d| self.window_for(d).ok())
            .unwrap_or_else(|| "0".repeat(self.date_window_width));
        self.compose(&window, 1)
    }

    /// Placeholder form of the references, e.g. `DONyymm-nnnn`.
    pub fn format_label(&self) -> String {
        let window = if self.date_window_width == 6 {
            "yyyymm"
        } else {
            "yymm"
        };
        format!(
            "{}{}-{}",
            self.prefix,
            window,
            "n".repeat(self.padding_width)
        )
    }

    /// One-line human description of the reference format.
    pub fn describe(&self) -> String {
        let year = if self.date_window_width == 6 {
            "yyyy"
        } else {
            "yy"
        };
        format!(
            "Return a number with format {} where {} is the year, mm is the month and {} \
             is a sequence with no break and no return to 0",
            self.format_label(),
            year,
            "n".repeat(self.padding_width),
        )
    }

    /// SQL `LIKE` pattern selecting every reference of this scheme.
    pub fn like_pattern(&self) -> String {
        format!(
            "{}{}-%",
            escape_like(&self.prefix),
            "_".repeat(self.date_window_width)
        )
    }

    /// SQL `LIKE` pattern selecting references with the given rendered
    /// suffix, in any date window.
    pub fn like_pattern_with_suffix(&self, suffix: &str) -> String {
        format!(
            "{}{}-{}",
            escape_like(&self.prefix),
            "_".repeat(self.date_window_width),
            escape_like(suffix)
        )
    }
}

/// Escapes `LIKE` wildcards with `\`; queries pair it with `ESCAPE '\'`.
fn escape_like(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
#[path = "scheme_tests.rs"]
mod tests;
