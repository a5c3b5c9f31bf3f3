// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reference parsing.
//!
//! A reference follows the fixed grammar
//! `prefix + window + '-' + suffix`, where the window is exactly
//! [`NumberingScheme::date_window_width`] characters. The parser accepts the
//! same strings as the storage pattern `PREFIX____-%`: any window characters,
//! any suffix text. Whether the window is a valid date and whether the suffix
//! is numeric are separate questions answered by [`ParsedReference`].

use crate::scheme::NumberingScheme;

/// Borrowed view of a reference split into its three segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedReference<'a> {
    pub prefix: &'a str,
    pub window: &'a str,
    pub suffix: &'a str,
}

impl<'a> ParsedReference<'a> {
    /// Splits `reference` according to `scheme`.
    ///
    /// The prefix is compared ASCII case-insensitively. Returns `None` when
    /// the string does not follow the grammar.
    pub fn parse(scheme: &NumberingScheme, reference: &'a str) -> Option<Self> {
        let prefix_len = scheme.prefix.len();
        let prefix = reference.get(..prefix_len)?;
        if !prefix.eq_ignore_ascii_case(&scheme.prefix) {
            return None;
        }
        let rest = &reference[prefix_len..];

        // Window width counts characters, not bytes.
        let window_end = rest
            .char_indices()
            .nth(scheme.date_window_width)
            .map(|(i, _)| i)?;
        let window = &rest[..window_end];
        let suffix = rest[window_end..].strip_prefix('-')?;

        Some(ParsedReference {
            prefix,
            window,
            suffix,
        })
    }

    /// Numeric value of the suffix.
    ///
    /// The longest run of leading ASCII digits is the value; a suffix without
    /// a leading digit is 0. Values too large for `u64` saturate.
    pub fn suffix_value(&self) -> u64 {
        leading_number(self.suffix)
    }

    /// True when every window character is an ASCII digit.
    pub fn window_is_numeric(&self) -> bool {
        self.window.chars().all(|c| c.is_ascii_digit())
    }
}

/// Suffix of a stored reference, or `None` if it is not a reference of this scheme.
pub fn extract_suffix(scheme: &NumberingScheme, reference: &str) -> Option<u64> {
    ParsedReference::parse(scheme, reference).map(|r| r.suffix_value())
}

fn leading_number(text: &str) -> u64 {
    text.bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0u64, |acc, b| {
            acc.saturating_mul(10).saturating_add(u64::from(b - b'0'))
        })
}

#[cfg(test)]
#[path = "reference_tests.rs"]
mod tests;
