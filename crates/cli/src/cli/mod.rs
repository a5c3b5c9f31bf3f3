// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use clap::{Parser, Subcommand, ValueEnum};

pub use args::{DateArgs, EntityArgs};

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "numref")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Sequential, date-stamped reference numbers for donation records")]
#[command(
    long_about = "Sequential, date-stamped reference numbers for donation records.\n\n\
    References look like DON0501-0001: a prefix, the year and month of the donation, \
    and a counter that never resets."
)]
pub struct Cli {
    /// Run as if numref was started in <path>
    #[arg(short = 'C', long = "directory", global = true, value_name = "path")]
    pub directory: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Initialize numbering in the current directory
    #[command(after_help = "\
Examples:
  numref init                       Number donations as DONyymm-nnnn
  numref init --prefix GIFT         Use a different prefix
  numref init --entity 2            Number for entity 2")]
    Init {
        /// Reference prefix (1 to 8 ASCII letters)
        #[arg(long, short = 'p', default_value = numref_core::scheme::DEFAULT_PREFIX)]
        prefix: String,

        /// Entity that owns new donations
        #[arg(long, short = 'e', default_value_t = 1)]
        entity: i64,

        /// Path to initialize (defaults to current directory)
        #[arg(long)]
        path: Option<String>,
    },

    /// Print the next free reference
    #[command(after_help = "\
Examples:
  numref next                       Next reference for today
  numref next --date 2005-01-15     Next reference for a donation dated 2005-01-15")]
    Next {
        #[command(flatten)]
        date: DateArgs,

        #[command(flatten)]
        entity: EntityArgs,
    },

    /// Print the last allocated reference (nothing if none)
    Last {
        #[command(flatten)]
        entity: EntityArgs,
    },

    /// Print an example reference
    Example,

    /// Describe the reference format
    Info,

    /// Check that stored references are compatible with the numbering scheme
    Check {
        #[command(flatten)]
        entity: EntityArgs,
    },

    /// Record a donation under the next free reference
    #[command(after_help = "\
Examples:
  numref add --amount-cents 2500                      Record a 25.00 donation today
  numref add --amount-cents 1000 --donor \"Ada\"        Record a named donation
  numref add --amount-cents 500 -d 2005-01-15 -o json Record a dated donation, print JSON")]
    Add {
        /// Donation amount in cents
        #[arg(long, value_name = "CENTS", value_parser = clap::value_parser!(i64).range(0..))]
        amount_cents: i64,

        /// Donor name
        #[arg(long, value_parser = non_empty_string)]
        donor: Option<String>,

        #[command(flatten)]
        date: DateArgs,

        #[command(flatten)]
        entity: EntityArgs,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// List recorded donations
    List {
        #[command(flatten)]
        entity: EntityArgs,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
