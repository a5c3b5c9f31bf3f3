// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.
//!
//! These structs are used with `#[command(flatten)]` to reduce duplication
//! across commands that share common patterns.

use clap::Args;

/// Entity selection shared by every command that touches stored references.
#[derive(Args, Clone, Debug, Default)]
pub struct EntityArgs {
    /// Entity to number for (defaults to the configured entity)
    #[arg(long, short = 'e', value_name = "ID")]
    pub entity: Option<i64>,
}

/// Business date argument.
#[derive(Args, Clone, Debug, Default)]
pub struct DateArgs {
    /// Business date of the record, YYYY-MM-DD (defaults to today)
    #[arg(long, short = 'd', value_name = "DATE")]
    pub date: Option<String>,
}
