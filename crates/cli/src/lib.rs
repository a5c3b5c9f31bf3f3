// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! numrefrs - Donation reference numbering from the command line.
//!
//! This crate provides the functionality behind the `numref` CLI: it keeps a
//! project-local SQLite database of donations and numbers each one with
//! [`numref_core`] references such as `DON0501-0001`.
//!
//! # Main Components
//!
//! - [`Config`] - Project configuration (numbering scheme, entity, database location)
//! - [`Cli`] / [`Command`] - Command-line definition
//! - [`Error`] - Error types for all operations
//!
//! # Usage
//!
//! ```rust,ignore
//! use clap::Parser;
//! use numrefrs::{run, Cli};
//!
//! let cli = Cli::parse_from(["numref", "next", "--date", "2005-01-15"]);
//! run(cli)?;
//! ```

mod cli;
mod commands;

pub mod config;
pub mod error;

pub use cli::{Cli, Command, DateArgs, EntityArgs, OutputFormat};
pub use config::{find_work_dir_from, get_db_path, init_work_dir, Config};
pub use error::{Error, Result};

use std::path::PathBuf;

/// Execute a parsed command line. This is the main entry point for library
/// users and provides a testable way to run commands without process execution.
pub fn run(cli: Cli) -> Result<()> {
    let base = match cli.directory {
        Some(dir) => PathBuf::from(dir),
        None => std::env::current_dir()?,
    };

    match cli.command {
        Command::Init {
            prefix,
            entity,
            path,
        } => commands::init::run(&base, &prefix, entity, path.as_deref()),
        Command::Next { date, entity } => {
            commands::numbering::next(&base, date.date.as_deref(), entity.entity)
        }
        Command::Last { entity } => commands::numbering::last(&base, entity.entity),
        Command::Example => commands::numbering::example(&base),
        Command::Info => commands::numbering::info(&base),
        Command::Check { entity } => commands::check::run(&base, entity.entity),
        Command::Add {
            amount_cents,
            donor,
            date,
            entity,
            output,
        } => commands::add::run(
            &base,
            amount_cents,
            donor,
            date.date.as_deref(),
            entity.entity,
            output,
        ),
        Command::List { entity, output } => commands::list::run(&base, entity.entity, output),
    }
}
