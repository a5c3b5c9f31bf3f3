// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;

#[test]
fn test_next_without_args() {
    let cli = parse(&["numref", "next"]).unwrap();
    match cli.command {
        Command::Next { date, entity } => {
            assert!(date.date.is_none());
            assert!(entity.entity.is_none());
        }
        _ => panic!("Expected Next command"),
    }
}

#[test]
fn test_next_with_date_and_entity() {
    let cli = parse(&["numref", "next", "-d", "2005-01-15", "-e", "2"]).unwrap();
    match cli.command {
        Command::Next { date, entity } => {
            assert_eq!(date.date.as_deref(), Some("2005-01-15"));
            assert_eq!(entity.entity, Some(2));
        }
        _ => panic!("Expected Next command"),
    }
}

#[test]
fn test_last_with_entity() {
    let cli = parse(&["numref", "last", "--entity", "4"]).unwrap();
    assert!(matches!(
        cli.command,
        Command::Last {
            entity: EntityArgs { entity: Some(4) }
        }
    ));
}

#[test]
fn test_check_parses() {
    let cli = parse(&["numref", "check"]).unwrap();
    assert!(matches!(cli.command, Command::Check { .. }));
}

#[test]
fn test_example_and_info_take_no_args() {
    assert!(matches!(
        parse(&["numref", "example"]).unwrap().command,
        Command::Example
    ));
    assert!(matches!(
        parse(&["numref", "info"]).unwrap().command,
        Command::Info
    ));
    assert!(parse(&["numref", "example", "extra"]).is_err());
}

#[test]
fn test_unknown_command_fails() {
    assert!(parse(&["numref", "previous"]).is_err());
}
