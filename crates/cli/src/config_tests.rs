// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use tempfile::TempDir;

#[test]
fn test_config_new_valid() {
    let config = Config::new("DON", 1).unwrap();
    assert_eq!(config.numbering.prefix, "DON");
    assert_eq!(config.entity, 1);
    assert_eq!(config.max_attempts, 5);
    assert!(config.database.is_none());
}

#[test]
fn test_config_new_invalid_prefix() {
    let err = Config::new("D0N", 1).unwrap_err();
    assert!(matches!(
        err,
        Error::Core(numref_core::Error::InvalidPrefix(_))
    ));
}

#[test]
fn test_config_save_and_load() {
    let temp = TempDir::new().unwrap();
    let config = Config {
        shared_entities: vec![2, 3],
        database: Some("data/donations.db".to_string()),
        ..Config::new("GIFT", 1).unwrap()
    };
    config.save(temp.path()).unwrap();

    let loaded = Config::load(temp.path()).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_config_load_applies_defaults() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("config.toml"),
        "[numbering]\nprefix = \"DON\"\n",
    )
    .unwrap();

    let config = Config::load(temp.path()).unwrap();
    assert_eq!(config.entity, 1);
    assert_eq!(config.max_attempts, 5);
    assert_eq!(config.numbering, NumberingScheme::default());
}

#[test]
fn test_config_load_rejects_bad_scheme() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("config.toml"),
        "[numbering]\nprefix = \"DON\"\ndate_window_width = 5\n",
    )
    .unwrap();

    let err = Config::load(temp.path()).unwrap_err();
    assert!(matches!(
        err,
        Error::Core(numref_core::Error::InvalidScheme(_))
    ));
}

#[test]
fn test_config_load_rejects_zero_attempts() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("config.toml"),
        "max_attempts = 0\n\n[numbering]\nprefix = \"DON\"\n",
    )
    .unwrap();

    assert!(matches!(
        Config::load(temp.path()),
        Err(Error::Config(_))
    ));
}

#[test]
fn test_config_load_missing_file() {
    let temp = TempDir::new().unwrap();
    let err = Config::load(temp.path()).unwrap_err();
    assert!(matches!(err, Error::Config(msg) if msg.contains("failed to read")));
}

#[test]
fn test_config_load_malformed() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("config.toml"), "numbering = 3").unwrap();
    let err = Config::load(temp.path()).unwrap_err();
    assert!(matches!(err, Error::Config(msg) if msg.contains("failed to parse")));
}

#[test]
fn test_scope_for_default_entity_includes_shared() {
    let config = Config {
        shared_entities: vec![3, 2],
        ..Config::new("DON", 1).unwrap()
    };
    assert_eq!(config.scope_for(None).entities(), &[1, 2, 3]);
    assert_eq!(config.scope_for(Some(2)).entities(), &[1, 2, 3]);
}

#[test]
fn test_scope_for_unrelated_entity_is_isolated() {
    let config = Config {
        shared_entities: vec![2],
        ..Config::new("DON", 1).unwrap()
    };
    assert_eq!(config.scope_for(Some(7)).entities(), &[7]);
}

#[test]
fn test_get_db_path_default() {
    let config = Config::new("DON", 1).unwrap();
    let work_dir = Path::new("/project/.numref");
    assert_eq!(
        get_db_path(work_dir, &config),
        PathBuf::from("/project/.numref/donations.db")
    );
}

#[test]
fn test_get_db_path_relative() {
    let config = Config {
        database: Some("shared/donations.db".to_string()),
        ..Config::new("DON", 1).unwrap()
    };
    let work_dir = Path::new("/project/.numref");
    assert_eq!(
        get_db_path(work_dir, &config),
        PathBuf::from("/project/shared/donations.db")
    );
}

#[test]
fn test_get_db_path_absolute() {
    let config = Config {
        database: Some("/var/lib/numref/donations.db".to_string()),
        ..Config::new("DON", 1).unwrap()
    };
    let work_dir = Path::new("/project/.numref");
    assert_eq!(
        get_db_path(work_dir, &config),
        PathBuf::from("/var/lib/numref/donations.db")
    );
}

#[test]
fn test_init_work_dir() {
    let temp = TempDir::new().unwrap();
    let work_dir = init_work_dir(temp.path(), "DON", 1).unwrap();

    assert!(work_dir.exists());
    assert!(work_dir.join("config.toml").exists());
    assert_eq!(Config::load(&work_dir).unwrap().numbering.prefix, "DON");
}

#[test]
fn test_init_work_dir_already_exists() {
    let temp = TempDir::new().unwrap();
    init_work_dir(temp.path(), "DON", 1).unwrap();
    let err = init_work_dir(temp.path(), "DON", 1).unwrap_err();
    assert!(matches!(err, Error::AlreadyInitialized(_)));
}

#[test]
fn test_init_work_dir_invalid_prefix_leaves_no_directory() {
    let temp = TempDir::new().unwrap();
    assert!(init_work_dir(temp.path(), "12", 1).is_err());
    assert!(!temp.path().join(".numref").exists());
}

#[test]
fn test_find_work_dir_walks_up() {
    let temp = TempDir::new().unwrap();
    init_work_dir(temp.path(), "DON", 1).unwrap();
    let nested = temp.path().join("a").join("b");
    fs::create_dir_all(&nested).unwrap();

    let found = find_work_dir_from(&nested).unwrap();
    assert_eq!(found, temp.path().join(".numref"));
}

#[test]
fn test_find_work_dir_not_initialized() {
    let temp = TempDir::new().unwrap();
    assert!(matches!(
        find_work_dir_from(temp.path()),
        Err(Error::NotInitialized)
    ));
}
