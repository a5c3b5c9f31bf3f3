// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project configuration management.
//!
//! Configuration is stored in `.numref/config.toml` and includes:
//! - `[numbering]`: the reference scheme (prefix, window and padding widths)
//! - `entity`: the entity new donations belong to
//! - `shared_entities`: other entities numbered in the same sequence
//! - `database`: optional path to store the database elsewhere
//! - `max_attempts`: how often `add` re-allocates after a collision

use numref_core::{EntityId, NumberingScheme, Scope};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

const WORK_DIR_NAME: &str = ".numref";
const CONFIG_FILE_NAME: &str = "config.toml";
const DB_FILE_NAME: &str = "donations.db";

/// Project configuration stored in `.numref/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Entity that owns new donations.
    #[serde(default = "default_entity")]
    pub entity: EntityId,
    /// Entities sharing the numbering sequence with `entity`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shared_entities: Vec<EntityId>,
    /// Optional database path (relative to project root or absolute).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    /// Allocation attempts before `add` gives up.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Reference numbering scheme.
    pub numbering: NumberingScheme,
}

fn default_entity() -> EntityId {
    1
}

fn default_max_attempts() -> u32 {
    5
}

impl Config {
    /// Creates a new config with the given prefix and entity.
    ///
    /// # Errors
    ///
    /// Returns an error if the prefix is not 1 to 8 ASCII letters.
    pub fn new(prefix: &str, entity: EntityId) -> Result<Self> {
        Ok(Config {
            entity,
            shared_entities: Vec::new(),
            database: None,
            max_attempts: default_max_attempts(),
            numbering: NumberingScheme::new(prefix)?,
        })
    }

    /// Loads configuration from the given `.numref/` directory.
    pub fn load(work_dir: &Path) -> Result<Self> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = fs::read_to_string(&config_path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        config.numbering.validate()?;
        if config.max_attempts == 0 {
            return Err(Error::Config("max_attempts must be at least 1".to_string()));
        }
        Ok(config)
    }

    /// Saves configuration to the given `.numref/` directory.
    pub fn save(&self, work_dir: &Path) -> Result<()> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(&config_path, content)?;
        Ok(())
    }

    /// Numbering scope for an entity.
    ///
    /// The configured entity and its shared entities number together; any
    /// other entity has a sequence of its own.
    pub fn scope_for(&self, entity: Option<EntityId>) -> Scope {
        let entity = entity.unwrap_or(self.entity);
        if entity == self.entity || self.shared_entities.contains(&entity) {
            Scope::shared(
                std::iter::once(self.entity).chain(self.shared_entities.iter().copied()),
            )
        } else {
            Scope::entity(entity)
        }
    }
}

/// Find the .numref directory by walking up from `start`.
pub fn find_work_dir_from(start: &Path) -> Result<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let work_dir = current.join(WORK_DIR_NAME);
        if work_dir.is_dir() {
            return Ok(work_dir);
        }
        if !current.pop() {
            return Err(Error::NotInitialized);
        }
    }
}

/// Get the database path from config.
pub fn get_db_path(work_dir: &Path, config: &Config) -> PathBuf {
    match &config.database {
        Some(database) => {
            let database_path = Path::new(database);
            if database_path.is_absolute() {
                database_path.to_path_buf()
            } else {
                // Relative to work_dir's parent (the project root)
                work_dir.parent().unwrap_or(work_dir).join(database)
            }
        }
        None => work_dir.join(DB_FILE_NAME),
    }
}

/// Initialize a new .numref directory at the given path.
pub fn init_work_dir(path: &Path, prefix: &str, entity: EntityId) -> Result<PathBuf> {
    let work_dir = path.join(WORK_DIR_NAME);

    if work_dir.exists() {
        return Err(Error::AlreadyInitialized(work_dir.display().to_string()));
    }

    // Validate before touching the filesystem.
    let config = Config::new(prefix, entity)?;

    fs::create_dir_all(&work_dir)?;
    config.save(&work_dir)?;

    Ok(work_dir)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
