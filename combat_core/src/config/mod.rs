//! Configuration loading from TOML files

mod constants;
mod enemies;
mod items;

pub use constants::{
    CombatConstants, CritConstants, DamageConstants, EnemyStatConstants, FleeConstants,
    PlayerStatConstants,
};
pub use enemies::{default_enemies, load_enemy_registry, parse_enemy_registry};
pub use items::{default_items, load_item_catalog, parse_item_catalog};

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
    #[error("Malformed enemy definition '{id}': {reason}")]
    MalformedEnemyDefinition { id: String, reason: String },
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}
