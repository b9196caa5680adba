//! Enemy roster loading

use crate::enemy::{EnemyDefinition, EnemyRegistry};
use crate::stats::SecondaryStats;
use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Container for the enemy roster
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemiesConfig {
    pub enemies: Vec<EnemyDefinition>,
    /// Fixed crit/evasion by enemy id
    #[serde(default)]
    pub stat_overrides: BTreeMap<String, SecondaryStats>,
}

impl EnemiesConfig {
    fn into_registry(self) -> Result<EnemyRegistry, ConfigError> {
        let mut registry = EnemyRegistry::new();
        for definition in self.enemies {
            registry.register(definition)?;
        }
        for (id, stats) in &self.stat_overrides {
            let in_range = |chance: f64| (0.0..=1.0).contains(&chance);
            if !in_range(stats.crit_chance) || !in_range(stats.evasion_chance) {
                return Err(ConfigError::MalformedEnemyDefinition {
                    id: id.clone(),
                    reason: "stat override chances must be within [0, 1]".to_string(),
                });
            }
            registry.set_override(id, *stats);
        }
        Ok(registry)
    }
}

/// Load the enemy roster from a TOML file
pub fn load_enemy_registry(path: &Path) -> Result<EnemyRegistry, ConfigError> {
    let config: EnemiesConfig = super::load_toml(path)?;
    config.into_registry()
}

/// Load the enemy roster from a TOML string
pub fn parse_enemy_registry(content: &str) -> Result<EnemyRegistry, ConfigError> {
    let config: EnemiesConfig = super::parse_toml(content)?;
    config.into_registry()
}

/// Get the built-in enemy roster
pub fn default_enemies() -> EnemyRegistry {
    let toml = include_str!("../../config/enemies.toml");
    parse_enemy_registry(toml).unwrap_or_else(|_| EnemyRegistry::new())
}
