//! EnemyRegistry - Loaded once, injected by reference

use super::EnemyDefinition;
use crate::config::ConfigError;
use crate::stats::{SecondaryStats, StatOverrides};
use rand::seq::SliceRandom;
use rand::Rng;
use std::path::Path;

/// Every enemy identity the engine can fight, plus the named stat overrides
#[derive(Debug, Clone, Default)]
pub struct EnemyRegistry {
    enemies: Vec<EnemyDefinition>,
    stat_overrides: StatOverrides,
}

impl EnemyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a registry from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        crate::config::load_enemy_registry(path)
    }

    /// Load a registry from a TOML string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        crate::config::parse_enemy_registry(content)
    }

    /// Add a definition after validating it
    pub fn register(&mut self, definition: EnemyDefinition) -> Result<(), ConfigError> {
        if let Err(reason) = definition.validate() {
            return Err(ConfigError::MalformedEnemyDefinition {
                id: definition.id,
                reason,
            });
        }
        if self.get(&definition.id).is_some() {
            return Err(ConfigError::MalformedEnemyDefinition {
                id: definition.id,
                reason: "duplicate enemy id".to_string(),
            });
        }
        self.enemies.push(definition);
        Ok(())
    }

    /// Fix crit/evasion for a named enemy, bypassing the danger curve
    pub fn set_override(&mut self, enemy_id: &str, stats: SecondaryStats) {
        self.stat_overrides.insert(enemy_id.to_string(), stats);
    }

    pub fn get(&self, id: &str) -> Option<&EnemyDefinition> {
        self.enemies.iter().find(|e| e.id == id)
    }

    /// Definitions in registration order
    pub fn iter(&self) -> impl Iterator<Item = &EnemyDefinition> {
        self.enemies.iter()
    }

    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }

    pub fn stat_overrides(&self) -> &StatOverrides {
        &self.stat_overrides
    }

    pub fn at_danger_level(&self, danger_level: u32) -> Vec<&EnemyDefinition> {
        self.enemies
            .iter()
            .filter(|e| e.danger_level == danger_level)
            .collect()
    }

    /// Pick an enemy for a location of the given danger
    ///
    /// Chooses uniformly among enemies of exactly that level. When none
    /// exist, falls back to the highest level below it that has enemies.
    pub fn random_encounter(
        &self,
        danger_level: u32,
        rng: &mut impl Rng,
    ) -> Option<&EnemyDefinition> {
        let level = self
            .enemies
            .iter()
            .map(|e| e.danger_level)
            .filter(|&level| level <= danger_level)
            .max()?;

        self.at_danger_level(level).choose(rng).copied()
    }
}
