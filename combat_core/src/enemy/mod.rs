//! Enemies - static definitions and their in-combat instances

mod registry;

pub use crate::reward::{GoldRange, LootEntry};
pub use registry::EnemyRegistry;

use crate::config::CombatConstants;
use crate::effect::{effective_stat, StatusEffect};
use crate::skill::EnemySkill;
use crate::stats::{enemy_combat_stats, estimated_enemy_level, StatOverrides};
use crate::types::StatKind;
use serde::{Deserialize, Serialize};

/// Static description of an enemy identity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyDefinition {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Max health; a fresh instance starts full
    pub health: u32,
    pub attack: u32,
    pub defense: u32,
    pub exp: u32,
    pub gold: GoldRange,
    #[serde(default)]
    pub loot: Vec<LootEntry>,
    pub danger_level: u32,
    /// Rolled in this order each enemy turn
    #[serde(default)]
    pub skills: Vec<EnemySkill>,
}

impl EnemyDefinition {
    /// Check the definition, returning a reason on failure
    pub fn validate(&self) -> Result<(), String> {
        if self.id.is_empty() {
            return Err("id must not be empty".to_string());
        }
        if self.health == 0 {
            return Err("health must be positive".to_string());
        }
        if self.gold.min > self.gold.max {
            return Err(format!(
                "gold range [{}, {}] is inverted",
                self.gold.min, self.gold.max
            ));
        }
        for entry in &self.loot {
            if !(0.0..=1.0).contains(&entry.chance) {
                return Err(format!(
                    "loot '{}' chance {} is outside [0, 1]",
                    entry.item_id, entry.chance
                ));
            }
        }
        for skill in &self.skills {
            skill.validate()?;
        }
        Ok(())
    }
}

/// An enemy taking part in one combat
///
/// Created at full health when combat begins and discarded when it ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatEnemy {
    pub id: String,
    pub name: String,
    /// May dip below zero mid-round
    pub health: i64,
    pub max_health: u32,
    pub attack: u32,
    pub defense: u32,
    pub crit_chance: f64,
    pub evasion_chance: f64,
    pub danger_level: u32,
    /// Estimated from max health
    pub level: u32,
    pub skills: Vec<EnemySkill>,
    /// Buffs from the enemy's own skills
    pub status_effects: Vec<StatusEffect>,
    pub exp: u32,
    pub gold: GoldRange,
    pub loot: Vec<LootEntry>,
}

impl CombatEnemy {
    pub fn from_definition(
        definition: &EnemyDefinition,
        overrides: &StatOverrides,
        constants: &CombatConstants,
    ) -> Self {
        let secondary = enemy_combat_stats(
            &definition.id,
            definition.danger_level,
            overrides,
            constants,
        );

        CombatEnemy {
            id: definition.id.clone(),
            name: definition.name.clone(),
            health: definition.health as i64,
            max_health: definition.health,
            attack: definition.attack,
            defense: definition.defense,
            crit_chance: secondary.crit_chance,
            evasion_chance: secondary.evasion_chance,
            danger_level: definition.danger_level,
            level: estimated_enemy_level(definition.health, constants),
            skills: definition.skills.clone(),
            status_effects: Vec::new(),
            exp: definition.exp,
            gold: definition.gold,
            loot: definition.loot.clone(),
        }
    }

    pub fn effective_attack(&self) -> u32 {
        effective_stat(self.attack, &self.status_effects, StatKind::Attack)
    }

    pub fn effective_defense(&self) -> u32 {
        effective_stat(self.defense, &self.status_effects, StatKind::Defense)
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.health -= amount as i64;
    }

    /// Restore health up to max, returning the amount actually restored
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.health;
        self.health = (self.health + amount as i64).min(self.max_health as i64);
        (self.health - before).max(0) as u32
    }

    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }

    /// Health for display, never below zero
    pub fn display_health(&self) -> u32 {
        self.health.max(0) as u32
    }
}
