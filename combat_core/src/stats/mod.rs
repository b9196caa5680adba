//! Secondary combat stats derived from level and identity

use crate::config::CombatConstants;
use crate::player::PlayerCombatant;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Critical and evasion chances, both probabilities in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SecondaryStats {
    pub crit_chance: f64,
    pub evasion_chance: f64,
}

/// Player figures the damage model reads
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerCombatStats {
    pub attack: u32,
    pub defense: u32,
    pub crit_chance: f64,
    pub evasion_chance: f64,
    pub level: u32,
}

/// Fixed crit/evasion values for named enemies, keyed by enemy id
pub type StatOverrides = HashMap<String, SecondaryStats>;

/// Crit and evasion for an enemy identity
///
/// Named enemies in `overrides` use their fixed values; everyone else scales
/// with danger level up to the generic enemy caps.
pub fn enemy_combat_stats(
    enemy_id: &str,
    danger_level: u32,
    overrides: &StatOverrides,
    constants: &CombatConstants,
) -> SecondaryStats {
    if let Some(fixed) = overrides.get(enemy_id) {
        return *fixed;
    }

    let c = &constants.enemy;
    let danger = danger_level as f64;
    SecondaryStats {
        crit_chance: (c.base_crit + danger * c.crit_per_danger).min(c.crit_cap),
        evasion_chance: (c.base_evasion + danger * c.evasion_per_danger).min(c.evasion_cap),
    }
}

/// Combat stats for a player snapshot
pub fn player_combat_stats(
    player: &PlayerCombatant,
    constants: &CombatConstants,
) -> PlayerCombatStats {
    let c = &constants.player;
    let level = player.level as f64;
    PlayerCombatStats {
        attack: player.attack,
        defense: player.defense,
        crit_chance: (c.base_crit + level * c.crit_per_level).min(c.crit_cap),
        evasion_chance: (c.base_evasion + level * c.evasion_per_level).min(c.evasion_cap),
        level: player.level,
    }
}

/// Enemies have no level of their own; it is estimated from max health
pub fn estimated_enemy_level(max_health: u32, constants: &CombatConstants) -> u32 {
    max_health.div_ceil(constants.enemy.health_per_level)
}
