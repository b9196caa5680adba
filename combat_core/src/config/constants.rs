//! Combat constants configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::ConfigError;

/// Tunable combat constants
///
/// `Default` reproduces the shipped balance; a TOML file only needs to name
/// the values it changes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CombatConstants {
    #[serde(default)]
    pub damage: DamageConstants,
    #[serde(default)]
    pub crit: CritConstants,
    #[serde(default)]
    pub player: PlayerStatConstants,
    #[serde(default)]
    pub enemy: EnemyStatConstants,
    #[serde(default)]
    pub flee: FleeConstants,
}

impl CombatConstants {
    /// Load constants from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let constants: CombatConstants = super::load_toml(path)?;
        constants.validate()?;
        Ok(constants)
    }

    /// Load constants from a TOML string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let constants: CombatConstants = super::parse_toml(content)?;
        constants.validate()?;
        Ok(constants)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.damage.defense_scale <= 0.0 {
            return Err(ConfigError::ValidationError(
                "damage.defense_scale must be positive".to_string(),
            ));
        }
        if self.damage.level_modifier_min > self.damage.level_modifier_max {
            return Err(ConfigError::ValidationError(
                "damage.level_modifier_min exceeds level_modifier_max".to_string(),
            ));
        }
        if self.flee.min_chance > self.flee.max_chance {
            return Err(ConfigError::ValidationError(
                "flee.min_chance exceeds flee.max_chance".to_string(),
            ));
        }
        if self.enemy.health_per_level == 0 {
            return Err(ConfigError::ValidationError(
                "enemy.health_per_level must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DamageConstants {
    /// Lowest random multiplier applied to attack
    #[serde(default = "default_variance_min")]
    pub variance_min: f64,
    /// Width of the random multiplier window (0.85 + 0.30 = 1.15 max)
    #[serde(default = "default_variance_span")]
    pub variance_span: f64,
    /// Mitigation: multiplier = scale / (scale + defense)
    #[serde(default = "default_defense_scale")]
    pub defense_scale: f64,
    /// Damage change per level of difference
    #[serde(default = "default_level_step")]
    pub level_step: f64,
    #[serde(default = "default_level_modifier_min")]
    pub level_modifier_min: f64,
    #[serde(default = "default_level_modifier_max")]
    pub level_modifier_max: f64,
    /// Every landed hit deals at least this much
    #[serde(default = "default_min_damage")]
    pub min_damage: u32,
}

impl Default for DamageConstants {
    fn default() -> Self {
        DamageConstants {
            variance_min: 0.85,
            variance_span: 0.30,
            defense_scale: 100.0,
            level_step: 0.05,
            level_modifier_min: 0.5,
            level_modifier_max: 1.5,
            min_damage: 1,
        }
    }
}

fn default_variance_min() -> f64 {
    0.85
}
fn default_variance_span() -> f64 {
    0.30
}
fn default_defense_scale() -> f64 {
    100.0
}
fn default_level_step() -> f64 {
    0.05
}
fn default_level_modifier_min() -> f64 {
    0.5
}
fn default_level_modifier_max() -> f64 {
    1.5
}
fn default_min_damage() -> u32 {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CritConstants {
    /// Critical strike multiplier (1.5 = 150%)
    #[serde(default = "default_crit_multiplier")]
    pub multiplier: f64,
}

impl Default for CritConstants {
    fn default() -> Self {
        CritConstants { multiplier: 1.5 }
    }
}

fn default_crit_multiplier() -> f64 {
    1.5
}

/// Player crit/evasion curves: `min(cap, base + level * per_level)`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerStatConstants {
    #[serde(default = "default_player_base_crit")]
    pub base_crit: f64,
    #[serde(default = "default_player_crit_per_level")]
    pub crit_per_level: f64,
    #[serde(default = "default_player_crit_cap")]
    pub crit_cap: f64,
    #[serde(default = "default_player_base_evasion")]
    pub base_evasion: f64,
    #[serde(default = "default_player_evasion_per_level")]
    pub evasion_per_level: f64,
    #[serde(default = "default_player_evasion_cap")]
    pub evasion_cap: f64,
}

impl Default for PlayerStatConstants {
    fn default() -> Self {
        PlayerStatConstants {
            base_crit: 0.05,
            crit_per_level: 0.01,
            crit_cap: 0.30,
            base_evasion: 0.03,
            evasion_per_level: 0.008,
            evasion_cap: 0.20,
        }
    }
}

fn default_player_base_crit() -> f64 {
    0.05
}
fn default_player_crit_per_level() -> f64 {
    0.01
}
fn default_player_crit_cap() -> f64 {
    0.30
}
fn default_player_base_evasion() -> f64 {
    0.03
}
fn default_player_evasion_per_level() -> f64 {
    0.008
}
fn default_player_evasion_cap() -> f64 {
    0.20
}

/// Generic enemy crit/evasion curves keyed on danger level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyStatConstants {
    #[serde(default = "default_enemy_base_crit")]
    pub base_crit: f64,
    #[serde(default = "default_enemy_crit_per_danger")]
    pub crit_per_danger: f64,
    #[serde(default = "default_enemy_crit_cap")]
    pub crit_cap: f64,
    #[serde(default = "default_enemy_base_evasion")]
    pub base_evasion: f64,
    #[serde(default = "default_enemy_evasion_per_danger")]
    pub evasion_per_danger: f64,
    #[serde(default = "default_enemy_evasion_cap")]
    pub evasion_cap: f64,
    /// Estimated enemy level = ceil(max_health / health_per_level)
    #[serde(default = "default_health_per_level")]
    pub health_per_level: u32,
}

impl Default for EnemyStatConstants {
    fn default() -> Self {
        EnemyStatConstants {
            base_crit: 0.05,
            crit_per_danger: 0.02,
            crit_cap: 0.25,
            base_evasion: 0.02,
            evasion_per_danger: 0.02,
            evasion_cap: 0.15,
            health_per_level: 30,
        }
    }
}

fn default_enemy_base_crit() -> f64 {
    0.05
}
fn default_enemy_crit_per_danger() -> f64 {
    0.02
}
fn default_enemy_crit_cap() -> f64 {
    0.25
}
fn default_enemy_base_evasion() -> f64 {
    0.02
}
fn default_enemy_evasion_per_danger() -> f64 {
    0.02
}
fn default_enemy_evasion_cap() -> f64 {
    0.15
}
fn default_health_per_level() -> u32 {
    30
}

/// Flee curve: `clamp(base + (level - danger * danger_weight) * step, min, max)`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleeConstants {
    #[serde(default = "default_flee_base")]
    pub base_chance: f64,
    #[serde(default = "default_flee_step")]
    pub step: f64,
    #[serde(default = "default_flee_danger_weight")]
    pub danger_weight: f64,
    #[serde(default = "default_flee_min")]
    pub min_chance: f64,
    #[serde(default = "default_flee_max")]
    pub max_chance: f64,
}

impl Default for FleeConstants {
    fn default() -> Self {
        FleeConstants {
            base_chance: 0.5,
            step: 0.05,
            danger_weight: 2.0,
            min_chance: 0.1,
            max_chance: 0.9,
        }
    }
}

fn default_flee_base() -> f64 {
    0.5
}
fn default_flee_step() -> f64 {
    0.05
}
fn default_flee_danger_weight() -> f64 {
    2.0
}
fn default_flee_min() -> f64 {
    0.1
}
fn default_flee_max() -> f64 {
    0.9
}
