//! EnemySkill - Special moves in an enemy's skill pool

use serde::{Deserialize, Serialize};
use std::fmt;

/// What a skill does when it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SkillKind {
    /// Damaging hit that may poison
    Poison,
    /// Damaging hit that may set the target burning
    FireBreath,
    /// Damaging hit with a large multiplier
    HeavyStrike,
    /// Restores the caster's health
    Heal,
    /// Raises the caster's defense for a few rounds
    DefenseBuff,
}

impl SkillKind {
    /// Name of the DOT this skill inflicts, if any
    pub fn dot_name(self) -> Option<&'static str> {
        match self {
            SkillKind::Poison => Some("Poisoned"),
            SkillKind::FireBreath => Some("Burning"),
            SkillKind::HeavyStrike | SkillKind::Heal | SkillKind::DefenseBuff => None,
        }
    }
}

impl fmt::Display for SkillKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SkillKind::Poison => "POISON",
            SkillKind::FireBreath => "FIRE_BREATH",
            SkillKind::HeavyStrike => "HEAVY_STRIKE",
            SkillKind::Heal => "HEAL",
            SkillKind::DefenseBuff => "DEFENSE_BUFF",
        };
        f.write_str(s)
    }
}

/// A skill in an enemy's pool
///
/// Only the parameters relevant to `kind` are read; the rest are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemySkill {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub kind: SkillKind,
    /// Chance to fire this turn (0.0 to 1.0), rolled independently
    pub chance: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage_multiplier: Option<f64>,
    /// Rounds the applied effect lasts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dot_damage: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heal_amount: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buff_amount: Option<i32>,
}

impl EnemySkill {
    /// Create a skill with no type-specific parameters set
    pub fn new(id: &str, name: &str, kind: SkillKind, chance: f64) -> Self {
        EnemySkill {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            kind,
            chance,
            damage_multiplier: None,
            duration: None,
            dot_damage: None,
            heal_amount: None,
            buff_amount: None,
        }
    }

    pub fn with_multiplier(mut self, multiplier: f64) -> Self {
        self.damage_multiplier = Some(multiplier);
        self
    }

    pub fn with_dot(mut self, dot_damage: u32, duration: u32) -> Self {
        self.dot_damage = Some(dot_damage);
        self.duration = Some(duration);
        self
    }

    pub fn with_heal(mut self, heal_amount: u32) -> Self {
        self.heal_amount = Some(heal_amount);
        self
    }

    pub fn with_buff(mut self, buff_amount: i32, duration: u32) -> Self {
        self.buff_amount = Some(buff_amount);
        self.duration = Some(duration);
        self
    }

    /// Attack multiplier, falling back to the per-kind default
    pub fn effective_multiplier(&self) -> f64 {
        self.damage_multiplier.unwrap_or(match self.kind {
            SkillKind::HeavyStrike => 2.0,
            _ => 1.0,
        })
    }

    /// DOT (damage per turn, turns) inflicted on hit, if configured
    pub fn dot(&self) -> Option<(u32, u32)> {
        match (self.dot_damage, self.duration) {
            (Some(damage), Some(turns)) if damage > 0 && turns > 0 => Some((damage, turns)),
            _ => None,
        }
    }

    /// Defense buff (amount, turns); defaults to +10 for 2 rounds
    ///
    /// A zero amount or duration counts as unset.
    pub fn defense_buff(&self) -> (i32, u32) {
        let amount = self.buff_amount.filter(|&a| a != 0).unwrap_or(10);
        let turns = self.duration.filter(|&d| d > 0).unwrap_or(2);
        (amount, turns)
    }

    /// Check type-specific parameters, returning a reason on failure
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.chance) {
            return Err(format!("skill '{}' chance {} is outside [0, 1]", self.id, self.chance));
        }
        if let Some(multiplier) = self.damage_multiplier {
            if multiplier < 0.0 {
                return Err(format!("skill '{}' has a negative damage multiplier", self.id));
            }
        }
        if self.kind == SkillKind::Heal && self.heal_amount.is_none() {
            return Err(format!("HEAL skill '{}' is missing heal_amount", self.id));
        }
        Ok(())
    }
}
