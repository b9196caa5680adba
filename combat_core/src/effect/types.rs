//! Status effect definitions

use crate::types::StatKind;
use serde::{Deserialize, Serialize};

/// Broad category of a status effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
    /// Damage over time, dealt at the start of each round
    Dot,
    Buff,
    Debuff,
}

/// Signed change to a base stat while an effect is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatModifier {
    pub stat: StatKind,
    pub amount: i32,
}

/// An effect attached to a combatant
///
/// Effects live in flat lists. Two instances with the same id stack
/// independently; nothing merges them on apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusEffect {
    /// Identifier of whatever created the effect (skill or item id)
    pub id: String,
    /// Display name
    pub name: String,
    pub kind: EffectKind,
    /// Rounds left, decremented once per round
    pub remaining_turns: u32,
    /// Damage dealt each round (DOT only)
    #[serde(default)]
    pub damage_per_turn: u32,
    /// Stat change (buff/debuff only)
    #[serde(default)]
    pub stat_modifier: Option<StatModifier>,
}

impl StatusEffect {
    /// Create a damage-over-time effect
    pub fn dot(id: &str, name: &str, damage_per_turn: u32, turns: u32) -> Self {
        StatusEffect {
            id: id.to_string(),
            name: name.to_string(),
            kind: EffectKind::Dot,
            remaining_turns: turns,
            damage_per_turn,
            stat_modifier: None,
        }
    }

    /// Create a stat buff
    pub fn buff(id: &str, name: &str, stat: StatKind, amount: i32, turns: u32) -> Self {
        StatusEffect {
            id: id.to_string(),
            name: name.to_string(),
            kind: EffectKind::Buff,
            remaining_turns: turns,
            damage_per_turn: 0,
            stat_modifier: Some(StatModifier { stat, amount }),
        }
    }

    /// Create a stat debuff
    pub fn debuff(id: &str, name: &str, stat: StatKind, amount: i32, turns: u32) -> Self {
        StatusEffect {
            kind: EffectKind::Debuff,
            ..Self::buff(id, name, stat, amount, turns)
        }
    }

    pub fn is_dot(&self) -> bool {
        self.kind == EffectKind::Dot
    }
}
