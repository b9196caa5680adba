//! Status effects - damage over time, buffs and debuffs

pub mod tick;
mod types;

pub use tick::{tick_buffs, tick_effects, EffectTickResult};
pub use types::{EffectKind, StatModifier, StatusEffect};

use crate::types::StatKind;

/// Sum of active modifiers for a stat across an effect list
pub fn modifier_total(effects: &[StatusEffect], stat: StatKind) -> i64 {
    effects
        .iter()
        .filter_map(|e| e.stat_modifier)
        .filter(|m| m.stat == stat)
        .map(|m| m.amount as i64)
        .sum()
}

/// Effective stat: base plus every matching modifier, never below zero
pub fn effective_stat(base: u32, effects: &[StatusEffect], stat: StatKind) -> u32 {
    let total = base as i64 + modifier_total(effects, stat);
    total.clamp(0, u32::MAX as i64) as u32
}
