//! Per-round effect processing

use super::StatusEffect;
use tracing::debug;

/// Result of ticking an effect list once
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EffectTickResult {
    /// Sum of DOT damage dealt this round
    pub total_damage: u32,
    /// What happened, in order
    pub narrations: Vec<String>,
    /// Effects that carry into the next round
    pub remaining: Vec<StatusEffect>,
}

/// Tick every effect once
///
/// DOTs deal their damage first, then every effect loses a round. Effects
/// that reach zero are dropped after dealing that round's damage.
pub fn tick_effects(effects: &[StatusEffect]) -> EffectTickResult {
    let mut result = EffectTickResult::default();

    for effect in effects {
        if effect.is_dot() && effect.damage_per_turn > 0 {
            result.total_damage += effect.damage_per_turn;
            result.narrations.push(format!(
                "{} deals {} damage!",
                effect.name, effect.damage_per_turn
            ));
        }

        let remaining_turns = effect.remaining_turns.saturating_sub(1);
        if remaining_turns > 0 {
            result.remaining.push(StatusEffect {
                remaining_turns,
                ..effect.clone()
            });
        } else {
            debug!(effect = %effect.id, "effect expired");
            result.narrations.push(format!("{} has worn off.", effect.name));
        }
    }

    result
}

/// Count buffs down one round, dropping the ones that run out
///
/// Same decrement-then-filter rule as `tick_effects`, without damage or
/// narration.
pub fn tick_buffs(buffs: &[StatusEffect]) -> Vec<StatusEffect> {
    buffs
        .iter()
        .filter(|b| b.remaining_turns > 1)
        .map(|b| StatusEffect {
            remaining_turns: b.remaining_turns - 1,
            ..b.clone()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StatKind;

    #[test]
    fn test_last_turn_expires() {
        let effects = vec![StatusEffect::dot("poison_blade", "Poisoned", 8, 1)];
        let result = tick_effects(&effects);

        assert_eq!(result.total_damage, 8);
        assert!(result.remaining.is_empty());
        assert!(result.narrations.iter().any(|n| n.contains("worn off")));
    }

    #[test]
    fn test_two_turns_carry_forward() {
        let effects = vec![StatusEffect::dot("fire_breath", "Burning", 5, 2)];
        let result = tick_effects(&effects);

        assert_eq!(result.total_damage, 5);
        assert_eq!(result.remaining.len(), 1);
        assert_eq!(result.remaining[0].remaining_turns, 1);
        assert!(!result.narrations.iter().any(|n| n.contains("worn off")));
    }

    #[test]
    fn test_stacked_dots_sum() {
        // Identical DOTs are not merged
        let effects = vec![
            StatusEffect::dot("poison_blade", "Poisoned", 8, 3),
            StatusEffect::dot("poison_blade", "Poisoned", 8, 2),
        ];
        let result = tick_effects(&effects);

        assert_eq!(result.total_damage, 16);
        assert_eq!(result.remaining.len(), 2);
    }

    #[test]
    fn test_buffs_in_effect_list_deal_no_damage() {
        let effects = vec![StatusEffect::buff("fortify", "Fortified", StatKind::Defense, 10, 1)];
        let result = tick_effects(&effects);

        assert_eq!(result.total_damage, 0);
        assert!(result.remaining.is_empty());
        assert_eq!(result.narrations.len(), 1);
    }

    #[test]
    fn test_empty_list() {
        let result = tick_effects(&[]);
        assert_eq!(result, EffectTickResult::default());
    }

    #[test]
    fn test_tick_buffs() {
        let buffs = vec![
            StatusEffect::buff("berserker_potion", "Berserk", StatKind::Attack, 10, 3),
            StatusEffect::buff("iron_skin_potion", "Iron Skin", StatKind::Defense, 8, 1),
        ];
        let remaining = tick_buffs(&buffs);

        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, "berserker_potion");
        assert_eq!(remaining[0].remaining_turns, 2);
    }
}
