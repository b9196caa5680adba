//! Damage calculation
//!
//! damage = attack * variance * (scale / (scale + defense)) * level_modifier
//!
//! - variance is uniform on [0.85, 1.15)
//! - the defense term has diminishing returns and never reaches zero
//! - level_modifier moves 5% per level of difference, clamped to [0.5, 1.5]
//! - the floored result is never below 1

use crate::config::CombatConstants;
use crate::rng::roll;
use rand::Rng;

/// Roll damage for a single landed hit
pub fn calculate_damage(
    attack: f64,
    defense: u32,
    attacker_level: u32,
    defender_level: u32,
    constants: &CombatConstants,
    rng: &mut impl Rng,
) -> u32 {
    damage_from_roll(
        attack,
        defense,
        attacker_level,
        defender_level,
        roll(rng),
        constants,
    )
}

/// Damage for a given variance roll in `[0, 1)`
pub fn damage_from_roll(
    attack: f64,
    defense: u32,
    attacker_level: u32,
    defender_level: u32,
    variance_roll: f64,
    constants: &CombatConstants,
) -> u32 {
    let c = &constants.damage;
    let random_multiplier = c.variance_min + variance_roll * c.variance_span;
    let base = attack * random_multiplier;

    let raw = base
        * defense_multiplier(defense, constants)
        * level_modifier(attacker_level, defender_level, constants);

    (raw.floor().max(0.0) as u32).max(c.min_damage)
}

/// Share of damage that gets through `defense`
pub fn defense_multiplier(defense: u32, constants: &CombatConstants) -> f64 {
    let scale = constants.damage.defense_scale;
    scale / (scale + defense as f64)
}

/// Damage scaling from the level gap between attacker and defender
pub fn level_modifier(
    attacker_level: u32,
    defender_level: u32,
    constants: &CombatConstants,
) -> f64 {
    let c = &constants.damage;
    let level_diff = attacker_level as f64 - defender_level as f64;
    (1.0 + level_diff * c.level_step).clamp(c.level_modifier_min, c.level_modifier_max)
}

/// Critical strike: scale the rolled damage and floor again
pub fn apply_critical(damage: u32, constants: &CombatConstants) -> u32 {
    (damage as f64 * constants.crit.multiplier).floor() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;

    fn make_test_rng() -> rand::rngs::StdRng {
        rand::rngs::StdRng::seed_from_u64(12345)
    }

    #[test]
    fn test_midpoint_roll() {
        // 10 * 1.0 * 100/102 * 1.0 = 9.80
        let constants = CombatConstants::default();
        assert_eq!(damage_from_roll(10.0, 2, 1, 1, 0.5, &constants), 9);
    }

    #[test]
    fn test_variance_bounds() {
        let constants = CombatConstants::default();
        // 100 * 0.85 = 85, 100 * (just under 1.15) = 114
        assert_eq!(damage_from_roll(100.0, 0, 1, 1, 0.0, &constants), 85);
        assert_eq!(damage_from_roll(100.0, 0, 1, 1, 0.999_999, &constants), 114);
    }

    #[test]
    fn test_minimum_damage() {
        let constants = CombatConstants::default();
        assert_eq!(damage_from_roll(1.0, 10_000, 1, 50, 0.0, &constants), 1);
        assert_eq!(damage_from_roll(0.0, 0, 1, 1, 0.5, &constants), 1);
    }

    #[test]
    fn test_level_modifier_clamps() {
        let constants = CombatConstants::default();
        assert!((level_modifier(5, 5, &constants) - 1.0).abs() < f64::EPSILON);
        assert!((level_modifier(7, 5, &constants) - 1.1).abs() < 1e-9);
        assert!((level_modifier(1, 40, &constants) - 0.5).abs() < f64::EPSILON);
        assert!((level_modifier(40, 1, &constants) - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_defense_multiplier() {
        let constants = CombatConstants::default();
        assert!((defense_multiplier(0, &constants) - 1.0).abs() < f64::EPSILON);
        assert!((defense_multiplier(100, &constants) - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_critical_refloors() {
        let constants = CombatConstants::default();
        assert_eq!(apply_critical(9, &constants), 13);
        assert_eq!(apply_critical(10, &constants), 15);
        assert_eq!(apply_critical(1, &constants), 1);
    }

    #[test]
    fn test_rolled_damage_in_window() {
        let constants = CombatConstants::default();
        let mut rng = make_test_rng();
        for _ in 0..200 {
            let damage = calculate_damage(100.0, 0, 1, 1, &constants, &mut rng);
            assert!((85..=115).contains(&damage));
        }
    }

    proptest! {
        #[test]
        fn prop_damage_never_below_one(
            attack in 0.0f64..10_000.0,
            defense in 0u32..1_000_000,
            attacker_level in 1u32..200,
            defender_level in 1u32..200,
            roll in 0.0f64..1.0,
        ) {
            let constants = CombatConstants::default();
            let damage =
                damage_from_roll(attack, defense, attacker_level, defender_level, roll, &constants);
            prop_assert!(damage >= 1);
        }

        #[test]
        fn prop_more_defense_never_more_damage(
            attack in 0.0f64..10_000.0,
            defense in 0u32..100_000,
            extra in 0u32..100_000,
            attacker_level in 1u32..200,
            defender_level in 1u32..200,
            roll in 0.0f64..1.0,
        ) {
            let constants = CombatConstants::default();
            let (atk_lvl, def_lvl) = (attacker_level, defender_level);
            let low = damage_from_roll(attack, defense, atk_lvl, def_lvl, roll, &constants);
            let high =
                damage_from_roll(attack, defense + extra, atk_lvl, def_lvl, roll, &constants);
            prop_assert!(high <= low);
        }
    }
}
