//! Hit resolution - evasion, damage and critical rolls for one attack

use super::{apply_critical, calculate_damage};
use crate::config::CombatConstants;
use crate::rng::roll_chance;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// What a single attack did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitOutcome {
    pub damage: u32,
    pub is_critical: bool,
    pub is_evaded: bool,
}

impl HitOutcome {
    /// Defender dodged: no damage was computed
    pub fn evaded() -> Self {
        HitOutcome {
            damage: 0,
            is_critical: false,
            is_evaded: true,
        }
    }

    pub fn landed(damage: u32, is_critical: bool) -> Self {
        HitOutcome {
            damage,
            is_critical,
            is_evaded: false,
        }
    }
}

/// Figures needed to resolve one attack
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Strike {
    pub attack: f64,
    pub defense: u32,
    pub attacker_level: u32,
    pub defender_level: u32,
    pub crit_chance: f64,
}

pub fn roll_evasion(evasion_chance: f64, rng: &mut impl Rng) -> bool {
    roll_chance(evasion_chance, rng)
}

pub fn roll_critical(crit_chance: f64, rng: &mut impl Rng) -> bool {
    roll_chance(crit_chance, rng)
}

/// Damage then critical roll for a hit already known to land
pub fn roll_hit(strike: &Strike, constants: &CombatConstants, rng: &mut impl Rng) -> HitOutcome {
    let damage = calculate_damage(
        strike.attack,
        strike.defense,
        strike.attacker_level,
        strike.defender_level,
        constants,
        rng,
    );

    let is_critical = roll_critical(strike.crit_chance, rng);
    if is_critical {
        debug!(damage, "critical hit");
        HitOutcome::landed(apply_critical(damage, constants), true)
    } else {
        HitOutcome::landed(damage, false)
    }
}

/// Full attack: evasion first, then damage and critical
pub fn resolve_attack(
    strike: &Strike,
    evasion_chance: f64,
    constants: &CombatConstants,
    rng: &mut impl Rng,
) -> HitOutcome {
    if roll_evasion(evasion_chance, rng) {
        debug!("attack evaded");
        return HitOutcome::evaded();
    }
    roll_hit(strike, constants, rng)
}
