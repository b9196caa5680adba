//! Damage system - hit damage, critical strikes and evasion

mod calculation;
mod hit;

pub use calculation::{
    apply_critical, calculate_damage, damage_from_roll, defense_multiplier, level_modifier,
};
pub use hit::{resolve_attack, roll_critical, roll_evasion, roll_hit, HitOutcome, Strike};
