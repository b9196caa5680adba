//! CombatState - Everything a round reads and writes

use crate::effect::StatusEffect;
use crate::enemy::CombatEnemy;
use crate::player::PlayerCombatant;
use serde::{Deserialize, Serialize};

/// One player choice for the round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerAction {
    Attack,
    Flee,
    /// Use a consumable by item id
    UseItem(String),
}

/// Snapshot of an ongoing combat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatState {
    /// Rounds resolved so far
    pub round: u32,
    pub player: PlayerCombatant,
    /// Damage-over-time effects on the player
    pub player_effects: Vec<StatusEffect>,
    /// Buffs from items the player used
    pub player_buffs: Vec<StatusEffect>,
    pub enemy: CombatEnemy,
    /// Running totals across all rounds
    pub damage_dealt: u64,
    pub damage_taken: u64,
}

impl CombatState {
    pub fn new(player: PlayerCombatant, enemy: CombatEnemy) -> Self {
        CombatState {
            round: 0,
            player,
            player_effects: Vec::new(),
            player_buffs: Vec::new(),
            enemy,
            damage_dealt: 0,
            damage_taken: 0,
        }
    }
}
