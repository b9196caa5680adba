//! Round reports and the end-of-combat summary

use crate::reward::Reward;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Combat goes on; another action is expected
    Continuing,
    Victory,
    Defeat,
    Fled,
}

impl RoundOutcome {
    pub fn is_terminal(self) -> bool {
        self != RoundOutcome::Continuing
    }
}

impl fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RoundOutcome::Continuing => "continuing",
            RoundOutcome::Victory => "victory",
            RoundOutcome::Defeat => "defeat",
            RoundOutcome::Fled => "fled",
        };
        f.write_str(s)
    }
}

/// What one call to `resolve_round` did
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundReport {
    /// 1-based round number
    pub round: u32,
    pub outcome: RoundOutcome,
    /// Lines to show the player, in the order things happened
    pub narration: Vec<String>,
    pub player_health: u32,
    pub enemy_health: u32,
    /// Damage the player dealt this round (attacks and items)
    pub damage_dealt: u32,
    /// Damage the player took this round (DOTs and the enemy turn)
    pub damage_taken: u32,
    /// Item spent this round, if any
    pub consumed_item: Option<String>,
    /// Set on victory only
    pub reward: Option<Reward>,
}

/// Totals for a finished combat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatSummary {
    pub enemy_id: String,
    pub enemy_name: String,
    pub outcome: RoundOutcome,
    pub rounds: u32,
    pub damage_dealt: u64,
    pub damage_taken: u64,
    pub reward: Option<Reward>,
}
