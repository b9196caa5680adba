//! Victory rewards - gold, experience and loot

use crate::enemy::CombatEnemy;
use crate::rng::{roll, roll_chance};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Inclusive gold range, written as `[min, max]` in config
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(u32, u32)", into = "(u32, u32)")]
pub struct GoldRange {
    pub min: u32,
    pub max: u32,
}

impl GoldRange {
    pub fn new(min: u32, max: u32) -> Self {
        GoldRange { min, max }
    }

    /// A range that always yields `amount`
    pub fn fixed(amount: u32) -> Self {
        GoldRange::new(amount, amount)
    }
}

impl From<(u32, u32)> for GoldRange {
    fn from((min, max): (u32, u32)) -> Self {
        GoldRange { min, max }
    }
}

impl From<GoldRange> for (u32, u32) {
    fn from(range: GoldRange) -> Self {
        (range.min, range.max)
    }
}

/// One possible drop, rolled independently on victory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LootEntry {
    pub item_id: String,
    pub chance: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LootDrop {
    pub item_id: String,
    pub quantity: u32,
}

/// Deltas for the caller to apply to its player aggregate
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    pub exp: u32,
    pub gold: u32,
    pub loot: Vec<LootDrop>,
}

/// Uniform integer in `[min, max]`
pub fn roll_gold(range: GoldRange, rng: &mut impl Rng) -> u32 {
    let span = range.max.saturating_sub(range.min) as f64 + 1.0;
    (roll(rng) * span).floor() as u32 + range.min
}

/// One Bernoulli trial per entry, each success granting a single unit
pub fn roll_loot(table: &[LootEntry], rng: &mut impl Rng) -> Vec<LootDrop> {
    table
        .iter()
        .filter(|entry| roll_chance(entry.chance, rng))
        .map(|entry| LootDrop {
            item_id: entry.item_id.clone(),
            quantity: 1,
        })
        .collect()
}

/// Rewards for defeating `enemy`; gold is rolled before loot
pub fn roll_reward(enemy: &CombatEnemy, rng: &mut impl Rng) -> Reward {
    let gold = roll_gold(enemy.gold, rng);
    let loot = roll_loot(&enemy.loot, rng);
    debug!(enemy = %enemy.id, gold, exp = enemy.exp, drops = loot.len(), "rewards rolled");

    Reward {
        exp: enemy.exp,
        gold,
        loot,
    }
}
