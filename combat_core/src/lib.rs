//! combat_core - Turn-based combat resolution for text-adventure RPGs
//!
//! This library provides:
//! - StatRoller: secondary combat stats (crit / evasion) for players and enemies
//! - DamageModel: single-hit damage with variance, mitigation and level scaling
//! - StatusEffectTracker: damage-over-time ticking and buff expiry
//! - SkillSelector: enemy skill choice and enemy turn resolution
//! - CombatResolver: the round state machine and `CombatSession`
//! - RewardCalculator: gold, experience and loot on victory

pub mod combat;
pub mod config;
pub mod damage;
pub mod effect;
pub mod enemy;
pub mod item;
pub mod player;
pub mod prelude;
pub mod reward;
pub mod rng;
pub mod skill;
pub mod stats;
pub mod types;

// Re-export core types for convenience
pub use combat::{
    resolve_round, CombatError, CombatPhase, CombatSession, CombatState, CombatSummary,
    PlayerAction, RoundOutcome, RoundReport,
};
pub use config::{default_enemies, default_items, CombatConstants, ConfigError};
pub use damage::{calculate_damage, HitOutcome};
pub use effect::{EffectKind, StatModifier, StatusEffect};
pub use enemy::{CombatEnemy, EnemyDefinition, EnemyRegistry, GoldRange, LootEntry};
pub use item::{EquipmentStats, GrowthStat, Inventory, Item, ItemCatalog, ItemEffect, ItemKind};
pub use player::PlayerCombatant;
pub use reward::{LootDrop, Reward};
pub use skill::{EnemySkill, SkillKind};
pub use stats::{PlayerCombatStats, SecondaryStats};
pub use types::{Element, StatKind};
