//! Prelude module for convenient imports
//!
//! ```rust
//! use combat_core::prelude::*;
//! ```

// Session and rounds
pub use crate::combat::{
    resolve_round, CombatError, CombatPhase, CombatSession, CombatState, CombatSummary,
    PlayerAction, RoundOutcome, RoundReport,
};

// Combatants
pub use crate::enemy::{CombatEnemy, EnemyDefinition, EnemyRegistry};
pub use crate::player::PlayerCombatant;

// Items and rewards
pub use crate::item::{Inventory, Item, ItemCatalog, ItemEffect, ItemKind};
pub use crate::reward::{LootDrop, Reward};

// Effects and skills
pub use crate::effect::{StatusEffect, EffectKind};
pub use crate::skill::{EnemySkill, SkillKind};

// Config
pub use crate::config::{default_enemies, default_items, CombatConstants};
