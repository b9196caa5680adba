//! Items - catalog definitions, effects and the player inventory

mod catalog;
mod inventory;

pub use catalog::ItemCatalog;
pub use inventory::{Inventory, InventoryEntry};

use crate::types::{Element, StatKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Consumable,
    Weapon,
    Armor,
}

/// Stat a permanent-growth item raises
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrowthStat {
    MaxHealth,
    Attack,
    Defense,
}

/// What using an item does
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemEffect {
    /// Restore health (field use)
    Heal { amount: u32 },
    /// Raise a base stat for good (field use)
    PermanentStat { stat: GrowthStat, amount: u32 },
    /// End combat by escaping, no roll
    GuaranteeFlee,
    /// Fixed damage to the enemy, ignoring defense
    DealDamage { amount: u32 },
    /// Temporary stat buff on the player
    TempBuff { stat: StatKind, amount: i32, duration: u32 },
    /// Clear damage-over-time effects from the player
    CureStatus,
    /// Fixed elemental damage to the enemy, ignoring defense
    ElementalDamage { element: Element, amount: u32 },
}

impl ItemEffect {
    /// Whether the effect does anything during a fight
    pub fn works_in_combat(&self) -> bool {
        match self {
            ItemEffect::GuaranteeFlee
            | ItemEffect::DealDamage { .. }
            | ItemEffect::ElementalDamage { .. }
            | ItemEffect::TempBuff { .. }
            | ItemEffect::CureStatus => true,
            ItemEffect::Heal { .. } | ItemEffect::PermanentStat { .. } => false,
        }
    }
}

/// Attack/defense granted while equipped
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentStats {
    #[serde(default)]
    pub attack: u32,
    #[serde(default)]
    pub defense: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub kind: ItemKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect: Option<ItemEffect>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<EquipmentStats>,
}

impl Item {
    pub fn consumable(id: &str, name: &str, effect: ItemEffect) -> Self {
        Item {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            kind: ItemKind::Consumable,
            effect: Some(effect),
            stats: None,
        }
    }

    pub fn equipment(id: &str, name: &str, kind: ItemKind, stats: EquipmentStats) -> Self {
        Item {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            kind,
            effect: None,
            stats: Some(stats),
        }
    }

    /// Consumables whose effect applies during combat
    pub fn is_combat_usable(&self) -> bool {
        self.kind == ItemKind::Consumable
            && self.effect.as_ref().is_some_and(ItemEffect::works_in_combat)
    }

    pub fn equipment_stats(&self) -> EquipmentStats {
        self.stats.unwrap_or_default()
    }
}
