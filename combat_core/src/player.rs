//! PlayerCombatant - The player snapshot a combat runs against

use crate::item::{Inventory, ItemCatalog};
use serde::{Deserialize, Serialize};

/// Player figures handed to the engine when combat begins
///
/// The caller owns the authoritative player; the session works on this copy
/// and reports the results back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerCombatant {
    pub name: String,
    pub level: u32,
    /// May dip below zero mid-round
    pub health: i64,
    pub max_health: u32,
    pub attack: u32,
    pub defense: u32,
    #[serde(default)]
    pub inventory: Inventory,
}

impl PlayerCombatant {
    /// Create a player at full health with an empty inventory
    pub fn new(name: &str, level: u32, max_health: u32, attack: u32, defense: u32) -> Self {
        PlayerCombatant {
            name: name.to_string(),
            level,
            health: max_health as i64,
            max_health,
            attack,
            defense,
            inventory: Inventory::new(),
        }
    }

    pub fn with_health(mut self, health: u32) -> Self {
        self.health = health.min(self.max_health) as i64;
        self
    }

    pub fn with_item(mut self, item_id: &str, quantity: u32) -> Self {
        self.inventory.add(item_id, quantity);
        self
    }

    pub fn with_inventory(mut self, inventory: Inventory) -> Self {
        self.inventory = inventory;
        self
    }

    /// Add equipped gear's attack/defense to the base figures
    ///
    /// Ids the catalog does not know contribute nothing.
    pub fn with_equipment(
        mut self,
        weapon: Option<&str>,
        armor: Option<&str>,
        catalog: &ItemCatalog,
    ) -> Self {
        for id in [weapon, armor].into_iter().flatten() {
            if let Some(item) = catalog.get(id) {
                let stats = item.equipment_stats();
                self.attack += stats.attack;
                self.defense += stats.defense;
            }
        }
        self
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.health -= amount as i64;
    }

    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }

    /// Health for display, never below zero
    pub fn display_health(&self) -> u32 {
        self.health.max(0) as u32
    }
}
