//! Inventory - item ids with stack counts

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryEntry {
    pub item_id: String,
    pub quantity: u32,
}

/// Items the player carries into combat
///
/// Entries keep insertion order; an entry is removed when its count hits zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    #[serde(default)]
    entries: Vec<InventoryEntry>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item_id: &str, quantity: u32) {
        if quantity == 0 {
            return;
        }
        match self.entries.iter_mut().find(|e| e.item_id == item_id) {
            Some(entry) => entry.quantity += quantity,
            None => self.entries.push(InventoryEntry {
                item_id: item_id.to_string(),
                quantity,
            }),
        }
    }

    /// Take one unit; returns false if none was held
    pub fn remove_one(&mut self, item_id: &str) -> bool {
        let Some(index) = self.entries.iter().position(|e| e.item_id == item_id) else {
            return false;
        };
        let entry = &mut self.entries[index];
        entry.quantity -= 1;
        if entry.quantity == 0 {
            self.entries.remove(index);
        }
        true
    }

    pub fn quantity(&self, item_id: &str) -> u32 {
        self.entries
            .iter()
            .find(|e| e.item_id == item_id)
            .map_or(0, |e| e.quantity)
    }

    pub fn contains(&self, item_id: &str) -> bool {
        self.quantity(item_id) > 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &InventoryEntry> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
