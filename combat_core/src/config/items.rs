//! Item catalog loading

use crate::item::{Item, ItemCatalog, ItemEffect, ItemKind};
use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Container for item definitions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemsConfig {
    pub items: Vec<Item>,
}

impl ItemsConfig {
    fn into_catalog(self) -> Result<ItemCatalog, ConfigError> {
        let mut catalog = ItemCatalog::new();
        for item in self.items {
            if item.kind == ItemKind::Consumable && item.effect.is_none() {
                return Err(ConfigError::ValidationError(format!(
                    "consumable '{}' has no effect",
                    item.id
                )));
            }
            if let Some(ItemEffect::TempBuff { duration: 0, .. }) = item.effect {
                return Err(ConfigError::ValidationError(format!(
                    "buff item '{}' must last at least one turn",
                    item.id
                )));
            }
            if catalog.contains(&item.id) {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate item id '{}'",
                    item.id
                )));
            }
            catalog.register(item);
        }
        Ok(catalog)
    }
}

/// Load the item catalog from a TOML file
pub fn load_item_catalog(path: &Path) -> Result<ItemCatalog, ConfigError> {
    let config: ItemsConfig = super::load_toml(path)?;
    config.into_catalog()
}

/// Load the item catalog from a TOML string
pub fn parse_item_catalog(content: &str) -> Result<ItemCatalog, ConfigError> {
    let config: ItemsConfig = super::parse_toml(content)?;
    config.into_catalog()
}

/// Get the built-in item catalog
pub fn default_items() -> ItemCatalog {
    let toml = include_str!("../../config/items.toml");
    parse_item_catalog(toml).unwrap_or_else(|_| ItemCatalog::new())
}
