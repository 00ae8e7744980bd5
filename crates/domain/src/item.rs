//! Inventory item - objects held by the selected character

use serde::{Deserialize, Serialize};

use crate::ids::ItemId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Type label from `GET /inventory/types` (e.g. "weapon", "potion")
    pub item_type: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    /// Effect text for consumables, if any
    #[serde(default)]
    pub effect: Option<String>,
}

fn default_quantity() -> u32 {
    1
}
