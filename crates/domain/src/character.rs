//! Character entity - read-mostly, owned by the backend
//!
//! The client never computes stats. It displays characters and selects
//! among them; every number here came off the wire.

use serde::{Deserialize, Serialize};

use crate::ids::CharacterId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Race {
    Human,
    Vampire,
    Werewolf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterClass {
    Warrior,
    Mage,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub race: Race,
    pub class: CharacterClass,
    pub level: u32,
    pub health: u32,
    pub attack: u32,
    pub defense: u32,
    /// Whether this is the account's currently selected character
    #[serde(default)]
    pub is_active: bool,
}
