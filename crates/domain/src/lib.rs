//! Nocturne Domain - Core domain types and invariants
//!
//! This crate contains the data model shared by the client: quests and their
//! steps, combat results, characters, and inventory items. It is pure data
//! plus the invariants those types carry (quest status transitions, combat
//! round consistency, derived step state).
//!
//! # Design Principles
//!
//! 1. **No I/O** - deserialization happens at the gateway boundary
//! 2. **Validated on entry** - `CombatResult::validate` and the quest
//!    transition methods are the only places invariants are enforced
//! 3. **WASM compatible** - compiles for both native and wasm32 targets

pub mod character;
pub mod combat;
pub mod error;
pub mod ids;
pub mod item;
pub mod quest;

pub use character::{Character, CharacterClass, Race};
pub use combat::{CombatResult, Combatant, Round};
pub use error::DomainError;
pub use ids::{CharacterId, ItemId, QuestId, StepId, UserId};
pub use item::InventoryItem;
pub use quest::{Difficulty, Quest, QuestRewards, QuestStatus, QuestStep, StepState};
