//! Application services - one typed method per backend call
//!
//! Each service maps exactly one UI action to exactly one HTTP call and
//! normalizes the response shape. No service holds view state; that is the
//! controllers' job.

pub mod auth_service;
pub mod character_service;
pub mod game_service;
pub mod inventory_service;
pub mod quest_service;

pub use auth_service::AuthService;
pub use character_service::CharacterService;
pub use game_service::GameService;
pub use inventory_service::{InventoryService, ItemSortKey, SortOrder};
pub use quest_service::{QuestCategory, QuestService};
