//! View-state controllers
//!
//! Each controller owns one screen's state exclusively, behind a
//! [`StateCell`]: presentation bindings read snapshots, subscribe for
//! changes, and call the async action methods. Controllers never share
//! state with each other; anything one screen needs from another arrives
//! via a fresh backend response.

pub mod board;
pub mod quest_detail;
pub mod quest_filters;
pub mod quest_list;
pub mod replay;
pub mod state_cell;
pub mod versus;

pub use board::{BoardController, BoardViewState};
pub use quest_detail::{QuestDetailController, QuestDetailState};
pub use quest_filters::{apply_filters, QuestFilters, SortDirection, SortKey};
pub use quest_list::{QuestListController, QuestListState, QuestNavigation};
pub use replay::{ReplayController, ReplayMode, ReplayState, DEFAULT_ROUND_INTERVAL_MS};
pub use state_cell::StateCell;
pub use versus::{VersusController, VersusState};
