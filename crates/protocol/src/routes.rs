//! Endpoint path constructors
//!
//! One function per backend route keeps path assembly out of the services
//! and gives the whole surface a single place to change if the base path
//! moves. Paths are relative to the gateway's configured base URL.

use nocturne_domain::{CharacterId, ItemId, QuestId, StepId};

// === Auth ===

pub fn auth_login() -> String {
    "/auth/login".to_string()
}

pub fn auth_register() -> String {
    "/auth/register".to_string()
}

pub fn auth_user() -> String {
    "/auth/user".to_string()
}

// === Characters ===

pub fn characters() -> String {
    "/characters".to_string()
}

pub fn character(id: CharacterId) -> String {
    format!("/characters/{id}")
}

pub fn character_select(id: CharacterId) -> String {
    format!("/characters/{id}/select")
}

// === Inventory ===

pub fn inventory(sort_by: Option<&str>, order: Option<&str>) -> String {
    match (sort_by, order) {
        (Some(sort_by), Some(order)) => format!("/inventory?sort_by={sort_by}&order={order}"),
        (Some(sort_by), None) => format!("/inventory?sort_by={sort_by}"),
        _ => "/inventory".to_string(),
    }
}

pub fn inventory_types() -> String {
    "/inventory/types".to_string()
}

pub fn inventory_item(id: ItemId) -> String {
    format!("/inventory/{id}")
}

pub fn inventory_consume(id: ItemId) -> String {
    format!("/inventory/{id}/consume")
}

// === Quests ===

pub fn quests() -> String {
    "/quests".to_string()
}

pub fn quests_active() -> String {
    "/quests/active".to_string()
}

pub fn quests_completed() -> String {
    "/quests/completed".to_string()
}

pub fn quest(id: QuestId) -> String {
    format!("/quests/{id}")
}

pub fn quest_accept(id: QuestId) -> String {
    format!("/quests/{id}/accept")
}

pub fn quest_abandon(id: QuestId) -> String {
    format!("/quests/{id}/abandon")
}

pub fn quest_step_complete(id: QuestId, step: StepId) -> String {
    format!("/quests/{id}/steps/{step}/complete")
}

pub fn quest_claim(id: QuestId) -> String {
    format!("/quests/{id}/claim")
}

// === Game modes ===

pub fn game_board() -> String {
    "/game/board".to_string()
}

pub fn game_board_play() -> String {
    "/game/board/play".to_string()
}

pub fn game_versus() -> String {
    "/game/versus".to_string()
}

pub fn game_versus_fight() -> String {
    "/game/versus/fight".to_string()
}
