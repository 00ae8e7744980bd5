//! Payload DTOs for endpoints whose responses are not plain domain types

use serde::{Deserialize, Serialize};

use nocturne_domain::{Character, UserId};

/// `POST /auth/login`, `POST /auth/register`, `GET /auth/user`
///
/// Registration responses may omit the token when the backend requires a
/// separate login; `GET /auth/user` omits it always.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthPayload {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<UserData>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserData {
    pub id: UserId,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// One reward granted by `POST /quests/{id}/claim`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardGrant {
    pub name: String,
    #[serde(default)]
    pub amount: Option<u64>,
}

/// `POST /quests/{id}/claim`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimedRewards {
    #[serde(default)]
    pub rewards: Vec<RewardGrant>,
}

/// `GET /game/versus` - opponents eligible for a fight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersusRoster {
    #[serde(default)]
    pub characters: Vec<Character>,
}

/// `GET /game/board` - current board position and history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardState {
    pub position: u32,
    pub board_size: u32,
    #[serde(default)]
    pub log: Vec<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub game_over: bool,
}

/// `POST /game/board/play` - the result of one turn
///
/// `log_lines` holds only the lines produced by this turn; the client
/// appends them to its accumulated log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardTurn {
    pub position: u32,
    #[serde(default)]
    pub roll: Option<u32>,
    #[serde(default)]
    pub log_lines: Vec<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub game_over: bool,
}
