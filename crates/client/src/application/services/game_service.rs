//! Game Service - the board and versus game modes
//!
//! Versus results are validated on entry: a combat result whose rounds are
//! inconsistent would make the replay controller lie, so it never gets past
//! this boundary.

use nocturne_domain::{Character, CharacterId, CombatResult};
use nocturne_protocol::{routes, BoardState, BoardTurn, VersusFightRequest, VersusRoster};

use crate::application::{Api, ServiceError};

#[derive(Clone)]
pub struct GameService {
    api: Api,
}

impl GameService {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    /// `GET /game/board` - position and history for the selected character
    pub async fn board_state(&self) -> Result<BoardState, ServiceError> {
        self.api.get(&routes::game_board()).await
    }

    /// `POST /game/board/play` - one turn; the backend rolls
    pub async fn board_play(&self) -> Result<BoardTurn, ServiceError> {
        self.api.post_empty(&routes::game_board_play()).await
    }

    /// `GET /game/versus` - characters eligible as fight participants
    pub async fn versus_roster(&self) -> Result<Vec<Character>, ServiceError> {
        let roster: VersusRoster = self.api.get(&routes::game_versus()).await?;
        Ok(roster.characters)
    }

    /// `POST /game/versus/fight` - resolve a fight between two characters
    pub async fn versus_fight(
        &self,
        player1: CharacterId,
        player2: CharacterId,
    ) -> Result<CombatResult, ServiceError> {
        let request = VersusFightRequest {
            player1_id: player1,
            player2_id: player2,
        };
        let result: CombatResult = self.api.post(&routes::game_versus_fight(), &request).await?;
        result
            .validate()
            .map_err(|e| ServiceError::Parse(e.to_string()))?;
        Ok(result)
    }
}
