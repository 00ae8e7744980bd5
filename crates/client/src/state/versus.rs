//! Versus Controller - two-participant fight selection
//!
//! Selection problems (missing picks, the same character twice) are
//! client guards: they set an inline error and never reach the network.
//! A successful fight stores the validated result; the caller hands it to
//! a [`ReplayController`](crate::state::ReplayController) for playback.

use tracing::warn;

use nocturne_domain::{Character, CharacterId, CombatResult};

use crate::application::services::GameService;
use crate::state::state_cell::StateCell;

#[derive(Debug, Clone, Default)]
pub struct VersusState {
    pub roster: Vec<Character>,
    pub player1: Option<CharacterId>,
    pub player2: Option<CharacterId>,
    pub result: Option<CombatResult>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Clone)]
pub struct VersusController {
    service: GameService,
    state: StateCell<VersusState>,
}

impl VersusController {
    pub fn new(service: GameService) -> Self {
        Self {
            service,
            state: StateCell::new(VersusState::default()),
        }
    }

    pub fn state(&self) -> &StateCell<VersusState> {
        &self.state
    }

    /// `GET /game/versus` - fetch the eligible participants.
    pub async fn load_roster(&self) {
        self.state.update(|s| {
            s.loading = true;
            s.error = None;
        });
        match self.service.versus_roster().await {
            Ok(roster) => self.state.update(|s| {
                s.roster = roster;
                s.loading = false;
            }),
            Err(e) => {
                warn!(error = %e, "versus roster load failed");
                self.state.update(|s| {
                    s.loading = false;
                    s.error = Some(e.user_message());
                });
            }
        }
    }

    pub fn select_player1(&self, id: Option<CharacterId>) {
        self.state.update(|s| s.player1 = id);
    }

    pub fn select_player2(&self, id: Option<CharacterId>) {
        self.state.update(|s| s.player2 = id);
    }

    /// Resolve the fight. Rejected locally when the selection is missing
    /// or both picks are the same character.
    pub async fn fight(&self) {
        let (player1, player2) = {
            let snapshot = self.state.get();
            (snapshot.player1, snapshot.player2)
        };

        let (player1, player2) = match (player1, player2) {
            (Some(p1), Some(p2)) if p1 != p2 => (p1, p2),
            (Some(p1), Some(p2)) if p1 == p2 => {
                self.state
                    .update(|s| s.error = Some("Pick two different characters.".to_string()));
                return;
            }
            _ => {
                self.state
                    .update(|s| s.error = Some("Pick both fight participants.".to_string()));
                return;
            }
        };

        self.state.update(|s| {
            s.loading = true;
            s.error = None;
        });
        match self.service.versus_fight(player1, player2).await {
            Ok(result) => self.state.update(|s| {
                s.result = Some(result);
                s.loading = false;
            }),
            Err(e) => {
                warn!(error = %e, "versus fight failed");
                self.state.update(|s| {
                    s.loading = false;
                    s.error = Some(e.user_message());
                });
            }
        }
    }

    /// Clear the previous result before a rematch.
    pub fn clear_result(&self) {
        self.state.update(|s| s.result = None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::Api;
    use crate::ports::outbound::MockRawApiPort;
    use std::sync::Arc;

    fn controller(mock: MockRawApiPort) -> VersusController {
        VersusController::new(GameService::new(Api::new(Arc::new(mock))))
    }

    #[tokio::test]
    async fn equal_ids_are_rejected_before_any_network_call() {
        let mock = MockRawApiPort::new(); // no expectations: any call panics
        let controller = controller(mock);
        controller.select_player1(Some(CharacterId::new(4)));
        controller.select_player2(Some(CharacterId::new(4)));

        controller.fight().await;

        let state = controller.state().get();
        assert!(state.result.is_none());
        assert!(state.error.is_some());
    }

    #[tokio::test]
    async fn missing_selection_is_rejected_locally() {
        let controller = controller(MockRawApiPort::new());
        controller.select_player1(Some(CharacterId::new(4)));

        controller.fight().await;

        assert!(controller.state().get().error.is_some());
    }

    #[tokio::test]
    async fn distinct_ids_resolve_and_store_the_result() {
        let mut mock = MockRawApiPort::new();
        mock.expect_post_json()
            .withf(|path, body| {
                path == "/game/versus/fight" && body["player1_id"] == 1 && body["player2_id"] == 2
            })
            .returning(|_, _| {
                Ok(serde_json::json!({
                    "status": "success",
                    "data": {
                        "winner": "Vex",
                        "attacker": { "name": "Vex", "original_health": 30 },
                        "defender": { "name": "Grull", "original_health": 25 },
                        "rounds": [
                            { "number": 1, "winner": "Vex",
                              "attacker_health": 28, "defender_health": 0 }
                        ]
                    }
                }))
            });
        let controller = controller(mock);
        controller.select_player1(Some(CharacterId::new(1)));
        controller.select_player2(Some(CharacterId::new(2)));

        controller.fight().await;

        let state = controller.state().get();
        assert!(state.error.is_none());
        assert_eq!(
            state.result.as_ref().map(|r| r.winner.as_str()),
            Some("Vex")
        );
    }

    #[tokio::test]
    async fn roster_load_failure_is_inline() {
        let mut mock = MockRawApiPort::new();
        mock.expect_get_json().returning(|_| {
            Ok(serde_json::json!({
                "status": "error",
                "code": "internal_error",
                "message": "boom"
            }))
        });
        let controller = controller(mock);

        controller.load_roster().await;

        let state = controller.state().get();
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("boom"));
    }
}
