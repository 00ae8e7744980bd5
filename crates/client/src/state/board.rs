//! Board Controller - single-character sequential turn advance
//!
//! Each turn call returns the new position plus only the log lines that
//! turn produced; the controller appends them to an accumulating log
//! rather than replacing it. Once a terminal flag (completed or game-over)
//! is set, further turns are frozen locally.

use tracing::warn;

use crate::application::services::GameService;
use crate::state::state_cell::StateCell;

#[derive(Debug, Clone, Default)]
pub struct BoardViewState {
    pub position: u32,
    pub board_size: u32,
    /// Accumulated turn log; grows, never shrinks, within one game
    pub log: Vec<String>,
    pub last_roll: Option<u32>,
    pub completed: bool,
    pub game_over: bool,
    pub loading: bool,
    pub error: Option<String>,
}

impl BoardViewState {
    /// Terminal: no further turns may be played.
    pub fn frozen(&self) -> bool {
        self.completed || self.game_over
    }
}

#[derive(Clone)]
pub struct BoardController {
    service: GameService,
    state: StateCell<BoardViewState>,
}

impl BoardController {
    pub fn new(service: GameService) -> Self {
        Self {
            service,
            state: StateCell::new(BoardViewState::default()),
        }
    }

    pub fn state(&self) -> &StateCell<BoardViewState> {
        &self.state
    }

    /// `GET /game/board` - replace local state with the server's, including
    /// the historical log.
    pub async fn load(&self) {
        self.state.update(|s| {
            s.loading = true;
            s.error = None;
        });
        match self.service.board_state().await {
            Ok(board) => self.state.set(BoardViewState {
                position: board.position,
                board_size: board.board_size,
                log: board.log,
                last_roll: None,
                completed: board.completed,
                game_over: board.game_over,
                loading: false,
                error: None,
            }),
            Err(e) => {
                warn!(error = %e, "board load failed");
                self.state.update(|s| {
                    s.loading = false;
                    s.error = Some(e.user_message());
                });
            }
        }
    }

    /// Play one turn. A no-op once the game reached a terminal state.
    pub async fn play_turn(&self) {
        if self.state.get().frozen() {
            return;
        }
        self.state.update(|s| {
            s.loading = true;
            s.error = None;
        });
        match self.service.board_play().await {
            Ok(turn) => self.state.update(|s| {
                s.position = turn.position;
                s.last_roll = turn.roll;
                s.log.extend(turn.log_lines);
                s.completed = turn.completed;
                s.game_over = turn.game_over;
                s.loading = false;
            }),
            Err(e) => {
                warn!(error = %e, "board turn failed");
                self.state.update(|s| {
                    s.loading = false;
                    s.error = Some(e.user_message());
                });
            }
        }
    }
}
