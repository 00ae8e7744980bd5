//! Combat Replay Controller
//!
//! Owns the playback cursor over an already-fetched, immutable sequence of
//! combat rounds. Auto-advance is a single-shot-rescheduled sleep, not an
//! interval: between ticks the state is observable and cancellable. Every
//! way out of `playing` (pause, all-rounds mode, reset, a new result)
//! bumps a generation counter, so a sleep that was already pending when
//! the transition happened wakes up, sees a stale generation, and does
//! nothing. At most one live timer can advance a given controller.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use nocturne_domain::{CombatResult, Round};

use crate::ports::outbound::SleepProvider;
use crate::state::state_cell::StateCell;

/// Delay between auto-advanced rounds
pub const DEFAULT_ROUND_INTERVAL_MS: u64 = 1500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReplayMode {
    /// One round at a time, driven by next/previous or auto-advance
    #[default]
    StepByStep,
    /// Every round shown simultaneously; step playback suspended
    AllRounds,
}

#[derive(Debug, Clone, Default)]
pub struct ReplayState {
    pub result: Option<CombatResult>,
    /// Cursor into `result.rounds`; meaningless while `result` is None
    pub index: usize,
    pub playing: bool,
    pub mode: ReplayMode,
}

impl ReplayState {
    pub fn round_count(&self) -> usize {
        self.result.as_ref().map_or(0, CombatResult::round_count)
    }

    pub fn current_round(&self) -> Option<&Round> {
        self.result.as_ref().and_then(|r| r.rounds.get(self.index))
    }

    /// True once the cursor rests on the last round.
    pub fn finished(&self) -> bool {
        let n = self.round_count();
        n > 0 && self.index + 1 == n
    }

    fn can_play(&self) -> bool {
        self.mode == ReplayMode::StepByStep && self.round_count() > 0 && !self.finished()
    }
}

#[derive(Clone)]
pub struct ReplayController {
    state: StateCell<ReplayState>,
    generation: Arc<AtomicU64>,
    interval_ms: u64,
}

impl Default for ReplayController {
    fn default() -> Self {
        Self::new(DEFAULT_ROUND_INTERVAL_MS)
    }
}

impl ReplayController {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            state: StateCell::new(ReplayState::default()),
            generation: Arc::new(AtomicU64::new(0)),
            interval_ms,
        }
    }

    pub fn state(&self) -> &StateCell<ReplayState> {
        &self.state
    }

    /// Load a fresh result: idle/anything -> paused at round 0.
    pub fn load_result(&self, result: CombatResult) {
        self.cancel_timer();
        self.state.set(ReplayState {
            result: Some(result),
            index: 0,
            playing: false,
            mode: ReplayMode::StepByStep,
        });
    }

    /// Step forward; no-op at the last round or while playing.
    pub fn next(&self) {
        self.state.update(|s| {
            if s.playing || s.mode == ReplayMode::AllRounds {
                return;
            }
            if s.index + 1 < s.round_count() {
                s.index += 1;
            }
        });
    }

    /// Step backward; no-op at the first round or while playing.
    pub fn previous(&self) {
        self.state.update(|s| {
            if s.playing || s.mode == ReplayMode::AllRounds {
                return;
            }
            s.index = s.index.saturating_sub(1);
        });
    }

    /// Start auto-advance from the current position. Resolves when
    /// playback pauses, finishes, or is cancelled; the presentation
    /// binding drives (spawns) the returned future.
    pub async fn play(&self, sleep: &impl SleepProvider) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let armed = self.state.update(|s| {
            if s.can_play() {
                s.playing = true;
                true
            } else {
                false
            }
        });
        if !armed {
            return;
        }

        loop {
            sleep.sleep_ms(self.interval_ms).await;
            // A transition out of `playing` while we slept makes this tick
            // stale; applying it would resurrect a cancelled replay.
            if self.generation.load(Ordering::SeqCst) != generation {
                return;
            }
            let keep_going = self.state.update(|s| {
                if !s.playing {
                    return false;
                }
                if s.index + 1 < s.round_count() {
                    s.index += 1;
                }
                if s.finished() {
                    s.playing = false;
                    false
                } else {
                    true
                }
            });
            if !keep_going {
                return;
            }
        }
    }

    /// Stop auto-advance, keeping the cursor where it is.
    pub fn pause(&self) {
        self.cancel_timer();
        self.state.update(|s| s.playing = false);
    }

    /// Show every round at once; cancels any active auto-advance.
    pub fn show_all(&self) {
        self.cancel_timer();
        self.state.update(|s| {
            s.playing = false;
            s.mode = ReplayMode::AllRounds;
        });
    }

    /// Return to step-by-step display, paused at the current cursor.
    pub fn show_step_by_step(&self) {
        self.state.update(|s| s.mode = ReplayMode::StepByStep);
    }

    /// Back to idle; invoked after "try another quest" or on teardown.
    pub fn reset(&self) {
        self.cancel_timer();
        self.state.set(ReplayState::default());
    }

    fn cancel_timer(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::testing::{fixtures, InstantSleep};

    fn loaded_controller(rounds: usize) -> ReplayController {
        let controller = ReplayController::new(10);
        controller.load_result(fixtures::combat_result(rounds));
        controller
    }

    #[test]
    fn load_result_starts_paused_at_round_zero() {
        let controller = loaded_controller(3);
        let state = controller.state().get();
        assert_eq!(state.index, 0);
        assert!(!state.playing);
        assert_eq!(state.round_count(), 3);
        assert!(!state.finished());
    }

    #[test]
    fn next_clamps_at_last_round() {
        let controller = loaded_controller(3);
        controller.next();
        controller.next();
        controller.next();
        assert_eq!(controller.state().get().index, 2);
        controller.next(); // no-op at the last round
        assert_eq!(controller.state().get().index, 2);
        assert!(controller.state().get().finished());
    }

    #[test]
    fn previous_clamps_at_first_round() {
        let controller = loaded_controller(3);
        controller.previous();
        assert_eq!(controller.state().get().index, 0);
    }

    #[tokio::test]
    async fn play_advances_to_the_end_and_stops() {
        let controller = loaded_controller(4);
        controller.play(&InstantSleep).await;
        let state = controller.state().get();
        assert_eq!(state.index, 3);
        assert!(!state.playing);
        assert!(state.finished());
    }

    #[tokio::test]
    async fn play_near_the_end_advances_once_then_stops() {
        let controller = loaded_controller(3);
        controller.next(); // index 1 == N-2
        controller.play(&InstantSleep).await;
        let state = controller.state().get();
        assert_eq!(state.index, 2);
        assert!(!state.playing);
    }

    #[tokio::test]
    async fn play_at_last_round_is_ignored() {
        let controller = loaded_controller(2);
        controller.next();
        controller.play(&InstantSleep).await;
        let state = controller.state().get();
        assert_eq!(state.index, 1);
        assert!(!state.playing);
    }

    #[tokio::test]
    async fn play_in_all_rounds_mode_is_ignored() {
        let controller = loaded_controller(3);
        controller.show_all();
        controller.play(&InstantSleep).await;
        assert_eq!(controller.state().get().index, 0);
    }

    #[tokio::test]
    async fn pause_while_timer_pending_discards_the_tick() {
        // The sleep provider pauses the controller while the tick is
        // "pending", simulating user input racing the timer. The stale
        // tick must not advance the cursor.
        #[derive(Clone)]
        struct PauseDuringSleep {
            controller: ReplayController,
        }
        impl SleepProvider for PauseDuringSleep {
            fn sleep_ms(
                &self,
                _ms: u64,
            ) -> std::pin::Pin<Box<dyn std::future::Future<Output = ()> + 'static>> {
                self.controller.pause();
                Box::pin(async {})
            }
        }

        let controller = loaded_controller(5);
        let sleep = PauseDuringSleep {
            controller: controller.clone(),
        };
        controller.play(&sleep).await;

        let state = controller.state().get();
        assert_eq!(state.index, 0, "stale tick must not advance");
        assert!(!state.playing);
    }

    #[tokio::test]
    async fn show_all_cancels_auto_advance() {
        #[derive(Clone)]
        struct ShowAllDuringSleep {
            controller: ReplayController,
        }
        impl SleepProvider for ShowAllDuringSleep {
            fn sleep_ms(
                &self,
                _ms: u64,
            ) -> std::pin::Pin<Box<dyn std::future::Future<Output = ()> + 'static>> {
                self.controller.show_all();
                Box::pin(async {})
            }
        }

        let controller = loaded_controller(5);
        let sleep = ShowAllDuringSleep {
            controller: controller.clone(),
        };
        controller.play(&sleep).await;

        let state = controller.state().get();
        assert_eq!(state.index, 0);
        assert_eq!(state.mode, ReplayMode::AllRounds);
    }

    #[test]
    fn reset_returns_to_idle() {
        let controller = loaded_controller(3);
        controller.next();
        controller.reset();
        let state = controller.state().get();
        assert!(state.result.is_none());
        assert_eq!(state.index, 0);
        assert_eq!(state.round_count(), 0);
        assert!(!state.finished());
    }

    #[test]
    fn steps_are_ignored_in_all_rounds_mode() {
        let controller = loaded_controller(3);
        controller.show_all();
        controller.next();
        assert_eq!(controller.state().get().index, 0);
        controller.show_step_by_step();
        controller.next();
        assert_eq!(controller.state().get().index, 1);
    }
}
