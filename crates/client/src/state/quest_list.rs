//! Quest List Controller
//!
//! Owns the quest collection for one category (available/active/completed)
//! plus its filter state, loading/error flags, and the quest lifecycle
//! actions. Successive loads follow "last request wins": a response that
//! arrives after a newer load was issued is discarded instead of clobbering
//! fresher state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::{debug, warn};

use nocturne_domain::{Quest, QuestId, StepId};
use nocturne_protocol::RewardGrant;

use crate::application::services::{QuestCategory, QuestService};
use crate::application::ServiceError;
use crate::state::quest_filters::{apply_filters, QuestFilters};
use crate::state::state_cell::StateCell;

/// Navigation the caller must perform; everything else is shown inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestNavigation {
    /// No character selected; go to the character screen
    CharacterSelect,
    /// The quest no longer exists; go back to the list
    QuestList,
}

#[derive(Debug, Clone)]
pub struct QuestListState {
    pub category: QuestCategory,
    pub quests: Vec<Quest>,
    pub filters: QuestFilters,
    pub loading: bool,
    pub error: Option<String>,
    /// Rewards granted by the most recent claim, for display
    pub last_claimed: Option<Vec<RewardGrant>>,
}

impl QuestListState {
    fn new(category: QuestCategory) -> Self {
        Self {
            category,
            quests: Vec::new(),
            filters: QuestFilters::default(),
            loading: false,
            error: None,
            last_claimed: None,
        }
    }
}

#[derive(Clone)]
pub struct QuestListController {
    service: QuestService,
    state: StateCell<QuestListState>,
    request_seq: Arc<AtomicU64>,
}

impl QuestListController {
    pub fn new(service: QuestService) -> Self {
        Self {
            service,
            state: StateCell::new(QuestListState::new(QuestCategory::Available)),
            request_seq: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn state(&self) -> &StateCell<QuestListState> {
        &self.state
    }

    /// The held list with the current filters applied. Pure over the
    /// snapshot; never touches the stored list.
    pub fn filtered(&self) -> Vec<Quest> {
        let snapshot = self.state.get();
        apply_filters(&snapshot.quests, &snapshot.filters)
    }

    pub fn set_filters(&self, filters: QuestFilters) {
        self.state.update(|s| s.filters = filters);
    }

    /// Called by the binding on navigation away; filters are not persisted.
    pub fn reset_filters(&self) {
        self.state.update(|s| s.filters = QuestFilters::default());
    }

    /// Fetch the collection for `category`, replacing the held list.
    pub async fn load(&self, category: QuestCategory) -> Option<QuestNavigation> {
        let seq = self.request_seq.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.update(|s| {
            s.category = category;
            s.loading = true;
            s.error = None;
        });

        let result = self.service.list(category).await;
        if self.request_seq.load(Ordering::SeqCst) != seq {
            debug!("discarding stale quest list response");
            return None;
        }

        match result {
            Ok(quests) => {
                self.state.update(|s| {
                    s.quests = quests;
                    s.loading = false;
                });
                None
            }
            Err(e) if e.is_character_required() => {
                self.state.update(|s| s.loading = false);
                Some(QuestNavigation::CharacterSelect)
            }
            Err(e) => {
                warn!(error = %e, "quest list load failed");
                self.state.update(|s| {
                    s.loading = false;
                    s.error = Some(e.user_message());
                });
                None
            }
        }
    }

    /// Accept an available quest. On success the local record flips to
    /// active; on failure nothing is mutated.
    pub async fn accept(&self, quest_id: QuestId) -> Option<QuestNavigation> {
        match self.service.accept(quest_id).await {
            Ok(()) => {
                self.state.update(|s| {
                    if let Some(quest) = s.quests.iter_mut().find(|q| q.id == quest_id) {
                        if let Err(e) = quest.accept() {
                            warn!(error = %e, "server accepted a quest the client cannot");
                        }
                    }
                    s.error = None;
                });
                None
            }
            Err(e) => self.surface(e),
        }
    }

    /// Abandon an active quest. The caller is responsible for the explicit
    /// user confirmation; this method assumes it already happened.
    pub async fn abandon(&self, quest_id: QuestId) -> Option<QuestNavigation> {
        match self.service.abandon(quest_id).await {
            Ok(()) => {
                self.state.update(|s| {
                    if s.category == QuestCategory::Active {
                        s.quests.retain(|q| q.id != quest_id);
                    } else if let Some(quest) = s.quests.iter_mut().find(|q| q.id == quest_id) {
                        if let Err(e) = quest.abandon() {
                            warn!(error = %e, "server abandoned a quest the client cannot");
                        }
                    }
                    s.error = None;
                });
                None
            }
            Err(e) => self.surface(e),
        }
    }

    /// Claim the rewards of a completed quest. Marks `reward_claimed`
    /// locally and records the granted reward names; no re-fetch.
    pub async fn claim_reward(&self, quest_id: QuestId) -> Option<QuestNavigation> {
        match self.service.claim_reward(quest_id).await {
            Ok(rewards) => {
                self.state.update(|s| {
                    if let Some(quest) = s.quests.iter_mut().find(|q| q.id == quest_id) {
                        quest.reward_claimed = true;
                    }
                    s.last_claimed = Some(rewards);
                    s.error = None;
                });
                None
            }
            Err(e) => self.surface(e),
        }
    }

    /// Complete a step. The server's returned quest replaces the local
    /// record wholesale, because step completion may also flip the quest to
    /// completed server-side.
    pub async fn complete_step(
        &self,
        quest_id: QuestId,
        step_id: StepId,
    ) -> Option<QuestNavigation> {
        // Pre-flight guard: never send a request the local record already
        // proves invalid. A read only; subscribers hear nothing unless the
        // guard fails.
        let guard = self
            .state
            .get()
            .quests
            .iter()
            .find(|q| q.id == quest_id)
            .map(|q| q.check_step_completable(step_id));
        if let Some(Err(e)) = guard {
            self.state
                .update(|s| s.error = Some(ServiceError::Guard(e.to_string()).user_message()));
            return None;
        }

        match self.service.complete_step(quest_id, step_id).await {
            Ok(updated) => {
                self.state.update(|s| {
                    if let Some(quest) = s.quests.iter_mut().find(|q| q.id == quest_id) {
                        *quest = updated;
                    } else {
                        s.quests.push(updated);
                    }
                    s.error = None;
                });
                None
            }
            Err(e) => self.surface(e),
        }
    }

    fn surface(&self, e: ServiceError) -> Option<QuestNavigation> {
        if e.is_character_required() {
            return Some(QuestNavigation::CharacterSelect);
        }
        if e.is_not_found() {
            return Some(QuestNavigation::QuestList);
        }
        warn!(error = %e, "quest action failed");
        self.state.update(|s| s.error = Some(e.user_message()));
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::Api;
    use crate::infrastructure::testing::fixtures;
    use crate::ports::outbound::MockRawApiPort;
    use nocturne_domain::{Difficulty, QuestStatus};

    fn controller(mock: MockRawApiPort) -> QuestListController {
        QuestListController::new(QuestService::new(Api::new(Arc::new(mock))))
    }

    fn quest_json(id: u64, title: &str, status: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "title": title,
            "description": "",
            "level": 2,
            "difficulty": "medium",
            "status": status,
            "steps": [{ "id": 1, "title": "First" }, { "id": 2, "title": "Second" }]
        })
    }

    #[tokio::test]
    async fn load_replaces_list_and_clears_error() {
        let mut mock = MockRawApiPort::new();
        mock.expect_get_json()
            .withf(|path| path == "/quests")
            .returning(|_| {
                Ok(serde_json::json!({
                    "status": "success",
                    "data": [quest_json(1, "Dragon's Lair", "available")]
                }))
            });
        let controller = controller(mock);
        controller.state().update(|s| s.error = Some("old".into()));

        let nav = controller.load(QuestCategory::Available).await;

        assert_eq!(nav, None);
        let state = controller.state().get();
        assert_eq!(state.quests.len(), 1);
        assert!(!state.loading);
        assert!(state.error.is_none());
    }

    #[tokio::test]
    async fn load_without_character_signals_navigation() {
        let mut mock = MockRawApiPort::new();
        mock.expect_get_json().returning(|_| {
            Ok(serde_json::json!({
                "status": "error",
                "code": "character_required",
                "message": "select a character first"
            }))
        });
        let controller = controller(mock);

        let nav = controller.load(QuestCategory::Active).await;
        assert_eq!(nav, Some(QuestNavigation::CharacterSelect));
        assert!(!controller.state().get().loading);
    }

    #[tokio::test]
    async fn load_failure_sets_inline_error() {
        let mut mock = MockRawApiPort::new();
        mock.expect_get_json().returning(|_| {
            Ok(serde_json::json!({
                "status": "error",
                "code": "internal_error",
                "message": "boom"
            }))
        });
        let controller = controller(mock);

        let nav = controller.load(QuestCategory::Available).await;
        assert_eq!(nav, None);
        assert_eq!(controller.state().get().error.as_deref(), Some("boom"));
    }

    #[tokio::test]
    async fn accept_flips_local_status_to_active() {
        let mut mock = MockRawApiPort::new();
        mock.expect_post_empty()
            .withf(|path| path == "/quests/7/accept")
            .returning(|_| Ok(serde_json::json!({ "status": "success" })));
        let controller = controller(mock);
        controller.state().update(|s| {
            s.quests = vec![fixtures::quest(7, "Dragon's Lair", 5, Difficulty::Hard)];
        });

        let nav = controller.accept(QuestId::new(7)).await;
        assert_eq!(nav, None);
        assert_eq!(
            controller.state().get().quests[0].status,
            QuestStatus::Active
        );
    }

    #[tokio::test]
    async fn abandon_resets_status_and_progress() {
        let mut mock = MockRawApiPort::new();
        mock.expect_post_empty()
            .withf(|path| path == "/quests/7/abandon")
            .returning(|_| Ok(serde_json::json!({ "status": "success" })));
        let controller = controller(mock);
        controller.state().update(|s| {
            let mut quest = fixtures::active_quest_with_steps(7);
            quest.completed_steps.insert(StepId::new(1));
            s.quests = vec![quest];
        });

        controller.abandon(QuestId::new(7)).await;

        let state = controller.state().get();
        assert_eq!(state.quests[0].status, QuestStatus::Available);
        assert!(state.quests[0].completed_steps.is_empty());

        // And it no longer matches an "active" filter view.
        let active: Vec<_> = state
            .quests
            .iter()
            .filter(|q| q.status == QuestStatus::Active)
            .collect();
        assert!(active.is_empty());
    }

    #[tokio::test]
    async fn abandon_in_active_category_removes_the_quest() {
        let mut mock = MockRawApiPort::new();
        mock.expect_post_empty()
            .returning(|_| Ok(serde_json::json!({ "status": "success" })));
        let controller = controller(mock);
        controller.state().update(|s| {
            s.category = QuestCategory::Active;
            s.quests = vec![fixtures::active_quest_with_steps(7)];
        });

        controller.abandon(QuestId::new(7)).await;
        assert!(controller.state().get().quests.is_empty());
    }

    #[tokio::test]
    async fn claim_marks_reward_claimed_and_keeps_rewards_for_display() {
        let mut mock = MockRawApiPort::new();
        mock.expect_post_empty()
            .withf(|path| path == "/quests/3/claim")
            .returning(|_| {
                Ok(serde_json::json!({
                    "status": "success",
                    "data": { "rewards": [{ "name": "50 gold" }] }
                }))
            });
        let controller = controller(mock);
        controller.state().update(|s| {
            let mut quest = fixtures::quest(3, "Forest Adventure", 1, Difficulty::Easy);
            quest.status = QuestStatus::Completed;
            s.quests = vec![quest];
        });

        controller.claim_reward(QuestId::new(3)).await;

        let state = controller.state().get();
        assert!(state.quests[0].reward_claimed);
        let claimed = state.last_claimed.as_deref().unwrap_or_default();
        assert_eq!(claimed.len(), 1);
        assert_eq!(claimed[0].name, "50 gold");
    }

    #[tokio::test]
    async fn complete_step_replaces_quest_with_server_record() {
        let mut mock = MockRawApiPort::new();
        mock.expect_post_empty()
            .withf(|path| path == "/quests/7/steps/2/complete")
            .returning(|_| {
                Ok(serde_json::json!({
                    "status": "success",
                    "data": quest_json(7, "Dragon's Lair", "completed")
                }))
            });
        let controller = controller(mock);
        controller.state().update(|s| {
            let mut quest = fixtures::active_quest_with_steps(7);
            quest.completed_steps.insert(StepId::new(1));
            s.quests = vec![quest];
        });

        controller
            .complete_step(QuestId::new(7), StepId::new(2))
            .await;

        // Status flipped by the server's record, not by the client.
        assert_eq!(
            controller.state().get().quests[0].status,
            QuestStatus::Completed
        );
    }

    #[tokio::test]
    async fn guard_failure_notifies_only_for_the_error_write() {
        use std::sync::atomic::AtomicU32;

        let controller = controller(MockRawApiPort::new());
        controller.state().update(|s| {
            s.quests = vec![fixtures::quest(7, "Dragon's Lair", 5, Difficulty::Hard)];
        });
        let calls = Arc::new(AtomicU32::new(0));
        let calls_clone = Arc::clone(&calls);
        controller.state().subscribe(move |_| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
        });

        controller
            .complete_step(QuestId::new(7), StepId::new(1))
            .await;

        // One notification, from writing the guard error; the guard check
        // itself is a plain read.
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn complete_step_guard_never_reaches_the_network() {
        let mock = MockRawApiPort::new(); // no expectations: any call panics
        let controller = controller(mock);
        controller.state().update(|s| {
            // Quest is available, not active, so the step is not completable.
            s.quests = vec![fixtures::quest(7, "Dragon's Lair", 5, Difficulty::Hard)];
        });

        let nav = controller
            .complete_step(QuestId::new(7), StepId::new(1))
            .await;
        assert_eq!(nav, None);
        assert!(controller.state().get().error.is_some());
    }

    #[tokio::test]
    async fn not_found_redirects_to_quest_list() {
        let mut mock = MockRawApiPort::new();
        mock.expect_post_empty().returning(|_| {
            Ok(serde_json::json!({
                "status": "error",
                "code": "not_found",
                "message": "gone"
            }))
        });
        let controller = controller(mock);

        let nav = controller.accept(QuestId::new(9)).await;
        assert_eq!(nav, Some(QuestNavigation::QuestList));
    }

    #[tokio::test]
    async fn stale_load_response_is_discarded() {
        // The mock bumps the request sequence while the call is "in
        // flight", as a newer load would, so this response must not apply.
        use std::sync::Mutex;
        let seq_slot: Arc<Mutex<Option<Arc<AtomicU64>>>> = Arc::new(Mutex::new(None));

        let mut mock = MockRawApiPort::new();
        let slot = Arc::clone(&seq_slot);
        mock.expect_get_json().returning(move |_| {
            if let Ok(guard) = slot.lock() {
                if let Some(seq) = guard.as_ref() {
                    seq.fetch_add(1, Ordering::SeqCst);
                }
            }
            Ok(serde_json::json!({
                "status": "success",
                "data": [quest_json(1, "Stale", "available")]
            }))
        });
        let controller = controller(mock);
        if let Ok(mut guard) = seq_slot.lock() {
            *guard = Some(Arc::clone(&controller.request_seq));
        }

        controller.load(QuestCategory::Available).await;

        let state = controller.state().get();
        assert!(state.quests.is_empty(), "stale response must be discarded");
    }

    #[test]
    fn filtered_applies_current_filters() {
        let controller = controller(MockRawApiPort::new());
        controller.state().update(|s| {
            s.quests = vec![
                fixtures::quest(1, "Dragon's Lair", 5, Difficulty::Hard),
                fixtures::quest(2, "Forest Adventure", 1, Difficulty::Easy),
            ];
            s.filters.search = "drag".to_string();
        });
        let filtered = controller.filtered();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Dragon's Lair");
    }
}
