//! Quest Detail Controller
//!
//! Owns one quest's record for the detail view: the quest itself, the
//! derived per-step display state, and the step-completion action. The
//! server's returned record always replaces the local one wholesale, so
//! status flips (last step completing the quest) arrive without the client
//! computing them.

use tracing::warn;

use nocturne_domain::{Quest, QuestId, StepId, StepState};

use crate::application::services::QuestService;
use crate::application::ServiceError;
use crate::state::quest_list::QuestNavigation;
use crate::state::state_cell::StateCell;

#[derive(Debug, Clone, Default)]
pub struct QuestDetailState {
    pub quest: Option<Quest>,
    pub loading: bool,
    pub error: Option<String>,
}

impl QuestDetailState {
    /// Derived display state for every step, in sequence order.
    pub fn step_states(&self) -> Vec<(StepId, StepState)> {
        self.quest.as_ref().map_or_else(Vec::new, |quest| {
            quest
                .steps
                .iter()
                .map(|step| (step.id, quest.step_state(step.id)))
                .collect()
        })
    }
}

#[derive(Clone)]
pub struct QuestDetailController {
    service: QuestService,
    state: StateCell<QuestDetailState>,
}

impl QuestDetailController {
    pub fn new(service: QuestService) -> Self {
        Self {
            service,
            state: StateCell::new(QuestDetailState::default()),
        }
    }

    pub fn state(&self) -> &StateCell<QuestDetailState> {
        &self.state
    }

    /// `GET /quests/{id}` - fetch the quest shown by this view. A quest
    /// that no longer exists redirects back to the list.
    pub async fn load(&self, quest_id: QuestId) -> Option<QuestNavigation> {
        self.state.update(|s| {
            s.loading = true;
            s.error = None;
        });
        match self.service.get(quest_id).await {
            Ok(quest) => {
                self.state.update(|s| {
                    s.quest = Some(quest);
                    s.loading = false;
                });
                None
            }
            Err(e) => {
                self.state.update(|s| s.loading = false);
                self.surface(e)
            }
        }
    }

    /// Complete a step of the held quest. Guarded locally first, then the
    /// server's updated record replaces the local one.
    pub async fn complete_step(&self, step_id: StepId) -> Option<QuestNavigation> {
        let quest_id = match self.state.get().quest {
            Some(quest) => {
                if let Err(e) = quest.check_step_completable(step_id) {
                    self.state.update(|s| {
                        s.error = Some(ServiceError::Guard(e.to_string()).user_message());
                    });
                    return None;
                }
                quest.id
            }
            None => return None,
        };

        match self.service.complete_step(quest_id, step_id).await {
            Ok(updated) => {
                self.state.update(|s| {
                    s.quest = Some(updated);
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
        warn!(error = %e, "quest detail action failed");
        self.state.update(|s| s.error = Some(e.user_message()));
        None
    }
}
