//! Quest entity - server-tracked units of player progression
//!
//! Quests are owned by the backend; the client deserializes them, derives
//! per-step display state, and applies the small set of local transitions
//! the backend's responses imply (accept, abandon, reward claim). Anything
//! else is an authoritative re-sync: the server's returned quest replaces
//! the local record wholesale.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::{QuestId, StepId};

/// Quest difficulty tier as the backend reports it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Legendary,
}

impl Difficulty {
    /// Case-insensitive parse used by the filter UI, which works with the
    /// raw string from a select control.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            "legendary" => Some(Difficulty::Legendary),
            _ => None,
        }
    }
}

/// Lifecycle state of a quest for the current character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestStatus {
    Available,
    Active,
    Completed,
}

/// One step within a quest's ordered sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestStep {
    pub id: StepId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// Reward descriptors attached to a quest
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestRewards {
    #[serde(default)]
    pub experience: u64,
    #[serde(default)]
    pub currency: u64,
    /// Names of items granted on claim
    #[serde(default)]
    pub items: Vec<String>,
}

/// Derived display state for a step, computed from the parent quest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepState {
    pub completed: bool,
    /// True for the first incomplete step of an active quest
    pub active: bool,
}

/// A server-tracked unit of optional player progression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quest {
    pub id: QuestId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub level: u32,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub steps: Vec<QuestStep>,
    #[serde(default)]
    pub rewards: QuestRewards,
    pub status: QuestStatus,
    #[serde(default)]
    pub reward_claimed: bool,
    #[serde(default)]
    pub completed_steps: BTreeSet<StepId>,
}

impl Quest {
    pub fn is_step_completed(&self, step: StepId) -> bool {
        self.completed_steps.contains(&step)
    }

    /// The first incomplete step in sequence order, if the quest is active.
    pub fn active_step(&self) -> Option<&QuestStep> {
        if self.status != QuestStatus::Active {
            return None;
        }
        self.steps.iter().find(|s| !self.is_step_completed(s.id))
    }

    /// Derived state for one step of this quest.
    pub fn step_state(&self, step: StepId) -> StepState {
        let completed = self.is_step_completed(step);
        let active = self.active_step().map(|s| s.id) == Some(step);
        StepState { completed, active }
    }

    /// Check that a step may be marked complete: the quest must be active
    /// and the step must belong to it.
    pub fn check_step_completable(&self, step: StepId) -> Result<(), DomainError> {
        if !self.steps.iter().any(|s| s.id == step) {
            return Err(DomainError::UnknownStep {
                quest: self.id,
                step,
            });
        }
        if self.status != QuestStatus::Active {
            return Err(DomainError::QuestNotActive {
                quest: self.id,
                step,
            });
        }
        Ok(())
    }

    /// Transition available -> active after a successful accept call.
    pub fn accept(&mut self) -> Result<(), DomainError> {
        match self.status {
            QuestStatus::Available => {
                self.status = QuestStatus::Active;
                Ok(())
            }
            from => Err(DomainError::InvalidTransition {
                quest: self.id,
                from,
                to: QuestStatus::Active,
            }),
        }
    }

    /// Reset active -> available and clear progress after a confirmed abandon.
    pub fn abandon(&mut self) -> Result<(), DomainError> {
        match self.status {
            QuestStatus::Active => {
                self.status = QuestStatus::Available;
                self.completed_steps.clear();
                Ok(())
            }
            from => Err(DomainError::InvalidTransition {
                quest: self.id,
                from,
                to: QuestStatus::Available,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quest_with_steps(status: QuestStatus) -> Quest {
        Quest {
            id: QuestId::new(7),
            title: "Dragon's Lair".to_string(),
            description: "Slay the dragon".to_string(),
            level: 5,
            difficulty: Difficulty::Hard,
            steps: vec![
                QuestStep {
                    id: StepId::new(1),
                    title: "Find the lair".to_string(),
                    description: None,
                    location: Some("Ashen Peaks".to_string()),
                },
                QuestStep {
                    id: StepId::new(2),
                    title: "Slay the dragon".to_string(),
                    description: None,
                    location: None,
                },
            ],
            rewards: QuestRewards::default(),
            status,
            reward_claimed: false,
            completed_steps: BTreeSet::new(),
        }
    }

    #[test]
    fn accept_moves_available_to_active() {
        let mut quest = quest_with_steps(QuestStatus::Available);
        quest.accept().expect("accept should succeed");
        assert_eq!(quest.status, QuestStatus::Active);
    }

    #[test]
    fn accept_rejects_completed_quest() {
        let mut quest = quest_with_steps(QuestStatus::Completed);
        assert!(matches!(
            quest.accept(),
            Err(DomainError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn abandon_resets_status_and_progress() {
        let mut quest = quest_with_steps(QuestStatus::Active);
        quest.completed_steps.insert(StepId::new(1));
        quest.abandon().expect("abandon should succeed");
        assert_eq!(quest.status, QuestStatus::Available);
        assert!(quest.completed_steps.is_empty());
    }

    #[test]
    fn abandon_rejects_available_quest() {
        let mut quest = quest_with_steps(QuestStatus::Available);
        assert!(quest.abandon().is_err());
    }

    #[test]
    fn active_step_is_first_incomplete() {
        let mut quest = quest_with_steps(QuestStatus::Active);
        assert_eq!(quest.active_step().map(|s| s.id), Some(StepId::new(1)));

        quest.completed_steps.insert(StepId::new(1));
        assert_eq!(quest.active_step().map(|s| s.id), Some(StepId::new(2)));

        let state = quest.step_state(StepId::new(1));
        assert!(state.completed);
        assert!(!state.active);
    }

    #[test]
    fn no_active_step_when_quest_not_active() {
        let quest = quest_with_steps(QuestStatus::Available);
        assert!(quest.active_step().is_none());
        assert!(!quest.step_state(StepId::new(1)).active);
    }

    #[test]
    fn step_completable_requires_active_quest_and_known_step() {
        let quest = quest_with_steps(QuestStatus::Available);
        assert!(matches!(
            quest.check_step_completable(StepId::new(1)),
            Err(DomainError::QuestNotActive { .. })
        ));

        let quest = quest_with_steps(QuestStatus::Active);
        assert!(quest.check_step_completable(StepId::new(1)).is_ok());
        assert!(matches!(
            quest.check_step_completable(StepId::new(99)),
            Err(DomainError::UnknownStep { .. })
        ));
    }

    #[test]
    fn difficulty_parse_is_case_insensitive() {
        assert_eq!(Difficulty::parse("LEGENDARY"), Some(Difficulty::Legendary));
        assert_eq!(Difficulty::parse("easy"), Some(Difficulty::Easy));
        assert_eq!(Difficulty::parse("impossible"), None);
    }

    #[test]
    fn quest_deserializes_with_missing_optional_fields() {
        let quest: Quest = serde_json::from_value(serde_json::json!({
            "id": 3,
            "title": "Forest Adventure",
            "level": 1,
            "difficulty": "easy",
            "status": "available"
        }))
        .expect("minimal quest should deserialize");
        assert!(quest.steps.is_empty());
        assert!(!quest.reward_claimed);
        assert_eq!(quest.rewards, QuestRewards::default());
    }
}
