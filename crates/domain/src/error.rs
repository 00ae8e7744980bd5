use thiserror::Error;

use crate::ids::{QuestId, StepId};
use crate::quest::QuestStatus;

/// Errors raised when a domain invariant would be violated
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Quest status transitions only move forward (available -> active ->
    /// completed), except for the explicit abandon action.
    #[error("quest {quest} cannot move from {from:?} to {to:?}")]
    InvalidTransition {
        quest: QuestId,
        from: QuestStatus,
        to: QuestStatus,
    },

    /// A step can only be completed while its quest is active.
    #[error("quest {quest} is not active, step {step} cannot be completed")]
    QuestNotActive { quest: QuestId, step: StepId },

    /// The step does not belong to the quest.
    #[error("step {step} does not belong to quest {quest}")]
    UnknownStep { quest: QuestId, step: StepId },

    /// Combat round numbers must be contiguous and 1-based.
    #[error("combat round {found} out of sequence, expected {expected}")]
    RoundOutOfSequence { expected: u32, found: u32 },

    /// Health never increases across rounds and never exceeds the original.
    #[error("combat round {round}: health increased or exceeded the original")]
    HealthIncreased { round: u32 },

    /// The last round's winner must match the overall winner.
    #[error("final round winner {round_winner:?} does not match overall winner {winner}")]
    WinnerMismatch {
        winner: String,
        round_winner: Option<String>,
    },
}
