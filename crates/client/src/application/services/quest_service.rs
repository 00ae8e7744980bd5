//! Quest Service - quest collections and lifecycle actions
//!
//! All endpoints here are scoped to the selected character; the backend
//! answers with `character_required` when none is selected, which the
//! quest list controller turns into a navigation signal.

use nocturne_domain::{Quest, QuestId, StepId};
use nocturne_protocol::{routes, ClaimedRewards, RewardGrant};

use crate::application::{Api, ServiceError};

/// Which quest collection a list view shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestCategory {
    Available,
    Active,
    Completed,
}

#[derive(Clone)]
pub struct QuestService {
    api: Api,
}

impl QuestService {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    /// Fetch the collection for a category
    /// (`GET /quests`, `GET /quests/active`, `GET /quests/completed`).
    pub async fn list(&self, category: QuestCategory) -> Result<Vec<Quest>, ServiceError> {
        let path = match category {
            QuestCategory::Available => routes::quests(),
            QuestCategory::Active => routes::quests_active(),
            QuestCategory::Completed => routes::quests_completed(),
        };
        self.api.get(&path).await
    }

    /// `GET /quests/{id}`
    pub async fn get(&self, id: QuestId) -> Result<Quest, ServiceError> {
        self.api.get(&routes::quest(id)).await
    }

    /// `POST /quests/{id}/accept`
    pub async fn accept(&self, id: QuestId) -> Result<(), ServiceError> {
        self.api.post_empty_unit(&routes::quest_accept(id)).await
    }

    /// `POST /quests/{id}/abandon` - callers confirm with the user first
    pub async fn abandon(&self, id: QuestId) -> Result<(), ServiceError> {
        self.api.post_empty_unit(&routes::quest_abandon(id)).await
    }

    /// `POST /quests/{id}/steps/{step}/complete`
    ///
    /// Returns the server's updated quest. Completing the last step flips
    /// the quest to completed server-side, so the caller must replace its
    /// whole local record with this one.
    pub async fn complete_step(&self, id: QuestId, step: StepId) -> Result<Quest, ServiceError> {
        self.api
            .post_empty(&routes::quest_step_complete(id, step))
            .await
    }

    /// `POST /quests/{id}/claim` - returns the granted reward names
    pub async fn claim_reward(&self, id: QuestId) -> Result<Vec<RewardGrant>, ServiceError> {
        let claimed: ClaimedRewards = self.api.post_empty(&routes::quest_claim(id)).await?;
        Ok(claimed.rewards)
    }
}
