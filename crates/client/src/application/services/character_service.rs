//! Character Service - roster management and active-character selection
//!
//! A successful select is mirrored into the [`Session`] so other screens
//! can show which character is acting without re-fetching the roster.

use nocturne_domain::{Character, CharacterClass, CharacterId, Race};
use nocturne_protocol::{routes, CreateCharacterRequest};

use crate::application::{Api, ServiceError};
use crate::session::Session;

#[derive(Clone)]
pub struct CharacterService {
    api: Api,
    session: Session,
}

impl CharacterService {
    pub fn new(api: Api, session: Session) -> Self {
        Self { api, session }
    }

    /// `GET /characters` - every character on the account
    pub async fn list(&self) -> Result<Vec<Character>, ServiceError> {
        self.api.get(&routes::characters()).await
    }

    /// `GET /characters/{id}`
    pub async fn get(&self, id: CharacterId) -> Result<Character, ServiceError> {
        self.api.get(&routes::character(id)).await
    }

    /// `POST /characters` - the backend computes all starting stats
    pub async fn create(
        &self,
        name: &str,
        race: Race,
        class: CharacterClass,
    ) -> Result<Character, ServiceError> {
        let request = CreateCharacterRequest {
            name: name.to_string(),
            race,
            class,
        };
        self.api.post(&routes::characters(), &request).await
    }

    /// `POST /characters/{id}/select` - make this the active character for
    /// character-scoped endpoints (quests, inventory, board). The session's
    /// cached selection only changes once the backend has accepted it.
    pub async fn select(&self, id: CharacterId) -> Result<(), ServiceError> {
        self.api
            .post_empty_unit(&routes::character_select(id))
            .await?;
        self.session.set_active_character(id);
        Ok(())
    }

    /// `DELETE /characters/{id}`
    pub async fn delete(&self, id: CharacterId) -> Result<(), ServiceError> {
        self.api.delete(&routes::character(id)).await
    }
}
