//! Auth Service - login, registration, and current-user lookup
//!
//! Tokens returned by the backend go straight into the [`Session`], which
//! persists them and notifies subscribers. Logout is purely local: the
//! backend holds no session state worth revoking.

use tracing::debug;

use nocturne_protocol::{routes, AuthPayload, LoginRequest, RegisterRequest, UserData};

use crate::application::{Api, ServiceError};
use crate::session::Session;

#[derive(Clone)]
pub struct AuthService {
    api: Api,
    session: Session,
}

impl AuthService {
    pub fn new(api: Api, session: Session) -> Self {
        Self { api, session }
    }

    /// `POST /auth/login`. On success the session holds the new token and,
    /// when the backend includes it, the user identity.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), ServiceError> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let payload: AuthPayload = self.api.post(&routes::auth_login(), &request).await?;
        self.apply_payload(payload, true)
    }

    /// `POST /auth/register`. Some deployments log the new account in
    /// immediately (token present); others require a follow-up login.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<(), ServiceError> {
        let request = RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        let payload: AuthPayload = self.api.post(&routes::auth_register(), &request).await?;
        self.apply_payload(payload, false)
    }

    /// `GET /auth/user` - refresh the cached identity for the held token.
    pub async fn fetch_current_user(&self) -> Result<UserData, ServiceError> {
        let payload: AuthPayload = self.api.get(&routes::auth_user()).await?;
        let user = payload.user.ok_or(ServiceError::EmptyResponse)?;
        self.session.set_user(user.clone());
        Ok(user)
    }

    /// Discard the session. No network call.
    pub fn logout(&self) {
        debug!("logging out");
        self.session.clear();
    }

    fn apply_payload(
        &self,
        payload: AuthPayload,
        token_required: bool,
    ) -> Result<(), ServiceError> {
        match payload.token {
            Some(token) => self.session.set_token(token),
            None if token_required => return Err(ServiceError::EmptyResponse),
            None => {}
        }
        if let Some(user) = payload.user {
            self.session.set_user(user);
        }
        Ok(())
    }
}
