//! Service layer error types
//!
//! This module defines errors that can occur in the application service
//! layer, abstracting over transport details. Services never swallow
//! errors; they normalize them into [`ServiceError`] and return them, and
//! the controllers decide between navigation and inline display.

use serde::de::DeserializeOwned;
use thiserror::Error;

use nocturne_protocol::{ErrorCode, ResponseResult};

use crate::ports::outbound::ApiError;

/// Errors that can occur in service operations
#[derive(Debug, Clone, Error)]
pub enum ServiceError {
    /// 401 anywhere; the session has already been discarded
    #[error("authentication required")]
    Unauthorized,
    /// Backend returned an error envelope
    #[error("backend error ({code:?}): {message}")]
    Backend { code: ErrorCode, message: String },
    /// Request never reached the backend
    #[error("network error: {0}")]
    Network(String),
    /// Response was empty when data was expected
    #[error("server returned empty response")]
    EmptyResponse,
    /// Failed to parse response data
    #[error("failed to parse response: {0}")]
    Parse(String),
    /// Pre-flight check failed; no request was made
    #[error("{0}")]
    Guard(String),
}

impl From<ApiError> for ServiceError {
    fn from(e: ApiError) -> Self {
        match e {
            ApiError::Unauthorized => ServiceError::Unauthorized,
            ApiError::Backend { code, message } => ServiceError::Backend { code, message },
            ApiError::Network(msg) => ServiceError::Network(msg),
            ApiError::ParseError(msg) | ApiError::SerializeError(msg) => ServiceError::Parse(msg),
        }
    }
}

impl ServiceError {
    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ServiceError::Backend {
                code: ErrorCode::NotFound,
                ..
            }
        )
    }

    /// Check if this is an authorization error
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ServiceError::Unauthorized)
            || matches!(
                self,
                ServiceError::Backend {
                    code: ErrorCode::Unauthorized,
                    ..
                }
            )
    }

    /// Check if the backend rejected the call because no character is
    /// selected. Controllers turn this into a navigation signal instead of
    /// retrying.
    pub fn is_character_required(&self) -> bool {
        matches!(
            self,
            ServiceError::Backend {
                code: ErrorCode::CharacterRequired,
                ..
            }
        )
    }

    /// Message suitable for inline display next to the originating form or
    /// list. Transport details are collapsed; validation messages pass
    /// through as the backend wrote them.
    pub fn user_message(&self) -> String {
        match self {
            ServiceError::Unauthorized => "Your session has expired. Please log in.".to_string(),
            ServiceError::Backend { message, .. } => message.clone(),
            ServiceError::Network(_) => "Could not reach the server. Try again.".to_string(),
            ServiceError::EmptyResponse | ServiceError::Parse(_) => {
                "The server sent an unexpected response.".to_string()
            }
            ServiceError::Guard(message) => message.clone(),
        }
    }
}

/// Helper trait for parsing a [`ResponseResult`] envelope into typed data
pub trait ParseResponse {
    /// Parse into the expected type
    fn parse<T: DeserializeOwned>(self) -> Result<T, ServiceError>;

    /// Parse a response that carries no data (delete, accept, select)
    fn parse_empty(self) -> Result<(), ServiceError>;
}

impl ParseResponse for ResponseResult {
    fn parse<T: DeserializeOwned>(self) -> Result<T, ServiceError> {
        match self {
            ResponseResult::Success { data } => {
                let data = data.ok_or(ServiceError::EmptyResponse)?;
                serde_json::from_value(data).map_err(|e| ServiceError::Parse(e.to_string()))
            }
            ResponseResult::Error { code, message, .. } => {
                Err(ServiceError::Backend { code, message })
            }
        }
    }

    fn parse_empty(self) -> Result<(), ServiceError> {
        match self {
            ResponseResult::Success { .. } => Ok(()),
            ResponseResult::Error { code, message, .. } => {
                Err(ServiceError::Backend { code, message })
            }
        }
    }
}
