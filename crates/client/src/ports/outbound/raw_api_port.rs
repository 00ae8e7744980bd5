//! Raw API Port - Object-safe HTTP boundary
//!
//! The typed [`Api`](crate::application::Api) wrapper is generic over
//! response types, which makes it unsuitable for storage behind
//! `Arc<dyn ...>`. `RawApiPort` is the object-safe boundary implemented by
//! the gateway adapters; the application layer provides the typed wrapper
//! on top.
//!
//! Adapters own the cross-cutting transport contract: every request sends
//! `Content-Type: application/json` and, when a token is held,
//! `Authorization: Bearer <token>`. Any 401 clears the session before the
//! error is returned.

use serde_json::Value;
use thiserror::Error;

use nocturne_protocol::ErrorCode;

/// Transport-level errors produced by gateway adapters
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// 401 from any endpoint. The adapter has already cleared the session.
    #[error("authentication required")]
    Unauthorized,
    /// Non-2xx response, classified by the envelope's code when the body
    /// carried one and by the HTTP status otherwise
    #[error("backend error ({code:?}): {message}")]
    Backend { code: ErrorCode, message: String },
    /// Request never produced a response (DNS, refused, aborted)
    #[error("network error: {0}")]
    Network(String),
    /// Response body was not the expected envelope
    #[error("failed to parse response: {0}")]
    ParseError(String),
    /// Request body could not be serialized
    #[error("failed to serialize request: {0}")]
    SerializeError(String),
}

#[cfg_attr(test, mockall::automock)]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait RawApiPort: Send + Sync {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError>;

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError>;

    /// POST without a request body; the response still carries an envelope.
    async fn post_empty(&self, path: &str) -> Result<Value, ApiError>;

    async fn put_json(&self, path: &str, body: &Value) -> Result<Value, ApiError>;

    async fn delete(&self, path: &str) -> Result<Value, ApiError>;
}
