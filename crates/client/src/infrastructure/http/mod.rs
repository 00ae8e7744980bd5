//! HTTP gateway adapters
//!
//! One adapter per target: reqwest on native, gloo-net on wasm32. Both
//! speak the same contract: JSON content type on every request, bearer
//! token when the session holds one, and the cross-cutting 401 rule -
//! discard the session before surfacing `ApiError::Unauthorized`, no
//! matter which endpoint produced the status.

use serde_json::Value;

use nocturne_protocol::{ErrorCode, ResponseResult};

use crate::ports::outbound::ApiError;
use crate::session::Session;

#[cfg(not(target_arch = "wasm32"))]
mod native;
#[cfg(not(target_arch = "wasm32"))]
pub use native::HttpGateway;

#[cfg(target_arch = "wasm32")]
mod wasm;
#[cfg(target_arch = "wasm32")]
pub use wasm::HttpGateway;

/// Classify a non-success response. Shared by both adapters so the 401
/// contract cannot drift between targets.
pub(crate) fn error_from_response(status: u16, body: Option<&str>, session: &Session) -> ApiError {
    if status == 401 {
        session.handle_unauthorized();
        return ApiError::Unauthorized;
    }

    // Prefer the envelope's own classification when the body carries one.
    if let Some(body) = body {
        if let Ok(ResponseResult::Error { code, message, .. }) = serde_json::from_str(body) {
            return ApiError::Backend { code, message };
        }
    }
    ApiError::Backend {
        code: ErrorCode::from_http_status(status),
        message: format!("request failed with status {status}"),
    }
}

/// Parse a successful response body into the envelope's raw JSON.
pub(crate) fn body_to_value(body: &str) -> Result<Value, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::ParseError(e.to_string()))
}
