//! Response envelope shared by every backend endpoint
//!
//! The backend wraps each payload in a `{ "status": "success" | "error" }`
//! envelope. The gateway deserializes into `ResponseResult` before anything
//! else looks at the body, so controllers never see raw transport shapes.

use serde::{Deserialize, Serialize};

// =============================================================================
// Response Result
// =============================================================================

/// Result of a request operation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ResponseResult {
    /// Operation succeeded
    Success {
        /// Optional data payload (varies by endpoint)
        #[serde(default, skip_serializing_if = "Option::is_none")]
        data: Option<serde_json::Value>,
    },
    /// Operation failed
    Error {
        /// Error classification code
        code: ErrorCode,
        /// Human-readable error message
        message: String,
        /// Additional error details (optional)
        #[serde(default, skip_serializing_if = "Option::is_none")]
        details: Option<serde_json::Value>,
    },
}

impl ResponseResult {
    /// Create a success response with data
    pub fn success<T: Serialize>(data: T) -> Self {
        ResponseResult::Success {
            data: Some(serde_json::to_value(data).unwrap_or_default()),
        }
    }

    /// Create a success response without data
    pub fn success_empty() -> Self {
        ResponseResult::Success { data: None }
    }

    /// Create an error response
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        ResponseResult::Error {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Check if this is a success response
    pub fn is_success(&self) -> bool {
        matches!(self, ResponseResult::Success { .. })
    }

    /// Check if this is an error response
    pub fn is_error(&self) -> bool {
        matches!(self, ResponseResult::Error { .. })
    }
}

// =============================================================================
// Error Codes
// =============================================================================

/// Error classification codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    // === Client Errors (4xx) ===
    /// Request was malformed or invalid
    BadRequest,
    /// Authentication required or failed
    Unauthorized,
    /// User lacks permission for this operation
    Forbidden,
    /// Requested resource not found
    NotFound,
    /// Operation conflicts with current state
    Conflict,
    /// Request data failed validation
    ValidationError,
    /// No character selected for a character-scoped operation
    CharacterRequired,

    // === Server Errors (5xx) ===
    /// Internal server error
    InternalError,
    /// Required service is unavailable
    ServiceUnavailable,
    /// Operation timed out
    Timeout,
}

impl ErrorCode {
    /// Best-effort classification of a bare HTTP status, for responses
    /// whose body did not carry a parseable envelope.
    pub fn from_http_status(status: u16) -> Self {
        match status {
            400 => ErrorCode::BadRequest,
            401 => ErrorCode::Unauthorized,
            403 => ErrorCode::Forbidden,
            404 => ErrorCode::NotFound,
            409 => ErrorCode::Conflict,
            422 => ErrorCode::ValidationError,
            503 => ErrorCode::ServiceUnavailable,
            504 => ErrorCode::Timeout,
            _ => ErrorCode::InternalError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_round_trips() {
        let json = serde_json::json!({ "status": "success", "data": { "id": 1 } });
        let result: ResponseResult =
            serde_json::from_value(json).expect("envelope should deserialize");
        assert!(result.is_success());
    }

    #[test]
    fn error_envelope_carries_code_and_message() {
        let json = serde_json::json!({
            "status": "error",
            "code": "character_required",
            "message": "select a character first"
        });
        let result: ResponseResult =
            serde_json::from_value(json).expect("envelope should deserialize");
        match result {
            ResponseResult::Error { code, message, .. } => {
                assert_eq!(code, ErrorCode::CharacterRequired);
                assert_eq!(message, "select a character first");
            }
            other => panic!("expected error envelope, got {other:?}"),
        }
    }

    #[test]
    fn status_classification_covers_taxonomy() {
        assert_eq!(ErrorCode::from_http_status(404), ErrorCode::NotFound);
        assert_eq!(ErrorCode::from_http_status(500), ErrorCode::InternalError);
        assert_eq!(ErrorCode::from_http_status(418), ErrorCode::InternalError);
    }
}
