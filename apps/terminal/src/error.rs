//! # API Error Type
//!
//! Unified error type for terminal commands.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stdin: "add 99"                                                        │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Command parse ── bad syntax? ──► ApiError { INVALID_COMMAND } ───────► │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  tillbook-core ── CoreError::ProductNotFound(99) ──► ApiError ────────► │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Success ─────────────────────────────────────────► { "status": "ok" }  │
//! │                                                                         │
//! │  stdout: {"status":"error","error":{"code":"NOT_FOUND",                 │
//! │           "message":"Product not found: 99"}}                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tillbook_core::{CoreError, ValidationError};

/// API error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product not found: 99"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Product or resource not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Cart cannot do what was asked (e.g. complete while empty)
    CartError,

    /// Order sink refused the order
    OrderError,

    /// Line on stdin is not a known command
    InvalidCommand,

    /// Internal error
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: impl std::fmt::Display) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an invalid command error.
    pub fn invalid_command(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::InvalidCommand, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", id),
            CoreError::EmptyCart => ApiError::new(
                ErrorCode::CartError,
                "Cannot complete an order with an empty cart",
            ),
            CoreError::OrderRejected { reason } => {
                tracing::warn!(%reason, "order rejected by sink");
                ApiError::new(ErrorCode::OrderError, format!("Order rejected: {}", reason))
            }
            CoreError::InvalidCatalog(e) => {
                tracing::error!("Catalog decode failed: {}", e);
                ApiError::validation(format!("Invalid catalog data: {}", e))
            }
            CoreError::SettingNotFound(id) => ApiError::not_found("Setting", id),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON encoding failed: {}", err);
        ApiError::internal("Failed to encode reply")
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::internal(format!("I/O error: {}", err))
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_mapping() {
        assert_eq!(
            ApiError::from(CoreError::ProductNotFound(9)).code,
            ErrorCode::NotFound
        );
        assert_eq!(ApiError::from(CoreError::EmptyCart).code, ErrorCode::CartError);
        assert_eq!(
            ApiError::from(CoreError::OrderRejected {
                reason: "offline".to_string()
            })
            .code,
            ErrorCode::OrderError
        );

        let err = ApiError::from(CoreError::SettingNotFound("weather/rain".to_string()));
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Setting not found: weather/rain");
    }

    #[test]
    fn test_serialized_shape() {
        let err = ApiError::not_found("Product", 99);
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "Product not found: 99");
    }

    #[test]
    fn test_display() {
        let err = ApiError::invalid_command("unknown command: fly");
        assert_eq!(err.to_string(), "[InvalidCommand] unknown command: fly");
    }
}
