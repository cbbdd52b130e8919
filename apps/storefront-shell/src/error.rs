//! # API Error Type
//!
//! Unified error type for shell commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow                                           │
//! │                                                                         │
//! │  UI                          Rust                                       │
//! │  ──                          ────                                       │
//! │                                                                         │
//! │  add_to_cart(42)                                                        │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Core Error? ─── CoreError::ProductNotFound(42) ──► ApiError ───►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  { "code": "NOT_FOUND", "message": "Product not found: 42" }           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use storefront_core::CoreError;

/// API error returned from shell commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "INVALID_BASE64",
///   "message": "invalid base64 length 5: must be a multiple of 4"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Text can't be encoded
    EncodingError,

    /// Text isn't Base64
    InvalidBase64,

    /// Login failed or missing
    Unauthorized,

    /// Page change not allowed from here
    InvalidNavigation,

    /// Cart operation failed
    CartError,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let code = match &err {
            CoreError::Encoding(_) => ErrorCode::EncodingError,
            CoreError::Decoding(_) => ErrorCode::InvalidBase64,
            CoreError::ProductNotFound(_) => ErrorCode::NotFound,
            CoreError::EmptyCart => ErrorCode::CartError,
            CoreError::InvalidCredentials | CoreError::NotSignedIn => ErrorCode::Unauthorized,
            CoreError::InvalidTransition { .. } => ErrorCode::InvalidNavigation,
            CoreError::Validation(_) => ErrorCode::ValidationError,
        };
        let message = match err {
            CoreError::Encoding(e) => e.to_string(),
            CoreError::Decoding(e) => e.to_string(),
            CoreError::Validation(e) => e.to_string(),
            other => other.to_string(),
        };
        ApiError::new(code, message)
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
    use storefront_core::{DecodingError, ProductId, ValidationError};

    use super::*;

    #[test]
    fn test_core_errors_map_to_codes() {
        let err: ApiError = CoreError::ProductNotFound(ProductId::new(42)).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Product not found: 42");

        let err: ApiError = CoreError::InvalidCredentials.into();
        assert_eq!(err.code, ErrorCode::Unauthorized);

        let err: ApiError = CoreError::EmptyCart.into();
        assert_eq!(err.code, ErrorCode::CartError);
    }

    #[test]
    fn test_wrapped_errors_use_inner_message() {
        let err: ApiError = CoreError::from(DecodingError::InvalidLength { length: 5 }).into();
        assert_eq!(err.code, ErrorCode::InvalidBase64);
        assert_eq!(err.message, "invalid base64 length 5: must be a multiple of 4");

        let err: ApiError = CoreError::from(ValidationError::Required {
            field: "username".to_string(),
        })
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "username is required");
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(ApiError::validation("bad")).unwrap();
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["message"], "bad");
    }

    #[test]
    fn test_display() {
        let err = ApiError::new(ErrorCode::NotFound, "Product not found: 1");
        assert_eq!(err.to_string(), "[NotFound] Product not found: 1");
    }
}
