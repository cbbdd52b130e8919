//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storefront-core errors (this file)                                    │
//! │  ├── EncodingError    - text not representable as single bytes         │
//! │  ├── DecodingError    - malformed Base64 input                         │
//! │  ├── ValidationError  - input validation failures                      │
//! │  └── CoreError        - everything above, plus session/cart rules      │
//! │                                                                         │
//! │  storefront-shell errors (separate crate)                              │
//! │  └── ApiError         - What the UI sees (serialized)                  │
//! │                                                                         │
//! │  Flow: EncodingError / DecodingError / ValidationError                 │
//! │          → CoreError → ApiError → UI                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (position, id, field)
//! 3. Errors are enum variants, never String
//! 4. Every failure is a deterministic function of its input

use thiserror::Error;

use crate::types::ProductId;

// =============================================================================
// Codec Errors
// =============================================================================

/// Failure to encode text as Base64.
///
/// The codec maps every character to exactly one byte. Characters above
/// U+00FF have no single-byte form, so they are rejected instead of being
/// expanded or truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EncodingError {
    /// A character's code point is above 255.
    ///
    /// ## When This Occurs
    /// ```text
    /// encode("héllo")  → Ok("aOlsbG8=")      é = U+00E9, fits in a byte
    /// encode("中文")    → OutOfRange { '中', position: 0 }
    /// ```
    #[error("character {character:?} at position {position} is outside the Latin-1 range")]
    OutOfRange { character: char, position: usize },
}

/// Failure to decode a Base64 string.
///
/// Positions count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodingError {
    /// A character outside `A-Z a-z 0-9 + /`, or `=` anywhere other than
    /// the last one or two places.
    #[error("invalid base64 character {character:?} at position {position}")]
    InvalidAlphabet { character: char, position: usize },

    /// The input length is not a multiple of 4.
    #[error("invalid base64 length {length}: must be a multiple of 4")]
    InvalidLength { length: usize },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must not be below zero.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Value must be above zero.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },

    /// Duplicate value (e.g., two products sharing an id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Core Error
// =============================================================================

/// Core logic errors.
///
/// These errors represent rule violations in the storefront flow.
/// They should be caught and translated to user-facing messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Text could not be encoded.
    #[error("Encoding error: {0}")]
    Encoding(#[from] EncodingError),

    /// Text could not be decoded.
    #[error("Decoding error: {0}")]
    Decoding(#[from] DecodingError),

    /// Product id is not in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Checkout was requested with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Username/password pair is not on the allow-list.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// A screen other than login was requested without a signed-in user.
    #[error("Sign in required")]
    NotSignedIn,

    /// The requested screen cannot be reached from the current one.
    ///
    /// ## When This Occurs
    /// ```text
    /// Login ──► Checkout        ✗ must browse products first
    /// Cart ──► Confirmation     ✗ only place_order reaches it
    /// ```
    #[error("Cannot move from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codec_error_messages() {
        let err = EncodingError::OutOfRange {
            character: '中',
            position: 2,
        };
        assert_eq!(
            err.to_string(),
            "character '中' at position 2 is outside the Latin-1 range"
        );

        let err = DecodingError::InvalidLength { length: 5 };
        assert_eq!(
            err.to_string(),
            "invalid base64 length 5: must be a multiple of 4"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "username".to_string(),
        };
        assert_eq!(err.to_string(), "username is required");

        let err = ValidationError::Duplicate {
            field: "product id".to_string(),
            value: "3".to_string(),
        };
        assert_eq!(err.to_string(), "product id '3' already exists");
    }

    #[test]
    fn test_errors_convert_to_core_error() {
        let core_err: CoreError = DecodingError::InvalidLength { length: 3 }.into();
        assert!(matches!(core_err, CoreError::Decoding(_)));

        let core_err: CoreError = ValidationError::Required {
            field: "name".to_string(),
        }
        .into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }

    #[test]
    fn test_product_not_found_message() {
        let err = CoreError::ProductNotFound(ProductId::new(42));
        assert_eq!(err.to_string(), "Product not found: 42");
    }
}
