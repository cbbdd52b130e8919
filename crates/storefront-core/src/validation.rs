//! # Validation Module
//!
//! Input validation helpers shared by the catalog and the login form.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: UI                                                            │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Shell command (Rust)                                         │
//! │  ├── Type validation (deserialization)                                 │
//! │  └── THIS MODULE: rule validation                                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Core types                                                   │
//! │  └── Cart / Catalog keep their own invariants                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest product name accepted.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;

/// Longest username accepted.
pub const MAX_USERNAME_LEN: usize = 64;

/// Highest unit price accepted, in whole currency units.
///
/// At this price a line of `u32::MAX` units is about 4.3e18, far inside
/// `Decimal`'s range, so cart totals stay exact.
pub const MAX_UNIT_PRICE: i64 = 1_000_000_000;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - At most 200 characters
///
/// ## Example
/// ```rust
/// use storefront_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Sauce Labs Backpack").is_ok());
/// assert!(validate_product_name("   ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a username and returns it trimmed.
pub fn validate_username(username: &str) -> ValidationResult<String> {
    let username = username.trim();

    if username.is_empty() {
        return Err(ValidationError::Required {
            field: "username".to_string(),
        });
    }

    if username.chars().count() > MAX_USERNAME_LEN {
        return Err(ValidationError::TooLong {
            field: "username".to_string(),
            max: MAX_USERNAME_LEN,
        });
    }

    Ok(username.to_string())
}

/// Validates that a password was entered. Content is compared as-is.
pub fn validate_password(password: &str) -> ValidationResult<()> {
    if password.is_empty() {
        return Err(ValidationError::Required {
            field: "password".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a unit price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
/// - At most [`MAX_UNIT_PRICE`]
///
/// ## Example
/// ```rust
/// use storefront_core::money::Money;
/// use storefront_core::validation::validate_unit_price;
///
/// assert!(validate_unit_price(Money::from_cents(2999)).is_ok());
/// assert!(validate_unit_price(Money::zero()).is_ok());
/// assert!(validate_unit_price(Money::from_cents(-100)).is_err());
/// assert!(validate_unit_price(Money::from_cents(100_000_000_001)).is_err());
/// ```
pub fn validate_unit_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    if price.amount() > Decimal::from(MAX_UNIT_PRICE) {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_UNIT_PRICE,
        });
    }

    Ok(())
}

/// Validates a quantity typed into an "add to cart" field.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must fit in a `u32`
pub fn validate_add_quantity(qty: i64) -> ValidationResult<u32> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    u32::try_from(qty).map_err(|_| ValidationError::OutOfRange {
        field: "quantity".to_string(),
        min: 1,
        max: i64::from(u32::MAX),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Bike Light").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_username_trims() {
        assert_eq!(validate_username("  standard_user ").unwrap(), "standard_user");
        assert!(matches!(
            validate_username("  "),
            Err(ValidationError::Required { .. })
        ));
        assert!(validate_username(&"u".repeat(65)).is_err());
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password(" ").is_ok());
        assert!(validate_password("").is_err());
    }

    #[test]
    fn test_validate_unit_price() {
        assert!(validate_unit_price(Money::zero()).is_ok());
        assert!(validate_unit_price(Money::from_cents(1099)).is_ok());
        assert!(validate_unit_price(Money::from_cents(-1)).is_err());

        let ceiling = Money::new(Decimal::from(MAX_UNIT_PRICE));
        assert!(validate_unit_price(ceiling).is_ok());
        assert_eq!(
            validate_unit_price(ceiling + Money::from_cents(1)),
            Err(ValidationError::OutOfRange {
                field: "price".to_string(),
                min: 0,
                max: MAX_UNIT_PRICE,
            })
        );
    }

    #[test]
    fn test_validate_add_quantity() {
        assert_eq!(validate_add_quantity(1).unwrap(), 1);
        assert_eq!(validate_add_quantity(250).unwrap(), 250);
        assert!(validate_add_quantity(0).is_err());
        assert!(validate_add_quantity(-3).is_err());
        assert!(validate_add_quantity(i64::from(u32::MAX) + 1).is_err());
    }
}
