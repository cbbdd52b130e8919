//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  Tax at 8% on $29.99 is $2.3992. Storing that as cents loses the      │
//! │  0.0008 BEFORE it reaches the total.                                   │
//! │                                                                         │
//! │  OUR SOLUTION: base-10 Decimal, rounded ONLY when displayed            │
//! │    subtotal 29.99 → tax 2.3992 → total 32.3892                          │
//! │    display:        $2.40         $32.39                                 │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::money::Money;
//!
//! let price = Money::from_cents(1099); // $10.99
//!
//! let doubled = price.multiply_quantity(2);          // $21.98
//! let total = price + Money::from_cents(500);         // $15.99
//! assert_eq!(doubled.to_string(), "$21.98");
//! assert_eq!(total.to_string(), "$15.99");
//! ```

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::TaxRate;

/// Decimal places shown to the user.
pub const DISPLAY_SCALE: u32 = 2;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in major units (dollars), held as an exact decimal.
///
/// ## Design Decisions
/// - **Decimal, not cents**: tax keeps its sub-cent digits until display
/// - **Single field tuple struct**: Zero-cost wrapper over `Decimal`
/// - **Serialized as a string**: `"29.99"`, never a JSON float
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                                                                         │
/// │  Product.price ──┬──► LineItem.unit_price ──► LineItem.line_total       │
/// │                  │                                                      │
/// │                  └──► Displayed as "$10.99" in UI                       │
/// │                                                                         │
/// │  CartTotals.subtotal ──► calculate_tax ──► CartTotals.total             │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[serde(transparent)]
#[ts(export)]
pub struct Money(#[ts(as = "String")] Decimal);

impl Money {
    /// Wraps an exact decimal amount.
    #[inline]
    pub const fn new(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use storefront_core::money::Money;
    ///
    /// let price = Money::from_cents(2999);
    /// assert_eq!(price.amount(), Decimal::new(2999, 2)); // 29.99
    /// ```
    #[inline]
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, 2))
    }

    /// Returns the exact, unrounded amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Calculates tax at `rate` WITHOUT rounding. Saturates at `Decimal::MAX`.
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use storefront_core::money::Money;
    /// use storefront_core::types::TaxRate;
    ///
    /// let subtotal = Money::from_cents(2999);        // $29.99
    /// let tax = subtotal.calculate_tax(TaxRate::from_bps(800));
    ///
    /// // Full precision is kept; rounding happens at display time.
    /// assert_eq!(tax.amount(), Decimal::new(23992, 4)); // 2.3992
    /// assert_eq!(tax.to_string(), "$2.40");
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        Money(self.0.saturating_mul(rate.as_fraction()))
    }

    /// Multiplies money by a quantity, saturating instead of overflowing.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299); // $2.99
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total, Money::from_cents(897)); // $8.97
    /// ```
    #[inline]
    pub fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0.saturating_mul(Decimal::from(qty)))
    }

    /// Rounds to 2 places, half away from zero, for presentation.
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use storefront_core::money::Money;
    ///
    /// let money = Money::new(Decimal::new(2395, 3)); // 2.395
    /// assert_eq!(money.round_for_display(), Decimal::new(240, 2));
    /// ```
    pub fn round_for_display(&self) -> Decimal {
        let mut rounded = self
            .0
            .round_dp_with_strategy(DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(DISPLAY_SCALE);
        rounded
    }

    /// Formats with the given currency symbol, e.g. `"€12.30"`.
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let rounded = self.round_for_display();
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        format!("{}{}{}", sign, symbol, rounded.abs())
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================
//
// Arithmetic saturates at `Decimal::MIN`/`Decimal::MAX`; `rust_decimal`'s own
// operators panic on overflow.

/// Display shows dollars rounded half-up to cents.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Money(amount)
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
