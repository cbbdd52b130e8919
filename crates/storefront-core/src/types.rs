//! # Domain Types
//!
//! Small value types shared by the catalog, cart and session modules.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │   ProductId     │   │    TaxRate      │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  u32            │   │  bps (u32)      │                             │
//! │  │  unique per     │   │  800 = 8.00%    │                             │
//! │  │  catalog/cart   │   │                 │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Product Id
// =============================================================================

/// Identifier of a product, unique within a catalog and within a cart.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(transparent)]
#[ts(export)]
pub struct ProductId(u32);

impl ProductId {
    #[inline]
    pub const fn new(id: u32) -> Self {
        ProductId(id)
    }

    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        ProductId(id)
    }
}

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 800 bps = 8.00%, the storefront's flat rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as an exact fraction (800 bps → 0.08).
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use storefront_core::types::TaxRate;
    ///
    /// assert_eq!(TaxRate::from_bps(800).as_fraction(), Decimal::new(8, 2));
    /// ```
    #[inline]
    pub fn as_fraction(&self) -> Decimal {
        Decimal::new(i64::from(self.0), 4)
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> Decimal {
        Decimal::new(i64::from(self.0), 2)
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        crate::STORE_TAX_RATE
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_rate_from_bps() {
        let rate = TaxRate::from_bps(800);
        assert_eq!(rate.bps(), 800);
        assert_eq!(rate.as_fraction(), Decimal::new(8, 2));
        assert_eq!(rate.percentage(), Decimal::new(8, 0));
    }

    #[test]
    fn test_tax_rate_default_is_store_rate() {
        assert_eq!(TaxRate::default().bps(), 800);
        assert!(TaxRate::zero().is_zero());
    }

    #[test]
    fn test_product_id_serializes_as_number() {
        let json = serde_json::to_string(&ProductId::new(7)).unwrap();
        assert_eq!(json, "7");
        assert_eq!(ProductId::from(7).to_string(), "7");
    }
}
