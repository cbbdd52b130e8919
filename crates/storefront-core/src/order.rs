//! # Checkout
//!
//! Turns a cart into an order confirmation.
//!
//! The order id and timestamp are supplied by the caller; this module
//! never reads a clock or a random source.

use chrono::{DateTime, Utc};
use serde::Serialize;
use ts_rs::TS;
use uuid::Uuid;

use crate::cart::{Cart, CartTotals, LineItem};
use crate::error::{CoreError, CoreResult};

/// Frozen record of a placed order, shown on the confirmation page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OrderConfirmation {
    #[ts(as = "String")]
    pub order_id: Uuid,
    pub items: Vec<LineItem>,
    pub totals: CartTotals,
    #[ts(as = "String")]
    pub placed_at: DateTime<Utc>,
}

impl OrderConfirmation {
    /// Short reference printed on the confirmation page, e.g. `"3F2A9C01"`.
    pub fn reference(&self) -> String {
        self.order_id.simple().to_string()[..8].to_uppercase()
    }
}

/// Snapshots the cart's items and totals.
///
/// ## Errors
/// `CoreError::EmptyCart` if there is nothing to order.
///
/// ## Example
/// ```rust
/// use chrono::Utc;
/// use storefront_core::cart::Cart;
/// use storefront_core::catalog::Product;
/// use storefront_core::money::Money;
/// use storefront_core::order::checkout;
/// use uuid::Uuid;
///
/// let cart = Cart::new().add_item(&Product::new(1, "Backpack", Money::from_cents(2999)), 1);
/// let order = checkout(&cart, Uuid::nil(), Utc::now()).unwrap();
/// assert_eq!(order.totals.total.to_string(), "$32.39");
///
/// assert!(checkout(&Cart::new(), Uuid::nil(), Utc::now()).is_err());
/// ```
pub fn checkout(cart: &Cart, order_id: Uuid, placed_at: DateTime<Utc>) -> CoreResult<OrderConfirmation> {
    if cart.is_empty() {
        return Err(CoreError::EmptyCart);
    }

    Ok(OrderConfirmation {
        order_id,
        items: cart.items().to_vec(),
        totals: cart.compute_totals(),
        placed_at,
    })
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::catalog::Product;
    use crate::money::Money;

    #[test]
    fn test_checkout_snapshots_cart() {
        let cart = Cart::new()
            .add_item(&Product::new(1, "Bike Light", Money::from_cents(999)), 2)
            .add_item(&Product::new(2, "onesie", Money::from_cents(799)), 1);
        let placed_at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let order_id = Uuid::from_u128(0x3f2a_9c01_0000_4000_8000_0000_0000_0001);

        let order = checkout(&cart, order_id, placed_at).unwrap();

        assert_eq!(order.items, cart.items());
        assert_eq!(order.totals, cart.compute_totals());
        assert_eq!(order.totals.subtotal, Money::from_cents(2797));
        assert_eq!(order.placed_at, placed_at);
        assert_eq!(order.reference(), "3F2A9C01");
    }

    #[test]
    fn test_checkout_empty_cart() {
        assert_eq!(
            checkout(&Cart::new(), Uuid::nil(), Utc::now()),
            Err(CoreError::EmptyCart)
        );
    }
}
