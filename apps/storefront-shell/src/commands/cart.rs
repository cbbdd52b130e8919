//! # Cart Commands
//!
//! Commands for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────────┐   │
//! │  │  Empty   │────►│ In Cart  │────►│ Checkout │────►│ Confirmation │   │
//! │  │  Cart    │     │          │     │          │     │ (cart empty) │   │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────────┘   │
//! │                        │                 │                              │
//! │                   add_to_cart       place_order                        │
//! │                   update_cart_item  (session.rs)                       │
//! │                   adjust_cart_item                                      │
//! │                   remove_from_cart                                      │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear_cart ──────────────────────►                   │
//! │                                                      (back to empty)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every cart command requires a signed-in session.

use serde::Serialize;
use storefront_core::validation::validate_add_quantity;
use storefront_core::{Cart, CartTotals, CoreError, CoreResult, LineItem, ProductId, Session};
use tracing::debug;

use crate::error::ApiError;
use crate::state::{CatalogState, ConfigState, SessionState};

/// Cart response including items and totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<LineItem>,
    pub totals: CartTotals,
    pub display: TotalsDisplay,
}

/// Totals rounded and formatted for the summary box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalsDisplay {
    pub subtotal: String,
    pub tax: String,
    pub total: String,
}

impl CartResponse {
    pub fn new(cart: &Cart, config: &ConfigState) -> Self {
        let totals = cart.compute_totals();
        CartResponse {
            items: cart.items().to_vec(),
            totals,
            display: TotalsDisplay {
                subtotal: config.format_money(totals.subtotal),
                tax: config.format_money(totals.tax),
                total: config.format_money(totals.total),
            },
        }
    }
}

/// Applies `f` to the signed-in session's cart and stores the result.
fn update_cart<F>(session: &SessionState, f: F) -> Result<Session, ApiError>
where
    F: FnOnce(&Cart) -> CoreResult<Cart>,
{
    let next = session.update(|s| {
        if !s.is_signed_in() {
            return Err(CoreError::NotSignedIn);
        }
        Ok(s.with_cart(f(s.cart())?))
    })?;
    Ok(next)
}

/// Gets the current cart contents.
///
/// ## Summary Box
/// ```text
/// ┌────────────────────────────────────────────────────────────────┐
/// │  Backpack                x1              $29.99              │
/// ├────────────────────────────────────────────────────────────────┤
/// │  Item total                              $29.99              │
/// │  Tax (8%)                                $2.40               │
/// │  Total                                   $32.39              │
/// └────────────────────────────────────────────────────────────────┘
/// ```
pub fn get_cart(session: &SessionState, config: &ConfigState) -> CartResponse {
    debug!("get_cart command");
    session.with_session(|s| CartResponse::new(s.cart(), config))
}

/// Adds a product to the cart.
///
/// ## Behavior
/// - If product already in cart: quantity increases
/// - If product not in cart: added as new item with the catalog price
///
/// ## Arguments
/// * `product_id` - Product to add
/// * `quantity` - Quantity to add (default: 1)
pub fn add_to_cart(
    catalog: &CatalogState,
    session: &SessionState,
    config: &ConfigState,
    product_id: u32,
    quantity: Option<i64>,
) -> Result<CartResponse, ApiError> {
    let quantity = quantity.unwrap_or(1);
    debug!(product_id, quantity, "add_to_cart command");

    let quantity = validate_add_quantity(quantity).map_err(CoreError::from)?;
    let product = catalog.catalog().get(ProductId::new(product_id))?;

    let next = update_cart(session, |cart| Ok(cart.add_item(product, quantity)))?;
    Ok(CartResponse::new(next.cart(), config))
}

/// Updates the quantity of an item in the cart.
///
/// ## Behavior
/// - Quantity 0 or less: removes the item
/// - Product not in cart: cart unchanged
pub fn update_cart_item(
    session: &SessionState,
    config: &ConfigState,
    product_id: u32,
    quantity: i64,
) -> Result<CartResponse, ApiError> {
    debug!(product_id, quantity, "update_cart_item command");

    let next = update_cart(session, |cart| {
        Ok(cart.set_quantity(ProductId::new(product_id), quantity))
    })?;
    Ok(CartResponse::new(next.cart(), config))
}

/// Steps a quantity up or down (the +/- buttons).
pub fn adjust_cart_item(
    session: &SessionState,
    config: &ConfigState,
    product_id: u32,
    delta: i64,
) -> Result<CartResponse, ApiError> {
    debug!(product_id, delta, "adjust_cart_item command");

    let next = update_cart(session, |cart| {
        Ok(cart.adjust_quantity(ProductId::new(product_id), delta))
    })?;
    Ok(CartResponse::new(next.cart(), config))
}

/// Removes an item from the cart.
pub fn remove_from_cart(
    session: &SessionState,
    config: &ConfigState,
    product_id: u32,
) -> Result<CartResponse, ApiError> {
    debug!(product_id, "remove_from_cart command");

    let next = update_cart(session, |cart| Ok(cart.remove_item(ProductId::new(product_id))))?;
    Ok(CartResponse::new(next.cart(), config))
}

/// Clears all items from the cart.
pub fn clear_cart(session: &SessionState, config: &ConfigState) -> Result<CartResponse, ApiError> {
    debug!("clear_cart command");

    let next = update_cart(session, |_| Ok(Cart::new()))?;
    Ok(CartResponse::new(next.cart(), config))
}

#[cfg(test)]
mod tests {
    use storefront_core::auth::{AllowList, Credentials, DEMO_PASSWORD};

    use super::*;
    use crate::error::ErrorCode;

    fn signed_in() -> SessionState {
        let session = SessionState::new();
        session
            .update(|s| {
                s.sign_in(
                    &AllowList::demo(),
                    &Credentials::new("standard_user", DEMO_PASSWORD),
                )
            })
            .unwrap();
        session
    }

    #[test]
    fn test_add_to_cart_twice_merges() {
        let catalog = CatalogState::default();
        let session = signed_in();
        let config = ConfigState::default();

        add_to_cart(&catalog, &session, &config, 1, None).unwrap();
        let response = add_to_cart(&catalog, &session, &config, 1, None).unwrap();

        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].quantity, 2);
        assert_eq!(response.display.subtotal, "$59.98");
    }

    #[test]
    fn test_cart_display_totals() {
        let catalog = CatalogState::default();
        let session = signed_in();
        let config = ConfigState::default();

        let response = add_to_cart(&catalog, &session, &config, 1, Some(1)).unwrap();

        assert_eq!(
            response.display,
            TotalsDisplay {
                subtotal: "$29.99".to_string(),
                tax: "$2.40".to_string(),
                total: "$32.39".to_string(),
            }
        );
    }

    #[test]
    fn test_add_to_cart_requires_sign_in() {
        let err = add_to_cart(
            &CatalogState::default(),
            &SessionState::new(),
            &ConfigState::default(),
            1,
            None,
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::Unauthorized);
    }

    #[test]
    fn test_add_to_cart_unknown_product() {
        let err = add_to_cart(
            &CatalogState::default(),
            &signed_in(),
            &ConfigState::default(),
            77,
            None,
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_add_to_cart_rejects_zero_quantity() {
        let err = add_to_cart(
            &CatalogState::default(),
            &signed_in(),
            &ConfigState::default(),
            1,
            Some(0),
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_update_to_zero_removes() {
        let catalog = CatalogState::default();
        let session = signed_in();
        let config = ConfigState::default();
        add_to_cart(&catalog, &session, &config, 2, Some(3)).unwrap();

        let response = update_cart_item(&session, &config, 2, 0).unwrap();

        assert!(response.items.is_empty());
        assert_eq!(response.display.total, "$0.00");
    }

    #[test]
    fn test_adjust_and_remove() {
        let catalog = CatalogState::default();
        let session = signed_in();
        let config = ConfigState::default();
        add_to_cart(&catalog, &session, &config, 2, None).unwrap();
        add_to_cart(&catalog, &session, &config, 5, None).unwrap();

        let response = adjust_cart_item(&session, &config, 2, 1).unwrap();
        assert_eq!(response.items[0].quantity, 2);

        let response = remove_from_cart(&session, &config, 2).unwrap();
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].product_id, ProductId::new(5));

        let response = clear_cart(&session, &config).unwrap();
        assert!(response.items.is_empty());
        assert!(get_cart(&session, &config).items.is_empty());
    }
}
