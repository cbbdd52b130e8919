//! # Session Commands
//!
//! Sign in and out, page changes, and placing the order.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Checkout Flow                                        │
//! │                                                                         │
//! │  1. navigate(Cart)           ──► review items and totals               │
//! │  2. navigate(Checkout)       ──► rejected while the cart is empty      │
//! │  3. place_order()            ──► order id + timestamp generated here   │
//! │                                  cart snapshotted, then cleared        │
//! │                                  screen = Confirmation { order_id }    │
//! │  4. navigate(Products)       ──► keep shopping                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use serde::Serialize;
use storefront_core::auth::{AllowList, Credentials};
use storefront_core::{OrderConfirmation, Screen, Session};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::{CatalogState, ConfigState, SessionState};

/// What the page header needs to know about the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub user: Option<String>,
    pub screen: Screen,
    /// Badge on the cart icon: total units, not distinct lines
    pub cart_count: u64,
}

impl From<&Session> for SessionResponse {
    fn from(session: &Session) -> Self {
        SessionResponse {
            user: session.user().map(str::to_string),
            screen: session.screen(),
            cart_count: session.cart().total_quantity(),
        }
    }
}

/// Order confirmation with display strings for the thank-you page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub order: OrderConfirmation,
    pub reference: String,
    pub total_display: String,
}

pub fn get_session(session: &SessionState) -> SessionResponse {
    debug!("get_session command");
    session.with_session(|s| SessionResponse::from(s))
}

/// Signs in against the allow-list.
///
/// The cart survives sign-in; it is only emptied by signing out or ordering.
pub fn sign_in(
    session: &SessionState,
    accounts: &AllowList,
    credentials: Credentials,
) -> Result<SessionResponse, ApiError> {
    debug!(username = %credentials.username, "sign_in command");

    let next = session
        .update(|s| s.sign_in(accounts, &credentials))
        .map_err(|e| {
            warn!(username = %credentials.username, error = %e, "sign-in rejected");
            e
        })?;

    info!(user = next.user().unwrap_or_default(), "signed in");
    Ok(SessionResponse::from(&next))
}

/// Signs out and empties the cart.
pub fn sign_out(session: &SessionState) -> Result<SessionResponse, ApiError> {
    debug!("sign_out command");
    let next = session.update(|s| Ok(s.sign_out()))?;
    Ok(SessionResponse::from(&next))
}

/// Moves to another page.
///
/// ## Arguments
/// * `screen` - Target page, e.g. `{ "screen": "productDetail", "productId": 3 }`
pub fn navigate(
    session: &SessionState,
    catalog: &CatalogState,
    screen: Screen,
) -> Result<SessionResponse, ApiError> {
    debug!(to = %screen, "navigate command");

    let next = session.update(|s| s.navigate(catalog.catalog(), screen))?;
    Ok(SessionResponse::from(&next))
}

/// Places the order from the checkout page.
///
/// ## Errors
/// - `UNAUTHORIZED` when signed out
/// - `INVALID_NAVIGATION` when not on the checkout page
/// - `CART_ERROR` when the cart is empty
pub fn place_order(
    session: &SessionState,
    config: &ConfigState,
) -> Result<OrderResponse, ApiError> {
    debug!("place_order command");

    let order_id = Uuid::new_v4();
    let (_, order) = session.update_with(|s| s.place_order(order_id, Utc::now()))?;

    info!(
        order_id = %order.order_id,
        items = order.items.len(),
        total = %order.totals.total.round_for_display(),
        "order placed"
    );

    Ok(OrderResponse {
        reference: order.reference(),
        total_display: config.format_money(order.totals.total),
        order,
    })
}
