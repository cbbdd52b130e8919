//! # Session
//!
//! Everything one shopper's storefront holds: who is signed in, which page
//! is showing, and what is in the cart. Like [`Cart`], a `Session` is a value;
//! every operation returns a new one.
//!
//! ## Shopper Workflow
//! ```text
//! sign_in ──► Products ──► ProductDetail ──► (add to cart) ──► Cart
//!                                                               │
//!                              Confirmation ◄── place_order ◄── Checkout
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;
use ts_rs::TS;
use uuid::Uuid;

use crate::auth::{AllowList, Credentials};
use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::order::{checkout, OrderConfirmation};
use crate::screen::Screen;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Session {
    user: Option<String>,
    screen: Screen,
    cart: Cart,
}

impl Session {
    /// A signed-out session on the login page.
    pub fn new() -> Self {
        Session::default()
    }

    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// Checks credentials and opens the product list.
    ///
    /// Only valid from the login page. A session that is already signed in
    /// gets `InvalidTransition`; sign out first to switch users.
    pub fn sign_in(&self, accounts: &AllowList, credentials: &Credentials) -> CoreResult<Session> {
        let user = accounts.authenticate(credentials)?;
        let screen = self.screen.transition(Screen::Products)?;
        Ok(Session {
            user: Some(user),
            screen,
            cart: self.cart.clone(),
        })
    }

    /// Returns to the login page with an empty cart.
    #[must_use]
    pub fn sign_out(&self) -> Session {
        Session::new()
    }

    /// Moves to another page.
    ///
    /// ## Rules
    /// - a user must be signed in (signing out goes through `sign_out`)
    /// - the transition table must allow the move
    /// - a product detail page needs a product that exists in `catalog`
    /// - checkout needs a non-empty cart
    /// - confirmation is only reached through `place_order`
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::auth::{AllowList, Credentials, DEMO_PASSWORD};
    /// use storefront_core::catalog::Catalog;
    /// use storefront_core::screen::Screen;
    /// use storefront_core::session::Session;
    ///
    /// let catalog = Catalog::demo();
    /// let session = Session::new()
    ///     .sign_in(&AllowList::demo(), &Credentials::new("standard_user", DEMO_PASSWORD))
    ///     .unwrap();
    ///
    /// let session = session.navigate(&catalog, Screen::Cart).unwrap();
    /// assert_eq!(session.screen(), Screen::Cart);
    ///
    /// // nothing in the cart yet
    /// assert!(session.navigate(&catalog, Screen::Checkout).is_err());
    /// ```
    pub fn navigate(&self, catalog: &Catalog, next: Screen) -> CoreResult<Session> {
        if !self.is_signed_in() {
            return Err(CoreError::NotSignedIn);
        }

        match next {
            Screen::Login => return Ok(self.sign_out()),
            Screen::ProductDetail { product_id } => {
                catalog.get(product_id)?;
            }
            Screen::Checkout if self.cart.is_empty() => return Err(CoreError::EmptyCart),
            Screen::Confirmation { .. } => {
                return Err(CoreError::InvalidTransition {
                    from: self.screen.name().to_string(),
                    to: next.name().to_string(),
                })
            }
            _ => {}
        }

        let screen = self.screen.transition(next)?;
        Ok(Session {
            screen,
            ..self.clone()
        })
    }

    /// Replaces the cart, leaving user and page as they are.
    #[must_use]
    pub fn with_cart(&self, cart: Cart) -> Session {
        Session {
            cart,
            ..self.clone()
        }
    }

    /// Places the order from the checkout page.
    ///
    /// Returns the new session (confirmation page, empty cart) together with
    /// the confirmation record.
    pub fn place_order(
        &self,
        order_id: Uuid,
        placed_at: DateTime<Utc>,
    ) -> CoreResult<(Session, OrderConfirmation)> {
        if !self.is_signed_in() {
            return Err(CoreError::NotSignedIn);
        }

        let screen = self.screen.transition(Screen::Confirmation { order_id })?;
        let confirmation = checkout(&self.cart, order_id, placed_at)?;
        let session = Session {
            user: self.user.clone(),
            screen,
            cart: Cart::new(),
        };
        Ok((session, confirmation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::DEMO_PASSWORD;
    use crate::types::ProductId;

    fn signed_in() -> Session {
        Session::new()
            .sign_in(
                &AllowList::demo(),
                &Credentials::new("standard_user", DEMO_PASSWORD),
            )
            .unwrap()
    }

    #[test]
    fn test_new_session_is_on_login() {
        let session = Session::new();
        assert_eq!(session.screen(), Screen::Login);
        assert!(!session.is_signed_in());
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_sign_in_opens_products() {
        let session = signed_in();
        assert_eq!(session.user(), Some("standard_user"));
        assert_eq!(session.screen(), Screen::Products);
    }

    #[test]
    fn test_sign_in_rejects_bad_password() {
        let result = Session::new().sign_in(
            &AllowList::demo(),
            &Credentials::new("standard_user", "nope"),
        );
        assert_eq!(result, Err(CoreError::InvalidCredentials));
    }

    #[test]
    fn test_sign_in_twice_is_invalid_transition() {
        let session = signed_in();

        let result = session.sign_in(
            &AllowList::demo(),
            &Credentials::new("visual_user", DEMO_PASSWORD),
        );

        assert_eq!(
            result,
            Err(CoreError::InvalidTransition {
                from: "products".to_string(),
                to: "products".to_string(),
            })
        );
        assert_eq!(session.user(), Some("standard_user"));
    }

    #[test]
    fn test_navigate_requires_sign_in() {
        let result = Session::new().navigate(&Catalog::demo(), Screen::Products);
        assert_eq!(result, Err(CoreError::NotSignedIn));
    }

    #[test]
    fn test_navigate_to_unknown_product() {
        let result = signed_in().navigate(
            &Catalog::demo(),
            Screen::ProductDetail {
                product_id: ProductId::new(404),
            },
        );
        assert_eq!(result, Err(CoreError::ProductNotFound(ProductId::new(404))));
    }

    #[test]
    fn test_navigate_to_confirmation_directly_rejected() {
        let catalog = Catalog::demo();
        let product = catalog.get(ProductId::new(1)).unwrap();
        let session = signed_in();
        let session = session.with_cart(session.cart().add_item(product, 1));
        let session = session
            .navigate(&catalog, Screen::Cart)
            .and_then(|s| s.navigate(&catalog, Screen::Checkout))
            .unwrap();

        let result = session.navigate(
            &catalog,
            Screen::Confirmation {
                order_id: Uuid::nil(),
            },
        );
        assert!(matches!(result, Err(CoreError::InvalidTransition { .. })));
    }

    #[test]
    fn test_full_purchase_flow() {
        let catalog = Catalog::demo();
        let product = catalog.get(ProductId::new(1)).unwrap().clone();

        let session = signed_in()
            .navigate(&catalog, Screen::ProductDetail { product_id: product.id })
            .unwrap();
        let session = session.with_cart(session.cart().add_item(&product, 1));
        let session = session
            .navigate(&catalog, Screen::Cart)
            .and_then(|s| s.navigate(&catalog, Screen::Checkout))
            .unwrap();

        let order_id = Uuid::from_u128(7);
        let (session, confirmation) = session.place_order(order_id, Utc::now()).unwrap();

        assert_eq!(session.screen(), Screen::Confirmation { order_id });
        assert!(session.cart().is_empty());
        assert_eq!(session.user(), Some("standard_user"));
        assert_eq!(confirmation.items.len(), 1);
        assert_eq!(confirmation.totals.total.to_string(), "$32.39");

        let session = session.navigate(&catalog, Screen::Products).unwrap();
        assert_eq!(session.screen(), Screen::Products);
    }

    #[test]
    fn test_place_order_outside_checkout_rejected() {
        let catalog = Catalog::demo();
        let product = catalog.get(ProductId::new(2)).unwrap();
        let session = signed_in();
        let session = session.with_cart(session.cart().add_item(product, 1));

        let result = session.place_order(Uuid::nil(), Utc::now());
        assert!(matches!(result, Err(CoreError::InvalidTransition { .. })));
    }

    #[test]
    fn test_sign_out_clears_everything() {
        let catalog = Catalog::demo();
        let product = catalog.get(ProductId::new(3)).unwrap();
        let session = signed_in();
        let session = session.with_cart(session.cart().add_item(product, 2));

        let session = session.navigate(&catalog, Screen::Login).unwrap();
        assert_eq!(session, Session::new());
    }
}
