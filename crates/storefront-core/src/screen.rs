//! # Screens
//!
//! The storefront shows exactly one page at a time. Which page, and where it
//! may go next, is a tagged enum with a fixed transition table.
//!
//! ## Transition Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌───────┐    ┌──────────┐    ┌───────────────┐                         │
//! │  │ Login │───►│ Products │◄──►│ ProductDetail │                         │
//! │  └───────┘    └──────────┘    └───────────────┘                         │
//! │      ▲             ▲ │               │                                  │
//! │      │             │ ▼               ▼                                  │
//! │      │        ┌──────────┐    ┌──────────┐    ┌──────────────┐          │
//! │      │        │   Cart   │◄──►│ Checkout │───►│ Confirmation │          │
//! │      │        └──────────┘    └──────────┘    └──────────────┘          │
//! │      │                                              │                   │
//! │      └──── every signed-in screen may sign out      └──► Products       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::types::ProductId;

/// The page currently on display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(tag = "screen", rename_all = "camelCase")]
#[ts(export)]
pub enum Screen {
    #[default]
    Login,
    Products,
    #[serde(rename_all = "camelCase")]
    ProductDetail { product_id: ProductId },
    Cart,
    Checkout,
    #[serde(rename_all = "camelCase")]
    Confirmation {
        #[ts(as = "String")]
        order_id: Uuid,
    },
}

impl Screen {
    /// Stable name of the page, without its payload.
    pub const fn name(&self) -> &'static str {
        match self {
            Screen::Login => "login",
            Screen::Products => "products",
            Screen::ProductDetail { .. } => "productDetail",
            Screen::Cart => "cart",
            Screen::Checkout => "checkout",
            Screen::Confirmation { .. } => "confirmation",
        }
    }

    /// Whether the table allows moving from `self` to `next`.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::screen::Screen;
    ///
    /// assert!(Screen::Login.can_transition_to(&Screen::Products));
    /// assert!(!Screen::Login.can_transition_to(&Screen::Checkout));
    /// ```
    pub fn can_transition_to(&self, next: &Screen) -> bool {
        use Screen::*;

        match (self, next) {
            (Login, Products) => true,
            (Login, _) => false,
            (_, Login) => true,
            (Products, ProductDetail { .. } | Cart) => true,
            (ProductDetail { .. }, Products | Cart) => true,
            (Cart, Products | Checkout) => true,
            (Checkout, Cart | Confirmation { .. }) => true,
            (Confirmation { .. }, Products) => true,
            _ => false,
        }
    }

    /// Moves to `next` if the table allows it.
    pub fn transition(self, next: Screen) -> CoreResult<Screen> {
        if self.can_transition_to(&next) {
            Ok(next)
        } else {
            Err(CoreError::InvalidTransition {
                from: self.name().to_string(),
                to: next.name().to_string(),
            })
        }
    }

    pub const fn is_login(&self) -> bool {
        matches!(self, Screen::Login)
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
