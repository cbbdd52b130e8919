//! # storefront-core: Pure Logic for the Storefront Pages
//!
//! This crate holds every piece of logic behind the storefront UI as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (pages)                             │   │
//! │  │  Base64 converter · Login ─► Products ─► Cart ─► Checkout      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  storefront-shell commands                      │   │
//! │  │    transcode, list_products, add_to_cart, place_order, ...     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ storefront-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ │   │
//! │  │   │  codec  │ │  money  │ │  cart   │ │ catalog │ │ session │ │   │
//! │  │   │ Base64  │ │ Decimal │ │ Ledger  │ │  sort   │ │ screens │ │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └─────────┘ └─────────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO RANDOMNESS • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`codec`] - Base64 encode/decode of Latin-1 text
//! - [`money`] - Money type with exact decimal arithmetic
//! - [`types`] - Small domain types (ProductId, TaxRate)
//! - [`catalog`] - Products and sort orders
//! - [`cart`] - Cart ledger and totals
//! - [`order`] - Checkout into an order confirmation
//! - [`auth`] - Hardcoded sign-in allow-list
//! - [`screen`] - Page enum and allowed transitions
//! - [`session`] - One shopper's state as a value
//! - [`validation`] - Input validation
//! - [`error`] - Error types
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::{codec, Cart, Product, Money};
//!
//! assert_eq!(codec::encode("Hi!").unwrap(), "SGkh");
//!
//! let backpack = Product::new(1, "Backpack", Money::from_cents(2999));
//! let totals = Cart::new().add_item(&backpack, 1).compute_totals();
//! assert_eq!(totals.total.to_string(), "$32.39");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod codec;
pub mod error;
pub mod money;
pub mod order;
pub mod screen;
pub mod session;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartTotals, LineItem};
pub use catalog::{sort_products, Catalog, Product, SortOrder};
pub use error::{CoreError, CoreResult, DecodingError, EncodingError, ValidationError};
pub use money::Money;
pub use order::OrderConfirmation;
pub use screen::Screen;
pub use session::Session;
pub use types::{ProductId, TaxRate};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Flat sales tax applied to every cart: 800 bps = 8%.
pub const STORE_TAX_RATE: TaxRate = TaxRate::from_bps(800);
