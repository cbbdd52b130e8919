//! # Cart Ledger
//!
//! The shopping cart as an immutable value.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  UI Action              Operation                 Result                │
//! │  ─────────              ─────────                 ──────                │
//! │                                                                         │
//! │  Add to cart ─────────► add_item(&p, n) ────────► new Cart (qty += n)  │
//! │                                                                         │
//! │  Type a quantity ─────► set_quantity(id, n) ────► new Cart (n<=0: gone)│
//! │                                                                         │
//! │  Click + / - ─────────► adjust_quantity(id, ±1) ► new Cart             │
//! │                                                                         │
//! │  Click Remove ────────► remove_item(id) ────────► new Cart             │
//! │                                                                         │
//! │  View Cart ───────────► compute_totals() ───────► CartTotals           │
//! │                                                                         │
//! │  NOTE: Every operation takes `&self` and returns a fresh Cart, so a    │
//! │        holder can swap values atomically and readers never see a half  │
//! │        applied change.                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use ts_rs::TS;

use crate::catalog::Product;
use crate::money::Money;
use crate::types::{ProductId, TaxRate};
use crate::STORE_TAX_RATE;

// =============================================================================
// Line Item
// =============================================================================

/// One product in the cart with its quantity.
///
/// ## Design Notes
/// `name` and `unit_price` are snapshots taken when the product was first
/// added, so the cart renders consistently on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LineItem {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Money,
    /// Always at least 1 while the item is in a cart.
    pub quantity: u32,
}

impl LineItem {
    fn from_product(product: &Product, quantity: u32) -> Self {
        LineItem {
            product_id: product.id,
            name: product.name.clone(),
            unit_price: product.price,
            quantity,
        }
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Items are unique by `product_id` (adding the same product increases quantity)
/// - Quantity is always >= 1 (setting it to 0 removes the item)
/// - Items keep the order in which they were first added
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Items in the order they were added.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Looks up the line for a product.
    pub fn get(&self, product_id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| i.product_id == product_id)
    }

    pub fn contains(&self, product_id: ProductId) -> bool {
        self.get(product_id).is_some()
    }

    /// Adds `quantity` of a product, merging with an existing line.
    ///
    /// ## Behavior
    /// - If product already in cart: increases quantity (saturating)
    /// - If product not in cart: appends a new line
    /// - Quantity 0: returns the cart unchanged
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::cart::Cart;
    /// use storefront_core::catalog::Product;
    /// use storefront_core::money::Money;
    ///
    /// let backpack = Product::new(1, "Backpack", Money::from_cents(2999));
    /// let cart = Cart::new().add_item(&backpack, 1).add_item(&backpack, 1);
    ///
    /// assert_eq!(cart.item_count(), 1);
    /// assert_eq!(cart.items()[0].quantity, 2);
    /// ```
    #[must_use]
    pub fn add_item(&self, product: &Product, quantity: u32) -> Cart {
        if quantity == 0 {
            return self.clone();
        }

        let mut items = self.items.clone();
        match items.iter_mut().find(|i| i.product_id == product.id) {
            Some(item) => item.quantity = item.quantity.saturating_add(quantity),
            None => items.push(LineItem::from_product(product, quantity)),
        }
        Cart { items }
    }

    /// Overwrites the quantity of a line.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: removes the item
    /// - Product not in cart: returns the cart unchanged
    /// - Quantities above `u32::MAX` are clamped
    #[must_use]
    pub fn set_quantity(&self, product_id: ProductId, quantity: i64) -> Cart {
        if quantity <= 0 {
            return self.remove_item(product_id);
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        let items = self
            .items
            .iter()
            .map(|item| {
                if item.product_id == product_id {
                    LineItem {
                        quantity,
                        ..item.clone()
                    }
                } else {
                    item.clone()
                }
            })
            .collect();
        Cart { items }
    }

    /// Changes a quantity by `delta`; dropping to 0 or below removes it.
    #[must_use]
    pub fn adjust_quantity(&self, product_id: ProductId, delta: i64) -> Cart {
        match self.get(product_id) {
            Some(item) => {
                self.set_quantity(product_id, i64::from(item.quantity).saturating_add(delta))
            }
            None => self.clone(),
        }
    }

    /// Removes a product from the cart; no-op if absent.
    #[must_use]
    pub fn remove_item(&self, product_id: ProductId) -> Cart {
        let items = self
            .items
            .iter()
            .filter(|i| i.product_id != product_id)
            .cloned()
            .collect();
        Cart { items }
    }

    /// Returns the number of unique items in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity of all items.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Totals at the store's flat 8% rate.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::cart::Cart;
    /// use storefront_core::catalog::Product;
    /// use storefront_core::money::Money;
    ///
    /// let backpack = Product::new(1, "Backpack", Money::from_cents(2999));
    /// let totals = Cart::new().add_item(&backpack, 1).compute_totals();
    ///
    /// assert_eq!(totals.subtotal.to_string(), "$29.99");
    /// assert_eq!(totals.tax.to_string(), "$2.40");
    /// assert_eq!(totals.total.to_string(), "$32.39");
    /// ```
    pub fn compute_totals(&self) -> CartTotals {
        self.compute_totals_at(STORE_TAX_RATE)
    }

    /// Totals at an arbitrary rate. Always recomputed from the items.
    pub fn compute_totals_at(&self, tax_rate: TaxRate) -> CartTotals {
        let subtotal: Money = self.items.iter().map(LineItem::line_total).sum();
        let tax = subtotal.calculate_tax(tax_rate);
        CartTotals {
            subtotal,
            tax_rate,
            tax,
            total: subtotal + tax,
        }
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Cart totals, unrounded. Use `Display` on each field to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    pub subtotal: Money,
    pub tax_rate: TaxRate,
    pub tax: Money,
    pub total: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================
