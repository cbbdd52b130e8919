//! # Catalog
//!
//! Products shown on the listing page, and the sort dropdown above it.
//!
//! ## Sort Orders
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Dropdown value   Primary key                  Ties                     │
//! │  ──────────────   ──────────────────────────   ───────────────────────  │
//! │  name-asc         name, case-insensitive A→Z   exact name, then input  │
//! │  name-desc        name, case-insensitive Z→A   exact name, then input  │
//! │  price-asc        price low → high             input order             │
//! │  price-desc       price high → low             input order             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Sorting never mutates its input; it returns a new `Vec`.

use std::cmp::Reverse;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::ProductId;
use crate::validation::{validate_product_name, validate_unit_price};

// =============================================================================
// Product
// =============================================================================

/// A product available in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Unique identifier within the catalog.
    pub id: ProductId,

    /// Display name on the listing and detail pages.
    pub name: String,

    /// Longer text for the detail page.
    pub description: String,

    /// Unit price.
    pub price: Money,
}

impl Product {
    /// Builds a product with no description.
    pub fn new(id: u32, name: impl Into<String>, price: Money) -> Self {
        Product {
            id: ProductId::new(id),
            name: name.into(),
            description: String::new(),
            price,
        }
    }

    /// Adds a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

// =============================================================================
// Sort Order
// =============================================================================

/// Ordering selected in the listing page dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum SortOrder {
    #[default]
    NameAsc,
    NameDesc,
    PriceAsc,
    PriceDesc,
}

impl SortOrder {
    pub const ALL: [SortOrder; 4] = [
        SortOrder::NameAsc,
        SortOrder::NameDesc,
        SortOrder::PriceAsc,
        SortOrder::PriceDesc,
    ];

    /// The dropdown value, e.g. `"price-desc"`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            SortOrder::NameAsc => "name-asc",
            SortOrder::NameDesc => "name-desc",
            SortOrder::PriceAsc => "price-asc",
            SortOrder::PriceDesc => "price-desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = ValidationError;

    /// Parses a dropdown value.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::catalog::SortOrder;
    ///
    /// assert_eq!("price-desc".parse::<SortOrder>().unwrap(), SortOrder::PriceDesc);
    /// assert!("cheapest".parse::<SortOrder>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOrder::ALL
            .into_iter()
            .find(|order| order.as_str() == s.trim())
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "sort".to_string(),
                allowed: SortOrder::ALL
                    .iter()
                    .map(|order| order.as_str().to_string())
                    .collect(),
            })
    }
}

/// Returns `products` in the requested order. The sort is stable.
///
/// ## Example
/// ```rust
/// use storefront_core::catalog::{sort_products, Product, SortOrder};
/// use storefront_core::money::Money;
///
/// let products = vec![
///     Product::new(1, "b", Money::from_cents(500)),
///     Product::new(2, "A", Money::from_cents(900)),
/// ];
///
/// let by_name = sort_products(&products, SortOrder::NameAsc);
/// assert_eq!(by_name[0].name, "A");
///
/// let by_price = sort_products(&products, SortOrder::PriceDesc);
/// assert_eq!(by_price[0].price, Money::from_cents(900));
/// ```
pub fn sort_products(products: &[Product], order: SortOrder) -> Vec<Product> {
    let mut sorted = products.to_vec();
    match order {
        SortOrder::NameAsc => sorted.sort_by_cached_key(name_key),
        SortOrder::NameDesc => sorted.sort_by_cached_key(|p| Reverse(name_key(p))),
        SortOrder::PriceAsc => sorted.sort_by_key(|p| p.price),
        SortOrder::PriceDesc => sorted.sort_by_key(|p| Reverse(p.price)),
    }
    sorted
}

fn name_key(product: &Product) -> (String, String) {
    (product.name.to_lowercase(), product.name.clone())
}

// =============================================================================
// Catalog
// =============================================================================

/// A validated product list.
///
/// ## Invariants
/// - ids are unique
/// - names are non-empty
/// - prices are non-negative
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Validates and wraps a product list, keeping its order.
    pub fn new(products: Vec<Product>) -> CoreResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            validate_product_name(&product.name)?;
            validate_unit_price(product.price)?;
            if !seen.insert(product.id) {
                return Err(ValidationError::Duplicate {
                    field: "product id".to_string(),
                    value: product.id.to_string(),
                }
                .into());
            }
        }
        Ok(Catalog { products })
    }

    /// Products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Looks up one product for the detail page.
    pub fn get(&self, id: ProductId) -> CoreResult<&Product> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or(CoreError::ProductNotFound(id))
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.products.iter().any(|p| p.id == id)
    }

    /// The listing page contents in the requested order.
    pub fn sorted(&self, order: SortOrder) -> Vec<Product> {
        sort_products(&self.products, order)
    }

    /// The storefront's fixed demo inventory.
    pub fn demo() -> Self {
        let products = vec![
            Product::new(1, "Backpack", Money::from_cents(2999))
                .with_description("Sleek, streamlined pack with room for a laptop."),
            Product::new(2, "Bike Light", Money::from_cents(999))
                .with_description("Water-resistant light with 3 lighting modes."),
            Product::new(3, "Bolt T-Shirt", Money::from_cents(1599))
                .with_description("Soft cotton tee with a screen-printed bolt."),
            Product::new(4, "Fleece Jacket", Money::from_cents(4999))
                .with_description("Midweight quarter-zip fleece for cool days."),
            Product::new(5, "onesie", Money::from_cents(799))
                .with_description("Infant one-piece with reinforced snaps."),
            Product::new(6, "Red T-Shirt", Money::from_cents(1599))
                .with_description("Classic fit tee in bright red."),
        ];
        Catalog { products }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
