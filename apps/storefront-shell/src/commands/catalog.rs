//! # Catalog Commands
//!
//! Commands for the product list and product detail pages.

use serde::Serialize;
use storefront_core::{Product, ProductId, SortOrder};
use tracing::debug;

use crate::error::ApiError;
use crate::state::{CatalogState, ConfigState};

/// A product with its price already formatted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    #[serde(flatten)]
    pub product: Product,
    pub price_display: String,
}

impl ProductResponse {
    fn new(product: Product, config: &ConfigState) -> Self {
        let price_display = config.format_money(product.price);
        ProductResponse {
            product,
            price_display,
        }
    }
}

/// Lists products in the dropdown's order.
///
/// ## Arguments
/// * `sort` - Dropdown value (`"price-desc"`, ...); defaults to the configured order
pub fn list_products(
    catalog: &CatalogState,
    config: &ConfigState,
    sort: Option<&str>,
) -> Result<Vec<ProductResponse>, ApiError> {
    let order = match sort {
        Some(value) => value
            .parse::<SortOrder>()
            .map_err(|e| ApiError::validation(e.to_string()))?,
        None => config.default_sort,
    };
    debug!(sort = %order, "list_products command");

    Ok(catalog
        .catalog()
        .sorted(order)
        .into_iter()
        .map(|p| ProductResponse::new(p, config))
        .collect())
}

/// Gets one product for the detail page.
pub fn get_product(
    catalog: &CatalogState,
    config: &ConfigState,
    product_id: u32,
) -> Result<ProductResponse, ApiError> {
    debug!(product_id, "get_product command");

    let product = catalog.catalog().get(ProductId::new(product_id))?;
    Ok(ProductResponse::new(product.clone(), config))
}

/// Gets the current shell configuration.
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}
