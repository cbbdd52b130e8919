//! # Catalog State
//!
//! The product list the shell serves. Read-only after startup, so it is
//! shared behind an `Arc` without a lock.

use std::sync::Arc;

use storefront_core::Catalog;

#[derive(Debug, Clone)]
pub struct CatalogState {
    catalog: Arc<Catalog>,
}

impl CatalogState {
    pub fn new(catalog: Catalog) -> Self {
        CatalogState {
            catalog: Arc::new(catalog),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

impl Default for CatalogState {
    /// The demo inventory.
    fn default() -> Self {
        CatalogState::new(Catalog::demo())
    }
}
