//! # Configuration State
//!
//! Stores shell configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`STOREFRONT_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::Serialize;
use storefront_core::{Money, SortOrder};

/// Default `EnvFilter` directive when neither `RUST_LOG` nor
/// `STOREFRONT_LOG_FILTER` is set.
pub const DEFAULT_LOG_FILTER: &str = "info,storefront=debug";

/// Shell configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Shown in the page header
    pub store_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Order the product list opens with
    pub default_sort: SortOrder,

    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
}

impl Default for ConfigState {
    /// Returns default configuration suitable for development.
    fn default() -> Self {
        ConfigState {
            store_name: "Storefront Demo".to_string(),
            currency_symbol: "$".to_string(),
            default_sort: SortOrder::NameAsc,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ConfigState {
    /// Loads configuration from environment variables.
    ///
    /// ## Environment Variables
    /// - `STOREFRONT_STORE_NAME`: Override store name
    /// - `STOREFRONT_CURRENCY_SYMBOL`: Override currency symbol
    /// - `STOREFRONT_DEFAULT_SORT`: One of `name-asc`, `name-desc`, `price-asc`, `price-desc`
    /// - `STOREFRONT_LOG_FILTER`: Log filter used when `RUST_LOG` is unset
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup("STOREFRONT_STORE_NAME") {
            if store_name.trim().is_empty() {
                return Err(ConfigError::InvalidValue("STOREFRONT_STORE_NAME".to_string()));
            }
            config.store_name = store_name;
        }

        if let Some(symbol) = lookup("STOREFRONT_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(sort) = lookup("STOREFRONT_DEFAULT_SORT") {
            config.default_sort = sort
                .parse()
                .map_err(|_| ConfigError::InvalidValue("STOREFRONT_DEFAULT_SORT".to_string()))?;
        }

        if let Some(filter) = lookup("STOREFRONT_LOG_FILTER") {
            config.log_filter = filter;
        }

        Ok(config)
    }

    /// Formats an amount with the configured symbol, rounded half-up to cents.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::Money;
    /// use storefront_shell::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_money(Money::from_cents(1234)), "$12.34");
    /// ```
    pub fn format_money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
