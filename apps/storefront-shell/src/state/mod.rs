//! # State Module
//!
//! Manages shell state.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything,
//! we use separate state types so each command declares exactly what it
//! needs, and independent states don't block each other.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │ SessionState │  │ CatalogState │  │   ConfigState    │              │
//! │  │              │  │              │  │                  │              │
//! │  │  Arc<Mutex<  │  │  Arc<        │  │  store_name      │              │
//! │  │    Session   │  │    Catalog   │  │  currency_symbol │              │
//! │  │  >>          │  │  >           │  │  default_sort    │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • SessionState: whole-value swaps under a Mutex                       │
//! │  • CatalogState: read-only after initialization                        │
//! │  • ConfigState: read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod catalog;
mod config;
mod session;

pub use catalog::CatalogState;
pub use config::{ConfigError, ConfigState, DEFAULT_LOG_FILTER};
pub use session::SessionState;
