//! # Storefront Shell
//!
//! State and commands sitting between a UI and `storefront-core`.
//!
//! ## Module Organization
//! ```text
//! storefront_shell/
//! ├── lib.rs          ◄─── You are here (startup & logging)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── session.rs  ◄─── Current session behind a Mutex
//! │   ├── catalog.rs  ◄─── Read-only product catalog
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── codec.rs    ◄─── Base64 converter
//! │   ├── catalog.rs  ◄─── Product list and detail
//! │   ├── cart.rs     ◄─── Cart manipulation
//! │   └── session.rs  ◄─── Sign in, navigation, checkout
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::auth::{Credentials, DEMO_PASSWORD};
//! use storefront_shell::commands::{cart, session};
//! use storefront_shell::state::ConfigState;
//! use storefront_shell::Shell;
//!
//! let shell = Shell::new(ConfigState::default());
//! session::sign_in(
//!     &shell.session,
//!     &shell.accounts,
//!     Credentials::new("standard_user", DEMO_PASSWORD),
//! )
//! .unwrap();
//!
//! let response = cart::add_to_cart(&shell.catalog, &shell.session, &shell.config, 1, None).unwrap();
//! assert_eq!(response.display.total, "$32.39");
//! ```

pub mod commands;
pub mod error;
pub mod state;

use storefront_core::auth::AllowList;
use tracing::info;
use tracing_subscriber::EnvFilter;

use state::{CatalogState, ConfigError, ConfigState, SessionState};

/// All state a UI needs to hand to commands.
#[derive(Debug, Clone)]
pub struct Shell {
    pub session: SessionState,
    pub catalog: CatalogState,
    pub config: ConfigState,
    pub accounts: AllowList,
}

impl Shell {
    /// Builds the shell with the demo catalog and allow-list.
    pub fn new(config: ConfigState) -> Self {
        Shell {
            session: SessionState::new(),
            catalog: CatalogState::default(),
            config,
            accounts: AllowList::demo(),
        }
    }

    /// Loads configuration, installs logging and builds the shell.
    ///
    /// ## Startup Sequence
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────────┐
    /// │                       Shell Startup                                     │
    /// │                                                                         │
    /// │  1. Load Configuration ───────────────────────────────────────────────► │
    /// │     • STOREFRONT_* environment variables over defaults                  │
    /// │                                                                         │
    /// │  2. Initialize Logging ───────────────────────────────────────────────► │
    /// │     • RUST_LOG if set, else STOREFRONT_LOG_FILTER, else default         │
    /// │                                                                         │
    /// │  3. Initialize State Objects ─────────────────────────────────────────► │
    /// │     • SessionState: signed out, on the login page                       │
    /// │     • CatalogState: demo catalog                                        │
    /// │     • ConfigState: from step 1                                          │
    /// └─────────────────────────────────────────────────────────────────────────┘
    /// ```
    pub fn start() -> Result<Shell, ConfigError> {
        let config = ConfigState::from_env()?;
        init_tracing(&config);

        let shell = Shell::new(config);
        info!(
            store = %shell.config.store_name,
            products = shell.catalog.catalog().len(),
            "Storefront shell started"
        );
        Ok(shell)
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=storefront_shell=trace` - Show trace for the shell only
/// - Default: `config.log_filter`
///
/// Calling this more than once is harmless; later calls keep the first
/// subscriber.
pub fn init_tracing(config: &ConfigState) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
