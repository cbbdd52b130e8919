//! # Commands Module
//!
//! Everything the UI can call.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── codec.rs    ◄─── Base64 converter page
//! ├── catalog.rs  ◄─── Product list, detail, config
//! ├── cart.rs     ◄─── Cart manipulation
//! └── session.rs  ◄─── Sign in/out, navigation, place order
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  UI event (click, keystroke)                                            │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  fn add_to_cart(                                                        │
//! │      catalog: &CatalogState,  ◄── only the state it needs              │
//! │      session: &SessionState,                                            │
//! │      config: &ConfigState,                                              │
//! │      product_id: u32,         ◄── from the UI                          │
//! │      quantity: Option<i64>,   ◄── optional param                       │
//! │  ) -> Result<CartResponse, ApiError>                                    │
//! │         │                                                               │
//! │         │ (serde serialization)                                         │
//! │         ▼                                                               │
//! │  UI receives: CartResponse or { code, message }                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cart;
pub mod catalog;
pub mod codec;
pub mod session;
