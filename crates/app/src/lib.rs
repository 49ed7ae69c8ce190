//! # salonview-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** that catalog adapters implement:
//!   - `CatalogSource` — fetch the full service catalog in one request
//! - Define the use-cases:
//!   - `CatalogLoader` — run the single load and classify its outcome
//!   - `SessionStore` — single-assignment state cell observed by renderers
//!
//! ## Dependency rule
//! Depends on `salonview-domain` only (plus `tokio::sync` for the state channel).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
pub mod session;
