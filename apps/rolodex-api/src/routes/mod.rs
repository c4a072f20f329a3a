//! HTTP route handlers, one module per resource.
//!
//! Each module exposes a `router()` returning `Router<Arc<AppState>>`;
//! [`crate::server::app`] merges them and attaches the state.

pub mod addresses;
pub mod customers;
pub mod health;
