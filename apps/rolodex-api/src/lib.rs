//! # Rolodex API
//!
//! HTTP/JSON service for managing customers and their postal addresses.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Rolodex API                                    │
//! │                                                                         │
//! │  ┌──────────────┐   ┌──────────────┐   ┌──────────────┐   ┌──────────┐ │
//! │  │   routes     │──►│ rolodex-core │   │  rolodex-db  │──►│  SQLite  │ │
//! │  │  (handlers)  │   │ (validation) │   │ (repository) │   │ (file)   │ │
//! │  └──────┬───────┘   └──────────────┘   └──────▲───────┘   └──────────┘ │
//! │         │                                     │                        │
//! │         └──────────── AppState.db ────────────┘                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//! - [`config`]: Fixed port and database path
//! - [`error`]: `ApiError` and its HTTP mapping
//! - [`routes`]: Customer, address and health handlers
//! - [`server`]: Router assembly and graceful serve loop
//! - [`state`]: Shared state handed to handlers

pub mod config;
pub mod error;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::ApiError;
pub use server::{app, run_server};
