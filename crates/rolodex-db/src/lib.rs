//! # rolodex-db: Database Layer for Rolodex
//!
//! This crate provides database access for Rolodex.
//! It uses SQLite for local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Rolodex Data Flow                                │
//! │                                                                         │
//! │  HTTP handler (PUT /api/customers/{id})                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   rolodex-db (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────────┐  ┌────────────┐  │   │
//! │  │   │   Database    │    │    Repositories    │  │   Schema   │  │   │
//! │  │   │   (pool.rs)   │    │                    │  │ (schema.rs)│  │   │
//! │  │   │               │    │ CustomerRepository │  │            │  │   │
//! │  │   │ SqlitePool    │◄───│ AddressRepository  │  │ customers  │  │   │
//! │  │   │ (1 handle)    │    │ search query       │  │ addresses  │  │   │
//! │  │   └───────────────┘    └────────────────────┘  └────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  │                   ./customers.db (next to the process)          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection handle creation and configuration
//! - [`schema`] - Idempotent table creation at startup
//! - [`error`] - Database error types
//! - [`repository`] - Customer and address repositories, search query
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rolodex_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("customers.db")).await?;
//!
//! let id = db.customers().create(&fields, &addresses).await?;
//! let customer = db.customers().get_by_id(id).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod pool;
pub mod repository;
pub mod schema;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig, DEFAULT_DATABASE_PATH};

// Repository re-exports for convenience
pub use repository::address::AddressRepository;
pub use repository::customer::CustomerRepository;
