//! # rolodex-core: Pure Domain Types for Rolodex
//!
//! This crate holds everything about customers and addresses that does not
//! touch I/O: the record and payload types, request validation and the
//! pagination arithmetic used by the list endpoint.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Rolodex Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    HTTP Handlers (rolodex-api)                  │   │
//! │  │    POST /api/customers, GET /api/customers/{id}, ...           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ rolodex-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────┐   ┌──────────────┐   ┌──────────────┐         │   │
//! │  │   │   types    │   │  validation  │   │  pagination  │         │   │
//! │  │   │  Customer  │   │  payload     │   │  offset      │         │   │
//! │  │   │  Payloads  │   │  checks      │   │  totalPages  │         │   │
//! │  │   └────────────┘   └──────────────┘   └──────────────┘         │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  rolodex-db (Database Layer)                    │   │
//! │  │           SQLite schema, repositories, search query             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Customer records, request payloads, response bodies
//! - [`validation`] - Presence and shape checks for request payloads
//! - [`pagination`] - Page/offset/total-pages arithmetic
//! - [`error`] - Validation error types
//!
//! ## Example Usage
//!
//! ```rust
//! use rolodex_core::pagination::Pagination;
//!
//! let page = Pagination::new(3, 10);
//! assert_eq!(page.offset(), 20);
//! assert_eq!(page.total_pages(25), 3);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod pagination;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{ValidationError, ValidationResult};
pub use pagination::Pagination;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Message returned when a customer id does not resolve to a row.
pub const CUSTOMER_NOT_FOUND: &str = "Customer not found";
