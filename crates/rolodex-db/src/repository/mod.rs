//! # Repository Module
//!
//! Database repository implementations for Rolodex.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Layout                                    │
//! │                                                                         │
//! │  HTTP handler                                                          │
//! │       │                                                                 │
//! │       │  db.customers().update(id, &fields, &addresses)                │
//! │       ▼                                                                 │
//! │  CustomerRepository ───────────────┐                                   │
//! │  ├── create / update / delete      │ BEGIN                             │
//! │  ├── get_by_id                     │   customers statement             │
//! │  └── list ──► query::build_search  │   address helpers (same tx)       │
//! │       │                            │ COMMIT  (ROLLBACK on drop)        │
//! │       │                            └───────────────────────────────────│
//! │       ▼                                                                 │
//! │  AddressRepository                                                     │
//! │  ├── add                (checks the customer exists)                   │
//! │  └── list_for_customer  (checks the customer exists)                   │
//! │                                                                         │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`CustomerRepository`](customer::CustomerRepository) - Customers with their addresses
//! - [`AddressRepository`](address::AddressRepository) - Addresses of one customer
//!
//! ## Scoped Transactions
//! Multi-statement writes run inside an `sqlx::Transaction`. The
//! transaction is committed explicitly as the last step; on every other exit
//! (an early `?` return, a panic unwinding through the future) it is dropped
//! and SQLite rolls the work back.

pub mod address;
pub mod customer;
pub mod query;
