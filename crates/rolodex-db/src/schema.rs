//! # Schema Initializer
//!
//! Creates the two tables Rolodex needs, once, before the server accepts
//! traffic.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Schema Initialization                              │
//! │                                                                         │
//! │  Database::new()                                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CREATE TABLE IF NOT EXISTS customers   ── fail? ──► fatal, exit       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CREATE TABLE IF NOT EXISTS addresses   ── fail? ──► fatal, exit       │
//! │       │        (customer_id → customers.id, no cascade)                │
//! │       ▼                                                                 │
//! │  CREATE INDEX IF NOT EXISTS idx_addresses_customer_id                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Ready: HTTP listener may bind                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every statement is idempotent, so restarting against an existing file
//! leaves its data untouched. There are no versioned migrations.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};

const CREATE_CUSTOMERS: &str = r#"
CREATE TABLE IF NOT EXISTS customers (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name  TEXT NOT NULL,
    last_name   TEXT NOT NULL,
    phone       TEXT NOT NULL,
    email       TEXT NOT NULL
)
"#;

// No ON DELETE CASCADE: the customer repository deletes addresses itself.
const CREATE_ADDRESSES: &str = r#"
CREATE TABLE IF NOT EXISTS addresses (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    customer_id  INTEGER NOT NULL,
    address      TEXT NOT NULL,
    FOREIGN KEY (customer_id) REFERENCES customers (id)
)
"#;

const CREATE_ADDRESS_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_addresses_customer_id ON addresses (customer_id)";

/// Creates `customers`, `addresses` and the address lookup index.
///
/// Statements run in order; the first failure is returned as
/// [`DbError::SchemaFailed`] and nothing after it runs.
pub async fn initialize(pool: &SqlitePool) -> DbResult<()> {
    for (name, statement) in [
        ("customers", CREATE_CUSTOMERS),
        ("addresses", CREATE_ADDRESSES),
        ("idx_addresses_customer_id", CREATE_ADDRESS_INDEX),
    ] {
        debug!(object = name, "Ensuring schema object exists");
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(|e| DbError::SchemaFailed(format!("{name}: {e}")))?;
    }

    Ok(())
}

/// Returns true if both tables exist.
///
/// For diagnostics and tests.
pub async fn tables_present(pool: &SqlitePool) -> DbResult<bool> {
    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN ('customers', 'addresses')",
    )
    .fetch_one(pool)
    .await?;

    Ok(count == 2)
}

// =============================================================================
// Unit Tests
// =============================================================================
