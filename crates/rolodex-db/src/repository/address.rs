//! # Address Repository
//!
//! Database operations on the `addresses` table, always scoped by
//! `customer_id`.
//!
//! The public operations check that the customer exists and report
//! [`DbError::NotFound`] otherwise. The connection-level helpers at the
//! bottom of this file do not check; the customer repository calls them
//! inside its own transactions.

use sqlx::{SqliteConnection, SqlitePool};
use tracing::debug;

use crate::error::{DbError, DbResult};

/// Repository for address database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = AddressRepository::new(pool);
///
/// repo.add(7, "9 Oak Ave").await?;
/// let addresses = repo.list_for_customer(7).await?;
/// ```
#[derive(Debug, Clone)]
pub struct AddressRepository {
    pool: SqlitePool,
}

impl AddressRepository {
    /// Creates a new AddressRepository.
    pub fn new(pool: SqlitePool) -> Self {
        AddressRepository { pool }
    }

    /// Adds one address to an existing customer.
    ///
    /// ## Returns
    /// * `Ok(())` - Address row inserted
    /// * `Err(DbError::NotFound)` - No customer with this id; nothing inserted
    pub async fn add(&self, customer_id: i64, address: &str) -> DbResult<()> {
        debug!(customer_id, "Adding address");

        let mut tx = self.pool.begin().await?;

        if !customer_exists(&mut tx, customer_id).await? {
            return Err(DbError::not_found("Customer", customer_id));
        }

        insert_one(&mut tx, customer_id, address).await?;

        tx.commit().await?;
        Ok(())
    }

    /// Lists the address strings of an existing customer.
    ///
    /// ## Returns
    /// * `Ok(addresses)` - Possibly empty, in insertion order
    /// * `Err(DbError::NotFound)` - No customer with this id
    pub async fn list_for_customer(&self, customer_id: i64) -> DbResult<Vec<String>> {
        let mut conn = self.pool.acquire().await?;

        if !customer_exists(&mut conn, customer_id).await? {
            return Err(DbError::not_found("Customer", customer_id));
        }

        let addresses = addresses_of(&mut conn, customer_id).await?;

        debug!(customer_id, count = addresses.len(), "Listed addresses");
        Ok(addresses)
    }
}

// =============================================================================
// Connection-Level Helpers
// =============================================================================
// These take a bare connection so they can run either on a pooled
// connection or inside a caller's transaction (`&mut *tx`).

/// Returns true if a customer row with this id exists.
pub(crate) async fn customer_exists(conn: &mut SqliteConnection, customer_id: i64) -> DbResult<bool> {
    let found: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers WHERE id = ?1")
        .bind(customer_id)
        .fetch_one(&mut *conn)
        .await?;

    Ok(found > 0)
}

/// Every address string of a customer, without an existence check.
pub(crate) async fn addresses_of(conn: &mut SqliteConnection, customer_id: i64) -> DbResult<Vec<String>> {
    let addresses: Vec<String> =
        sqlx::query_scalar("SELECT address FROM addresses WHERE customer_id = ?1 ORDER BY id")
            .bind(customer_id)
            .fetch_all(&mut *conn)
            .await?;

    Ok(addresses)
}

/// Inserts a single address row.
pub(crate) async fn insert_one(conn: &mut SqliteConnection, customer_id: i64, address: &str) -> DbResult<()> {
    sqlx::query("INSERT INTO addresses (customer_id, address) VALUES (?1, ?2)")
        .bind(customer_id)
        .bind(address)
        .execute(&mut *conn)
        .await?;

    Ok(())
}

/// Inserts one row per address, in order. Stops at the first failure.
pub(crate) async fn insert_all(conn: &mut SqliteConnection, customer_id: i64, addresses: &[String]) -> DbResult<()> {
    for address in addresses {
        insert_one(conn, customer_id, address).await?;
    }

    Ok(())
}

/// Deletes every address of a customer. Returns the number of rows removed.
pub(crate) async fn delete_all(conn: &mut SqliteConnection, customer_id: i64) -> DbResult<u64> {
    let result = sqlx::query("DELETE FROM addresses WHERE customer_id = ?1")
        .bind(customer_id)
        .execute(&mut *conn)
        .await?;

    Ok(result.rows_affected())
}

// =============================================================================
// Unit Tests
// =============================================================================
