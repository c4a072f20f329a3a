//! # Customer Repository
//!
//! Database operations for customers and the addresses they own.
//!
//! ## Write Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Customer Writes (one transaction each)               │
//! │                                                                         │
//! │  CREATE                                                                │
//! │     └── INSERT customers → new id                                      │
//! │     └── INSERT addresses (one per entry, may be none)                  │
//! │                                                                         │
//! │  UPDATE  (no existence check: unknown id updates zero rows)            │
//! │     └── UPDATE customers SET … WHERE id = ?                            │
//! │     └── DELETE addresses WHERE customer_id = ?                         │
//! │     └── INSERT addresses (the new set)                                 │
//! │                                                                         │
//! │  DELETE  (no existence check: unknown id deletes zero rows)            │
//! │     └── DELETE addresses WHERE customer_id = ?                         │
//! │     └── DELETE customers WHERE id = ?                                  │
//! │                                                                         │
//! │  Any failing statement → transaction dropped → ROLLBACK → nothing kept │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rolodex_core::{Customer, CustomerFields, CustomerFilter, CustomerPage, CustomerRecord};
use sqlx::{SqliteConnection, SqlitePool};
use tracing::{debug, info};

use crate::error::DbResult;
use crate::repository::address;
use crate::repository::query::build_search_query;

/// Repository for customer database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = CustomerRepository::new(pool);
///
/// let id = repo.create(&fields, &["1 Main St".into()]).await?;
/// let customer = repo.get_by_id(id).await?;
/// let page = repo.list(&filter).await?;
/// ```
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    pool: SqlitePool,
}

impl CustomerRepository {
    /// Creates a new CustomerRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CustomerRepository { pool }
    }

    /// Creates a customer and all its addresses atomically.
    ///
    /// ## Returns
    /// The generated customer id. On any failure no customer or address
    /// row from this call remains.
    pub async fn create(&self, fields: &CustomerFields, addresses: &[String]) -> DbResult<i64> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            INSERT INTO customers (first_name, last_name, phone, email)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&fields.first_name)
        .bind(&fields.last_name)
        .bind(&fields.phone)
        .bind(&fields.email)
        .execute(&mut *tx)
        .await?;

        let id = result.last_insert_rowid();
        address::insert_all(&mut tx, id, addresses).await?;

        tx.commit().await?;

        info!(id, addresses = addresses.len(), "Customer created");
        Ok(id)
    }

    /// Lists one page of customers matching the filter.
    ///
    /// ## Semantics
    /// - `search` matches first or last name as a substring
    /// - `address`, when non-empty, keeps customers with at least one
    ///   matching address
    /// - each customer carries ALL its addresses, not only matching ones
    /// - `total_pages` is computed from the count of ALL customers, so it
    ///   does not shrink when filters are active
    pub async fn list(&self, filter: &CustomerFilter) -> DbResult<CustomerPage> {
        debug!(
            search = %filter.search,
            address = %filter.address,
            page = filter.pagination.page,
            page_size = filter.pagination.page_size,
            "Listing customers"
        );

        let mut conn = self.pool.acquire().await?;

        let total = count_all(&mut conn).await?;

        let mut builder = build_search_query(filter);
        let records: Vec<CustomerRecord> = builder
            .build_query_as()
            .fetch_all(&mut *conn)
            .await?;

        let mut customers = Vec::with_capacity(records.len());
        for record in records {
            let addresses = address::addresses_of(&mut conn, record.id).await?;
            customers.push(Customer::from_record(record, addresses));
        }

        debug!(count = customers.len(), total, "Listed customers");

        Ok(CustomerPage {
            customers,
            total_pages: filter.pagination.total_pages(total),
        })
    }

    /// Gets a customer with its full address list.
    ///
    /// ## Returns
    /// * `Ok(Some(Customer))` - Customer found
    /// * `Ok(None)` - Customer not found
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Customer>> {
        let mut conn = self.pool.acquire().await?;

        let record: Option<CustomerRecord> = sqlx::query_as(
            r#"
            SELECT id, first_name, last_name, phone, email
            FROM customers
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;

        let Some(record) = record else {
            return Ok(None);
        };

        let addresses = address::addresses_of(&mut conn, id).await?;
        Ok(Some(Customer::from_record(record, addresses)))
    }

    /// Updates a customer and replaces its address set atomically.
    ///
    /// The customer row is updated without checking that it exists; an
    /// unknown id updates nothing and still succeeds, as long as the new
    /// address rows can be inserted (foreign keys are enforced, so a
    /// non-empty address list for an unknown id fails and rolls back).
    pub async fn update(&self, id: i64, fields: &CustomerFields, addresses: &[String]) -> DbResult<()> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            UPDATE customers
            SET first_name = ?1, last_name = ?2, phone = ?3, email = ?4
            WHERE id = ?5
            "#,
        )
        .bind(&fields.first_name)
        .bind(&fields.last_name)
        .bind(&fields.phone)
        .bind(&fields.email)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        let removed = address::delete_all(&mut tx, id).await?;
        address::insert_all(&mut tx, id, addresses).await?;

        tx.commit().await?;

        info!(
            id,
            rows = result.rows_affected(),
            removed_addresses = removed,
            added_addresses = addresses.len(),
            "Customer updated"
        );
        Ok(())
    }

    /// Deletes a customer and its addresses atomically.
    ///
    /// Addresses go first so the foreign key never dangles. Deleting an
    /// unknown id affects zero rows and succeeds.
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        let mut tx = self.pool.begin().await?;

        let removed = address::delete_all(&mut tx, id).await?;

        let result = sqlx::query("DELETE FROM customers WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        info!(
            id,
            rows = result.rows_affected(),
            removed_addresses = removed,
            "Customer deleted"
        );
        Ok(())
    }

    /// Counts all customers, ignoring any filter.
    pub async fn count(&self) -> DbResult<i64> {
        let mut conn = self.pool.acquire().await?;
        count_all(&mut conn).await
    }
}

async fn count_all(conn: &mut SqliteConnection) -> DbResult<i64> {
    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
        .fetch_one(&mut *conn)
        .await?;

    Ok(total)
}

// =============================================================================
// Unit Tests
// =============================================================================
