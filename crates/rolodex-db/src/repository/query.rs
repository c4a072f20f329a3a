//! # Customer Search Query
//!
//! Builds the filtered, paginated SELECT behind `GET /api/customers`.
//!
//! ## Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  SELECT DISTINCT c.id, c.first_name, c.last_name, c.phone, c.email     │
//! │  FROM customers c                                                       │
//! │  JOIN addresses a ON a.customer_id = c.id    ◄── only with ?address=   │
//! │  WHERE (c.first_name LIKE '%s%' OR c.last_name LIKE '%s%')             │
//! │    AND a.address LIKE '%x%'                  ◄── only with ?address=   │
//! │  ORDER BY c.id                                                          │
//! │  LIMIT page_size OFFSET (page - 1) * page_size                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Search terms are bound parameters wrapped in `%…%`; `%` and `_` inside a
//! term keep their LIKE meaning. Case sensitivity is SQLite's default
//! (ASCII case-insensitive).

use rolodex_core::CustomerFilter;
use sqlx::{QueryBuilder, Sqlite};

/// Builds the page query for a filter.
///
/// The join only happens when an address filter is set, and `DISTINCT`
/// keeps a customer with several matching addresses to a single row.
pub fn build_search_query(filter: &CustomerFilter) -> QueryBuilder<'static, Sqlite> {
    let mut builder = QueryBuilder::new(
        "SELECT DISTINCT c.id, c.first_name, c.last_name, c.phone, c.email FROM customers c",
    );

    if filter.has_address_filter() {
        builder.push(" JOIN addresses a ON a.customer_id = c.id");
    }

    let name_pattern = contains(&filter.search);
    builder
        .push(" WHERE (c.first_name LIKE ")
        .push_bind(name_pattern.clone())
        .push(" OR c.last_name LIKE ")
        .push_bind(name_pattern)
        .push(")");

    if filter.has_address_filter() {
        builder
            .push(" AND a.address LIKE ")
            .push_bind(contains(&filter.address));
    }

    builder
        .push(" ORDER BY c.id LIMIT ")
        .push_bind(filter.pagination.limit())
        .push(" OFFSET ")
        .push_bind(filter.pagination.offset());

    builder
}

/// `term` → `%term%`.
fn contains(term: &str) -> String {
    format!("%{term}%")
}

// =============================================================================
// Unit Tests
// =============================================================================
