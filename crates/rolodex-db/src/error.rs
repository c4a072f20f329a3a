//! # Database Error Types
//!
//! Error types for database operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite Error (sqlx::Error)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbError (this module) ← Adds categorization, keeps the message        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in rolodex-api) ← 404 for NotFound, 500 for the rest        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Client receives { "error": "<underlying message>" }                   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Store failures are shown to the client verbatim, so every variant that
//! wraps an sqlx error keeps the original text. See [`DbError::detail`].

use thiserror::Error;

/// Database operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// Entity not found in database.
    ///
    /// ## When This Occurs
    /// - Adding or listing addresses for a customer id with no row
    /// - `fetch_one` returns no rows
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Foreign key constraint violation.
    ///
    /// ## When This Occurs
    /// - Inserting an address whose `customer_id` has no customer row
    ///   (e.g. replacing the addresses of a customer id that does not exist)
    #[error("Foreign key violation: {message}")]
    ForeignKeyViolation { message: String },

    /// Database connection failed.
    ///
    /// ## When This Occurs
    /// - Database file can't be created or opened
    /// - File permissions issue
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Schema initialization failed.
    #[error("Schema initialization failed: {0}")]
    SchemaFailed(String),

    /// Query execution failed.
    ///
    /// ## When This Occurs
    /// - Constraint violations other than foreign keys (NOT NULL, triggers)
    /// - `database is locked` after the busy timeout
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Timed out waiting for the connection handle.
    #[error("Connection pool exhausted: {0}")]
    PoolExhausted(String),

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl DbError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        DbError::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// Returns true for [`DbError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, DbError::NotFound { .. })
    }

    /// The underlying error message without the category prefix.
    ///
    /// ```text
    /// Display: "Foreign key violation: FOREIGN KEY constraint failed"
    /// detail:  "FOREIGN KEY constraint failed"
    /// ```
    pub fn detail(&self) -> String {
        match self {
            DbError::NotFound { .. } => self.to_string(),
            DbError::ForeignKeyViolation { message } => message.clone(),
            DbError::ConnectionFailed(msg)
            | DbError::SchemaFailed(msg)
            | DbError::QueryFailed(msg)
            | DbError::PoolExhausted(msg)
            | DbError::Internal(msg) => msg.clone(),
        }
    }
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::RowNotFound    → DbError::NotFound
/// sqlx::Error::Database       → ForeignKeyViolation or QueryFailed
/// sqlx::Error::PoolTimedOut   → DbError::PoolExhausted
/// sqlx::Error::PoolClosed     → DbError::ConnectionFailed
/// Other                       → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DbError::NotFound {
                entity: "Record".to_string(),
                id: "unknown".to_string(),
            },

            sqlx::Error::Database(db_err) => {
                let msg = db_err.message();

                // SQLite reports FK failures as "FOREIGN KEY constraint failed"
                if msg.contains("FOREIGN KEY constraint failed") {
                    DbError::ForeignKeyViolation {
                        message: msg.to_string(),
                    }
                } else {
                    DbError::QueryFailed(msg.to_string())
                }
            }

            sqlx::Error::PoolTimedOut => DbError::PoolExhausted(err.to_string()),

            sqlx::Error::PoolClosed => DbError::ConnectionFailed(err.to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

// =============================================================================
// Unit Tests
// =============================================================================
