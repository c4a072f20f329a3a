//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Rolodex                                │
//! │                                                                         │
//! │  Handler: Result<T, ApiError>                                          │
//! │       │                                                                 │
//! │       ├── Path id not an integer ── PathRejection ─────┐               │
//! │       ├── JSON body unreadable ──── JsonRejection ─────┤               │
//! │       ├── Missing/empty field ───── ValidationError ───┤──► 400        │
//! │       │                                                 │               │
//! │       ├── Unknown customer id ───── DbError::NotFound ─────► 404       │
//! │       │                                                                 │
//! │       └── SQL / transaction ─────── DbError::* ────────────► 500       │
//! │                                     (message passed through)           │
//! │                                                                         │
//! │  Body in every case: { "error": "<message>" }                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use rolodex_core::{ValidationError, CUSTOMER_NOT_FOUND};
use rolodex_db::DbError;

/// Error returned from HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Client input error (400). No store access was attempted.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Path segment that is not a customer id (400).
    #[error("Invalid customer id: {0}")]
    InvalidId(String),

    /// Resource not found (404).
    #[error("{0}")]
    NotFound(String),

    /// Store or transaction failure (500). Already rolled back.
    #[error(transparent)]
    Database(DbError),
}

impl ApiError {
    /// 404 for an unknown customer id.
    pub fn customer_not_found() -> Self {
        ApiError::NotFound(CUSTOMER_NOT_FOUND.to_string())
    }

    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::InvalidId(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message shown to the client.
    ///
    /// Database errors show the underlying SQLite message verbatim.
    pub fn message(&self) -> String {
        match self {
            ApiError::Database(err) => err.detail(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if let ApiError::Database(err) = &self {
            tracing::error!(error = %err, "Database operation failed");
        }

        (status, Json(json!({ "error": self.message() }))).into_response()
    }
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, .. } => ApiError::NotFound(format!("{entity} not found")),
            other => ApiError::Database(other),
        }
    }
}

/// Bodies that are not JSON, or carry a non-string where text is
/// expected, are client errors like any other validation failure.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(ValidationError::MalformedBody {
            reason: rejection.body_text(),
        })
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::InvalidId(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn body_of(err: ApiError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn validation_error_is_400() {
        let (status, body) = body_of(ValidationError::required("email").into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "email is required");
    }

    #[tokio::test]
    async fn invalid_id_is_400() {
        let (status, body) = body_of(ApiError::InvalidId("abc".to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid customer id: abc");
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let (status, body) = body_of(DbError::not_found("Customer", 9).into()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], CUSTOMER_NOT_FOUND);
    }

    #[tokio::test]
    async fn database_error_is_500_with_message() {
        let err = DbError::QueryFailed("database is locked".to_string());
        let (status, body) = body_of(err.into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "database is locked");
    }
}
