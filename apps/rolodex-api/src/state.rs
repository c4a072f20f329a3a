//! Shared application state.
//!
//! Holds the process-wide database handle. It is created once in `main`,
//! wrapped in an `Arc` and passed to every handler through axum's `State`
//! extractor; nothing reaches for a global.

use rolodex_db::Database;

/// State shared by all request handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: Database,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        AppState { db }
    }
}
