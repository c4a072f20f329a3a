//! # Rolodex API Server
//!
//! Opens `customers.db` in the working directory, creates the schema if
//! needed and serves the REST API on port 3000.
//!
//! Set `RUST_LOG` to change log verbosity (default `info`).

use anyhow::Context;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use rolodex_api::{run_server, ServerConfig};
use rolodex_db::Database;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .init();

    info!("Starting Rolodex API server...");

    let config = ServerConfig::default();
    info!(
        port = config.port,
        database = %config.database_path.display(),
        "Configuration loaded"
    );

    // Open database and create tables
    let db = match Database::new(config.db_config()).await {
        Ok(db) => db,
        Err(err) => {
            error!(error = %err, "Failed to open database");
            return Err(err).context("database initialization failed");
        }
    };
    info!("Database ready");

    run_server(db, config).await
}
