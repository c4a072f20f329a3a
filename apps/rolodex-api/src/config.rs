//! Server configuration.
//!
//! The port and database file are fixed constants; nothing is read from the
//! environment. Tests and tooling build their own `ServerConfig`.

use std::net::SocketAddr;
use std::path::PathBuf;

use rolodex_db::{DbConfig, DEFAULT_DATABASE_PATH};

/// Port the HTTP server listens on.
pub const DEFAULT_PORT: u16 = 3000;

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP port, bound on all interfaces.
    pub port: u16,

    /// SQLite database file.
    pub database_path: PathBuf,
}

impl ServerConfig {
    /// Socket address to bind.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }

    /// Database configuration for this server.
    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(&self.database_path)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            port: DEFAULT_PORT,
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
        }
    }
}
