//! Configuration module for the NC News backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// JSON seed file; when set the database is reseeded on startup
    pub seed_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AddrParseError> {
        dotenvy::dotenv().ok();

        let db_path = env::var("NC_NEWS_DB_PATH")
            .unwrap_or_else(|_| "./data/nc_news.sqlite".to_string())
            .into();

        let bind_addr = env::var("NC_NEWS_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:9090".to_string())
            .parse()?;

        let log_level = env::var("NC_NEWS_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let seed_path = env::var("NC_NEWS_SEED_PATH")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            db_path,
            bind_addr,
            log_level,
            seed_path,
        })
    }
}
