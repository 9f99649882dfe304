//! Server configuration.

use serde::{Deserialize, Serialize};
use staylist_core::DEFAULT_PAGE_SIZE;
use staylist_error::{ConfigError, StaylistResult};
use std::path::Path;

fn default_addr() -> String {
    "127.0.0.1:8000".to_string()
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

fn default_jwt_secret() -> String {
    "change-this-secret-in-production".to_string()
}

/// Configuration for the HTTP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address, host:port
    #[serde(default = "default_addr")]
    pub addr: String,
    /// PostgreSQL connection string
    #[serde(default)]
    pub database_url: Option<String>,
    /// Page size for sub-resource listings
    #[serde(default = "default_page_size")]
    pub page_size: i64,
    /// Secret used to sign bearer tokens
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_addr(),
            database_url: None,
            page_size: default_page_size(),
            jwt_secret: default_jwt_secret(),
        }
    }
}

impl ServerConfig {
    /// Load server configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> StaylistResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {e}")))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {e}")).into())
    }

    /// Create config from environment variables.
    ///
    /// Reads:
    /// - `STAYLIST_ADDR` (default: "127.0.0.1:8000")
    /// - `DATABASE_URL` (optional)
    /// - `STAYLIST_PAGE_SIZE` (default: 3)
    /// - `STAYLIST_JWT_SECRET` (defaulted, change it in production)
    pub fn from_env() -> StaylistResult<Self> {
        let addr = std::env::var("STAYLIST_ADDR").unwrap_or_else(|_| default_addr());
        let database_url = std::env::var("DATABASE_URL").ok();
        let page_size = match std::env::var("STAYLIST_PAGE_SIZE") {
            Err(_) => default_page_size(),
            Ok(raw) => raw.parse::<i64>().map_err(|_| {
                ConfigError::new(format!("STAYLIST_PAGE_SIZE is not an integer: {raw}"))
            })?,
        };
        let jwt_secret =
            std::env::var("STAYLIST_JWT_SECRET").unwrap_or_else(|_| default_jwt_secret());

        Ok(Self {
            addr,
            database_url,
            page_size,
            jwt_secret,
        })
    }
}
