//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// MySQL listens on the standard port; only host/user/pass/name are configurable.
const DB_PORT: u16 = 3306;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Database host
    pub db_host: String,
    /// Database user
    pub db_user: String,
    /// Database password
    pub db_pass: String,
    /// Database name
    pub db_name: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `DB_HOST` - Database host (default: "localhost")
    /// - `DB_USER` - Database user (default: "root")
    /// - `DB_PASS` - Database password (default: empty)
    /// - `DB_NAME` - Database name (default: "langbuddy")
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            db_host: env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string()),
            db_user: env::var("DB_USER").unwrap_or_else(|_| "root".to_string()),
            db_pass: env::var("DB_PASS").unwrap_or_default(),
            db_name: env::var("DB_NAME").unwrap_or_else(|_| "langbuddy".to_string()),
        }
    }

    /// Builds the MySQL connection URL from the configured parts.
    pub fn database_url(&self) -> String {
        format!(
            "mysql://{}:{}@{}:{}/{}",
            self.db_user, self.db_pass, self.db_host, DB_PORT, self.db_name
        )
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            db_host: "localhost".to_string(),
            db_user: "root".to_string(),
            db_pass: String::new(),
            db_name: "langbuddy".to_string(),
        }
    }
}
