//! Database configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// PostgreSQL host
    pub host: String,

    /// PostgreSQL port
    #[serde(default = "default_db_port")]
    pub port: u16,

    /// Login role
    pub login: String,

    /// Login password
    #[serde(default)]
    pub password: String,

    /// Database name
    #[serde(default = "default_database")]
    pub database: String,

    /// Require TLS on the connection (sslmode=require)
    #[serde(default = "default_require_ssl")]
    pub require_ssl: bool,

    /// Maximum connections allowed
    ///
    /// The insert path is written against a single shared connection;
    /// statements from concurrent requests serialize on it.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Connection acquire timeout in seconds
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
}

impl DatabaseConfig {
    /// Get acquire timeout as Duration
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    /// Validate database configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.host.is_empty() {
            return Err(ValidationError::MissingRequired("FSTR__DATABASE__HOST"));
        }
        if self.login.is_empty() {
            return Err(ValidationError::MissingRequired("FSTR__DATABASE__LOGIN"));
        }
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if self.max_connections == 0 {
            return Err(ValidationError::InvalidPoolSize);
        }
        if self.max_connections > 100 {
            return Err(ValidationError::PoolSizeTooLarge);
        }
        Ok(())
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: default_db_port(),
            login: String::new(),
            password: String::new(),
            database: default_database(),
            require_ssl: default_require_ssl(),
            max_connections: default_max_connections(),
            acquire_timeout_secs: default_acquire_timeout(),
        }
    }
}

fn default_db_port() -> u16 {
    5432
}

fn default_database() -> String {
    "pereval".to_string()
}

fn default_require_ssl() -> bool {
    true
}

fn default_max_connections() -> u32 {
    1
}

fn default_acquire_timeout() -> u64 {
    30
}
