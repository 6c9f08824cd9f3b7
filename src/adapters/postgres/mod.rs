//! PostgreSQL adapters - Database implementations for the store port.

mod submission_store;

pub use submission_store::PostgresSubmissionStore;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::PgPool;

use crate::config::DatabaseConfig;

/// Open the connection pool described by the database configuration.
///
/// The pool defaults to a single connection; every statement issued by the
/// store serializes on it. TLS is required unless explicitly disabled.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let ssl_mode = if config.require_ssl {
        PgSslMode::Require
    } else {
        PgSslMode::Prefer
    };

    let options = PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.login)
        .password(&config.password)
        .database(&config.database)
        .ssl_mode(ssl_mode);

    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .connect_with(options)
        .await
}
