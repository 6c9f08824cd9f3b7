//! Pereval API server entry point.
//!
//! Bootstraps tracing, loads configuration, opens the PostgreSQL pool,
//! and serves the submission endpoint until shutdown.

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use pereval_api::adapters::http::{submission_routes, SubmissionHandlers};
use pereval_api::adapters::postgres::{self, PostgresSubmissionStore};
use pereval_api::application::handlers::submission::SubmitDataHandler;
use pereval_api::config::{AppConfig, ServerConfig};

#[tokio::main]
async fn main() {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // RUST_LOG wins over the configured filter when set
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run_server(config).await {
        error!("Server failed: {}", e);
        std::process::exit(1);
    }
}

async fn run_server(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    info!(
        "Connecting to PostgreSQL at {}:{}",
        config.database.host, config.database.port
    );
    let pool = postgres::connect(&config.database).await?;
    info!("Connection to PostgreSQL established");

    let store = Arc::new(PostgresSubmissionStore::new(pool.clone()));
    let submit_handler = Arc::new(SubmitDataHandler::new(store));
    let handlers = SubmissionHandlers::new(submit_handler);

    let app = Router::new()
        .nest("/api/v1", submission_routes(handlers))
        .layer(cors_layer(&config.server))
        .layer(TraceLayer::new_for_http());

    let addr = config.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("PostgreSQL connection closed");

    Ok(())
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
