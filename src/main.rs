//! Language Buddy Backend
//!
//! Backend service for a language-learning app: auth, learning progress,
//! vocabulary notebook and mistake log over MySQL.

mod api;
mod config;
mod error;
mod models;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::{create_router, AppState};
use config::Config;
use store::MySqlStore;

/// Main entry point for the backend server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from .env / environment variables
/// 3. Create the MySQL store (lazy) and ping it once for the startup log
/// 4. Create Axum router with all endpoints
/// 5. Start HTTP server on configured port
/// 6. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "langbuddy=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Language Buddy Backend");

    // Load .env if present, then configuration from environment variables
    dotenvy::dotenv().ok();
    let config = Config::from_env();
    info!(
        "Configuration loaded: port={}, db={}@{}/{}",
        config.server_port, config.db_user, config.db_host, config.db_name
    );

    // The pool connects lazily; an unreachable database is logged here and
    // each request then fails individually instead of aborting startup
    let store = match MySqlStore::connect_lazy(&config) {
        Ok(store) => store,
        Err(e) => {
            error!(error = %e, "Invalid database configuration");
            return;
        }
    };
    match store.ping().await {
        Ok(()) => info!("MySQL connected"),
        Err(e) => error!(error = %e, "MySQL connection error"),
    }

    let state = AppState::new(Arc::new(store));

    // Create router with all endpoints
    let app = create_router(state);

    // Bind to configured port
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    info!("Server listening on http://{}", addr);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    info!("Server shutdown complete");
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
