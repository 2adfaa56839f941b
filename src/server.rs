//! HTTP server initialization and runtime setup.
//!
//! Handles the storage connection, service wiring, and Axum server lifecycle.

use crate::config::Config;
use crate::domain::repositories::MappingRepository;
use crate::infrastructure::persistence::MappingStore;
use crate::routes::{app_router, with_path_normalization};
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Mapping store (SQLite or PostgreSQL) and its schema
/// - Alias service
/// - Axum HTTP server with request ids, panic recovery, a per-request
///   timeout and graceful shutdown
///
/// The store is closed once the server has stopped, whether it stopped
/// cleanly or with an error.
///
/// # Errors
///
/// Returns an error if:
/// - The storage engine is unreachable or the schema cannot be created
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = Arc::new(
        MappingStore::connect(&config.storage)
            .await
            .context("Failed to initialize mapping store")?,
    );

    let state = AppState::from_repository(store.clone(), config.alias_max_attempts);
    let result = serve(&config, state).await;

    store.close().await;
    result
}

async fn serve(config: &Config, state: AppState) -> Result<()> {
    let app = with_path_normalization(app_router(state, config.http_timeout));

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
