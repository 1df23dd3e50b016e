//! HTTP server initialization and runtime setup.
//!
//! Loads the catalog, wires storage and the purchase ledger, and runs the
//! Axum server until a shutdown signal arrives.

use crate::config::Config;
use crate::infrastructure::persistence::{InMemoryCatalogRepository, InMemoryPurchaseRepository};
use crate::infrastructure::storage::{BookStorage, LocalBookStorage};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Book catalog from `CATALOG_PATH`
/// - Empty in-memory purchase ledger
/// - Local book storage rooted at `BOOKS_DIR`
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The catalog file cannot be read or is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let catalog = InMemoryCatalogRepository::from_json_file(&config.catalog_path)
        .with_context(|| {
            format!(
                "Failed to load catalog from {}",
                config.catalog_path.display()
            )
        })?;
    tracing::info!(books = catalog.books().len(), "Catalog loaded");

    let storage = LocalBookStorage::new(&config.books_dir);
    if !storage.health_check().await {
        tracing::warn!(
            "Books directory {} is not readable; downloads will fail",
            config.books_dir.display()
        );
    }

    let state = AppState::new(
        Arc::new(catalog),
        Arc::new(InMemoryPurchaseRepository::new()),
        Arc::new(storage),
        config.trending_default_count,
        config.download_requires_receipt,
    );

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {e}");
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
                tracing::error!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
