//! # Menu API Server
//!
//! Serves the product catalog over HTTP.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Menu API Server                                  │
//! │                                                                         │
//! │  Mobile app ───► HTTP (3000) ───► Handlers ───► ProductRepository      │
//! │                                                      │                  │
//! │                                                      ▼                  │
//! │                                               products.json             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use menu_api::{create_router, ApiConfig, AppState};
use menu_db::{Catalog, CatalogConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("Starting Menu API server...");

    // Load configuration
    let config = ApiConfig::load()?;
    info!(
        host = %config.host,
        port = config.port,
        data_file = %config.data_file.display(),
        cors_permissive = config.cors_permissive,
        "Configuration loaded"
    );

    // Open the catalog
    let catalog = Catalog::open(CatalogConfig::new(&config.data_file)).await?;

    // Build router
    let app = create_router(AppState::new(catalog), config.cors_permissive);

    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    info!(addr = %listener.local_addr()?, "Starting HTTP server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
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
                error!(error = %e, "Failed to install SIGTERM handler");
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

    info!("Shutdown signal received, starting graceful shutdown");
}
