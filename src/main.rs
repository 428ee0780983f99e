//! Order Validator - purchase order validation service
//!
//! Loads the customer catalog at startup and serves order validation over HTTP.

use anyhow::Context;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use order_validator::{api::create_router, AppState, Config};

/// Main entry point for the order validator service.
///
/// # Startup Sequence
/// 1. Load `.env` if present
/// 2. Initialize tracing subscriber for logging
/// 3. Load configuration from environment variables
/// 4. Load the catalog and build the validator with its cache
/// 5. Create Axum router with all endpoints
/// 6. Start HTTP server on configured address
/// 7. Handle graceful shutdown on SIGINT/SIGTERM
///
/// Any failure before the server is listening aborts the process.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Missing .env is fine, the environment may be set another way
    let _ = dotenvy::dotenv();

    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "order_validator=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting order validator");

    let config = Config::from_env().context("loading configuration")?;
    info!(
        "Configuration loaded: catalog={}, cache_max_size={}, cache_ttl={}s, port={}",
        config.catalog_path.display(),
        config.cache_max_size,
        config.cache_ttl_seconds,
        config.server_port
    );

    let state = AppState::from_config(&config).context("initializing order validator")?;
    info!(
        "Validator ready with {} catalog rows",
        state.validator.catalog().row_count()
    );

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr())
        .await
        .with_context(|| {
            format!("binding {}:{}", config.server_host, config.server_port)
        })?;
    let addr = listener.local_addr().context("reading listen address")?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving HTTP")?;

    info!("Server shutdown complete");
    Ok(())
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
