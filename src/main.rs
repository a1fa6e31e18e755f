//! Inventory Expiry - scheduled inventory cleanup for the ecosystem backend

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use inventory_expiry::api::create_router;
use inventory_expiry::store::{FileUserStore, MemoryUserStore, UserStore};
use inventory_expiry::{spawn_expiry_task, AppState, Config};

/// Main entry point for the inventory expiry service.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Open the user store
/// 4. Start the scheduled expiry sweep
/// 5. Serve the health and stats endpoints
/// 6. On SIGINT/SIGTERM, stop the server, then the scheduler
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "inventory_expiry=info,economy=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting inventory expiry service");

    let config = Config::from_env();
    info!(
        "Configuration loaded: sweep_interval={}s, port={}, user_store={:?}",
        config.sweep_interval, config.server_port, config.user_store_path
    );

    let store: Arc<dyn UserStore> = match &config.user_store_path {
        Some(path) => Arc::new(
            FileUserStore::open(path)
                .await
                .with_context(|| format!("failed to open user store at {}", path.display()))?,
        ),
        None => Arc::new(MemoryUserStore::new()),
    };

    let state = AppState::from_config(&config, store);
    let scheduler = spawn_expiry_task(state.sweeper.clone(), config.sweep_interval);

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    scheduler.stop().await;
    info!("Expiry scheduler stopped, shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
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
