// ABOUTME: Runs the Carryover HTTP API on a TCP listener
// ABOUTME: Opens the configured database and shuts down cleanly on Ctrl+C

use anyhow::Context;
use carryover_api::{create_router, AppState};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::config::Config;

pub async fn run_server(config: &Config) -> anyhow::Result<()> {
    let state = AppState::init_with_path(&config.database_path)
        .await
        .with_context(|| format!("Failed to open database at {}", config.database_path.display()))?;

    let app = create_router(state);

    let listener = TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", config.host, config.port))?;
    let addr = listener.local_addr()?;

    info!("Server listening on http://{}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
