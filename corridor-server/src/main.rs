//! HTTP frontend for the corridor indoor wayfinding core.

mod api;
mod config;

use std::sync::Arc;

use clap::Parser;
use corridor_core::FloorPlanSet;
use tracing::info;
use tracing_subscriber::EnvFilter;

use api::AppState;
use config::Cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Cli::parse().resolve()?;

    let floors = FloorPlanSet::load_dir(&config.data_dir)?;
    if floors.is_empty() {
        return Err(format!(
            "No floorplan documents found in {}",
            config.data_dir.display()
        )
        .into());
    }
    info!("Serving {} floor(s) on {}", floors.len(), config.addr);

    let app = api::router(Arc::new(AppState { floors }));
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl+C handler: {err}");
        return;
    }
    info!("Shutdown signal received, draining connections");
}
