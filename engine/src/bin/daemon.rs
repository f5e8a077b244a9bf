//! gradebookd - the gradebook record service daemon
//!
//! Serves the JSON API and the visualization pages over one TCP listener.

#[path = "daemon/config.rs"]
mod config;

use config::DaemonConfig;
use gb_engine::adapters::{rest, web};
use gb_engine::application::UseCaseRegistry;
use gb_engine::infrastructure::CsvRecordStore;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = DaemonConfig::from_env();
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .init();

    info!(
        data_file = %config.data_file,
        port = config.port,
        "Starting gradebookd"
    );

    let store = Arc::new(CsvRecordStore::new(&config.data_file));
    let registry = Arc::new(UseCaseRegistry::new(store));

    let app = rest::build_router(registry.clone()).merge(web::build_router(registry));

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    rest::serve_on_tcp(addr, app, shutdown_signal()).await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
