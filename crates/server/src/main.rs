//! Jobhub Server - Monolithic Modular Architecture

use jobhub_adapters::AppConfig;
use jobhub_server::{api_router, build_state};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.level))
        .init();

    info!("starting jobhub server");

    let (state, _listener_handle) = build_state(&config).await?;
    let app = api_router(state);

    let listener =
        tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.server.port)).await?;
    info!(port = config.server.port, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
