use anyhow::{Context, Result};
use clap::Parser;
use omeglin_server::{ServerConfig, app};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::parse();

    info!("Initializing Omeglin matchmaking server...");

    let app = app(&config);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    info!("Matchmaking server listening on http://{}", config.bind_addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
