use anyhow::{Context, Result};
use blueprint_rust::{config, server};
use tracing::info;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Configuration first; the logging setup depends on it
    let config = config::load()
        .await
        .context("Failed to load configuration")?;

    // RUST_LOG overrides the configured level; reject garbage before the
    // subscriber is installed
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.server.logs.level.clone());
    log_level.parse::<LevelFilter>().map_err(|_| {
        anyhow::anyhow!(
            "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
            log_level
        )
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .json()
        .init();

    info!(
        "Starting blueprint server with log level: {}, model: {}",
        log_level, config.llm.model
    );

    server::run(config).await?;

    Ok(())
}
