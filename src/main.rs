use crate::app_config::AppConfig;
use crate::emitter::Emitter;
use std::sync::Arc;
use tracing::{error, info};

mod app_config;
mod domain;
mod emitter;
mod extensions;
mod generator;
mod ingest;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load().inspect_err(|e| error!("❌ {}", e))?;
    info!(
        api_url = config.api_url(),
        interval = ?config.interval(),
        "✅  Loaded configuration"
    );

    let client = ingest::new_client()?;
    let catalog = domain::catalog();
    info!("✅  Simulating {} devices", catalog.len());

    let mut emitter = Emitter::new(client, Arc::new(config), catalog);
    info!("🔥 {} is up and running", env!("CARGO_PKG_NAME"));

    emitter.run().await;

    Ok(())
}
