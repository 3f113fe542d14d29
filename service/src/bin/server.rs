//! Barcode service binary.
//!
//! Loads the configuration, starts the HTTP server and stops it on Ctrl+C.

use tracing_subscriber::EnvFilter;

use barcode_service::BarcodeService;
use barcode_service::config::ServiceConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("Starting barcode service");

    barcode_service::load_dotenv();
    let config = ServiceConfig::load();
    let service = BarcodeService::start(config).await?;

    tracing::info!(
        addr = %service.local_addr(),
        "Barcode service running. Press Ctrl+C to stop."
    );

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down...");

    service.stop().await
}
