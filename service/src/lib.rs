//! HTTP service rendering QR, DataMatrix, Code 128 and EAN-13 codes as PNG.

pub mod app;
pub mod config;
pub mod error;
pub mod render;
pub mod server;

pub use server::BarcodeService;

/// Load `.env` from the first candidate path that exists.
pub fn load_dotenv() {
    let candidates = [".env", "../.env"];
    for path in &candidates {
        if dotenvy::from_filename(path).is_ok() {
            tracing::info!("Loaded .env from: {path}");
            return;
        }
    }
    tracing::debug!("No .env file found, using system environment variables");
}
