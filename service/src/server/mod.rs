pub mod api;
pub mod router;


use std::net::SocketAddr;

use anyhow::Result;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::app::AppState;
use crate::config::ServiceConfig;

/// A running HTTP server.
///
/// `start` begins accepting connections; `stop` stops accepting new ones and
/// waits for in-flight requests to finish.
pub struct BarcodeService {
    local_addr: SocketAddr,
    shutdown_token: CancellationToken,
    handle: JoinHandle<std::io::Result<()>>,
}

impl BarcodeService {
    /// Bind the configured address and start serving in the background.
    pub async fn start(config: ServiceConfig) -> Result<Self> {
        let addr = config.addr();
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        let local_addr = listener.local_addr()?;

        let app = router::create_router(AppState::new(config));
        let shutdown_token = CancellationToken::new();
        let server_shutdown_token = shutdown_token.clone();

        let handle = tokio::spawn(async move {
            axum::serve(listener, app.into_make_service())
                .with_graceful_shutdown(async move { server_shutdown_token.cancelled().await })
                .await
        });

        tracing::info!("Barcode service started on http://{}", local_addr);
        Ok(Self {
            local_addr,
            shutdown_token,
            handle,
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Stop accepting connections and wait for the server task to finish.
    pub async fn stop(self) -> Result<()> {
        self.shutdown_token.cancel();
        self.handle.await??;
        tracing::info!("Barcode service stopped");
        Ok(())
    }
}
