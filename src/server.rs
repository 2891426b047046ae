use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;

use crate::routes::router;
use crate::service::WeatherService;

/// Serves the HTTP API until Ctrl-C.
pub async fn serve(service: Arc<WeatherService>, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(service).into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown requested");
}
