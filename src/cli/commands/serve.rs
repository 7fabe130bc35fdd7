//! HTTP server command handler

use anyhow::Context;
use metrics_exporter_prometheus::PrometheusHandle;
use tokio::signal;
use tracing::{error, info, warn};

use crate::api;
use crate::config::Config;

pub async fn cmd_serve(
    config: Config,
    in_memory: bool,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<()> {
    info!("Intake v{} starting...", env!("CARGO_PKG_VERSION"));

    let state = if in_memory {
        warn!("Using in-memory storage; records will be lost on exit");
        api::create_in_memory_app_state(config.clone(), prometheus_handle)
    } else {
        api::create_app_state_from_config(config.clone(), prometheus_handle).await?
    };

    let app = api::router(state);
    let addr = format!("{}:{}", config.server.bind_address, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("🌐 Web Server running at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Web server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => error!("Error listening for shutdown: {}", e),
    }
}
