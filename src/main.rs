// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use anyhow::Context;
use std::{net::SocketAddr, sync::Arc, time::Duration};

use crate::application::dashboard_service::DashboardService;
use crate::application::poller::Poller;
use crate::infrastructure::backend_client::BackendClient;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::logging::init_tracing;
use crate::presentation::app_state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = load_app_config().context("Failed to load configuration")?;

    // Backend client (infrastructure layer)
    let backend = Arc::new(BackendClient::new(
        &config.backend.base_url,
        Duration::from_millis(config.backend.timeout_ms),
    )?);

    // Dashboard service and poller (application layer)
    let credit = config.branding.credit();
    let dashboard = Arc::new(DashboardService::new(
        backend.clone(),
        config.poll.history_capacity,
        &credit,
    ));
    let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
    let pollers = Poller::new(dashboard.clone(), config.poll.intervals()).spawn(shutdown_rx);

    let state = Arc::new(AppState { dashboard, credit });
    let router = presentation::router(state);

    let addr: SocketAddr = config
        .server
        .bind
        .parse()
        .with_context(|| format!("Invalid bind address {}", config.server.bind))?;
    tracing::info!(%addr, backend = backend.base_url(), "Starting sysdash");

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for shutdown signal: {}", e);
            }
        })
        .await?;

    tracing::info!("Shutting down");
    let _ = shutdown_tx.send(true);
    for poller in pollers {
        let _ = poller.await;
    }

    Ok(())
}
