use std::{future::Future, time::Duration};

use axum::Router;
use configs::AppConfig;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Build the app around a fresh in-memory store.
pub fn build_app(config: &AppConfig) -> Router {
    let timeout = Duration::from_secs(config.server.request_timeout_secs);
    routes::build_router(ServerState::in_memory(), build_cors(), timeout)
}

/// Public entry: bind the configured address and serve until Ctrl+C.
pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&config);
    let listener = TcpListener::bind(config.server.bind_addr()).await?;
    serve(listener, app, shutdown_signal()).await
}

/// Serve `app` on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    info!(%addr, "starting employee registry");
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    info!(%addr, "employee registry stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl+C; graceful shutdown disabled");
        std::future::pending::<()>().await;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, draining connections");
}
