//! Router assembly and the server entry point.

use std::path::Path;

use anyhow::Context;
use axum::middleware;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tracing::info;

use seqcalc_core::Options;

use crate::config::ServerConfig;
use crate::handlers::{self, AppState};
use crate::timing::response_time;

/// Build the application router.
///
/// API routes are matched first and carry `responseTime`; everything else is
/// served byte-for-byte from `static_dir`, with `index.html` answering `/`.
pub fn router(options: Options, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/api/factorial", get(handlers::factorial))
        .route("/api/fibonacci", get(handlers::fibonacci))
        .route("/api/ackermann", get(handlers::ackermann))
        .route_layer(middleware::from_fn(response_time))
        .fallback_service(ServeDir::new(static_dir))
        .with_state(AppState::new(options))
}

/// Bind and serve until Ctrl+C.
pub async fn run(config: ServerConfig) -> anyhow::Result<()> {
    let addr = config.bind_addr()?;
    let options = config.options();
    info!(
        fibonacci_max_n = options.fibonacci_max_n,
        ackermann_max_depth = options.ackermann_max_depth,
        ackermann_max_exponent = options.ackermann_max_exponent,
        "engine limits"
    );

    let app = router(options, &config.static_dir);
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, static_dir = %config.static_dir.display(), "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
