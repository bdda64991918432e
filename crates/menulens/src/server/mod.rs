//! The Menulens HTTP server.
//!
//! A small axum app: a health probe and the menu-processing endpoint.
//! CORS is permissive because the browser client is served from a
//! different origin in development.

pub(crate) mod routes;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use menulens_core::Config;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

/// Application state shared across routes.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

/// Build the application router.
pub fn router(config: Arc<Config>) -> Router {
    // Allow multipart framing overhead on top of the configured image limit
    let body_limit = config.limits.max_upload_bytes() as usize + 64 * 1024;

    Router::new()
        .route("/health", get(routes::health))
        .route("/api/process-menu", post(routes::process_menu))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CorsLayer::permissive())
        .with_state(AppState { config })
}

/// Bind and serve until shutdown.
pub async fn serve(addr: SocketAddr, config: Arc<Config>) -> anyhow::Result<()> {
    let app = router(config);

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server running on port {}", addr.port());
    tracing::info!("Health check: http://{addr}/health");
    axum::serve(listener, app).await?;

    Ok(())
}
