//! Noise image HTTP service.
//!
//! Serves a freshly generated rainbow noise PNG on every path and a favicon
//! generated once at startup on `/favicon.ico`.

pub mod config;
pub mod handlers;
pub mod state;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{extract::Extension, routing::get, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use config::ServerConfig;
use state::AppState;

/// Build the service router. Every path other than the favicon falls
/// through to the image handler.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/favicon.ico", get(handlers::favicon_handler))
        .fallback(handlers::image_handler)
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
}

/// Open the listening socket for `config`. A malformed port is an error here.
pub async fn bind_listener(config: &ServerConfig) -> Result<TcpListener> {
    let addr = config.listen_addr();
    TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to open listening socket on {}", addr))
}
