//! Noise image server.
//!
//! Serves a new rainbow noise PNG on every request. Configured through the
//! environment only (`APP_HTTP_PORT`, `DEBUG`, `RUST_LOG`, `TOKIO_WORKER_THREADS`).

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use noise_api::{bind_listener, build_router, config::ServerConfig, state::AppState};

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .init();

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(threads) = config.worker_threads {
        info!("Configuring tokio runtime with {} worker threads", threads);
        runtime_builder.worker_threads(threads);
    }

    let runtime = runtime_builder
        .build()
        .context("failed to create tokio runtime")?;
    runtime.block_on(run_server(config))
}

async fn run_server(config: ServerConfig) -> Result<()> {
    // Favicon is generated before the listener exists
    let state = Arc::new(AppState::new(&config)?);

    let app = build_router(state);

    let listener = bind_listener(&config).await?;

    let url = format!("http://{}/", listener.local_addr()?);
    info!("Starting HTTP server: {:?}", url);

    axum::serve(listener, app).await.context("HTTP server failed")?;

    Ok(())
}
