mod api_client;
mod config;
mod errors;
mod export;
mod layout;
mod library;
mod models;
mod routes;
mod search;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::api_client::LegalApiClient;
use crate::config::Config;
use crate::layout::default_page_config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Legal Search API v{}", env!("CARGO_PKG_VERSION"));

    let client = LegalApiClient::new(&config.legal_api_url, config.api_timeout, config.min_latency)?;
    info!(
        "Legal API client initialized ({}, latency floor {:?})",
        config.legal_api_url, config.min_latency
    );

    let page_config = default_page_config(config.report_font);
    info!(
        "Report page config: {:?} {}x{}mm",
        page_config.font, page_config.page_width_mm, page_config.page_height_mm
    );

    let state = AppState {
        source: Arc::new(client),
        page_config,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
