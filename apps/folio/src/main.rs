mod animation;
mod bootstrap;
mod config;
mod contact;
mod controllers;
mod errors;
mod fallback;
mod loader;
mod models;
mod routes;
mod state;
mod view;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::bootstrap::Bootstrapper;
use crate::config::Config;
use crate::contact::HttpContactTransport;
use crate::controllers::theme::FileThemeStore;
use crate::loader::HttpPortfolioSource;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting folio v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Portfolio API: {} ({:?})",
        config.portfolio_api_url, config.api_layout
    );

    let source = Arc::new(HttpPortfolioSource::new(
        config.portfolio_api_url.clone(),
        config.api_layout,
    ));
    let theme_store = Arc::new(FileThemeStore::new(config.theme_store_path.clone()));
    let contact = Arc::new(HttpContactTransport::new(&config.portfolio_api_url));

    // Render the page before binding so no request sees an unset snapshot
    let ready = Bootstrapper::new(source, theme_store).run().await.into_ready();

    let state = AppState::new(config.clone(), ready, contact);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
