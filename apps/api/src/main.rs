mod assets;
mod chat;
mod config;
mod errors;
mod profile;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::chat::responder::KeywordResponder;
use crate::config::Config;
use crate::profile::loader::load_profile;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting portfolio API v{}", env!("CARGO_PKG_VERSION"));

    // Profile is loaded exactly once; everything downstream borrows it read-only
    let profile = load_profile(config.profile_path.as_deref())
        .await
        .context("Failed to load portfolio profile")?;

    if !config.assets_dir.is_dir() {
        tracing::warn!(
            "Assets directory {} not found; photo, resume and project images will report as missing",
            config.assets_dir.display()
        );
    }

    let state = AppState {
        config: config.clone(),
        profile: Arc::new(profile),
        responder: Arc::new(KeywordResponder::new()),
    };

    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
