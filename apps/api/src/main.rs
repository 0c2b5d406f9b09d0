mod config;
mod errors;
mod models;
mod routes;
mod search;
mod state;
mod store;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::search::matcher::KeywordMatcher;
use crate::state::AppState;
use crate::store::{load_seed, JobStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting JobHunt API v{}", env!("CARGO_PKG_VERSION"));

    // Seed the in-memory job collection
    let jobs = match &config.seed_path {
        Some(path) => load_seed(path)?,
        None => {
            warn!("SEED_PATH not set — starting with an empty job collection");
            Vec::new()
        }
    };
    let store = JobStore::new(jobs);
    info!("Job store initialized ({} jobs)", store.len().await);

    // Initialize the match evaluator (KeywordMatcher by default)
    let matcher = Arc::new(KeywordMatcher);

    // Build app state
    let state = AppState {
        store,
        config: config.clone(),
        matcher,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
