//! CryptoWise HTTP Server
//!
//! Axum-based JSON API over the recommendation engine. This is the
//! presentation shell: it parses the user's profile answers and
//! selections, calls the engine, and returns the structured results.

mod config;
mod handlers;
mod state;

use std::sync::Arc;

use axum::{routing::{get, post}, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cryptowise_engine::{Advisor, AssetCatalog};

use crate::config::ServerConfig;
use crate::handlers::{
    compare, health_check, list_assets, market_overview, recommend, setup_profile,
    top_recommendations,
};
use crate::state::AppState;

fn build_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health & info
        .route("/health", get(health_check))
        .route("/api/assets", get(list_assets))
        .route("/api/market", get(market_overview))

        // Profile setup
        .route("/api/profile", post(setup_profile))

        // Analysis
        .route("/api/recommend", post(recommend))
        .route("/api/top", post(top_recommendations))
        .route("/api/compare", post(compare))

        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();
    let config = ServerConfig::from_env();

    let advisor = Arc::new(Advisor::new(AssetCatalog::default()));
    tracing::info!("Loaded {} assets:", advisor.catalog().len());
    for asset in advisor.catalog().iter() {
        tracing::info!("  • {} ({})", asset.name, asset.symbol);
    }

    let state = AppState {
        advisor,
        top_limit: config.top_limit,
    };
    let app = build_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🚀 CryptoWise server running on http://{}", config.bind_addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health          - Health check");
    tracing::info!("  GET  /api/assets      - Numbered asset list");
    tracing::info!("  GET  /api/market      - Market overview");
    tracing::info!("  POST /api/profile     - Normalize profile answers");
    tracing::info!("  POST /api/recommend   - Analyze one asset");
    tracing::info!("  POST /api/top         - Top recommendations");
    tracing::info!("  POST /api/compare     - Compare assets");
    tracing::info!("");

    axum::serve(listener, app).await?;

    Ok(())
}
