//! HTTP Handlers

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use cryptowise_engine::{
    AdvisorError, ComparisonRow, MarketOverview, ProfileAnswers, Recommendation, UserProfile,
};

use crate::state::AppState;

// ============================================================================
// Request / Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub assets: usize,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

#[derive(Debug, Serialize)]
pub struct AssetListing {
    /// 1-based menu position
    pub position: usize,
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub current_price: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    /// Asset id or 1-based position
    pub asset: String,
    #[serde(default)]
    pub profile: ProfileAnswers,
}

#[derive(Debug, Default, Deserialize)]
pub struct TopRequest {
    #[serde(default)]
    pub profile: ProfileAnswers,
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    pub assets: Vec<String>,
    #[serde(default)]
    pub profile: ProfileAnswers,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn advisor_error(err: &AdvisorError) -> ApiError {
    let (status, code) = match err {
        AdvisorError::UnknownAsset(_) => (StatusCode::NOT_FOUND, "UNKNOWN_ASSET"),
        AdvisorError::InvalidSelection(_) => (StatusCode::BAD_REQUEST, "INVALID_SELECTION"),
        AdvisorError::ComparisonTooSmall { .. } => (StatusCode::BAD_REQUEST, "COMPARISON_TOO_SMALL"),
    };
    tracing::warn!("Rejected request: {}", err);
    (
        status,
        Json(ErrorResponse {
            error: err.user_message(),
            code: code.into(),
        }),
    )
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        assets: state.advisor.catalog().len(),
    })
}

/// Numbered list of supported assets
pub async fn list_assets(State(state): State<AppState>) -> Json<Vec<AssetListing>> {
    let listings = state
        .advisor
        .catalog()
        .iter()
        .enumerate()
        .map(|(i, asset)| AssetListing {
            position: i + 1,
            id: asset.id.clone(),
            name: asset.name.clone(),
            symbol: asset.symbol.clone(),
            current_price: asset.current_price,
        })
        .collect();
    Json(listings)
}

/// Normalize raw profile answers into a complete profile
pub async fn setup_profile(Json(answers): Json<ProfileAnswers>) -> Json<UserProfile> {
    Json(UserProfile::from_answers(&answers))
}

/// Detailed analysis of one asset
pub async fn recommend(
    State(state): State<AppState>,
    Json(payload): Json<RecommendRequest>,
) -> Result<Json<Recommendation>, ApiError> {
    let profile = UserProfile::from_answers(&payload.profile);
    let rec = state
        .advisor
        .recommend(&payload.asset, &profile)
        .map_err(|e| advisor_error(&e))?;

    tracing::info!(asset = %rec.asset_id, verdict = %rec.final_recommendation, "Recommendation served");
    Ok(Json(rec))
}

/// Best-scoring assets for the profile
pub async fn top_recommendations(
    State(state): State<AppState>,
    Json(payload): Json<TopRequest>,
) -> Json<Vec<Recommendation>> {
    let profile = UserProfile::from_answers(&payload.profile);
    let limit = payload.limit.filter(|&n| n > 0).unwrap_or(state.top_limit);
    Json(state.advisor.top_recommendations(&profile, limit))
}

/// Side-by-side comparison of two or more assets
pub async fn compare(
    State(state): State<AppState>,
    Json(payload): Json<CompareRequest>,
) -> Result<Json<Vec<ComparisonRow>>, ApiError> {
    let profile = UserProfile::from_answers(&payload.profile);
    state
        .advisor
        .compare(&payload.assets, &profile)
        .map(Json)
        .map_err(|e| advisor_error(&e))
}

/// Catalog-wide market snapshot
pub async fn market_overview(State(state): State<AppState>) -> Json<MarketOverview> {
    Json(state.advisor.market_overview())
}
