//! # cryptowise-engine
//!
//! Scores a fixed catalog of cryptocurrencies on two independent
//! dimensions and blends them into a recommendation for one user profile.
//!
//! ## Pipeline
//!
//! ```text
//! ┌──────────────┐   ┌─────────────────────────┐   ┌──────────────────────┐
//! │ AssetCatalog │──▶│ ProfitabilityScorer      │──▶│ RecommendationBlender│──▶ shell
//! │  (static)    │   │ SustainabilityScorer     │   │  weights · risk ·    │
//! └──────────────┘   └─────────────────────────┘   │  verdict · advice    │
//!                                                   └──────────────────────┘
//! ```
//!
//! ## Example: Ethereum, default profile
//!
//! ```text
//! Profitability:  +1 (24h) +2 (7d) +3 (30d) +0 (volume)   = 6   Good
//! Sustainability: +4 (env) +3 (viability) +3 (tech/adopt) = 10  Highly Sustainable
//! Weighted:       6 × 0.5 + 10 × 0.5                      = 8.0 Highly Recommended
//! ```
//!
//! All thresholds are fixed rule cutoffs. Every scoring call is a pure
//! function of the asset and the profile snapshot passed in.

pub mod advisor;
pub mod blend;
pub mod catalog;
pub mod error;
pub mod model;
pub mod overview;
pub mod scoring;

pub use advisor::{Advisor, ComparisonRow, DEFAULT_TOP_LIMIT};
pub use blend::{Recommendation, RecommendationBlender, RiskAdjustment, Verdict, Weights};
pub use catalog::AssetCatalog;
pub use error::{AdvisorError, Result};
pub use model::{
    Asset, AssetSnapshot, Fundamentals, InvestmentAmount, ProfileAnswers, RiskTolerance,
    SustainabilityPreference, TimeHorizon, UserProfile,
};
pub use overview::{MarketOverview, Sentiment};
pub use scoring::{
    DimensionScorer, ProfitabilityRating, ProfitabilityScorer, RatingScale, ScoreResult,
    SustainabilityRating, SustainabilityScorer,
};
