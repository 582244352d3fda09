//! Recommendation Blender
//!
//! Combines the profitability and sustainability scores into one
//! personalized verdict:
//!
//! ```text
//! profitability ──┐
//!                 ├─ weights(preference) ─ risk adjustment ─ verdict + advice
//! sustainability ─┘
//! ```

pub mod advice;

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::model::{Asset, AssetSnapshot, RiskTolerance, SustainabilityPreference, UserProfile};
use crate::scoring::{
    DimensionScorer, ProfitabilityRating, ProfitabilityScorer, ScoreResult, SustainabilityRating,
    SustainabilityScorer,
};

use self::advice::AdviceContext;

/// Profit/sustainability mixing ratio
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weights {
    pub profit: Decimal,
    pub sustain: Decimal,
}

impl Weights {
    /// Profit-focused users get 70/30; everyone else 50/50
    pub fn for_preference(preference: SustainabilityPreference) -> Self {
        let profit = match preference {
            SustainabilityPreference::Low => dec!(0.7),
            SustainabilityPreference::Medium | SustainabilityPreference::High => dec!(0.5),
        };
        Self {
            profit,
            sustain: Decimal::ONE - profit,
        }
    }

    pub fn blend(self, profit_score: i32, sustain_score: i32) -> Decimal {
        Decimal::from(profit_score) * self.profit + Decimal::from(sustain_score) * self.sustain
    }
}

/// Adjustment applied after blending, based on raw price data
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskAdjustment {
    /// Low tolerance and weekly move beyond ±15%
    VolatilityPenalty,
    /// High tolerance and monthly gain above 20%
    MomentumBonus,
    #[default]
    None,
}

impl RiskAdjustment {
    pub fn evaluate(asset: &Asset, risk: RiskTolerance) -> Self {
        match risk {
            RiskTolerance::Low if asset.price_change_7d.abs() > dec!(15) => Self::VolatilityPenalty,
            RiskTolerance::High if asset.price_change_30d > dec!(20) => Self::MomentumBonus,
            _ => Self::None,
        }
    }

    pub fn delta(self) -> Decimal {
        match self {
            Self::VolatilityPenalty => dec!(-2),
            Self::MomentumBonus => Decimal::ONE,
            Self::None => Decimal::ZERO,
        }
    }
}

/// Final verdict tiers, lowest first
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "Not Recommended")]
    NotRecommended,
    #[serde(rename = "Consider with Caution")]
    ConsiderWithCaution,
    Recommended,
    #[serde(rename = "Highly Recommended")]
    HighlyRecommended,
}

impl Verdict {
    pub fn from_score(score: Decimal) -> Self {
        if score >= dec!(7) {
            Self::HighlyRecommended
        } else if score >= dec!(4) {
            Self::Recommended
        } else if score >= Decimal::ONE {
            Self::ConsiderWithCaution
        } else {
            Self::NotRecommended
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::NotRecommended => "Not Recommended",
            Self::ConsiderWithCaution => "Consider with Caution",
            Self::Recommended => "Recommended",
            Self::HighlyRecommended => "Highly Recommended",
        };
        f.write_str(label)
    }
}

/// Personalized analysis of one asset
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub asset_id: String,
    pub name: String,
    pub symbol: String,
    /// Market data and labels the scores were computed from
    pub asset: AssetSnapshot,
    pub profitability: ScoreResult<ProfitabilityRating>,
    pub sustainability: ScoreResult<SustainabilityRating>,
    pub weights: Weights,
    pub risk_adjustment: RiskAdjustment,
    /// Blended and risk-adjusted, rounded to 2 decimal places
    pub weighted_score: Decimal,
    pub final_recommendation: Verdict,
    pub investment_advice: String,
}

/// Produces personalized recommendations from the two dimension scorers
#[derive(Clone, Copy, Debug, Default)]
pub struct RecommendationBlender {
    profitability: ProfitabilityScorer,
    sustainability: SustainabilityScorer,
}

impl RecommendationBlender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score, blend, adjust and classify one asset for `profile`
    pub fn recommend(&self, asset: &Asset, profile: &UserProfile) -> Recommendation {
        let profitability = self.profitability.score(asset);
        let sustainability = self.sustainability.score(asset);

        let weights = Weights::for_preference(profile.sustainability_preference);
        let risk_adjustment = RiskAdjustment::evaluate(asset, profile.risk_tolerance);
        let score = weights.blend(profitability.score, sustainability.score) + risk_adjustment.delta();

        // Verdict and advice work on the unrounded score
        let final_recommendation = Verdict::from_score(score);
        let investment_advice = advice::compose(&AdviceContext { asset, profile, score });

        tracing::debug!(
            asset = %asset.id,
            profitability = profitability.score,
            sustainability = sustainability.score,
            weighted = %score,
            adjustment = ?risk_adjustment,
            verdict = %final_recommendation,
            "Blended recommendation"
        );

        Recommendation {
            asset_id: asset.id.clone(),
            name: asset.name.clone(),
            symbol: asset.symbol.clone(),
            asset: asset.snapshot(),
            profitability,
            sustainability,
            weights,
            risk_adjustment,
            weighted_score: score.round_dp(2),
            final_recommendation,
            investment_advice,
        }
    }
}
