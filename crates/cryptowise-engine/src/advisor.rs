//! Advisor
//!
//! Entry point for a presentation shell: single-asset analysis, ranked
//! top picks, side-by-side comparison and the market overview. Every
//! call takes the caller's profile snapshot; nothing here is mutable.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::blend::{Recommendation, RecommendationBlender};
use crate::catalog::AssetCatalog;
use crate::error::{AdvisorError, Result};
use crate::model::UserProfile;
use crate::overview::MarketOverview;
use crate::scoring::{ProfitabilityRating, SustainabilityRating};

/// Default size of the top recommendations list
pub const DEFAULT_TOP_LIMIT: usize = 3;

/// Fewest assets a comparison accepts
pub const MIN_COMPARISON: usize = 2;

/// One line of a side-by-side comparison
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub asset_id: String,
    pub name: String,
    pub symbol: String,
    pub current_price: Decimal,
    pub price_change_24h: Decimal,
    pub price_change_30d: Decimal,
    pub profitability: ProfitabilityRating,
    pub sustainability: SustainabilityRating,
    pub weighted_score: Decimal,
}

#[derive(Clone, Debug, Default)]
pub struct Advisor {
    catalog: AssetCatalog,
    blender: RecommendationBlender,
}

impl Advisor {
    pub fn new(catalog: AssetCatalog) -> Self {
        Self {
            catalog,
            blender: RecommendationBlender::new(),
        }
    }

    pub fn catalog(&self) -> &AssetCatalog {
        &self.catalog
    }

    /// Personalized analysis of one asset, selected by id or menu position
    pub fn recommend(&self, selection: &str, profile: &UserProfile) -> Result<Recommendation> {
        let asset = self.catalog.resolve(selection)?;
        Ok(self.blender.recommend(asset, profile))
    }

    /// Every catalog asset ranked by weighted score, best first.
    /// Equal scores keep catalog order.
    pub fn ranked(&self, profile: &UserProfile) -> Vec<Recommendation> {
        let mut recommendations: Vec<_> = self
            .catalog
            .iter()
            .map(|asset| self.blender.recommend(asset, profile))
            .collect();

        // sort_by is stable
        recommendations.sort_by(|a, b| b.weighted_score.cmp(&a.weighted_score));
        recommendations
    }

    pub fn top_recommendations(&self, profile: &UserProfile, limit: usize) -> Vec<Recommendation> {
        let mut ranked = self.ranked(profile);
        ranked.truncate(limit);
        ranked
    }

    /// Compare the selected assets, in selection order.
    ///
    /// Selections that do not resolve are skipped; at least two must remain.
    pub fn compare<S: AsRef<str>>(&self, selections: &[S], profile: &UserProfile) -> Result<Vec<ComparisonRow>> {
        let assets: Vec<_> = selections
            .iter()
            .filter_map(|selection| match self.catalog.resolve(selection.as_ref()) {
                Ok(asset) => Some(asset),
                Err(e) => {
                    tracing::warn!("Skipping comparison selection: {}", e);
                    None
                }
            })
            .collect();

        if assets.len() < MIN_COMPARISON {
            return Err(AdvisorError::ComparisonTooSmall {
                selected: assets.len(),
                required: MIN_COMPARISON,
            });
        }

        Ok(assets
            .into_iter()
            .map(|asset| {
                let rec = self.blender.recommend(asset, profile);
                ComparisonRow {
                    asset_id: rec.asset_id,
                    name: rec.name,
                    symbol: rec.symbol,
                    current_price: asset.current_price,
                    price_change_24h: asset.price_change_24h,
                    price_change_30d: asset.price_change_30d,
                    profitability: rec.profitability.rating,
                    sustainability: rec.sustainability.rating,
                    weighted_score: rec.weighted_score,
                }
            })
            .collect())
    }

    pub fn market_overview(&self) -> MarketOverview {
        MarketOverview::from_catalog(&self.catalog)
    }
}
