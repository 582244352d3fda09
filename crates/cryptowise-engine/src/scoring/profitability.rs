//! Profitability Scorer
//!
//! Rates short, medium and long-term price momentum plus trading activity.

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::{DimensionScorer, RatingScale, RuleHit};
use crate::model::Asset;

/// Profitability tiers, lowest first
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProfitabilityRating {
    #[serde(rename = "Very Poor")]
    VeryPoor,
    Poor,
    Moderate,
    Good,
    Excellent,
}

impl RatingScale for ProfitabilityRating {
    fn from_score(score: i32) -> Self {
        match score {
            s if s >= 8 => Self::Excellent,
            s if s >= 5 => Self::Good,
            s if s >= 2 => Self::Moderate,
            s if s >= -2 => Self::Poor,
            _ => Self::VeryPoor,
        }
    }

    fn advisory(self) -> &'static str {
        match self {
            Self::Excellent => "Strong buy signal - excellent profit potential",
            Self::Good => "Buy signal - good profit potential",
            Self::Moderate => "Hold or small position - moderate potential",
            Self::Poor => "Caution advised - limited profit potential",
            Self::VeryPoor => "Avoid - high risk of losses",
        }
    }
}

impl fmt::Display for ProfitabilityRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::VeryPoor => "Very Poor",
            Self::Poor => "Poor",
            Self::Moderate => "Moderate",
            Self::Good => "Good",
            Self::Excellent => "Excellent",
        };
        f.write_str(label)
    }
}

/// Momentum and volume based scorer
#[derive(Clone, Copy, Debug, Default)]
pub struct ProfitabilityScorer;

impl DimensionScorer for ProfitabilityScorer {
    type Rating = ProfitabilityRating;

    fn rule_hits(&self, asset: &Asset) -> Vec<Option<RuleHit>> {
        vec![
            daily_trend(asset.price_change_24h),
            weekly_trend(asset.price_change_7d),
            monthly_trend(asset.price_change_30d),
            trading_activity(asset.volume_ratio()),
        ]
    }
}

pub(crate) fn daily_trend(change: Decimal) -> Option<RuleHit> {
    if change > dec!(5) {
        Some(RuleHit::new(3, "Strong 24h growth"))
    } else if change > Decimal::ZERO {
        Some(RuleHit::new(1, "Positive 24h trend"))
    } else if change < dec!(-5) {
        Some(RuleHit::new(-2, "Weak 24h performance"))
    } else {
        None
    }
}

pub(crate) fn weekly_trend(change: Decimal) -> Option<RuleHit> {
    if change > dec!(10) {
        Some(RuleHit::new(3, "Excellent weekly performance"))
    } else if change > Decimal::ZERO {
        Some(RuleHit::new(2, "Positive weekly trend"))
    } else if change < dec!(-10) {
        Some(RuleHit::new(-3, "Poor weekly performance"))
    } else {
        None
    }
}

pub(crate) fn monthly_trend(change: Decimal) -> Option<RuleHit> {
    if change > dec!(20) {
        Some(RuleHit::new(4, "Outstanding monthly growth"))
    } else if change > dec!(10) {
        Some(RuleHit::new(3, "Strong monthly performance"))
    } else if change > Decimal::ZERO {
        Some(RuleHit::new(1, "Positive monthly trend"))
    } else if change < dec!(-20) {
        Some(RuleHit::new(-4, "Concerning monthly decline"))
    } else {
        None
    }
}

/// `ratio` is 24h volume over market cap
pub(crate) fn trading_activity(ratio: Decimal) -> Option<RuleHit> {
    if ratio > dec!(0.1) {
        Some(RuleHit::new(2, "High trading activity"))
    } else if ratio > dec!(0.05) {
        Some(RuleHit::new(1, "Good trading volume"))
    } else if ratio < dec!(0.01) {
        Some(RuleHit::new(-1, "Low trading volume"))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::AssetCatalog;

    fn momentum_asset(d24: Decimal, d7: Decimal, d30: Decimal, cap: Decimal, volume: Decimal) -> Asset {
        Asset::new("test", "Test", "TST")
            .with_market(dec!(1), cap, volume)
            .with_price_changes(d24, d7, d30)
    }

    #[test]
    fn test_daily_trend_branches() {
        assert_eq!(daily_trend(dec!(5.01)).unwrap().delta, 3);
        assert_eq!(daily_trend(dec!(5)).unwrap().delta, 1);
        assert_eq!(daily_trend(dec!(0.01)).unwrap().tag, "Positive 24h trend");
        assert_eq!(daily_trend(Decimal::ZERO), None);
        assert_eq!(daily_trend(dec!(-5)), None);
        assert_eq!(daily_trend(dec!(-5.5)).unwrap().delta, -2);
    }

    #[test]
    fn test_weekly_and_monthly_branches() {
        assert_eq!(weekly_trend(dec!(10.5)).unwrap().delta, 3);
        assert_eq!(weekly_trend(dec!(10)).unwrap().delta, 2);
        assert_eq!(weekly_trend(dec!(-10)), None);
        assert_eq!(weekly_trend(dec!(-12)).unwrap().delta, -3);

        assert_eq!(monthly_trend(dec!(20.1)).unwrap().delta, 4);
        assert_eq!(monthly_trend(dec!(20)).unwrap().delta, 3);
        assert_eq!(monthly_trend(dec!(10)).unwrap().delta, 1);
        assert_eq!(monthly_trend(dec!(-20)), None);
        assert_eq!(monthly_trend(dec!(-25)).unwrap().tag, "Concerning monthly decline");
    }

    #[test]
    fn test_trading_activity_branches() {
        assert_eq!(trading_activity(dec!(0.11)).unwrap().delta, 2);
        assert_eq!(trading_activity(dec!(0.1)).unwrap().delta, 1);
        assert_eq!(trading_activity(dec!(0.05)), None);
        assert_eq!(trading_activity(dec!(0.027)), None);
        assert_eq!(trading_activity(dec!(0.01)), None);
        assert_eq!(trading_activity(dec!(0.009)).unwrap().delta, -1);
        assert_eq!(trading_activity(Decimal::ZERO).unwrap().tag, "Low trading volume");
    }

    #[test]
    fn test_moderate_momentum_scores_good() {
        // 1 (24h) + 2 (7d) + 3 (30d) + 0 (volume)
        let asset = momentum_asset(
            dec!(4.2),
            dec!(8.1),
            dec!(15.7),
            dec!(462_000_000_000),
            dec!(12_500_000_000),
        );
        let result = ProfitabilityScorer.score(&asset);

        assert_eq!(result.score, 6);
        assert_eq!(result.rating, ProfitabilityRating::Good);
        assert_eq!(
            result.tags,
            vec!["Positive 24h trend", "Positive weekly trend", "Strong monthly performance"]
        );
        assert_eq!(result.recommendation, "Buy signal - good profit potential");
    }

    #[test]
    fn test_crash_scores_very_poor() {
        let asset = momentum_asset(dec!(-8), dec!(-15), dec!(-30), dec!(1_000_000), dec!(1_000));
        let result = ProfitabilityScorer.score(&asset);

        assert_eq!(result.score, -10);
        assert_eq!(result.rating, ProfitabilityRating::VeryPoor);
        assert_eq!(result.tags.len(), 4);
    }

    #[test]
    fn test_zero_market_cap_counts_as_low_volume() {
        let asset = momentum_asset(Decimal::ZERO, Decimal::ZERO, Decimal::ZERO, Decimal::ZERO, dec!(500));
        let result = ProfitabilityScorer.score(&asset);
        assert_eq!(result.score, -1);
        assert_eq!(result.tags, vec!["Low trading volume"]);
    }

    #[test]
    fn test_rating_monotonic() {
        let ratings: Vec<_> = (-20..=20).map(ProfitabilityRating::from_score).collect();
        assert!(ratings.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(ProfitabilityRating::from_score(-2), ProfitabilityRating::Poor);
        assert_eq!(ProfitabilityRating::from_score(-3), ProfitabilityRating::VeryPoor);
        assert_eq!(ProfitabilityRating::from_score(2), ProfitabilityRating::Moderate);
    }

    #[test]
    fn test_deterministic_over_catalog() {
        let catalog = AssetCatalog::default();
        for asset in catalog.iter() {
            assert_eq!(ProfitabilityScorer.score(asset), ProfitabilityScorer.score(asset));
        }
    }

    #[test]
    fn test_rating_labels() {
        assert_eq!(ProfitabilityRating::VeryPoor.to_string(), "Very Poor");
        assert_eq!(
            serde_json::to_string(&ProfitabilityRating::VeryPoor).unwrap(),
            "\"Very Poor\""
        );
    }
}
