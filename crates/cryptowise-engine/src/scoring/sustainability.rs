//! Sustainability Scorer
//!
//! Rates environmental impact and project fundamentals.

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::{DimensionScorer, RatingScale, RuleHit};
use crate::model::Asset;

/// Sustainability tiers, lowest first
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SustainabilityRating {
    #[serde(rename = "Low Sustainability")]
    LowSustainability,
    #[serde(rename = "Moderately Sustainable")]
    ModeratelySustainable,
    Sustainable,
    #[serde(rename = "Highly Sustainable")]
    HighlySustainable,
}

impl RatingScale for SustainabilityRating {
    fn from_score(score: i32) -> Self {
        match score {
            s if s >= 8 => Self::HighlySustainable,
            s if s >= 5 => Self::Sustainable,
            s if s >= 2 => Self::ModeratelySustainable,
            _ => Self::LowSustainability,
        }
    }

    fn advisory(self) -> &'static str {
        match self {
            Self::HighlySustainable => "Excellent long-term investment choice",
            Self::Sustainable => "Good sustainable investment option",
            Self::ModeratelySustainable => "Acceptable for ESG-conscious investors",
            Self::LowSustainability => "Not recommended for sustainability-focused portfolios",
        }
    }
}

impl fmt::Display for SustainabilityRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::LowSustainability => "Low Sustainability",
            Self::ModeratelySustainable => "Moderately Sustainable",
            Self::Sustainable => "Sustainable",
            Self::HighlySustainable => "Highly Sustainable",
        };
        f.write_str(label)
    }
}

/// Environmental and fundamentals based scorer
#[derive(Clone, Copy, Debug, Default)]
pub struct SustainabilityScorer;

impl DimensionScorer for SustainabilityScorer {
    type Rating = SustainabilityRating;

    fn rule_hits(&self, asset: &Asset) -> Vec<Option<RuleHit>> {
        let f = &asset.fundamentals;
        vec![
            Some(environmental_impact(f.environmental_score)),
            Some(project_strength(f.project_viability)),
            Some(technology_adoption(f.technology_score, f.adoption_score)),
        ]
    }
}

pub(crate) const fn environmental_impact(score: u8) -> RuleHit {
    match score {
        8.. => RuleHit::new(4, "Excellent environmental rating"),
        6..=7 => RuleHit::new(2, "Good environmental rating"),
        4..=5 => RuleHit::new(1, "Moderate environmental rating"),
        _ => RuleHit::new(-2, "Poor environmental rating"),
    }
}

pub(crate) const fn project_strength(viability: u8) -> RuleHit {
    match viability {
        8.. => RuleHit::new(3, "Strong project fundamentals"),
        6..=7 => RuleHit::new(2, "Solid project foundation"),
        4..=5 => RuleHit::new(1, "Moderate project strength"),
        _ => RuleHit::new(-1, "Weak project fundamentals"),
    }
}

/// Averaged in decimal so that e.g. 7 and 8 land on 7.5, not 7
pub(crate) fn technology_adoption(technology: u8, adoption: u8) -> RuleHit {
    let average = Decimal::from(u16::from(technology) + u16::from(adoption)) / dec!(2);
    if average >= dec!(8) {
        RuleHit::new(3, "Advanced technology with strong adoption")
    } else if average >= dec!(6) {
        RuleHit::new(2, "Good technology and adoption balance")
    } else if average >= dec!(4) {
        RuleHit::new(1, "Developing technology and adoption")
    } else {
        RuleHit::new(0, "Limited technology adoption")
    }
}
