//! Dimension Scorers
//!
//! Each scorer turns one asset's raw attributes into a bounded integer
//! score by summing independent rule blocks. A rule block is a small pure
//! function that fires at most one branch and reports it as a [`RuleHit`].

mod profitability;
mod sustainability;

pub use profitability::{ProfitabilityRating, ProfitabilityScorer};
pub use sustainability::{SustainabilityRating, SustainabilityScorer};

use serde::{Deserialize, Serialize};

use crate::model::Asset;

/// The branch of one rule block that fired
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuleHit {
    pub delta: i32,
    pub tag: &'static str,
}

impl RuleHit {
    pub const fn new(delta: i32, tag: &'static str) -> Self {
        Self { delta, tag }
    }
}

/// Outcome of scoring one asset on one dimension
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult<R> {
    pub score: i32,
    pub rating: R,
    /// Explanatory tags, in rule-block order
    pub tags: Vec<String>,
    pub recommendation: String,
}

/// A rating tier that can be derived from a raw score
pub trait RatingScale: Copy + Ord {
    fn from_score(score: i32) -> Self;

    /// Advisory sentence for this tier
    fn advisory(self) -> &'static str;
}

/// Scores one dimension of an asset
pub trait DimensionScorer {
    type Rating: RatingScale;

    /// Rule blocks evaluated for `asset`, in order
    fn rule_hits(&self, asset: &Asset) -> Vec<Option<RuleHit>>;

    fn score(&self, asset: &Asset) -> ScoreResult<Self::Rating> {
        let (score, tags) = tally(self.rule_hits(asset));
        let rating = Self::Rating::from_score(score);
        ScoreResult {
            score,
            rating,
            tags,
            recommendation: rating.advisory().to_string(),
        }
    }
}

/// Sum the deltas of the blocks that fired and collect their tags
pub fn tally(hits: impl IntoIterator<Item = Option<RuleHit>>) -> (i32, Vec<String>) {
    hits.into_iter()
        .flatten()
        .fold((0, Vec::new()), |(score, mut tags), hit| {
            tags.push(hit.tag.to_string());
            (score + hit.delta, tags)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_skips_blocks_that_did_not_fire() {
        let (score, tags) = tally([
            Some(RuleHit::new(3, "up")),
            None,
            Some(RuleHit::new(-1, "down")),
            Some(RuleHit::new(0, "flat")),
        ]);
        assert_eq!(score, 2);
        assert_eq!(tags, vec!["up", "down", "flat"]);
    }

    #[test]
    fn test_tally_empty() {
        assert_eq!(tally(std::iter::empty::<Option<RuleHit>>()), (0, Vec::new()));
    }
}
