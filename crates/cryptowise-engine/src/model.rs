//! Domain Models
//!
//! Core data types for the catalog and the user's investment profile.
//! Uses `rust_decimal` for all monetary values and percentages - never use f64 for money!

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Lowest value on the 1-10 fundamentals scale
pub const SCALE_MIN: u8 = 1;

/// Highest value on the 1-10 fundamentals scale
pub const SCALE_MAX: u8 = 10;

/// Structural and environmental attributes of an asset, each on a 1-10 scale
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fundamentals {
    pub energy_efficiency_score: u8,
    pub environmental_score: u8,
    pub project_viability: u8,
    pub adoption_score: u8,
    pub technology_score: u8,
    pub team_score: u8,
}

impl Default for Fundamentals {
    fn default() -> Self {
        Self {
            energy_efficiency_score: 5,
            environmental_score: 5,
            project_viability: 5,
            adoption_score: 5,
            technology_score: 5,
            team_score: 5,
        }
    }
}

impl Fundamentals {
    /// Pull every field into the 1-10 range
    #[must_use]
    pub fn clamped(self) -> Self {
        let clamp = |v: u8| v.clamp(SCALE_MIN, SCALE_MAX);
        Self {
            energy_efficiency_score: clamp(self.energy_efficiency_score),
            environmental_score: clamp(self.environmental_score),
            project_viability: clamp(self.project_viability),
            adoption_score: clamp(self.adoption_score),
            technology_score: clamp(self.technology_score),
            team_score: clamp(self.team_score),
        }
    }
}

/// A cryptocurrency asset in the catalog
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Stable catalog key (e.g., "bitcoin")
    pub id: String,

    /// Display name (e.g., "Bitcoin")
    pub name: String,

    /// Ticker symbol (e.g., "BTC")
    pub symbol: String,

    /// Current price in USD
    pub current_price: Decimal,

    /// Market capitalization in USD
    pub market_cap: Decimal,

    /// 24-hour trading volume in USD
    pub volume_24h: Decimal,

    /// 24-hour price change percentage
    pub price_change_24h: Decimal,

    /// 7-day price change percentage
    pub price_change_7d: Decimal,

    /// 30-day price change percentage
    pub price_change_30d: Decimal,

    #[serde(flatten)]
    pub fundamentals: Fundamentals,

    /// Display-only label, not read by any scorer
    pub sustainability_rating: String,

    /// Display-only label, not read by any scorer
    pub environmental_rating: String,
}

impl Asset {
    pub fn new(id: impl Into<String>, name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            id: id.into().to_lowercase(),
            name: name.into(),
            symbol: symbol.into().to_uppercase(),
            current_price: Decimal::ZERO,
            market_cap: Decimal::ZERO,
            volume_24h: Decimal::ZERO,
            price_change_24h: Decimal::ZERO,
            price_change_7d: Decimal::ZERO,
            price_change_30d: Decimal::ZERO,
            fundamentals: Fundamentals::default(),
            sustainability_rating: String::new(),
            environmental_rating: String::new(),
        }
    }

    #[must_use]
    pub fn with_market(mut self, current_price: Decimal, market_cap: Decimal, volume_24h: Decimal) -> Self {
        self.current_price = current_price;
        self.market_cap = market_cap;
        self.volume_24h = volume_24h;
        self
    }

    #[must_use]
    pub fn with_price_changes(mut self, change_24h: Decimal, change_7d: Decimal, change_30d: Decimal) -> Self {
        self.price_change_24h = change_24h;
        self.price_change_7d = change_7d;
        self.price_change_30d = change_30d;
        self
    }

    #[must_use]
    pub fn with_fundamentals(mut self, fundamentals: Fundamentals) -> Self {
        self.fundamentals = fundamentals.clamped();
        self
    }

    #[must_use]
    pub fn with_labels(mut self, sustainability: impl Into<String>, environmental: impl Into<String>) -> Self {
        self.sustainability_rating = sustainability.into();
        self.environmental_rating = environmental.into();
        self
    }

    /// 24h volume relative to market cap, zero when market cap is not positive
    pub fn volume_ratio(&self) -> Decimal {
        if self.market_cap > Decimal::ZERO {
            self.volume_24h / self.market_cap
        } else {
            Decimal::ZERO
        }
    }

    pub fn snapshot(&self) -> AssetSnapshot {
        AssetSnapshot {
            current_price: self.current_price,
            market_cap: self.market_cap,
            price_change_24h: self.price_change_24h,
            price_change_7d: self.price_change_7d,
            price_change_30d: self.price_change_30d,
            sustainability_rating: self.sustainability_rating.clone(),
            environmental_rating: self.environmental_rating.clone(),
        }
    }
}

/// Market figures and display labels shown next to an asset's scores
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetSnapshot {
    pub current_price: Decimal,
    pub market_cap: Decimal,
    pub price_change_24h: Decimal,
    pub price_change_7d: Decimal,
    pub price_change_30d: Decimal,
    pub sustainability_rating: String,
    pub environmental_rating: String,
}

/// Normalize a raw menu answer for matching
fn normalize_choice(input: &str) -> String {
    input.trim().to_lowercase()
}

/// How much volatility the user accepts
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTolerance {
    Low,
    #[default]
    Medium,
    High,
}

impl RiskTolerance {
    /// Parse a menu answer ("a"/"b"/"c" or a level name), defaulting to medium
    pub fn from_choice(input: &str) -> Self {
        match normalize_choice(input).as_str() {
            "a" | "low" => Self::Low,
            "c" | "high" => Self::High,
            _ => Self::Medium,
        }
    }
}

/// Approximate size of the user's investment (advice display only)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvestmentAmount {
    /// Under $1,000
    Small,
    /// $1,000 - $10,000
    #[default]
    Medium,
    /// Over $10,000
    Large,
}

impl InvestmentAmount {
    pub fn from_choice(input: &str) -> Self {
        match normalize_choice(input).as_str() {
            "a" | "small" => Self::Small,
            "c" | "large" => Self::Large,
            _ => Self::Medium,
        }
    }
}

/// Intended holding period
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeHorizon {
    /// Weeks to months
    Short,
    /// Months to 1-2 years
    #[default]
    Medium,
    /// 2+ years
    Long,
}

impl TimeHorizon {
    pub fn from_choice(input: &str) -> Self {
        match normalize_choice(input).as_str() {
            "a" | "short" => Self::Short,
            "c" | "long" => Self::Long,
            _ => Self::Medium,
        }
    }
}

/// How much environmental impact matters to the user
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SustainabilityPreference {
    Low,
    #[default]
    Medium,
    High,
}

impl SustainabilityPreference {
    pub fn from_choice(input: &str) -> Self {
        match normalize_choice(input).as_str() {
            "a" | "low" => Self::Low,
            "c" | "high" => Self::High,
            _ => Self::Medium,
        }
    }
}

/// Raw answers collected by the profile-setup flow
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ProfileAnswers {
    #[serde(default)]
    pub risk_tolerance: Option<String>,
    #[serde(default)]
    pub investment_amount: Option<String>,
    #[serde(default)]
    pub time_horizon: Option<String>,
    #[serde(default)]
    pub sustainability_preference: Option<String>,
}

/// Investment profile for one session
///
/// Passed by reference into every scoring call. A new setup run replaces
/// the whole value; fields are never updated one at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub risk_tolerance: RiskTolerance,
    pub investment_amount: InvestmentAmount,
    pub time_horizon: TimeHorizon,
    pub sustainability_preference: SustainabilityPreference,
}

impl UserProfile {
    /// Build a complete profile from raw answers; missing or unknown answers become medium
    pub fn from_answers(answers: &ProfileAnswers) -> Self {
        Self {
            risk_tolerance: RiskTolerance::from_choice(
                answers.risk_tolerance.as_deref().unwrap_or_default(),
            ),
            investment_amount: InvestmentAmount::from_choice(
                answers.investment_amount.as_deref().unwrap_or_default(),
            ),
            time_horizon: TimeHorizon::from_choice(
                answers.time_horizon.as_deref().unwrap_or_default(),
            ),
            sustainability_preference: SustainabilityPreference::from_choice(
                answers.sustainability_preference.as_deref().unwrap_or_default(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_fundamentals_clamped() {
        let raw = Fundamentals {
            energy_efficiency_score: 0,
            environmental_score: 14,
            project_viability: 7,
            adoption_score: 255,
            technology_score: 1,
            team_score: 10,
        };
        let asset = Asset::new("test", "Test", "tst").with_fundamentals(raw);

        assert_eq!(asset.fundamentals.energy_efficiency_score, 1);
        assert_eq!(asset.fundamentals.environmental_score, 10);
        assert_eq!(asset.fundamentals.project_viability, 7);
        assert_eq!(asset.fundamentals.adoption_score, 10);
        assert_eq!(asset.symbol, "TST");
    }

    #[test]
    fn test_volume_ratio() {
        let asset = Asset::new("eth", "Ethereum", "ETH")
            .with_market(dec!(3850), dec!(462_000_000_000), dec!(12_500_000_000));
        let ratio = asset.volume_ratio();
        assert!(ratio > dec!(0.027) && ratio < dec!(0.0271));

        let no_cap = Asset::new("x", "X", "X").with_market(dec!(1), Decimal::ZERO, dec!(100));
        assert_eq!(no_cap.volume_ratio(), Decimal::ZERO);
    }

    #[test]
    fn test_choice_parsing() {
        assert_eq!(RiskTolerance::from_choice("a"), RiskTolerance::Low);
        assert_eq!(RiskTolerance::from_choice(" C "), RiskTolerance::High);
        assert_eq!(RiskTolerance::from_choice("HIGH"), RiskTolerance::High);
        assert_eq!(RiskTolerance::from_choice("z"), RiskTolerance::Medium);
        assert_eq!(TimeHorizon::from_choice("long"), TimeHorizon::Long);
        assert_eq!(TimeHorizon::from_choice("a"), TimeHorizon::Short);
        assert_eq!(InvestmentAmount::from_choice("c"), InvestmentAmount::Large);
        assert_eq!(SustainabilityPreference::from_choice(""), SustainabilityPreference::Medium);
    }

    #[test]
    fn test_profile_from_answers_defaults() {
        let answers = ProfileAnswers {
            risk_tolerance: Some("c".into()),
            investment_amount: None,
            time_horizon: Some("nonsense".into()),
            sustainability_preference: Some("a".into()),
        };
        let profile = UserProfile::from_answers(&answers);

        assert_eq!(profile.risk_tolerance, RiskTolerance::High);
        assert_eq!(profile.investment_amount, InvestmentAmount::Medium);
        assert_eq!(profile.time_horizon, TimeHorizon::Medium);
        assert_eq!(profile.sustainability_preference, SustainabilityPreference::Low);
        assert_eq!(UserProfile::from_answers(&ProfileAnswers::default()), UserProfile::default());
    }
}
