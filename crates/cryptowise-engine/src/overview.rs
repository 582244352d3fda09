//! Market Overview
//!
//! Aggregate snapshot of the whole catalog.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::AssetCatalog;

/// Direction of the 24h move
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

/// Overall market mood
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    Bullish,
    Bearish,
}

/// One asset in the overview table
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MarketRow {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub current_price: Decimal,
    pub price_change_24h: Decimal,
    pub market_cap: Decimal,
    pub direction: Direction,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MarketOverview {
    pub total_market_cap: Decimal,
    pub total_volume_24h: Decimal,
    pub rows: Vec<MarketRow>,
    /// Assets with a positive 24h change
    pub positive_performers: usize,
    pub total_assets: usize,
    pub sentiment: Sentiment,
    pub generated_at: DateTime<Utc>,
}

impl MarketOverview {
    pub fn from_catalog(catalog: &AssetCatalog) -> Self {
        let rows: Vec<MarketRow> = catalog
            .iter()
            .map(|asset| MarketRow {
                id: asset.id.clone(),
                name: asset.name.clone(),
                symbol: asset.symbol.clone(),
                current_price: asset.current_price,
                price_change_24h: asset.price_change_24h,
                market_cap: asset.market_cap,
                // A flat day shows as up
                direction: if asset.price_change_24h >= Decimal::ZERO {
                    Direction::Up
                } else {
                    Direction::Down
                },
            })
            .collect();

        let positive_performers = catalog
            .iter()
            .filter(|a| a.price_change_24h > Decimal::ZERO)
            .count();
        let total_assets = catalog.len();

        // Strict majority
        let sentiment = if positive_performers * 2 > total_assets {
            Sentiment::Bullish
        } else {
            Sentiment::Bearish
        };

        Self {
            total_market_cap: catalog.iter().map(|a| a.market_cap).sum(),
            total_volume_24h: catalog.iter().map(|a| a.volume_24h).sum(),
            rows,
            positive_performers,
            total_assets,
            sentiment,
            generated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Asset;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_catalog_overview() {
        let overview = MarketOverview::from_catalog(&AssetCatalog::default());

        assert_eq!(overview.total_assets, 5);
        assert_eq!(overview.positive_performers, 5);
        assert_eq!(overview.sentiment, Sentiment::Bullish);
        assert_eq!(overview.total_market_cap, dec!(1_931_500_000_000));
        assert_eq!(overview.total_volume_24h, dec!(42_070_000_000));
        assert_eq!(overview.rows[0].symbol, "BTC");
    }

    #[test]
    fn test_even_split_is_bearish() {
        let catalog = AssetCatalog::new(vec![
            Asset::new("up", "Up", "UP").with_price_changes(dec!(1), Decimal::ZERO, Decimal::ZERO),
            Asset::new("down", "Down", "DN").with_price_changes(dec!(-1), Decimal::ZERO, Decimal::ZERO),
        ]);
        let overview = MarketOverview::from_catalog(&catalog);

        assert_eq!(overview.positive_performers, 1);
        assert_eq!(overview.sentiment, Sentiment::Bearish);
        assert_eq!(overview.rows[1].direction, Direction::Down);
    }
}
