//! Built-in Catalog Data
//!
//! Static snapshot of the supported assets. No live market data.

use rust_decimal_macros::dec;

use crate::model::{Asset, Fundamentals};

/// The default asset list, in menu order
pub fn default_assets() -> Vec<Asset> {
    vec![
        Asset::new("bitcoin", "Bitcoin", "BTC")
            .with_market(dec!(68500), dec!(1_350_000_000_000), dec!(25_200_000_000))
            .with_price_changes(dec!(3.5), dec!(5.8), dec!(12.2))
            .with_fundamentals(Fundamentals {
                energy_efficiency_score: 3,
                environmental_score: 2, // Proof-of-Work
                project_viability: 9,
                adoption_score: 10,
                technology_score: 8,
                team_score: 9,
            })
            .with_labels("Low", "Poor"),
        Asset::new("ethereum", "Ethereum", "ETH")
            .with_market(dec!(3850), dec!(462_000_000_000), dec!(12_500_000_000))
            .with_price_changes(dec!(4.2), dec!(8.1), dec!(15.7))
            .with_fundamentals(Fundamentals {
                energy_efficiency_score: 9, // Post-merge Proof-of-Stake
                environmental_score: 9,
                project_viability: 9,
                adoption_score: 9,
                technology_score: 10,
                team_score: 9,
            })
            .with_labels("High", "Excellent"),
        Asset::new("cardano", "Cardano", "ADA")
            .with_market(dec!(0.82), dec!(29_000_000_000), dec!(850_000_000))
            .with_price_changes(dec!(2.1), dec!(6.3), dec!(18.5))
            .with_fundamentals(Fundamentals {
                energy_efficiency_score: 9,
                environmental_score: 9,
                project_viability: 8,
                adoption_score: 7,
                technology_score: 8,
                team_score: 8,
            })
            .with_labels("High", "Excellent"),
        Asset::new("polygon", "Polygon", "MATIC")
            .with_market(dec!(1.15), dec!(11_500_000_000), dec!(720_000_000))
            .with_price_changes(dec!(5.7), dec!(12.4), dec!(25.2))
            .with_fundamentals(Fundamentals {
                energy_efficiency_score: 8,
                environmental_score: 8,
                project_viability: 8,
                adoption_score: 8,
                technology_score: 9,
                team_score: 7,
            })
            .with_labels("High", "Good"),
        Asset::new("solana", "Solana", "SOL")
            .with_market(dec!(172.50), dec!(79_000_000_000), dec!(2_800_000_000))
            .with_price_changes(dec!(6.8), dec!(14.2), dec!(28.9))
            .with_fundamentals(Fundamentals {
                energy_efficiency_score: 8,
                environmental_score: 8,
                project_viability: 8,
                adoption_score: 8,
                technology_score: 9,
                team_score: 7,
            })
            .with_labels("High", "Good"),
    ]
}
