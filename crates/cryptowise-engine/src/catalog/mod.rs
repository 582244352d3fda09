//! Asset Catalog
//!
//! Read-only, ordered table of the assets the engine can score.
//! Built once at startup and never reloaded.

mod seed;

pub use seed::default_assets;

use crate::error::{AdvisorError, Result};
use crate::model::Asset;

/// Immutable asset table keyed by id, kept in insertion order
#[derive(Clone, Debug)]
pub struct AssetCatalog {
    assets: Vec<Asset>,
}

impl Default for AssetCatalog {
    fn default() -> Self {
        Self::new(default_assets())
    }
}

impl AssetCatalog {
    /// Build a catalog, lowercasing ids and clamping every 1-10 attribute
    /// into range. A later entry with an id already present is dropped.
    pub fn new(assets: impl IntoIterator<Item = Asset>) -> Self {
        let mut table: Vec<Asset> = Vec::new();
        for mut asset in assets {
            asset.id = asset.id.trim().to_lowercase();
            if table.iter().any(|a| a.id == asset.id) {
                tracing::warn!(id = %asset.id, "Duplicate catalog id ignored");
                continue;
            }
            asset.fundamentals = asset.fundamentals.clamped();
            table.push(asset);
        }

        tracing::info!(assets = table.len(), "Asset catalog ready");
        Self { assets: table }
    }

    /// Look up an asset by id (case-insensitive)
    pub fn get(&self, id: &str) -> Result<&Asset> {
        let key = id.trim().to_lowercase();
        self.assets
            .iter()
            .find(|a| a.id == key)
            .ok_or_else(|| AdvisorError::UnknownAsset(id.to_string()))
    }

    /// Look up an asset by its 1-based menu position
    pub fn by_position(&self, position: usize) -> Result<&Asset> {
        position
            .checked_sub(1)
            .and_then(|index| self.assets.get(index))
            .ok_or_else(|| AdvisorError::InvalidSelection(position.to_string()))
    }

    /// Resolve a user selection: either a 1-based position or an asset id
    pub fn resolve(&self, selection: &str) -> Result<&Asset> {
        let trimmed = selection.trim();
        if trimmed.is_empty() {
            return Err(AdvisorError::InvalidSelection(selection.to_string()));
        }

        if !looks_like_position(trimmed) {
            return self.get(trimmed);
        }
        // Anything integer-shaped is a menu pick, even when out of range
        match trimmed.strip_prefix('+').unwrap_or(trimmed).parse::<usize>() {
            Ok(position) => self.by_position(position),
            Err(_) => Err(AdvisorError::InvalidSelection(trimmed.to_string())),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Asset> {
        self.assets.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.assets.iter().map(|a| a.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

/// An optionally signed run of ASCII digits
fn looks_like_position(input: &str) -> bool {
    let digits = input.strip_prefix(['+', '-']).unwrap_or(input);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
