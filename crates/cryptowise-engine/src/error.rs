//! Error Types for the CryptoWise engine
//!
//! Scoring and blending are total functions and never fail. These errors
//! only come from the lookups a shell performs before calling into them.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AdvisorError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdvisorError {
    #[error("Asset not in catalog: {0}")]
    UnknownAsset(String),

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("Comparison needs at least {required} assets, got {selected}")]
    ComparisonTooSmall { selected: usize, required: usize },
}

impl AdvisorError {
    /// Convert to a user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            Self::UnknownAsset(id) => format!("'{id}' is not one of the supported cryptocurrencies."),
            Self::InvalidSelection(input) => format!("'{input}' is not a valid selection."),
            Self::ComparisonTooSmall { .. } => "Please select at least 2 cryptocurrencies.".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparison_error_display() {
        let err = AdvisorError::ComparisonTooSmall { selected: 1, required: 2 };
        assert_eq!(err.to_string(), "Comparison needs at least 2 assets, got 1");
        assert_eq!(err.user_message(), "Please select at least 2 cryptocurrencies.");
    }
}
