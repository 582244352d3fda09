//! Application State

use std::sync::Arc;

use cryptowise_engine::Advisor;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Scoring engine over the built-in catalog
    pub advisor: Arc<Advisor>,

    /// Default size of the top recommendations list
    pub top_limit: usize,
}
