//! Application state for the web layer.

use std::sync::Arc;

use crate::search::SearchConfig;

/// Shared application state.
///
/// `S` is the journey API: the live client in production, a mock in tests
/// and offline runs.
pub struct AppState<S> {
    /// Journey and location source
    pub provider: Arc<S>,

    /// Search configuration
    pub config: Arc<SearchConfig>,
}

impl<S> AppState<S> {
    /// Create a new app state.
    pub fn new(provider: S, config: SearchConfig) -> Self {
        Self {
            provider: Arc::new(provider),
            config: Arc::new(config),
        }
    }
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
            config: Arc::clone(&self.config),
        }
    }
}
