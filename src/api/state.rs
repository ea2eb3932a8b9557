//! Application state for the Quote Pricing Engine API.

use std::sync::Arc;

use crate::calculation::QuoteAggregator;
use crate::config::ConfigLoader;

/// Shared application state.
///
/// Holds the loaded configuration and an aggregator built from it. Both are
/// read-only, so handlers share them without locking.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    aggregator: Arc<QuoteAggregator>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        let aggregator = QuoteAggregator::new(config.pricing());
        Self {
            config: Arc::new(config),
            aggregator: Arc::new(aggregator),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the quote aggregator.
    pub fn aggregator(&self) -> &QuoteAggregator {
        &self.aggregator
    }
}
