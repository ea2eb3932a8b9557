//! Configuration loader for the Quote Pricing Engine.
//!
//! This module provides the [`ConfigLoader`] struct which loads engine
//! metadata and pricing rule parameters from a directory of YAML files.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

use super::types::{EngineConfig, EngineMetadata, PricingConfig};

/// Loads and provides access to the engine configuration.
///
/// The configuration directory must contain:
/// - `engine.yaml`: engine metadata, default and supported currencies
/// - `pricing.yaml`: seasonal, early-bird, last-minute, group and weekend parameters
///
/// # Example
///
/// ```no_run
/// use quote_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Default currency: {}", loader.engine().default_currency);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Either file is missing
    /// - Either file contains invalid YAML
    /// - The pricing parameters are inconsistent (overlapping windows, negative fractions)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use quote_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/default")?;
    /// # Ok::<(), quote_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let engine = Self::load_yaml::<EngineMetadata>(&path.join("engine.yaml"))?;
        let pricing = Self::load_yaml::<PricingConfig>(&path.join("pricing.yaml"))?;

        Self::from_parts(engine, pricing)
    }

    /// Builds a loader from already-parsed parts, applying the same validation as [`load`].
    ///
    /// [`load`]: ConfigLoader::load
    pub fn from_parts(engine: EngineMetadata, pricing: PricingConfig) -> EngineResult<Self> {
        Self::validate(&engine, &pricing)?;
        Ok(Self {
            config: EngineConfig::new(engine, pricing),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Rejects configurations the rules cannot price consistently with.
    ///
    /// The early-bird window must start at or after the last-minute window ends,
    /// otherwise a single booking could receive both adjustments.
    fn validate(engine: &EngineMetadata, pricing: &PricingConfig) -> EngineResult<()> {
        if !engine
            .supported_currencies
            .iter()
            .any(|c| c == &engine.default_currency)
        {
            return Err(invalid(
                "default_currency",
                format!(
                    "'{}' is not listed in supported_currencies",
                    engine.default_currency
                ),
            ));
        }

        if pricing.early_bird.min_days_ahead < pricing.last_minute.within_days {
            return Err(invalid(
                "early_bird.min_days_ahead",
                format!(
                    "{} overlaps the last-minute window of {} days",
                    pricing.early_bird.min_days_ahead, pricing.last_minute.within_days
                ),
            ));
        }

        let fractions = [
            ("seasonal.peak_adjustment", pricing.seasonal.peak_adjustment),
            (
                "seasonal.shoulder_adjustment",
                pricing.seasonal.shoulder_adjustment,
            ),
            ("early_bird.discount", pricing.early_bird.discount),
            ("last_minute.surcharge", pricing.last_minute.surcharge),
            ("group.discount", pricing.group.discount),
            ("weekend.surcharge", pricing.weekend.surcharge),
        ];
        if let Some((field, _)) = fractions.iter().find(|(_, v)| *v < Decimal::ZERO) {
            return Err(invalid(field, "fractions must not be negative"));
        }

        let mut months = pricing
            .seasonal
            .peak_months
            .iter()
            .chain(pricing.seasonal.shoulder_months.iter());
        if let Some(month) = months.find(|m| !(1..=12).contains(*m)) {
            return Err(invalid(
                "seasonal",
                format!("month {} is outside 1-12", month),
            ));
        }

        Ok(())
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the engine metadata.
    pub fn engine(&self) -> &EngineMetadata {
        self.config.engine()
    }

    /// Returns the pricing rule parameters.
    pub fn pricing(&self) -> &PricingConfig {
        self.config.pricing()
    }

    /// Checks that a currency code is one this deployment quotes in.
    pub fn ensure_supported_currency(&self, code: &str) -> EngineResult<()> {
        if self
            .engine()
            .supported_currencies
            .iter()
            .any(|c| c == code)
        {
            Ok(())
        } else {
            Err(EngineError::UnsupportedCurrency {
                code: code.to_string(),
            })
        }
    }
}

fn invalid(field: &str, message: impl Into<String>) -> EngineError {
    EngineError::InvalidConfig {
        field: field.to_string(),
        message: message.into(),
    }
}
