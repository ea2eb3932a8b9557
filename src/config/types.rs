//! Configuration types for quote pricing.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. Every pricing section
//! implements [`Default`] with the engine's standard rule parameters, so a
//! missing section in `pricing.yaml` prices exactly like the built-in rules.

use chrono::Weekday;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Metadata about the engine deployment, loaded from `engine.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineMetadata {
    /// Short identifier for this pricing configuration (e.g., "SPT-QUOTE").
    pub code: String,
    /// The human-readable name of the configuration.
    pub name: String,
    /// The version or effective date of the configuration.
    pub version: String,
    /// Currency used when a request does not name one.
    pub default_currency: String,
    /// ISO 4217 codes the engine will quote in.
    pub supported_currencies: Vec<String>,
}

/// Seasonal adjustment parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeasonalConfig {
    /// Fraction applied to peak months (and to any month an event flags).
    pub peak_adjustment: Decimal,
    /// Fraction applied to shoulder months.
    pub shoulder_adjustment: Decimal,
    /// Months that are peak season by default.
    pub peak_months: Vec<u32>,
    /// Months that are shoulder season by default.
    pub shoulder_months: Vec<u32>,
}

impl Default for SeasonalConfig {
    fn default() -> Self {
        Self {
            peak_adjustment: Decimal::new(20, 2),
            shoulder_adjustment: Decimal::new(10, 2),
            peak_months: vec![6, 7, 12],
            shoulder_months: vec![4, 5, 9],
        }
    }
}

/// Early-bird discount parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EarlyBirdConfig {
    /// Minimum days before the event for the discount to apply (inclusive).
    pub min_days_ahead: i64,
    /// Discount fraction.
    pub discount: Decimal,
}

impl Default for EarlyBirdConfig {
    fn default() -> Self {
        Self {
            min_days_ahead: 120,
            discount: Decimal::new(10, 2),
        }
    }
}

/// Last-minute surcharge parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LastMinuteConfig {
    /// Bookings strictly fewer days out than this pay the surcharge.
    pub within_days: i64,
    /// Surcharge fraction.
    pub surcharge: Decimal,
}

impl Default for LastMinuteConfig {
    fn default() -> Self {
        Self {
            within_days: 15,
            surcharge: Decimal::new(25, 2),
        }
    }
}

/// Group discount parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupConfig {
    /// Smallest group that ever qualifies, before package minimum capacity.
    pub min_travellers: u32,
    /// Discount fraction.
    pub discount: Decimal,
}

impl Default for GroupConfig {
    fn default() -> Self {
        Self {
            min_travellers: 4,
            discount: Decimal::new(8, 2),
        }
    }
}

/// Weekend surcharge parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeekendConfig {
    /// Surcharge fraction.
    pub surcharge: Decimal,
    /// Days of the week that count as weekend travel.
    pub weekend_days: Vec<Weekday>,
}

impl Default for WeekendConfig {
    fn default() -> Self {
        Self {
            surcharge: Decimal::new(8, 2),
            weekend_days: vec![Weekday::Fri, Weekday::Sat, Weekday::Sun],
        }
    }
}

/// Rule parameters loaded from `pricing.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Seasonal multiplier table.
    pub seasonal: SeasonalConfig,
    /// Early-bird discount.
    pub early_bird: EarlyBirdConfig,
    /// Last-minute surcharge.
    pub last_minute: LastMinuteConfig,
    /// Group discount.
    pub group: GroupConfig,
    /// Weekend surcharge.
    pub weekend: WeekendConfig,
}

/// The complete engine configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    engine: EngineMetadata,
    pricing: PricingConfig,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(engine: EngineMetadata, pricing: PricingConfig) -> Self {
        Self { engine, pricing }
    }

    /// Returns the engine metadata.
    pub fn engine(&self) -> &EngineMetadata {
        &self.engine
    }

    /// Returns the pricing rule parameters.
    pub fn pricing(&self) -> &PricingConfig {
        &self.pricing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_default_pricing_matches_standard_rules() {
        let config = PricingConfig::default();

        assert_eq!(config.seasonal.peak_adjustment, dec("0.20"));
        assert_eq!(config.seasonal.shoulder_adjustment, dec("0.10"));
        assert_eq!(config.early_bird.min_days_ahead, 120);
        assert_eq!(config.early_bird.discount, dec("0.10"));
        assert_eq!(config.last_minute.within_days, 15);
        assert_eq!(config.last_minute.surcharge, dec("0.25"));
        assert_eq!(config.group.min_travellers, 4);
        assert_eq!(config.group.discount, dec("0.08"));
        assert_eq!(config.weekend.surcharge, dec("0.08"));
    }

    #[test]
    fn test_partial_yaml_falls_back_to_defaults() {
        let yaml = r#"
group:
  min_travellers: 6
"#;
        let config: PricingConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.group.min_travellers, 6);
        assert_eq!(config.group.discount, dec("0.08"));
        assert_eq!(config.early_bird, EarlyBirdConfig::default());
    }

    #[test]
    fn test_weekend_days_parse_from_short_names() {
        let yaml = r#"
weekend:
  surcharge: "0.05"
  weekend_days: ["sat", "sun"]
"#;
        let config: PricingConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.weekend.surcharge, dec("0.05"));
        assert_eq!(config.weekend.weekend_days, vec![Weekday::Sat, Weekday::Sun]);
    }
}
