//! Travel package model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents a bookable travel package for an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    /// Unique identifier for the package.
    pub id: String,
    /// Display name of the package.
    pub name: String,
    /// The list price the pricing rules adjust.
    pub base_price: Decimal,
    /// Bookings made at or before this instant receive the early-bird discount.
    #[serde(default)]
    pub early_bird_cutoff: Option<DateTime<Utc>>,
    /// Minimum party size the package is sold for.
    #[serde(default)]
    pub min_capacity: Option<u32>,
}

impl Package {
    /// Returns the declared minimum capacity, defaulting to 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use quote_engine::models::Package;
    /// use rust_decimal::Decimal;
    ///
    /// let package = Package {
    ///     id: "pkg_001".to_string(),
    ///     name: "Weekend Away".to_string(),
    ///     base_price: Decimal::new(1000, 0),
    ///     early_bird_cutoff: None,
    ///     min_capacity: None,
    /// };
    /// assert_eq!(package.effective_min_capacity(), 1);
    /// ```
    pub fn effective_min_capacity(&self) -> u32 {
        self.min_capacity.unwrap_or(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::str::FromStr;

    #[test]
    fn test_deserialize_package_with_string_price() {
        let json = r#"{
            "id": "pkg_001",
            "name": "Finals Hospitality",
            "base_price": "2450.50",
            "early_bird_cutoff": "2026-05-01T00:00:00Z",
            "min_capacity": 6
        }"#;

        let package: Package = serde_json::from_str(json).unwrap();
        assert_eq!(package.base_price, Decimal::from_str("2450.50").unwrap());
        assert_eq!(
            package.early_bird_cutoff,
            Some(Utc.with_ymd_and_hms(2026, 5, 1, 0, 0, 0).unwrap())
        );
        assert_eq!(package.effective_min_capacity(), 6);
    }

    #[test]
    fn test_deserialize_package_defaults() {
        let json = r#"{
            "id": "pkg_002",
            "name": "Match Day",
            "base_price": 800
        }"#;

        let package: Package = serde_json::from_str(json).unwrap();
        assert_eq!(package.base_price, Decimal::new(800, 0));
        assert!(package.early_bird_cutoff.is_none());
        assert_eq!(package.effective_min_capacity(), 1);
    }
}
