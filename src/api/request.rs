//! Request types for the Quote Pricing Engine API.
//!
//! This module defines the JSON request structures for the `/quotes/generate`
//! endpoint and the validation that runs before any pricing happens.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::{Event, Package};

/// Largest accepted base price, add-on or itinerary total.
///
/// Keeps `amount * (1 + fractions) + extras` well inside `Decimal` range.
// 1_000_000_000_000 (10^12) with scale 0; `Decimal::new` is not const.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0);

/// Request body for the `/quotes/generate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// The event being travelled to.
    pub event: EventRequest,
    /// The package being quoted.
    pub package: PackageRequest,
    /// Number of travellers (at least 1).
    pub travellers: u32,
    /// Travel dates in order: start first, end last.
    pub travel_dates: Vec<DateTime<Utc>>,
    /// Overrides the package base price when present.
    #[serde(default)]
    pub base_price: Option<Decimal>,
    /// Precomputed add-on total.
    #[serde(default)]
    pub addons_total: Decimal,
    /// Precomputed itinerary total.
    #[serde(default)]
    pub itineraries_total: Decimal,
    /// ISO 4217 code; defaults to the configured currency.
    #[serde(default)]
    pub currency: Option<String>,
    /// Instant to price at; defaults to the time the request is handled.
    #[serde(default)]
    pub quoted_at: Option<DateTime<Utc>>,
}

/// Event information in a quote request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRequest {
    /// Unique identifier for the event.
    pub id: String,
    /// Display name of the event.
    #[serde(default)]
    pub name: String,
    /// When the event starts.
    pub start_date: DateTime<Utc>,
    /// Months (1-12) flagged as peak season for this event.
    #[serde(default)]
    pub season_months: Option<BTreeSet<u32>>,
    /// Explicit weekend flag.
    #[serde(default)]
    pub is_weekend: Option<bool>,
}

/// Package information in a quote request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageRequest {
    /// Unique identifier for the package.
    pub id: String,
    /// Display name of the package.
    #[serde(default)]
    pub name: String,
    /// The package list price.
    pub base_price: Decimal,
    /// Early-bird cutoff instant.
    #[serde(default)]
    pub early_bird_cutoff: Option<DateTime<Utc>>,
    /// Minimum party size.
    #[serde(default)]
    pub min_capacity: Option<u32>,
}

impl QuoteRequest {
    /// The price the rules apply to: the explicit override or the package price.
    pub fn effective_base_price(&self) -> Decimal {
        self.base_price.unwrap_or(self.package.base_price)
    }

    /// The currency to quote in, falling back to the configured default.
    pub fn resolved_currency(&self, config: &ConfigLoader) -> String {
        self.currency
            .clone()
            .unwrap_or_else(|| config.engine().default_currency.clone())
    }

    /// Checks every caller contract the pricing engine relies on.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidQuoteRequest`] for zero travellers, amounts
    ///   outside `0..=MAX_AMOUNT`, a zero minimum capacity, season months
    ///   outside 1-12, or a malformed currency code
    /// - [`EngineError::InvalidTravelDates`] when no dates are given or a date
    ///   precedes the one before it
    /// - [`EngineError::UnsupportedCurrency`] when the currency is well-formed
    ///   but not configured
    pub fn validate(&self, config: &ConfigLoader) -> EngineResult<()> {
        if self.travellers < 1 {
            return Err(invalid_field("travellers", "must be at least 1"));
        }

        validate_travel_dates(&self.travel_dates)?;

        let amounts = [
            ("base_price", self.effective_base_price()),
            ("addons_total", self.addons_total),
            ("itineraries_total", self.itineraries_total),
        ];
        for (field, amount) in amounts {
            if amount < Decimal::ZERO {
                return Err(invalid_field(field, "must not be negative"));
            }
            if amount > MAX_AMOUNT {
                return Err(invalid_field(field, &format!("must not exceed {}", MAX_AMOUNT)));
            }
        }

        if self.package.min_capacity == Some(0) {
            return Err(invalid_field("package.min_capacity", "must be at least 1"));
        }

        if let Some(month) = self
            .event
            .season_months
            .iter()
            .flatten()
            .find(|m| !(1..=12).contains(*m))
        {
            return Err(invalid_field(
                "event.season_months",
                &format!("month {} is outside 1-12", month),
            ));
        }

        let currency = self.resolved_currency(config);
        if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(invalid_field(
                "currency",
                "must be a three-letter uppercase ISO 4217 code",
            ));
        }
        config.ensure_supported_currency(&currency)
    }
}

/// Rejects empty or out-of-order travel dates.
fn validate_travel_dates(dates: &[DateTime<Utc>]) -> EngineResult<()> {
    if dates.is_empty() {
        return Err(EngineError::InvalidTravelDates {
            message: "at least one travel date is required".to_string(),
        });
    }

    if let Some(index) = dates.windows(2).position(|pair| pair[1] < pair[0]) {
        let message = if dates.len() == 2 {
            "end date is before start date".to_string()
        } else {
            format!("travel date {} is before the date preceding it", index + 1)
        };
        return Err(EngineError::InvalidTravelDates { message });
    }

    Ok(())
}

fn invalid_field(field: &str, message: &str) -> EngineError {
    EngineError::InvalidQuoteRequest {
        field: field.to_string(),
        message: message.to_string(),
    }
}

impl From<EventRequest> for Event {
    fn from(req: EventRequest) -> Self {
        Event {
            id: req.id,
            name: req.name,
            start_date: req.start_date,
            season_months: req.season_months,
            is_weekend: req.is_weekend,
        }
    }
}

impl From<PackageRequest> for Package {
    fn from(req: PackageRequest) -> Self {
        Package {
            id: req.id,
            name: req.name,
            base_price: req.base_price,
            early_bird_cutoff: req.early_bird_cutoff,
            min_capacity: req.min_capacity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn load_config() -> ConfigLoader {
        ConfigLoader::load("./config/default").expect("Failed to load config")
    }

    fn utc(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 10, 0, 0).unwrap()
    }

    fn create_valid_request() -> QuoteRequest {
        QuoteRequest {
            event: EventRequest {
                id: "evt_001".to_string(),
                name: "Grand Final".to_string(),
                start_date: utc(2026, 9, 26),
                season_months: None,
                is_weekend: None,
            },
            package: PackageRequest {
                id: "pkg_001".to_string(),
                name: "Standard".to_string(),
                base_price: Decimal::new(1000, 0),
                early_bird_cutoff: None,
                min_capacity: None,
            },
            travellers: 2,
            travel_dates: vec![utc(2026, 9, 25), utc(2026, 9, 27)],
            base_price: None,
            addons_total: Decimal::ZERO,
            itineraries_total: Decimal::ZERO,
            currency: None,
            quoted_at: None,
        }
    }

    fn assert_invalid_field(result: EngineResult<()>, expected: &str) {
        match result {
            Err(EngineError::InvalidQuoteRequest { field, .. }) => assert_eq!(field, expected),
            other => panic!("Expected InvalidQuoteRequest for {}, got {:?}", expected, other),
        }
    }

    #[test]
    fn test_deserialize_minimal_request() {
        let json = r#"{
            "event": { "id": "evt_001", "start_date": "2026-09-26T14:30:00Z" },
            "package": { "id": "pkg_001", "base_price": "1000" },
            "travellers": 4,
            "travel_dates": ["2026-09-25T09:00:00Z", "2026-09-27T18:00:00Z"]
        }"#;

        let request: QuoteRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.travellers, 4);
        assert_eq!(request.travel_dates.len(), 2);
        assert_eq!(request.addons_total, Decimal::ZERO);
        assert!(request.currency.is_none());
        assert!(request.validate(&load_config()).is_ok());
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(create_valid_request().validate(&load_config()).is_ok());
    }

    #[test]
    fn test_zero_travellers_rejected() {
        let mut request = create_valid_request();
        request.travellers = 0;
        assert_invalid_field(request.validate(&load_config()), "travellers");
    }

    #[test]
    fn test_empty_travel_dates_rejected() {
        let mut request = create_valid_request();
        request.travel_dates.clear();

        assert!(matches!(
            request.validate(&load_config()),
            Err(EngineError::InvalidTravelDates { .. })
        ));
    }

    #[test]
    fn test_end_before_start_rejected() {
        let mut request = create_valid_request();
        request.travel_dates = vec![utc(2026, 9, 27), utc(2026, 9, 25)];

        match request.validate(&load_config()) {
            Err(EngineError::InvalidTravelDates { message }) => {
                assert_eq!(message, "end date is before start date");
            }
            other => panic!("Expected InvalidTravelDates, got {:?}", other),
        }
    }

    #[test]
    fn test_same_day_range_accepted() {
        let mut request = create_valid_request();
        request.travel_dates = vec![utc(2026, 9, 25), utc(2026, 9, 25)];
        assert!(request.validate(&load_config()).is_ok());
    }

    #[test]
    fn test_negative_addons_rejected() {
        let mut request = create_valid_request();
        request.addons_total = Decimal::new(-1, 0);
        assert_invalid_field(request.validate(&load_config()), "addons_total");
    }

    #[test]
    fn test_negative_base_price_override_rejected() {
        let mut request = create_valid_request();
        request.base_price = Some(Decimal::new(-500, 0));
        assert_invalid_field(request.validate(&load_config()), "base_price");
    }

    #[test]
    fn test_amount_above_ceiling_rejected() {
        let mut request = create_valid_request();
        request.base_price = Some(Decimal::MAX);
        assert_invalid_field(request.validate(&load_config()), "base_price");

        let mut request = create_valid_request();
        request.itineraries_total = MAX_AMOUNT + Decimal::ONE;
        assert_invalid_field(request.validate(&load_config()), "itineraries_total");
    }

    #[test]
    fn test_amount_at_ceiling_accepted() {
        let mut request = create_valid_request();
        request.base_price = Some(MAX_AMOUNT);
        request.addons_total = MAX_AMOUNT;
        request.itineraries_total = MAX_AMOUNT;
        assert!(request.validate(&load_config()).is_ok());
    }

    #[test]
    fn test_zero_min_capacity_rejected() {
        let mut request = create_valid_request();
        request.package.min_capacity = Some(0);
        assert_invalid_field(request.validate(&load_config()), "package.min_capacity");
    }

    #[test]
    fn test_season_month_out_of_range_rejected() {
        let mut request = create_valid_request();
        request.event.season_months = Some([0, 6].into_iter().collect());
        assert_invalid_field(request.validate(&load_config()), "event.season_months");
    }

    #[test]
    fn test_malformed_currency_rejected() {
        let mut request = create_valid_request();
        request.currency = Some("usd".to_string());
        assert_invalid_field(request.validate(&load_config()), "currency");
    }

    #[test]
    fn test_unsupported_currency_rejected() {
        let mut request = create_valid_request();
        request.currency = Some("JPY".to_string());

        assert!(matches!(
            request.validate(&load_config()),
            Err(EngineError::UnsupportedCurrency { .. })
        ));
    }

    #[test]
    fn test_currency_defaults_to_config() {
        let request = create_valid_request();
        assert_eq!(request.resolved_currency(&load_config()), "USD");
    }

    #[test]
    fn test_base_price_override() {
        let mut request = create_valid_request();
        assert_eq!(request.effective_base_price(), Decimal::new(1000, 0));

        request.base_price = Some(Decimal::new(750, 0));
        assert_eq!(request.effective_base_price(), Decimal::new(750, 0));
    }

    #[test]
    fn test_event_and_package_conversion() {
        let request = create_valid_request();

        let event: Event = request.event.into();
        let package: Package = request.package.into();
        assert_eq!(event.id, "evt_001");
        assert_eq!(package.effective_min_capacity(), 1);
    }
}
