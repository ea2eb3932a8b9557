//! Pricing output models for the Quote Pricing Engine.
//!
//! This module contains the [`PricingBreakdown`] type and the audit structures
//! that record how each pricing rule contributed to a quote.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether a rule's fraction raises or lowers the price.
///
/// # Example
///
/// ```
/// use quote_engine::models::AdjustmentDirection;
/// use rust_decimal::Decimal;
///
/// assert_eq!(AdjustmentDirection::Discount.sign(), Decimal::NEGATIVE_ONE);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentDirection {
    /// The fraction is added to the base price.
    Surcharge,
    /// The fraction is subtracted from the base price.
    Discount,
}

impl AdjustmentDirection {
    /// Returns +1 for surcharges and -1 for discounts.
    pub fn sign(self) -> Decimal {
        match self {
            AdjustmentDirection::Surcharge => Decimal::ONE,
            AdjustmentDirection::Discount => Decimal::NEGATIVE_ONE,
        }
    }
}

impl std::fmt::Display for AdjustmentDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdjustmentDirection::Surcharge => write!(f, "surcharge"),
            AdjustmentDirection::Discount => write!(f, "discount"),
        }
    }
}

/// The structured decomposition of a quote's final price.
///
/// Adjustment fields hold the fraction of `base_price` each rule produced, as a
/// non-negative magnitude. Seasonal, last-minute and weekend fractions were
/// added; early-bird and group fractions were subtracted.
///
/// # Example
///
/// ```
/// use quote_engine::models::PricingBreakdown;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let breakdown = PricingBreakdown {
///     base_price: Decimal::from_str("1000").unwrap(),
///     seasonal_adjustment: Decimal::ZERO,
///     early_bird_discount: Decimal::from_str("0.10").unwrap(),
///     last_minute_surcharge: Decimal::ZERO,
///     group_discount: Decimal::from_str("0.08").unwrap(),
///     weekend_surcharge: Decimal::from_str("0.08").unwrap(),
///     subtotal: Decimal::from_str("900").unwrap(),
///     addons_total: Decimal::ZERO,
///     itineraries_total: Decimal::ZERO,
///     final_price: Decimal::from_str("900").unwrap(),
///     includes_weekend: true,
///     currency: "USD".to_string(),
/// };
/// assert_eq!(
///     breakdown.final_price,
///     breakdown.subtotal + breakdown.addons_total + breakdown.itineraries_total
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingBreakdown {
    /// The price the rules were applied against.
    pub base_price: Decimal,
    /// Seasonal fraction (added).
    pub seasonal_adjustment: Decimal,
    /// Early-bird fraction (subtracted).
    pub early_bird_discount: Decimal,
    /// Last-minute fraction (added).
    pub last_minute_surcharge: Decimal,
    /// Group fraction (subtracted).
    pub group_discount: Decimal,
    /// Weekend fraction (added).
    pub weekend_surcharge: Decimal,
    /// Base price after all rule adjustments, never negative.
    pub subtotal: Decimal,
    /// Precomputed add-on total supplied by the caller.
    pub addons_total: Decimal,
    /// Precomputed itinerary total supplied by the caller.
    pub itineraries_total: Decimal,
    /// `subtotal + addons_total + itineraries_total`.
    pub final_price: Decimal,
    /// Whether the weekend surcharge applied.
    pub includes_weekend: bool,
    /// ISO 4217 currency code the amounts are in.
    pub currency: String,
}

/// A single step in the audit trace recording one rule evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Whether the rule raises or lowers the price.
    pub direction: AdjustmentDirection,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A breakdown together with the audit steps that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteCalculation {
    /// The priced breakdown.
    pub breakdown: PricingBreakdown,
    /// Whole days between the quote instant and the event start.
    pub days_until_event: i64,
    /// Calendar month the seasonal rule was keyed on.
    pub travel_month: u32,
    /// One step per rule, in evaluation order.
    pub audit_steps: Vec<AuditStep>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_sample_breakdown() -> PricingBreakdown {
        PricingBreakdown {
            base_price: dec("1000"),
            seasonal_adjustment: dec("0.20"),
            early_bird_discount: Decimal::ZERO,
            last_minute_surcharge: Decimal::ZERO,
            group_discount: Decimal::ZERO,
            weekend_surcharge: Decimal::ZERO,
            subtotal: dec("1200.00"),
            addons_total: dec("150"),
            itineraries_total: dec("50"),
            final_price: dec("1400.00"),
            includes_weekend: false,
            currency: "EUR".to_string(),
        }
    }

    #[test]
    fn test_direction_signs() {
        assert_eq!(AdjustmentDirection::Surcharge.sign(), Decimal::ONE);
        assert_eq!(AdjustmentDirection::Discount.sign(), dec("-1"));
    }

    #[test]
    fn test_direction_serialization() {
        let json = serde_json::to_string(&AdjustmentDirection::Surcharge).unwrap();
        assert_eq!(json, "\"surcharge\"");

        let direction: AdjustmentDirection = serde_json::from_str("\"discount\"").unwrap();
        assert_eq!(direction, AdjustmentDirection::Discount);
    }

    #[test]
    fn test_breakdown_serializes_decimals_as_strings() {
        let breakdown = create_sample_breakdown();
        let json = serde_json::to_value(&breakdown).unwrap();

        assert_eq!(json["base_price"], "1000");
        assert_eq!(json["seasonal_adjustment"], "0.20");
        assert_eq!(json["final_price"], "1400.00");
        assert_eq!(json["includes_weekend"], false);
        assert_eq!(json["currency"], "EUR");
    }

    #[test]
    fn test_breakdown_deserializes_from_serialized_form() {
        let breakdown = create_sample_breakdown();
        let json = serde_json::to_string(&breakdown).unwrap();

        let parsed: PricingBreakdown = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, breakdown);
    }
}
