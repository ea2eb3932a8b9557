//! Weekend surcharge calculation.
//!
//! This module decides whether travel overlaps a weekend. An event's explicit
//! weekend flag is authoritative; without one, each travel date is checked
//! against the configured weekend days (Friday to Sunday by default) using
//! its UTC calendar day.

use chrono::{DateTime, Datelike, Utc, Weekday};
use rust_decimal::Decimal;

use crate::config::WeekendConfig;
use crate::models::{AdjustmentDirection, Event};

use super::{PricingContext, PricingRule, RuleOutcome};

/// Surcharge for travel overlapping a weekend.
#[derive(Debug, Clone, Default)]
pub struct WeekendSurchargeRule {
    config: WeekendConfig,
}

impl WeekendSurchargeRule {
    /// Creates the rule from loaded configuration.
    pub fn new(config: WeekendConfig) -> Self {
        Self { config }
    }

    /// Returns true if `date` falls on a configured weekend day.
    ///
    /// # Example
    ///
    /// ```
    /// use quote_engine::calculation::WeekendSurchargeRule;
    /// use chrono::{TimeZone, Utc};
    ///
    /// let rule = WeekendSurchargeRule::default();
    ///
    /// // 2026-01-16 is a Friday
    /// assert!(rule.is_weekend_day(Utc.with_ymd_and_hms(2026, 1, 16, 10, 0, 0).unwrap()));
    /// // 2026-01-15 is a Thursday
    /// assert!(!rule.is_weekend_day(Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap()));
    /// ```
    pub fn is_weekend_day(&self, date: DateTime<Utc>) -> bool {
        self.config.weekend_days.contains(&date.weekday())
    }

    /// Returns true when the event flag, or failing that any travel date, marks weekend travel.
    pub fn includes_weekend(&self, event: &Event, travel_dates: &[DateTime<Utc>]) -> bool {
        match event.is_weekend {
            Some(flag) => flag,
            None => travel_dates.iter().any(|d| self.is_weekend_day(*d)),
        }
    }

    /// Returns the surcharge fraction.
    pub fn calculate(&self, event: &Event, travel_dates: &[DateTime<Utc>]) -> Decimal {
        if self.includes_weekend(event, travel_dates) {
            self.config.surcharge
        } else {
            Decimal::ZERO
        }
    }
}

impl PricingRule for WeekendSurchargeRule {
    fn rule_id(&self) -> &'static str {
        "weekend"
    }

    fn rule_name(&self) -> &'static str {
        "Weekend Surcharge"
    }

    fn direction(&self) -> AdjustmentDirection {
        AdjustmentDirection::Surcharge
    }

    fn evaluate(&self, ctx: &PricingContext<'_>) -> RuleOutcome {
        let fraction = self.calculate(ctx.event, ctx.travel_dates);
        let weekdays: Vec<String> = ctx
            .travel_dates
            .iter()
            .map(|d| d.weekday().to_string())
            .collect();

        let reasoning = match (ctx.event.is_weekend, fraction > Decimal::ZERO) {
            (Some(true), _) => format!("Event flagged as weekend: +{}", fraction.normalize()),
            (Some(false), _) => "Event flagged as not weekend: no surcharge".to_string(),
            (None, true) => format!(
                "Travel dates include a weekend day ({}): +{}",
                weekday_list(&self.config.weekend_days),
                fraction.normalize()
            ),
            (None, false) => "No travel date falls on a weekend day: no surcharge".to_string(),
        };

        RuleOutcome {
            fraction,
            input: serde_json::json!({
                "is_weekend": ctx.event.is_weekend,
                "travel_weekdays": weekdays,
            }),
            reasoning,
        }
    }
}

fn weekday_list(days: &[Weekday]) -> String {
    days.iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join("/")
}
