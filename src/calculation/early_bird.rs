//! Early-bird discount calculation.
//!
//! A package-level cutoff instant, when present, decides eligibility on its
//! own; otherwise bookings at least `min_days_ahead` days out qualify.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::config::EarlyBirdConfig;
use crate::models::AdjustmentDirection;

use super::{PricingContext, PricingRule, RuleOutcome};

/// Discount for booking well ahead of the event.
#[derive(Debug, Clone, Default)]
pub struct EarlyBirdDiscountRule {
    config: EarlyBirdConfig,
}

impl EarlyBirdDiscountRule {
    /// Creates the rule from loaded configuration.
    pub fn new(config: EarlyBirdConfig) -> Self {
        Self { config }
    }

    /// Returns the discount fraction.
    ///
    /// With a cutoff, the discount applies when `now <= cutoff` regardless of
    /// the day count. Without one it applies when `days_until_event` reaches
    /// the configured threshold. Both boundaries are inclusive.
    ///
    /// # Example
    ///
    /// ```
    /// use quote_engine::calculation::EarlyBirdDiscountRule;
    /// use chrono::{TimeZone, Utc};
    /// use rust_decimal::Decimal;
    ///
    /// let rule = EarlyBirdDiscountRule::default();
    /// let now = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
    ///
    /// assert_eq!(rule.calculate(120, None, now), Decimal::new(10, 2));
    /// assert_eq!(rule.calculate(119, None, now), Decimal::ZERO);
    /// assert_eq!(rule.calculate(5, Some(now), now), Decimal::new(10, 2));
    /// ```
    pub fn calculate(
        &self,
        days_until_event: i64,
        early_bird_cutoff: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> Decimal {
        let qualifies = match early_bird_cutoff {
            Some(cutoff) => now <= cutoff,
            None => days_until_event >= self.config.min_days_ahead,
        };

        if qualifies {
            self.config.discount
        } else {
            Decimal::ZERO
        }
    }
}

impl PricingRule for EarlyBirdDiscountRule {
    fn rule_id(&self) -> &'static str {
        "early_bird"
    }

    fn rule_name(&self) -> &'static str {
        "Early Bird Discount"
    }

    fn direction(&self) -> AdjustmentDirection {
        AdjustmentDirection::Discount
    }

    fn evaluate(&self, ctx: &PricingContext<'_>) -> RuleOutcome {
        let cutoff = ctx.package.early_bird_cutoff;
        let fraction = self.calculate(ctx.days_until_event, cutoff, ctx.now);
        let applied = fraction > Decimal::ZERO;

        let reasoning = match (cutoff, applied) {
            (Some(cutoff), true) => format!(
                "Quoted at {} on or before package cutoff {}: -{}",
                ctx.now.to_rfc3339(),
                cutoff.to_rfc3339(),
                fraction.normalize()
            ),
            (Some(cutoff), false) => format!(
                "Quoted at {} after package cutoff {}: no discount",
                ctx.now.to_rfc3339(),
                cutoff.to_rfc3339()
            ),
            (None, true) => format!(
                "{} days until event >= {}: -{}",
                ctx.days_until_event,
                self.config.min_days_ahead,
                fraction.normalize()
            ),
            (None, false) => format!(
                "{} days until event < {}: no discount",
                ctx.days_until_event, self.config.min_days_ahead
            ),
        };

        RuleOutcome {
            fraction,
            input: serde_json::json!({
                "days_until_event": ctx.days_until_event,
                "early_bird_cutoff": cutoff,
                "now": ctx.now,
            }),
            reasoning,
        }
    }
}
