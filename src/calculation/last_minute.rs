//! Last-minute surcharge calculation.

use rust_decimal::Decimal;

use crate::config::LastMinuteConfig;
use crate::models::AdjustmentDirection;

use super::{PricingContext, PricingRule, RuleOutcome};

/// Surcharge for booking close to the event.
#[derive(Debug, Clone, Default)]
pub struct LastMinuteSurchargeRule {
    config: LastMinuteConfig,
}

impl LastMinuteSurchargeRule {
    /// Creates the rule from loaded configuration.
    pub fn new(config: LastMinuteConfig) -> Self {
        Self { config }
    }

    /// Returns the surcharge fraction when `days_until_event` is strictly inside the window.
    ///
    /// # Example
    ///
    /// ```
    /// use quote_engine::calculation::LastMinuteSurchargeRule;
    /// use rust_decimal::Decimal;
    ///
    /// let rule = LastMinuteSurchargeRule::default();
    /// assert_eq!(rule.calculate(14), Decimal::new(25, 2));
    /// assert_eq!(rule.calculate(15), Decimal::ZERO);
    /// ```
    pub fn calculate(&self, days_until_event: i64) -> Decimal {
        if days_until_event < self.config.within_days {
            self.config.surcharge
        } else {
            Decimal::ZERO
        }
    }
}

impl PricingRule for LastMinuteSurchargeRule {
    fn rule_id(&self) -> &'static str {
        "last_minute"
    }

    fn rule_name(&self) -> &'static str {
        "Last Minute Surcharge"
    }

    fn direction(&self) -> AdjustmentDirection {
        AdjustmentDirection::Surcharge
    }

    fn evaluate(&self, ctx: &PricingContext<'_>) -> RuleOutcome {
        let fraction = self.calculate(ctx.days_until_event);

        let reasoning = if fraction > Decimal::ZERO {
            format!(
                "{} days until event < {}: +{}",
                ctx.days_until_event,
                self.config.within_days,
                fraction.normalize()
            )
        } else {
            format!(
                "{} days until event >= {}: no surcharge",
                ctx.days_until_event, self.config.within_days
            )
        };

        RuleOutcome {
            fraction,
            input: serde_json::json!({ "days_until_event": ctx.days_until_event }),
            reasoning,
        }
    }
}
