//! Group discount calculation.
//!
//! Parties qualify once they reach the larger of the configured group size and
//! the package's own minimum capacity, so a package sold only to large parties
//! does not hand out group pricing to every booking.

use rust_decimal::Decimal;

use crate::config::GroupConfig;
use crate::models::AdjustmentDirection;

use super::{PricingContext, PricingRule, RuleOutcome};

/// Discount for traveller counts at or above a capacity-derived threshold.
#[derive(Debug, Clone, Default)]
pub struct GroupDiscountRule {
    config: GroupConfig,
}

impl GroupDiscountRule {
    /// Creates the rule from loaded configuration.
    pub fn new(config: GroupConfig) -> Self {
        Self { config }
    }

    /// Returns `max(min_travellers, min_capacity)`.
    pub fn threshold(&self, min_capacity: u32) -> u32 {
        self.config.min_travellers.max(min_capacity)
    }

    /// Returns the discount fraction for a party of `travellers`.
    ///
    /// # Example
    ///
    /// ```
    /// use quote_engine::calculation::GroupDiscountRule;
    /// use rust_decimal::Decimal;
    ///
    /// let rule = GroupDiscountRule::default();
    /// assert_eq!(rule.calculate(4, 1), Decimal::new(8, 2));
    /// assert_eq!(rule.calculate(4, 5), Decimal::ZERO);
    /// ```
    pub fn calculate(&self, travellers: u32, min_capacity: u32) -> Decimal {
        if travellers >= self.threshold(min_capacity) {
            self.config.discount
        } else {
            Decimal::ZERO
        }
    }
}

impl PricingRule for GroupDiscountRule {
    fn rule_id(&self) -> &'static str {
        "group"
    }

    fn rule_name(&self) -> &'static str {
        "Group Discount"
    }

    fn direction(&self) -> AdjustmentDirection {
        AdjustmentDirection::Discount
    }

    fn evaluate(&self, ctx: &PricingContext<'_>) -> RuleOutcome {
        let min_capacity = ctx.package.effective_min_capacity();
        let threshold = self.threshold(min_capacity);
        let fraction = self.calculate(ctx.travellers, min_capacity);

        let reasoning = if fraction > Decimal::ZERO {
            format!(
                "{} travellers >= threshold {}: -{}",
                ctx.travellers,
                threshold,
                fraction.normalize()
            )
        } else {
            format!(
                "{} travellers < threshold {}: no discount",
                ctx.travellers, threshold
            )
        };

        RuleOutcome {
            fraction,
            input: serde_json::json!({
                "travellers": ctx.travellers,
                "min_capacity": min_capacity,
                "threshold": threshold,
            }),
            reasoning,
        }
    }
}
