//! Calculation logic for the Quote Pricing Engine.
//!
//! This module contains the pricing rules (seasonal multiplier, early-bird
//! discount, last-minute surcharge, group discount, weekend surcharge), the
//! [`PricingRule`] capability they share, and the [`QuoteAggregator`] that
//! composes them into a pricing breakdown.

mod early_bird;
mod group_discount;
mod last_minute;
mod pricing_rule;
mod quote_aggregator;
mod seasonal;
mod weekend_surcharge;

pub use early_bird::EarlyBirdDiscountRule;
pub use group_discount::GroupDiscountRule;
pub use last_minute::LastMinuteSurchargeRule;
pub use pricing_rule::{PricingContext, PricingRule, RuleOutcome, days_until_event};
pub use quote_aggregator::{QuoteAggregator, QuoteInput, compose_subtotal};
pub use seasonal::{Season, SeasonalMultiplierResolver};
pub use weekend_surcharge::WeekendSurchargeRule;
