//! Quote aggregation.
//!
//! The aggregator evaluates the five pricing rules against one
//! [`PricingContext`] and composes them additively: every fraction applies to
//! the base price, never to a running total. Add-on and itinerary totals are
//! then added on top of the subtotal.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tracing::debug;

use crate::config::PricingConfig;
use crate::models::{AuditStep, Event, Package, PricingBreakdown, QuoteCalculation};

use super::{
    EarlyBirdDiscountRule, GroupDiscountRule, LastMinuteSurchargeRule, PricingContext,
    PricingRule, RuleOutcome, SeasonalMultiplierResolver, WeekendSurchargeRule,
};

/// Caller-supplied inputs for one quote.
#[derive(Debug, Clone, Copy)]
pub struct QuoteInput<'a> {
    /// The price the rules adjust (usually the package base price).
    pub base_price: Decimal,
    /// The event being travelled to.
    pub event: &'a Event,
    /// The package being quoted.
    pub package: &'a Package,
    /// Number of travellers.
    pub travellers: u32,
    /// Travel dates, start first.
    pub travel_dates: &'a [DateTime<Utc>],
    /// Precomputed add-on total.
    pub addons_total: Decimal,
    /// Precomputed itinerary total.
    pub itineraries_total: Decimal,
    /// ISO 4217 currency code.
    pub currency: &'a str,
}

/// Combines the pricing rules into a [`PricingBreakdown`].
///
/// The aggregator holds only rule parameters and is safe to share between
/// threads. `now` is always passed in, so identical inputs give identical
/// breakdowns.
///
/// # Example
///
/// ```
/// use quote_engine::calculation::{QuoteAggregator, QuoteInput};
/// use quote_engine::models::{Event, Package};
/// use chrono::{Duration, TimeZone, Utc};
/// use rust_decimal::Decimal;
///
/// let now = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
/// let event = Event {
///     id: "evt_001".to_string(),
///     name: "Final".to_string(),
///     start_date: now + Duration::days(150),
///     season_months: None,
///     is_weekend: None,
/// };
/// let package = Package {
///     id: "pkg_001".to_string(),
///     name: "Standard".to_string(),
///     base_price: Decimal::new(1000, 0),
///     early_bird_cutoff: None,
///     min_capacity: None,
/// };
/// // Friday 16 to Sunday 18 October 2026
/// let dates = [
///     Utc.with_ymd_and_hms(2026, 10, 16, 9, 0, 0).unwrap(),
///     Utc.with_ymd_and_hms(2026, 10, 18, 18, 0, 0).unwrap(),
/// ];
///
/// let breakdown = QuoteAggregator::default().calculate_quote(
///     &QuoteInput {
///         base_price: package.base_price,
///         event: &event,
///         package: &package,
///         travellers: 4,
///         travel_dates: &dates,
///         addons_total: Decimal::ZERO,
///         itineraries_total: Decimal::ZERO,
///         currency: "USD",
///     },
///     now,
/// );
///
/// assert_eq!(breakdown.subtotal, Decimal::new(900, 0));
/// assert!(breakdown.includes_weekend);
/// ```
#[derive(Debug, Clone, Default)]
pub struct QuoteAggregator {
    seasonal: SeasonalMultiplierResolver,
    early_bird: EarlyBirdDiscountRule,
    last_minute: LastMinuteSurchargeRule,
    group: GroupDiscountRule,
    weekend: WeekendSurchargeRule,
}

impl QuoteAggregator {
    /// Builds an aggregator whose rules use the given parameters.
    pub fn new(config: &PricingConfig) -> Self {
        Self {
            seasonal: SeasonalMultiplierResolver::new(config.seasonal.clone()),
            early_bird: EarlyBirdDiscountRule::new(config.early_bird.clone()),
            last_minute: LastMinuteSurchargeRule::new(config.last_minute.clone()),
            group: GroupDiscountRule::new(config.group.clone()),
            weekend: WeekendSurchargeRule::new(config.weekend.clone()),
        }
    }

    /// The rules in evaluation order.
    pub fn rules(&self) -> [&dyn PricingRule; 5] {
        [
            &self.seasonal,
            &self.early_bird,
            &self.last_minute,
            &self.group,
            &self.weekend,
        ]
    }

    /// Prices a quote and returns its breakdown.
    pub fn calculate_quote(&self, input: &QuoteInput<'_>, now: DateTime<Utc>) -> PricingBreakdown {
        self.calculate_quote_with_audit(input, now).breakdown
    }

    /// Prices a quote and records one audit step per rule.
    pub fn calculate_quote_with_audit(
        &self,
        input: &QuoteInput<'_>,
        now: DateTime<Utc>,
    ) -> QuoteCalculation {
        let ctx = PricingContext::new(
            input.base_price,
            input.event,
            input.package,
            input.travellers,
            input.travel_dates,
            now,
        );

        let rules = self.rules();
        let outcomes: [RuleOutcome; 5] = rules.map(|rule| rule.evaluate(&ctx));

        let signed: Vec<Decimal> = rules
            .iter()
            .zip(outcomes.iter())
            .map(|(rule, outcome)| rule.signed_fraction(outcome))
            .collect();
        let subtotal = compose_subtotal(ctx.base_price, signed.iter().copied());

        let audit_steps: Vec<AuditStep> = rules
            .iter()
            .zip(outcomes.iter())
            .zip(signed.iter())
            .enumerate()
            .map(|(index, ((rule, outcome), signed_fraction))| {
                let amount = ctx.base_price * signed_fraction;
                debug!(
                    rule_id = rule.rule_id(),
                    fraction = %outcome.fraction,
                    amount = %amount,
                    "pricing rule evaluated"
                );
                AuditStep {
                    step_number: index as u32 + 1,
                    rule_id: rule.rule_id().to_string(),
                    rule_name: rule.rule_name().to_string(),
                    direction: rule.direction(),
                    input: outcome.input.clone(),
                    output: serde_json::json!({
                        "fraction": outcome.fraction.normalize().to_string(),
                        "signed_fraction": signed_fraction.normalize().to_string(),
                        "amount": amount.normalize().to_string(),
                        "applied": !outcome.fraction.is_zero(),
                    }),
                    reasoning: outcome.reasoning.clone(),
                }
            })
            .collect();

        let [seasonal, early_bird, last_minute, group, weekend] = outcomes;

        let final_price =
            (subtotal + input.addons_total + input.itineraries_total).max(Decimal::ZERO);

        let breakdown = PricingBreakdown {
            base_price: ctx.base_price,
            seasonal_adjustment: seasonal.fraction,
            early_bird_discount: early_bird.fraction,
            last_minute_surcharge: last_minute.fraction,
            group_discount: group.fraction,
            includes_weekend: weekend.fraction > Decimal::ZERO,
            weekend_surcharge: weekend.fraction,
            subtotal,
            addons_total: input.addons_total,
            itineraries_total: input.itineraries_total,
            final_price,
            currency: input.currency.to_string(),
        };

        QuoteCalculation {
            breakdown,
            days_until_event: ctx.days_until_event,
            travel_month: ctx.travel_month,
            audit_steps,
        }
    }
}

/// Applies signed fractions of `base_price` additively, clamping the result at zero.
///
/// # Example
///
/// ```
/// use quote_engine::calculation::compose_subtotal;
/// use rust_decimal::Decimal;
///
/// let base = Decimal::new(1000, 0);
/// let fractions = [Decimal::new(20, 2), Decimal::new(-10, 2)];
/// assert_eq!(compose_subtotal(base, fractions), Decimal::new(1100, 0));
/// ```
pub fn compose_subtotal(
    base_price: Decimal,
    signed_fractions: impl IntoIterator<Item = Decimal>,
) -> Decimal {
    signed_fractions
        .into_iter()
        .fold(base_price, |acc, fraction| acc + base_price * fraction)
        .max(Decimal::ZERO)
}
