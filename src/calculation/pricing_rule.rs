//! The pricing rule capability and the context rules evaluate against.
//!
//! Every rule sees the same [`PricingContext`], built once per quote from the
//! caller's inputs and an explicit `now`. Rules never read the clock.

use chrono::{DateTime, Datelike, Utc};
use rust_decimal::Decimal;

use crate::models::{AdjustmentDirection, Event, Package};

const SECONDS_PER_DAY: i64 = 86_400;

/// Everything a pricing rule may inspect for one quote.
#[derive(Debug, Clone, Copy)]
pub struct PricingContext<'a> {
    /// The price the rule fractions apply against.
    pub base_price: Decimal,
    /// The event being travelled to.
    pub event: &'a Event,
    /// The package being quoted.
    pub package: &'a Package,
    /// Number of travellers in the party.
    pub travellers: u32,
    /// Travel dates, start first.
    pub travel_dates: &'a [DateTime<Utc>],
    /// The instant the quote is priced at.
    pub now: DateTime<Utc>,
    /// Whole days between `now` and the event start.
    pub days_until_event: i64,
    /// Calendar month of the first travel date.
    pub travel_month: u32,
}

impl<'a> PricingContext<'a> {
    /// Builds a context, deriving the day count and travel month.
    ///
    /// If `travel_dates` is empty the travel month falls back to the event's
    /// start month; request validation normally rules that case out.
    pub fn new(
        base_price: Decimal,
        event: &'a Event,
        package: &'a Package,
        travellers: u32,
        travel_dates: &'a [DateTime<Utc>],
        now: DateTime<Utc>,
    ) -> Self {
        let travel_month = travel_dates
            .first()
            .unwrap_or(&event.start_date)
            .month();

        Self {
            base_price,
            event,
            package,
            travellers,
            travel_dates,
            now,
            days_until_event: days_until_event(now, event.start_date),
            travel_month,
        }
    }
}

/// Returns the absolute whole-day distance between `now` and `event_start`.
///
/// The distance is rounded to the nearest day (half a day rounds up), not
/// truncated, and is the same whether the event is ahead or behind `now`.
///
/// # Example
///
/// ```
/// use quote_engine::calculation::days_until_event;
/// use chrono::{TimeZone, Utc};
///
/// let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
/// let start = Utc.with_ymd_and_hms(2026, 1, 15, 13, 0, 0).unwrap();
/// assert_eq!(days_until_event(now, start), 15);
/// ```
pub fn days_until_event(now: DateTime<Utc>, event_start: DateTime<Utc>) -> i64 {
    let seconds = (event_start - now).num_seconds().abs();
    (seconds + SECONDS_PER_DAY / 2) / SECONDS_PER_DAY
}

/// What a rule decided, with the facts it based the decision on.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleOutcome {
    /// Non-negative fraction of the base price; the rule's direction gives its sign.
    pub fraction: Decimal,
    /// The inputs the rule looked at, for the audit trail.
    pub input: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A stateless pricing rule: `(context) -> fraction`.
///
/// Implementations must be pure; the aggregator may evaluate them from any
/// number of threads at once.
pub trait PricingRule: Send + Sync {
    /// Stable identifier used in audit steps (e.g., "early_bird").
    fn rule_id(&self) -> &'static str;

    /// Human-readable rule name.
    fn rule_name(&self) -> &'static str;

    /// Whether the fraction is added to or subtracted from the base price.
    fn direction(&self) -> AdjustmentDirection;

    /// Evaluates the rule for one quote.
    fn evaluate(&self, ctx: &PricingContext<'_>) -> RuleOutcome;

    /// The rule's fraction with its sign applied.
    fn signed_fraction(&self, outcome: &RuleOutcome) -> Decimal {
        self.direction().sign() * outcome.fraction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn utc(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    fn create_test_event(start_date: DateTime<Utc>) -> Event {
        Event {
            id: "evt_001".to_string(),
            name: "Test Cup".to_string(),
            start_date,
            season_months: None,
            is_weekend: None,
        }
    }

    fn create_test_package() -> Package {
        Package {
            id: "pkg_001".to_string(),
            name: "Standard".to_string(),
            base_price: Decimal::new(1000, 0),
            early_bird_cutoff: None,
            min_capacity: None,
        }
    }

    #[test]
    fn test_days_until_event_whole_days() {
        let now = utc(2026, 3, 1, 0);
        assert_eq!(days_until_event(now, now + Duration::days(150)), 150);
        assert_eq!(days_until_event(now, now), 0);
    }

    #[test]
    fn test_days_until_event_rounds_rather_than_truncates() {
        let now = utc(2026, 3, 1, 0);
        // 14 days 12 hours rounds up to 15
        assert_eq!(days_until_event(now, now + Duration::hours(14 * 24 + 12)), 15);
        // 14 days 11 hours rounds down to 14
        assert_eq!(days_until_event(now, now + Duration::hours(14 * 24 + 11)), 14);
    }

    #[test]
    fn test_days_until_event_is_absolute() {
        let now = utc(2026, 3, 1, 0);
        assert_eq!(days_until_event(now, now - Duration::days(20)), 20);
    }

    #[test]
    fn test_context_uses_first_travel_date_month() {
        let event = create_test_event(utc(2026, 7, 4, 0));
        let package = create_test_package();
        let dates = [utc(2026, 10, 16, 9), utc(2026, 11, 2, 9)];

        let ctx = PricingContext::new(
            package.base_price,
            &event,
            &package,
            2,
            &dates,
            utc(2026, 3, 1, 0),
        );

        assert_eq!(ctx.travel_month, 10);
        assert_eq!(ctx.days_until_event, 125);
    }

    #[test]
    fn test_context_without_dates_uses_event_month() {
        let event = create_test_event(utc(2026, 7, 4, 12));
        let package = create_test_package();

        let ctx = PricingContext::new(
            package.base_price,
            &event,
            &package,
            2,
            &[],
            utc(2026, 3, 1, 0),
        );

        assert_eq!(ctx.travel_month, 7);
    }
}
