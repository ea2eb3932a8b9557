//! Seasonal multiplier resolution.
//!
//! Maps the calendar month of travel to a seasonal surcharge. An event may flag
//! its own peak months; any month it does not flag falls through to the
//! default season table rather than being priced at zero.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::SeasonalConfig;
use crate::models::{AdjustmentDirection, Event};

use super::{PricingContext, PricingRule, RuleOutcome};

/// How a travel month was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    /// The event's own season months contain the travel month.
    EventPeak,
    /// Peak month in the default table.
    Peak,
    /// Shoulder month in the default table.
    Shoulder,
    /// Any other month.
    OffPeak,
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Season::EventPeak => write!(f, "event peak season"),
            Season::Peak => write!(f, "peak season"),
            Season::Shoulder => write!(f, "shoulder season"),
            Season::OffPeak => write!(f, "off-peak"),
        }
    }
}

/// Resolves the seasonal fraction for a travel month.
///
/// # Example
///
/// ```
/// use quote_engine::calculation::SeasonalMultiplierResolver;
/// use quote_engine::models::Event;
/// use chrono::{TimeZone, Utc};
/// use rust_decimal::Decimal;
///
/// let resolver = SeasonalMultiplierResolver::default();
/// let event = Event {
///     id: "evt_001".to_string(),
///     name: "Open".to_string(),
///     start_date: Utc.with_ymd_and_hms(2026, 1, 20, 0, 0, 0).unwrap(),
///     season_months: Some([1].into_iter().collect()),
///     is_weekend: None,
/// };
///
/// assert_eq!(resolver.resolve(&event, 1), Decimal::new(20, 2));
/// assert_eq!(resolver.resolve(&event, 4), Decimal::new(10, 2));
/// assert_eq!(resolver.resolve(&event, 2), Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SeasonalMultiplierResolver {
    config: SeasonalConfig,
}

impl SeasonalMultiplierResolver {
    /// Creates a resolver from loaded configuration.
    pub fn new(config: SeasonalConfig) -> Self {
        Self { config }
    }

    /// Classifies `travel_month` for `event`.
    ///
    /// Months outside 1-12 classify as [`Season::OffPeak`].
    pub fn classify(&self, event: &Event, travel_month: u32) -> Season {
        if event.flags_peak_month(travel_month) {
            Season::EventPeak
        } else if self.config.peak_months.contains(&travel_month) {
            Season::Peak
        } else if self.config.shoulder_months.contains(&travel_month) {
            Season::Shoulder
        } else {
            Season::OffPeak
        }
    }

    /// Returns the seasonal fraction for `travel_month`.
    pub fn resolve(&self, event: &Event, travel_month: u32) -> Decimal {
        match self.classify(event, travel_month) {
            Season::EventPeak | Season::Peak => self.config.peak_adjustment,
            Season::Shoulder => self.config.shoulder_adjustment,
            Season::OffPeak => Decimal::ZERO,
        }
    }
}

impl PricingRule for SeasonalMultiplierResolver {
    fn rule_id(&self) -> &'static str {
        "seasonal"
    }

    fn rule_name(&self) -> &'static str {
        "Seasonal Multiplier"
    }

    fn direction(&self) -> AdjustmentDirection {
        AdjustmentDirection::Surcharge
    }

    fn evaluate(&self, ctx: &PricingContext<'_>) -> RuleOutcome {
        let season = self.classify(ctx.event, ctx.travel_month);
        let fraction = self.resolve(ctx.event, ctx.travel_month);

        RuleOutcome {
            fraction,
            input: serde_json::json!({
                "travel_month": ctx.travel_month,
                "season_months": ctx.event.season_months,
            }),
            reasoning: format!(
                "Month {} is {}: +{}",
                ctx.travel_month,
                season,
                fraction.normalize()
            ),
        }
    }
}
