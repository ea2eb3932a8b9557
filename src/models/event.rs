//! Event model.
//!
//! This module defines the [`Event`] struct: the sporting fixture a quote
//! is priced against. The engine only reads events; they are owned and
//! persisted by the catalog.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents a sporting event that travel packages are sold around.
///
/// # Example
///
/// ```
/// use quote_engine::models::Event;
/// use chrono::{TimeZone, Utc};
///
/// let event = Event {
///     id: "evt_001".to_string(),
///     name: "Grand Final".to_string(),
///     start_date: Utc.with_ymd_and_hms(2026, 9, 26, 14, 30, 0).unwrap(),
///     season_months: Some([9, 10].into_iter().collect()),
///     is_weekend: None,
/// };
/// assert!(event.flags_peak_month(9));
/// assert!(!event.flags_peak_month(11));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier for the event.
    pub id: String,
    /// Display name of the event.
    pub name: String,
    /// When the event starts.
    pub start_date: DateTime<Utc>,
    /// Months (1-12) the event organiser marks as peak season.
    #[serde(default)]
    pub season_months: Option<BTreeSet<u32>>,
    /// Explicit weekend flag; when present it overrides travel-date inspection.
    #[serde(default)]
    pub is_weekend: Option<bool>,
}

impl Event {
    /// Returns true when the event's own season set contains `month`.
    ///
    /// An absent or empty set never flags a month.
    pub fn flags_peak_month(&self, month: u32) -> bool {
        self.season_months
            .as_ref()
            .is_some_and(|months| months.contains(&month))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn create_test_event(season_months: Option<BTreeSet<u32>>) -> Event {
        Event {
            id: "evt_001".to_string(),
            name: "Test Cup".to_string(),
            start_date: Utc.with_ymd_and_hms(2026, 7, 4, 12, 0, 0).unwrap(),
            season_months,
            is_weekend: None,
        }
    }

    #[test]
    fn test_deserialize_minimal_event() {
        let json = r#"{
            "id": "evt_001",
            "name": "Test Cup",
            "start_date": "2026-07-04T12:00:00Z"
        }"#;

        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.id, "evt_001");
        assert_eq!(
            event.start_date,
            Utc.with_ymd_and_hms(2026, 7, 4, 12, 0, 0).unwrap()
        );
        assert!(event.season_months.is_none());
        assert!(event.is_weekend.is_none());
    }

    #[test]
    fn test_deserialize_event_with_overrides() {
        let json = r#"{
            "id": "evt_002",
            "name": "Derby",
            "start_date": "2026-03-14T15:00:00+00:00",
            "season_months": [3, 2, 3],
            "is_weekend": false
        }"#;

        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.season_months.as_ref().unwrap().len(), 2);
        assert_eq!(event.is_weekend, Some(false));
    }

    #[test]
    fn test_flags_peak_month_without_set() {
        let event = create_test_event(None);
        assert!(!event.flags_peak_month(7));
    }

    #[test]
    fn test_flags_peak_month_with_empty_set() {
        let event = create_test_event(Some(BTreeSet::new()));
        assert!(!event.flags_peak_month(7));
    }

    #[test]
    fn test_flags_peak_month_membership() {
        let event = create_test_event(Some([1, 2].into_iter().collect()));
        assert!(event.flags_peak_month(1));
        assert!(event.flags_peak_month(2));
        assert!(!event.flags_peak_month(3));
    }
}
