//! Aggregation outputs consumed by the presentation layer.
//!
//! These are plain data: numbers, labels, and dates. All rendering,
//! styling, and charting happens outside the engine.

use chrono::NaiveDate;
use serde::Serialize;

/// Current-vs-previous week mileage totals.
///
/// Totals are exact sums; display rounding happens only in
/// [`formatted`](WeeklyStats::formatted).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeeklyStats {
    /// Total distance in the week containing the reference date
    pub current_total: f64,
    /// Total distance in the week before that
    pub previous_total: f64,
}

impl WeeklyStats {
    /// Totals rounded to one decimal place, ready for the stat tiles.
    pub fn formatted(&self) -> FormattedStats {
        FormattedStats {
            current_total: format!("{:.1}", self.current_total),
            previous_total: format!("{:.1}", self.previous_total),
        }
    }
}

/// Display form of [`WeeklyStats`], one decimal place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormattedStats {
    pub current_total: String,
    pub previous_total: String,
}

/// One point of the trailing weekly series driving the trend chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekTotal {
    /// Monday the week starts on
    pub week_start: NaiveDate,
    /// Chart label for the week start, e.g. "Jan 15"
    pub label: String,
    /// Total distance for the week, unrounded (the chart decides precision)
    pub total: f64,
}

/// Sport-type restriction for the trend chart.
///
/// The chart filter buttons send opaque tokens; `"all"` is the sentinel for
/// no restriction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SportFilter {
    /// No restriction
    All,
    /// Only workouts of this sport type
    Sport(String),
}

impl SportFilter {
    /// Parse a filter token from the presentation layer.
    pub fn parse(token: &str) -> Self {
        if token == "all" {
            Self::All
        } else {
            Self::Sport(token.to_string())
        }
    }

    /// Whether a workout with the given sport type passes this filter.
    pub fn matches(&self, sport_type: &str) -> bool {
        match self {
            Self::All => true,
            Self::Sport(wanted) => wanted == sport_type,
        }
    }
}
