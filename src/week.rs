// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Calendar week windows for mileage aggregation.
//!
//! A week runs Monday through Sunday inclusive. All aggregation buckets
//! records by these windows, so the boundary rules here are load-bearing:
//! an off-by-one on the Monday rollover silently corrupts every reported
//! total.

use chrono::{Datelike, Duration, NaiveDate};

/// A Monday-to-Sunday calendar week, both ends inclusive.
///
/// Windows are derived on demand and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindow {
    /// Monday of the week
    pub start: NaiveDate,
    /// Sunday of the week (`start + 6 days`)
    pub end: NaiveDate,
}

impl WeekWindow {
    /// The week containing `reference`.
    ///
    /// `start` is the most recent Monday at or before `reference`. A Sunday
    /// reference maps six days back: Sunday closes the week that began the
    /// prior Monday, it never opens a new one.
    pub fn containing(reference: NaiveDate) -> Self {
        let days_since_monday = reference.weekday().num_days_from_monday() as i64;
        let start = reference - Duration::days(days_since_monday);
        Self {
            start,
            end: start + Duration::days(6),
        }
    }

    /// The window `weeks` whole weeks away from this one (negative = past).
    ///
    /// Offsets shift this window's own `start`, so they compose additively:
    /// `w.offset(a).offset(b) == w.offset(a + b)`. Chained single-week
    /// offsets cannot drift from a direct multi-week offset.
    pub fn offset(&self, weeks: i64) -> Self {
        let start = self.start + Duration::weeks(weeks);
        Self {
            start,
            end: start + Duration::days(6),
        }
    }

    /// Whether `date` falls inside this window, both ends inclusive.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Chart label for the week: short month plus unpadded day, e.g. "Jan 15".
    pub fn start_label(&self) -> String {
        self.start.format("%b %-d").to_string()
    }
}
