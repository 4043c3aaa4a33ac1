// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Weekly mileage aggregation.
//!
//! Everything here is a pure function over a record snapshot: totals are
//! recomputed from scratch on every query, so no derived state can go
//! stale. At personal-log record counts the full scan is cheaper than
//! maintaining an index would be; the contracts (inclusive windows,
//! additive offsets) are what callers rely on, not the scan.

use chrono::NaiveDate;

use crate::models::{SportFilter, WeekTotal, WeeklyStats, Workout};
use crate::week::WeekWindow;

/// Depth of the trailing series driving the trend chart.
pub const TRAILING_WEEKS: usize = 8;

/// Current-week and previous-week totals across all sport types.
///
/// The previous window is derived from the current window's start, not from
/// the reference date, so the pair stays consistent with
/// [`weekly_series`] at every boundary. Totals are exact; rounding belongs
/// to [`WeeklyStats::formatted`].
pub fn weekly_stats(workouts: &[Workout], reference: NaiveDate) -> WeeklyStats {
    let current = WeekWindow::containing(reference);
    let previous = current.offset(-1);

    WeeklyStats {
        current_total: window_total(workouts, &current, &SportFilter::All),
        previous_total: window_total(workouts, &previous, &SportFilter::All),
    }
}

/// Trailing per-week totals, oldest week first, ending with the current week.
///
/// The series is filter-aware while [`weekly_stats`] never filters: the
/// top-line totals always cover all sports, only the trend chart narrows.
/// Each window is the current window offset by `-i` whole weeks, so the
/// points line up with the additive offset rule exactly.
pub fn weekly_series(
    workouts: &[Workout],
    reference: NaiveDate,
    week_count: usize,
    filter: &SportFilter,
) -> Vec<WeekTotal> {
    let current = WeekWindow::containing(reference);

    (0..week_count)
        .rev()
        .map(|i| {
            let window = current.offset(-(i as i64));
            WeekTotal {
                week_start: window.start,
                label: window.start_label(),
                total: window_total(workouts, &window, filter),
            }
        })
        .collect()
}

/// Sum of distances for records inside `window` that pass `filter`.
fn window_total(workouts: &[Workout], window: &WeekWindow, filter: &SportFilter) -> f64 {
    workouts
        .iter()
        .filter(|w| window.contains(w.date) && filter.matches(&w.sport_type))
        .map(|w| w.distance)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn workout(id: u64, sport: &str, distance: f64, on: NaiveDate) -> Workout {
        Workout {
            id,
            sport_type: sport.to_string(),
            distance,
            date: on,
        }
    }

    // Reference Wednesday 2024-01-17; current week Mon 15 – Sun 21
    const REF: (i32, u32, u32) = (2024, 1, 17);

    fn reference() -> NaiveDate {
        date(REF.0, REF.1, REF.2)
    }

    #[test]
    fn test_weekly_stats_empty_store() {
        let stats = weekly_stats(&[], reference());

        assert_eq!(stats.current_total, 0.0);
        assert_eq!(stats.previous_total, 0.0);
    }

    #[test]
    fn test_weekly_stats_window_boundaries_inclusive() {
        let workouts = vec![
            workout(1, "run", 1.0, date(2024, 1, 15)), // current Monday
            workout(2, "run", 2.0, date(2024, 1, 21)), // current Sunday
            workout(3, "run", 4.0, date(2024, 1, 14)), // previous Sunday
            workout(4, "run", 8.0, date(2024, 1, 8)),  // previous Monday
            workout(5, "run", 16.0, date(2024, 1, 7)), // two weeks back
        ];

        let stats = weekly_stats(&workouts, reference());

        assert_eq!(stats.current_total, 3.0);
        assert_eq!(stats.previous_total, 12.0);
    }

    #[test]
    fn test_weekly_stats_covers_all_sport_types() {
        // The stat tiles never filter, by design; only the chart does.
        let workouts = vec![
            workout(1, "run", 5.0, date(2024, 1, 16)),
            workout(2, "bike", 10.0, date(2024, 1, 18)),
        ];

        let stats = weekly_stats(&workouts, reference());
        assert_eq!(stats.current_total, 15.0);
    }

    #[test]
    fn test_weekly_series_shape() {
        let series = weekly_series(&[], reference(), TRAILING_WEEKS, &SportFilter::All);

        assert_eq!(series.len(), TRAILING_WEEKS);
        // Oldest first, current week last
        assert_eq!(
            series.last().unwrap().week_start,
            WeekWindow::containing(reference()).start
        );
        for pair in series.windows(2) {
            assert_eq!(
                pair[1].week_start - pair[0].week_start,
                chrono::Duration::weeks(1),
                "Series must advance one week per point"
            );
        }
    }

    #[test]
    fn test_weekly_series_filters_by_sport() {
        let workouts = vec![
            workout(1, "run", 5.0, date(2024, 1, 16)),
            workout(2, "bike", 10.0, date(2024, 1, 18)),
            workout(3, "run", 3.0, date(2024, 1, 10)),
        ];

        let run_only = weekly_series(&workouts, reference(), 2, &SportFilter::parse("run"));

        assert_eq!(run_only.len(), 2);
        assert_eq!(run_only[0].total, 3.0);
        assert_eq!(run_only[0].label, "Jan 8");
        assert_eq!(run_only[1].total, 5.0);
        assert_eq!(run_only[1].label, "Jan 15");
    }

    #[test]
    fn test_filter_is_a_pure_restriction() {
        let workouts = vec![
            workout(1, "run", 5.0, date(2024, 1, 16)),
            workout(2, "bike", 10.0, date(2024, 1, 18)),
            workout(3, "run", 3.0, date(2024, 1, 10)),
            workout(4, "run", 7.0, date(2024, 1, 3)),
        ];

        let all = weekly_series(&workouts, reference(), 4, &SportFilter::All);
        let runs = weekly_series(&workouts, reference(), 4, &SportFilter::parse("run"));

        for (filtered, unfiltered) in runs.iter().zip(&all) {
            assert!(
                filtered.total <= unfiltered.total,
                "Filtered total may never exceed the unfiltered total"
            );
        }
        // Weeks containing only runs agree exactly
        assert_eq!(runs[1].total, all[1].total);
    }

    #[test]
    fn test_totals_independent_of_insertion_order() {
        let mut workouts = vec![
            workout(1, "run", 5.0, date(2024, 1, 16)),
            workout(2, "bike", 10.0, date(2024, 1, 18)),
            workout(3, "run", 3.0, date(2024, 1, 10)),
        ];

        let forward = weekly_stats(&workouts, reference());
        workouts.reverse();
        let backward = weekly_stats(&workouts, reference());

        assert_eq!(forward, backward);
    }

    #[test]
    fn test_series_near_year_boundary() {
        // Reference Friday 2026-01-02; the current week starts in 2025
        let reference = date(2026, 1, 2);
        let workouts = vec![
            workout(1, "run", 5.0, date(2025, 12, 30)), // current week (Tue)
            workout(2, "run", 3.0, date(2025, 12, 24)), // previous week (Wed)
        ];

        let stats = weekly_stats(&workouts, reference);
        assert_eq!(stats.current_total, 5.0);
        assert_eq!(stats.previous_total, 3.0);

        let series = weekly_series(&workouts, reference, 2, &SportFilter::All);
        assert_eq!(series[0].label, "Dec 22");
        assert_eq!(series[0].total, 3.0);
        assert_eq!(series[1].label, "Dec 29");
        assert_eq!(series[1].total, 5.0);
    }
}
