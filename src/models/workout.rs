// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Workout record model for storage and aggregation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Stored workout record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    /// Store-assigned ID, unique for the lifetime of the store
    pub id: u64,
    /// Sport type (run, bike, swim, ...), treated as an opaque comparable token
    pub sport_type: String,
    /// Distance covered; unit-agnostic (the display layer attaches units)
    pub distance: f64,
    /// Calendar day of the workout
    pub date: NaiveDate,
}

/// A workout as submitted at the boundary, before validation.
///
/// The date arrives as a raw string (`YYYY-MM-DD` or RFC 3339) and is
/// normalized to day granularity by [`WorkoutStore::add`](crate::services::WorkoutStore::add),
/// which also assigns the ID.
#[derive(Debug, Clone, Deserialize)]
pub struct NewWorkout {
    /// Sport type label
    pub sport_type: String,
    /// Distance covered
    pub distance: f64,
    /// Workout date as entered
    pub date: String,
}

impl NewWorkout {
    pub fn new(sport_type: impl Into<String>, distance: f64, date: impl Into<String>) -> Self {
        Self {
            sport_type: sport_type.into(),
            distance,
            date: date.into(),
        }
    }
}
