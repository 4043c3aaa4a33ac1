// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout record store with write-through persistence.
//!
//! Holds the full record set in memory and persists it through an injected
//! [`BlobStore`] after every mutation. In-memory state is the source of
//! truth for the session: a failed write-through is surfaced as a warning,
//! never rolled back.

use chrono::NaiveDate;

use crate::error::{Result, TrackerError};
use crate::models::{NewWorkout, Workout};
use crate::storage::{self, BlobStore, StorageError};

/// In-memory workout store backed by blob persistence.
pub struct WorkoutStore {
    workouts: Vec<Workout>,
    /// Next ID to assign; only ever grows, so IDs are never reused
    next_id: u64,
    storage: Box<dyn BlobStore>,
    persist_warning: Option<StorageError>,
}

impl WorkoutStore {
    /// Open a store, loading whatever the blob storage holds.
    ///
    /// An absent or corrupt blob yields an empty store. A storage read
    /// failure also yields an empty store and is retained as a
    /// persistence warning.
    pub fn open(storage: Box<dyn BlobStore>) -> Self {
        let mut persist_warning = None;
        let workouts = match storage.load() {
            Ok(Some(blob)) => storage::decode_records(&blob),
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load workout blob; starting empty");
                persist_warning = Some(e);
                Vec::new()
            }
        };

        let next_id = workouts.iter().map(|w| w.id).max().map_or(1, |id| id + 1);
        tracing::info!(count = workouts.len(), "Loaded workouts");

        Self {
            workouts,
            next_id,
            storage,
            persist_warning,
        }
    }

    /// Validate and append a new workout.
    ///
    /// Returns the stored record, including its assigned ID. The record set
    /// is written through to storage before returning; a write failure does
    /// not undo the append (see [`take_persist_warning`](Self::take_persist_warning)).
    pub fn add(&mut self, new: NewWorkout) -> Result<Workout> {
        let sport_type = new.sport_type.trim();
        if sport_type.is_empty() {
            return Err(TrackerError::Validation(
                "sport type must not be empty".to_string(),
            ));
        }

        if !new.distance.is_finite() || new.distance <= 0.0 {
            return Err(TrackerError::Validation(format!(
                "distance must be a positive number, got {}",
                new.distance
            )));
        }

        let date = parse_workout_date(&new.date).ok_or_else(|| {
            TrackerError::Validation(format!("unparseable date: {:?}", new.date))
        })?;

        let workout = Workout {
            id: self.next_id,
            sport_type: sport_type.to_string(),
            distance: new.distance,
            date,
        };
        self.next_id += 1;
        self.workouts.push(workout.clone());

        tracing::info!(
            id = workout.id,
            sport_type = %workout.sport_type,
            distance = workout.distance,
            "Workout added"
        );
        self.write_through();

        Ok(workout)
    }

    /// Remove the workout with the given ID.
    ///
    /// Removal is idempotent: a missing ID is a no-op success. Returns
    /// whether a record was actually removed. The blob is rewritten either
    /// way, matching the original delete behavior.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.workouts.len();
        self.workouts.retain(|w| w.id != id);
        let removed = self.workouts.len() < before;

        if removed {
            tracing::info!(id, "Workout removed");
        } else {
            tracing::debug!(id, "Remove of unknown workout ID (no-op)");
        }
        self.write_through();

        removed
    }

    /// Snapshot of the full record set.
    ///
    /// The snapshot is owned; later mutations are not visible through it.
    pub fn list(&self) -> Vec<Workout> {
        self.workouts.clone()
    }

    /// The `n` most recently dated workouts, newest first.
    ///
    /// Ties on the same date keep insertion order (stable sort). Computed
    /// fresh from the record set on every call.
    pub fn recent(&self, n: usize) -> Vec<Workout> {
        let mut sorted = self.workouts.clone();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted.truncate(n);
        sorted
    }

    /// Number of records in the store.
    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }

    /// Hand over the most recent persistence failure, if any.
    ///
    /// The presentation layer polls this after mutations to show a
    /// non-fatal warning; the in-memory record set is unaffected.
    pub fn take_persist_warning(&mut self) -> Option<StorageError> {
        self.persist_warning.take()
    }

    /// Persist the full record set, retaining any failure as a warning.
    fn write_through(&mut self) {
        let result = storage::encode_records(&self.workouts)
            .and_then(|blob| self.storage.save(&blob));

        if let Err(e) = result {
            tracing::warn!(error = %e, "Write-through failed; in-memory state kept");
            self.persist_warning = Some(e);
        }
    }
}

/// Parse a boundary-supplied date string to day granularity.
///
/// Accepts `YYYY-MM-DD` (the form input format) or a full RFC 3339
/// timestamp, whose time component is dropped.
fn parse_workout_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    chrono::DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.date_naive())
}
