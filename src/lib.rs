// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Mileage-Tracker: workout logging and weekly mileage analytics.
//!
//! This crate is the aggregation engine behind a personal mileage tracker:
//! it buckets dated workout records into Monday-start calendar weeks,
//! computes current-vs-previous-week totals, derives a trailing weekly
//! series for the trend chart, and applies sport-type filtering. The UI and
//! chart rendering live outside; they consume the plain data produced here.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod week;

use chrono::NaiveDate;

use config::Config;
use error::Result;
use models::{NewWorkout, SportFilter, WeekTotal, WeeklyStats, Workout};
use services::WorkoutStore;
use storage::{BlobStore, FileStore, StorageError};

/// The engine object handed to the presentation layer.
///
/// Constructed once and passed by reference; there is no global instance.
/// Mutations take `&mut self`, which is all the concurrency control a
/// single-threaded, event-at-a-time host needs.
pub struct Tracker {
    config: Config,
    store: WorkoutStore,
}

impl Tracker {
    /// Open a tracker persisting to the configured data file.
    pub fn open(config: Config) -> Self {
        let storage = FileStore::new(config.data_path.clone());
        Self::with_storage(config, Box::new(storage))
    }

    /// Open a tracker over any blob storage implementation.
    pub fn with_storage(config: Config, storage: Box<dyn BlobStore>) -> Self {
        Self {
            config,
            store: WorkoutStore::open(storage),
        }
    }

    /// Log a new workout. See [`WorkoutStore::add`].
    pub fn add(&mut self, new: NewWorkout) -> Result<Workout> {
        self.store.add(new)
    }

    /// Delete a workout by ID (idempotent). See [`WorkoutStore::remove`].
    pub fn remove(&mut self, id: u64) -> bool {
        self.store.remove(id)
    }

    /// The most recently dated workouts for the list view, newest first,
    /// capped at the configured limit.
    pub fn recent(&self) -> Vec<Workout> {
        self.store.recent(self.config.recent_limit)
    }

    /// Current-vs-previous week totals for the stat tiles.
    pub fn weekly_stats(&self, reference: NaiveDate) -> WeeklyStats {
        services::weekly_stats(&self.store.list(), reference)
    }

    /// Trailing weekly series for the trend chart, at the configured depth.
    pub fn weekly_series(&self, reference: NaiveDate, filter: &SportFilter) -> Vec<WeekTotal> {
        services::weekly_series(
            &self.store.list(),
            reference,
            self.config.chart_weeks,
            filter,
        )
    }

    /// Non-fatal persistence warning from the latest load or write-through.
    pub fn take_persist_warning(&mut self) -> Option<StorageError> {
        self.store.take_persist_warning()
    }

    /// Direct access to the record store.
    pub fn store(&self) -> &WorkoutStore {
        &self.store
    }
}
