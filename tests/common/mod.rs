// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use std::sync::Once;

use mileage_tracker::config::Config;
use mileage_tracker::models::NewWorkout;
use mileage_tracker::storage::{BlobStore, MemoryStore, StorageError};
use mileage_tracker::Tracker;

static INIT_LOGGING: Once = Once::new();

/// Wire up test logging once; set RUST_LOG to see engine traces.
#[allow(dead_code)]
pub fn init_logging() {
    INIT_LOGGING.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Create a tracker backed by in-memory blob storage.
#[allow(dead_code)]
pub fn memory_tracker() -> Tracker {
    Tracker::with_storage(Config::default(), Box::new(MemoryStore::new()))
}

/// Shorthand for a boundary submission.
#[allow(dead_code)]
pub fn submission(sport: &str, distance: f64, date: &str) -> NewWorkout {
    NewWorkout::new(sport, distance, date)
}

/// Blob storage whose writes always fail, for write-through failure tests.
#[allow(dead_code)]
#[derive(Default)]
pub struct FailingStore;

impl BlobStore for FailingStore {
    fn save(&mut self, _blob: &str) -> Result<(), StorageError> {
        Err(StorageError::Io("disk full (simulated)".to_string()))
    }

    fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(None)
    }
}
