// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Blob persistence layer.
//!
//! The engine persists the full record set as one opaque JSON blob after
//! every mutation and reads it back once at startup. Anything that can
//! store a string can back it; [`FileStore`] is the default and
//! [`MemoryStore`] serves tests and embedding.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::models::Workout;

/// Abstract key-value blob storage collaborator.
pub trait BlobStore {
    /// Persist the serialized record set, replacing any previous blob.
    fn save(&mut self, blob: &str) -> Result<(), StorageError>;

    /// Read back the last persisted blob, or `None` if nothing was saved.
    fn load(&self) -> Result<Option<String>, StorageError>;
}

/// Errors from blob storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage I/O failed: {0}")]
    Io(String),

    #[error("Failed to serialize records: {0}")]
    Serialize(String),
}

/// Serialize the full record set to its blob form.
pub fn encode_records(workouts: &[Workout]) -> Result<String, StorageError> {
    serde_json::to_string(workouts).map_err(|e| StorageError::Serialize(e.to_string()))
}

/// Decode a persisted blob back into records.
///
/// Loading is lenient for backward compatibility: unknown extra fields are
/// ignored, and a record missing a required field is skipped with a warning
/// instead of failing the whole load. A blob that is not a JSON array at
/// all decodes as an empty record set.
pub fn decode_records(blob: &str) -> Vec<Workout> {
    let values: Vec<serde_json::Value> = match serde_json::from_str(blob) {
        Ok(values) => values,
        Err(e) => {
            tracing::warn!(error = %e, "Workout blob is corrupt; starting with an empty record set");
            return Vec::new();
        }
    };

    let mut workouts = Vec::with_capacity(values.len());
    for value in values {
        match serde_json::from_value::<Workout>(value) {
            Ok(workout) => workouts.push(workout),
            Err(e) => {
                tracing::warn!(error = %e, "Skipping malformed workout record");
            }
        }
    }
    workouts
}
