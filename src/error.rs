// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types.

use crate::storage::StorageError;

/// Errors surfaced by the engine's public operations.
///
/// Removal of a missing record is deliberately not represented here:
/// deletion is idempotent, so there is no `NotFound` variant.
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    /// Record rejected before entering the store; the store is unchanged.
    #[error("Invalid workout: {0}")]
    Validation(String),

    /// Blob load or write-through failed. In-memory state stays
    /// authoritative for the session; see
    /// [`WorkoutStore::take_persist_warning`](crate::services::WorkoutStore::take_persist_warning).
    #[error("Persistence error: {0}")]
    Persistence(#[from] StorageError),
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, TrackerError>;
