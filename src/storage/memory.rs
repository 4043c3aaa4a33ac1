// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory blob storage for tests and embedding.

use crate::storage::{BlobStore, StorageError};

/// Blob storage that keeps the blob in memory.
///
/// Nothing outlives the process; useful in tests and for hosts that manage
/// their own persistence.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    blob: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a pre-seeded blob, as if it had been saved earlier.
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: Some(blob.into()),
        }
    }

    /// The currently held blob, if any.
    pub fn blob(&self) -> Option<&str> {
        self.blob.as_deref()
    }
}

impl BlobStore for MemoryStore {
    fn save(&mut self, blob: &str) -> Result<(), StorageError> {
        self.blob = Some(blob.to_string());
        Ok(())
    }

    fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(self.blob.clone())
    }
}
