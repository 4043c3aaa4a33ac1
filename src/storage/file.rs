// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! File-backed blob storage.

use std::fs;
use std::io;
use std::path::PathBuf;

use crate::storage::{BlobStore, StorageError};

/// Blob storage backed by a single JSON file on disk.
///
/// The parent directory is created on first save, so a fresh checkout works
/// without setup.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl BlobStore for FileStore {
    fn save(&mut self, blob: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    StorageError::Io(format!("create {}: {}", parent.display(), e))
                })?;
            }
        }

        fs::write(&self.path, blob)
            .map_err(|e| StorageError::Io(format!("write {}: {}", self.path.display(), e)))
    }

    fn load(&self) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(blob) => Ok(Some(blob)),
            // No file yet is a first run, not an error
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(format!(
                "read {}: {}",
                self.path.display(),
                e
            ))),
        }
    }
}
