//! Storage layer for work-log edit overrides.
//!
//! Overrides live in one JSON file: a map from commit id to
//! `{ "message": ..., "duration": ... }`. The parsing engine only ever reads
//! the whole map; writes come from user edits and go through [`WriteQueue`]
//! so that bursts of edits coalesce into one file write.
//!
//! # Thread Safety
//!
//! [`EditStore`] holds plain owned data and is `Send`. It performs no
//! locking; callers serialize access, matching the engine's single-threaded
//! model.

mod queue;

pub use queue::WriteQueue;

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;

use gj_core::EditOverride;

/// Edit store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying filesystem error.
    #[error("edit store io error: {0}")]
    Io(#[from] std::io::Error),
    /// The store file exists but does not hold a valid override map.
    #[error("corrupt edit store at {path}")]
    Corrupt {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    /// Failed to serialize the override map for writing.
    #[error("failed to serialize edit store")]
    Serialize(#[source] serde_json::Error),
}

/// JSON-file-backed map of edit overrides, keyed by commit id.
#[derive(Debug)]
pub struct EditStore {
    path: PathBuf,
    overrides: HashMap<String, EditOverride>,
}

impl EditStore {
    /// Loads the store from `path`. A missing file is an empty store;
    /// a corrupt file is an error so the caller can decide what to do.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let overrides = match fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => HashMap::new(),
            Ok(content) => serde_json::from_str(&content).map_err(|source| StoreError::Corrupt {
                path: path.display().to_string(),
                source,
            })?,
            Err(e) if e.kind() == ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, overrides })
    }

    /// The full override map, for handing to the reconciler.
    #[must_use]
    pub const fn overrides(&self) -> &HashMap<String, EditOverride> {
        &self.overrides
    }

    #[must_use]
    pub fn get(&self, commit_id: &str) -> Option<&EditOverride> {
        self.overrides.get(commit_id)
    }

    /// Inserts or replaces the override for a commit. An empty override
    /// removes the entry instead of storing a no-op.
    pub fn set(&mut self, commit_id: impl Into<String>, edit: EditOverride) {
        let commit_id = commit_id.into();
        if edit.is_empty() {
            self.overrides.remove(&commit_id);
        } else {
            self.overrides.insert(commit_id, edit);
        }
    }

    /// Removes the override for a commit. Returns whether one was present.
    pub fn remove(&mut self, commit_id: &str) -> bool {
        self.overrides.remove(commit_id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the full map back to disk, atomically: the content goes to a
    /// sibling temp file which is then renamed over the target.
    pub fn save(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content =
            serde_json::to_string_pretty(&self.overrides).map_err(StoreError::Serialize)?;

        let tmp_path = self.path.with_extension("tmp");
        fs::write(&tmp_path, &content)?;
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }

        tracing::debug!(
            path = %self.path.display(),
            entries = self.overrides.len(),
            "saved edit store"
        );
        Ok(())
    }
}
