//! Debounced persistence of edit overrides.
//!
//! User edits arrive in bursts (one per keystroke, in the worst case).
//! [`WriteQueue`] stages them in memory and writes the store once the flush
//! interval has passed since the first staged edit. The clock is
//! caller-driven: callers pass `now` explicitly, so there are no threads or
//! timers here and tests stay deterministic.

use chrono::{DateTime, Duration, Utc};

use gj_core::EditOverride;

use crate::{EditStore, StoreError};

/// Queued-write wrapper around an [`EditStore`].
#[derive(Debug)]
pub struct WriteQueue {
    store: EditStore,
    flush_interval: Duration,
    /// When the oldest unflushed edit was staged.
    dirty_since: Option<DateTime<Utc>>,
}

impl WriteQueue {
    #[must_use]
    pub const fn new(store: EditStore, flush_interval: Duration) -> Self {
        Self {
            store,
            flush_interval,
            dirty_since: None,
        }
    }

    /// Stages an override without touching the disk.
    pub fn stage(&mut self, commit_id: impl Into<String>, edit: EditOverride, now: DateTime<Utc>) {
        self.store.set(commit_id, edit);
        self.dirty_since.get_or_insert(now);
    }

    /// Stages a removal. Returns whether an override was present.
    pub fn stage_removal(&mut self, commit_id: &str, now: DateTime<Utc>) -> bool {
        let removed = self.store.remove(commit_id);
        if removed {
            self.dirty_since.get_or_insert(now);
        }
        removed
    }

    /// Flushes if the interval has elapsed since the first staged edit.
    /// Returns whether a write happened.
    pub fn maybe_flush(&mut self, now: DateTime<Utc>) -> Result<bool, StoreError> {
        match self.dirty_since {
            Some(since) if now - since >= self.flush_interval => {
                self.flush()?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Writes staged edits to disk unconditionally.
    pub fn flush(&mut self) -> Result<(), StoreError> {
        if self.dirty_since.is_some() {
            self.store.save()?;
            self.dirty_since = None;
        }
        Ok(())
    }

    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty_since.is_some()
    }

    /// Read access to the wrapped store.
    #[must_use]
    pub const fn store(&self) -> &EditStore {
        &self.store
    }

    /// Consumes the queue, returning the wrapped store. Staged but
    /// unflushed edits are still only in memory.
    #[must_use]
    pub fn into_store(self) -> EditStore {
        self.store
    }
}
