//! Core engine for deriving structured work-log entries from commit messages.
//!
//! This crate contains the fundamental types and logic for:
//! - Tag extraction: bracket tags for status, duration and category
//! - Duration resolution: free-form tokens like `"1h30"` into minutes
//! - Record building: a delimited raw log stream into commit records
//! - Reconciliation: merging tags, stored edits and timestamp deltas
//!
//! Everything here is synchronous and pure over its inputs; the log source
//! and the edit store are external collaborators.

pub mod duration;
pub mod record;
pub mod reconcile;
pub mod status;
pub mod tag;

pub use duration::{format_minutes, parse_minutes};
pub use record::{
    CommitRecord, DEFAULT_CATEGORY, JournalCommit, RecordError, RecordOptions, build_records,
};
pub use reconcile::{EditOverride, ResolvedEntry, resolve};
pub use status::WorkStatus;
pub use tag::{Extraction, Tag, TagKind, extract};
