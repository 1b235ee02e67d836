//! Commit record building from a delimited log stream.
//!
//! The log source hands over one UTF-8 stream: commits separated by a NUL
//! byte, fields within a commit separated by `|||` in the order hash,
//! ISO-8601 date, full message. Two-level delimiting keeps pipes and
//! newlines inside commit messages from being mistaken for structure; an
//! embedded NUL in a message is an accepted limitation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::status::WorkStatus;
use crate::tag;

/// Separates commits in the raw log stream.
pub const RECORD_SEPARATOR: char = '\0';

/// Separates fields within one commit fragment.
pub const FIELD_DELIMITER: &str = "|||";

/// Category assigned when no bracket content remains after status and
/// duration tags are removed.
pub const DEFAULT_CATEGORY: &str = "general";

/// Errors from building records out of a log stream.
#[derive(Debug, Error)]
pub enum RecordError {
    /// The stream was non-empty but no fragment could be parsed. This is
    /// distinct from an empty stream, which yields an empty record list.
    #[error("no parsable commit in log stream ({fragments} malformed fragments)")]
    Malformed { fragments: usize },
}

/// Controls defaulting when building records.
///
/// Status defaulting used to differ between call sites; it is an explicit
/// flag here. `None` leaves absent statuses absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordOptions {
    /// Status assigned to commits whose message carries no status tag.
    pub default_status: Option<WorkStatus>,
}

impl Default for RecordOptions {
    /// The server-facing default: untagged commits count as `DONE`.
    fn default() -> Self {
        Self {
            default_status: Some(WorkStatus::Done),
        }
    }
}

impl RecordOptions {
    /// Options that leave absent statuses absent.
    #[must_use]
    pub const fn no_default_status() -> Self {
        Self {
            default_status: None,
        }
    }
}

/// One parsed commit. Immutable after construction within a parse pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    /// Commit hash. Never empty.
    pub id: String,
    /// First non-blank line of the raw message. Never empty.
    pub subject: String,
    /// Remaining message lines, re-joined.
    pub body: String,
    /// Commit timestamp.
    pub timestamp: DateTime<Utc>,
    /// Status from a bracket tag, or the configured default.
    pub status: Option<WorkStatus>,
    /// Minutes from a manual duration tag, if any.
    pub duration_minutes: Option<u32>,
    /// The manual duration token as written, if any.
    pub duration_raw: Option<String>,
    /// Category label; `"general"` when no category tag was present.
    pub category: String,
    /// Full message with all bracket tags stripped.
    pub clean_message: String,
}

/// The JSON listing shape handed to presentation:
/// `{ id, message, fullBody, date, parsedTime, parsedStatus, category }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalCommit {
    pub id: String,
    /// Cleaned subject line.
    pub message: String,
    /// Cleaned body text.
    pub full_body: String,
    pub date: DateTime<Utc>,
    /// The raw manual duration token, or absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parsed_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parsed_status: Option<WorkStatus>,
    pub category: String,
}

impl From<&CommitRecord> for JournalCommit {
    fn from(record: &CommitRecord) -> Self {
        // The clean message may have lost its first line entirely when the
        // subject was nothing but tags; skip leftover blank lines.
        let mut lines = record
            .clean_message
            .lines()
            .skip_while(|l| l.trim().is_empty());
        let message = lines.next().unwrap_or("").trim().to_string();
        let full_body = lines.collect::<Vec<_>>().join("\n").trim().to_string();

        Self {
            id: record.id.clone(),
            message,
            full_body,
            date: record.timestamp,
            parsed_time: record.duration_raw.clone(),
            parsed_status: record.status,
            category: record.category.clone(),
        }
    }
}

/// Builds commit records out of a raw delimited log stream.
///
/// Malformed fragments (wrong field count, empty hash or subject, bad date)
/// are dropped without aborting the rest of the stream. An empty stream
/// yields `Ok` with no records; a non-empty stream where *nothing* parses is
/// a [`RecordError::Malformed`], so callers can tell "no commits" from
/// "unreadable stream".
pub fn build_records(
    raw: &str,
    options: &RecordOptions,
) -> Result<Vec<CommitRecord>, RecordError> {
    let mut records = Vec::new();
    let mut fragments = 0usize;

    for fragment in raw.split(RECORD_SEPARATOR) {
        if fragment.trim().is_empty() {
            continue;
        }
        fragments += 1;

        if let Some(record) = parse_fragment(fragment, options) {
            records.push(record);
        } else {
            tracing::debug!(
                preview = fragment.chars().take(40).collect::<String>(),
                "skipping malformed commit fragment"
            );
        }
    }

    if fragments > 0 && records.is_empty() {
        return Err(RecordError::Malformed { fragments });
    }
    Ok(records)
}

/// Parses one fragment; `None` means the fragment is dropped.
fn parse_fragment(fragment: &str, options: &RecordOptions) -> Option<CommitRecord> {
    // splitn re-joins any `|||` occurring inside the message itself.
    let mut parts = fragment.splitn(3, FIELD_DELIMITER);
    let hash = parts.next()?.trim();
    let date = parts.next()?.trim();
    let message = parts.next()?;

    if hash.is_empty() {
        return None;
    }
    let timestamp = date.parse::<DateTime<Utc>>().ok()?;

    let mut lines = message.lines().skip_while(|l| l.trim().is_empty());
    let subject = lines.next()?.trim().to_string();
    if subject.is_empty() {
        return None;
    }
    let body = lines.collect::<Vec<_>>().join("\n").trim().to_string();

    // Tags anywhere in the message are honored, not just the subject line.
    let extraction = tag::extract(message);

    Some(CommitRecord {
        id: hash.to_string(),
        subject,
        body,
        timestamp,
        status: extraction.status.or(options.default_status),
        duration_minutes: extraction.duration_minutes,
        duration_raw: extraction.duration_raw,
        category: extraction
            .category
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        clean_message: extraction.clean_message,
    })
}
