//! Duration and message reconciliation.
//!
//! Combines three sources into final display values, per entry:
//! the commit's own bracket tags, stored edit overrides, and a baseline
//! duration computed from the time elapsed since the previous commit.
//!
//! Duration precedence, highest first: manual tag, stored override,
//! computed baseline. Message precedence: stored override, clean message.
//! Status and category always come from the parsed record; overrides do
//! not carry them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::record::CommitRecord;
use crate::status::WorkStatus;

/// A user edit stored out of band, keyed by commit id. The engine only
/// reads these; persistence belongs to the edit store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditOverride {
    /// Replacement display message, if the user edited it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Replacement duration in minutes, if the user edited it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
}

impl EditOverride {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.message.is_none() && self.duration.is_none()
    }
}

/// The value delivered to presentation. Computed, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedEntry {
    pub id: String,
    pub display_message: String,
    pub display_duration_minutes: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<WorkStatus>,
    pub category: String,
}

/// Resolves final display values for a sequence of commit records.
///
/// Records are processed in chronological order (sorted here, so callers
/// may pass them in any order). The baseline duration of a commit is the
/// minute delta to the immediately preceding commit, clamped to zero;
/// the earliest commit has no predecessor and a baseline of zero.
#[must_use]
pub fn resolve(
    records: &[CommitRecord],
    edits: &HashMap<String, EditOverride>,
) -> Vec<ResolvedEntry> {
    let mut ordered: Vec<&CommitRecord> = records.iter().collect();
    ordered.sort_by_key(|r| r.timestamp);

    let mut entries = Vec::with_capacity(ordered.len());
    let mut previous: Option<&CommitRecord> = None;

    for record in ordered {
        let baseline = previous.map_or(0, |prev| baseline_minutes(prev, record));
        let edit = edits.get(&record.id);

        let duration = record
            .duration_minutes
            .or_else(|| edit.and_then(|e| e.duration))
            .unwrap_or(baseline);

        let message = edit
            .and_then(|e| e.message.clone())
            .unwrap_or_else(|| record.clean_message.clone());

        entries.push(ResolvedEntry {
            id: record.id.clone(),
            display_message: message,
            display_duration_minutes: duration,
            status: record.status,
            category: record.category.clone(),
        });
        previous = Some(record);
    }

    entries
}

/// Minute delta between consecutive commits, clamped to zero when the
/// clock order is inverted.
fn baseline_minutes(previous: &CommitRecord, current: &CommitRecord) -> u32 {
    let minutes = (current.timestamp - previous.timestamp).num_minutes();
    u32::try_from(minutes.max(0)).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn record(id: &str, timestamp: &str, duration_minutes: Option<u32>) -> CommitRecord {
        CommitRecord {
            id: id.to_string(),
            subject: format!("Commit {id}"),
            body: String::new(),
            timestamp: timestamp.parse::<DateTime<Utc>>().expect("valid timestamp"),
            status: Some(WorkStatus::Done),
            duration_minutes,
            duration_raw: duration_minutes.map(|m| m.to_string()),
            category: "general".to_string(),
            clean_message: format!("Commit {id}"),
        }
    }

    fn edit(message: Option<&str>, duration: Option<u32>) -> EditOverride {
        EditOverride {
            message: message.map(String::from),
            duration,
        }
    }

    #[test]
    fn manual_tag_beats_override_beats_baseline() {
        // Baseline would be 60 minutes, the override says 45, the tag says 30.
        let records = vec![
            record("first", "2023-10-10T09:00:00Z", None),
            record("second", "2023-10-10T10:00:00Z", Some(30)),
        ];
        let edits = HashMap::from([("second".to_string(), edit(None, Some(45)))]);

        let entries = resolve(&records, &edits);
        assert_eq!(entries[1].display_duration_minutes, 30);
    }

    #[test]
    fn override_beats_baseline() {
        let records = vec![
            record("first", "2023-10-10T09:00:00Z", None),
            record("second", "2023-10-10T10:00:00Z", None),
        ];
        let edits = HashMap::from([("second".to_string(), edit(None, Some(45)))]);

        let entries = resolve(&records, &edits);
        assert_eq!(entries[1].display_duration_minutes, 45);
    }

    #[test]
    fn baseline_from_timestamp_delta() {
        let records = vec![
            record("first", "2023-10-10T09:00:00Z", None),
            record("second", "2023-10-10T10:30:00Z", None),
        ];

        let entries = resolve(&records, &HashMap::new());
        assert_eq!(entries[0].display_duration_minutes, 0);
        assert_eq!(entries[1].display_duration_minutes, 90);
    }

    #[test]
    fn inverted_clock_clamps_to_zero() {
        // Same chronological order after sorting, but identical timestamps
        // plus an out-of-order input exercise the clamp.
        let records = vec![
            record("late", "2023-10-10T10:00:00Z", None),
            record("early", "2023-10-10T09:00:00Z", None),
            record("same", "2023-10-10T10:00:00Z", None),
        ];

        let entries = resolve(&records, &HashMap::new());
        // Sorted: early (0), then late/same at the same instant.
        assert_eq!(entries[0].id, "early");
        assert_eq!(entries[0].display_duration_minutes, 0);
        assert_eq!(entries[1].display_duration_minutes, 60);
        assert_eq!(entries[2].display_duration_minutes, 0);
    }

    #[test]
    fn message_override_wins() {
        let records = vec![record("a", "2023-10-10T09:00:00Z", None)];
        let edits = HashMap::from([("a".to_string(), edit(Some("Edited message"), None))]);

        let entries = resolve(&records, &edits);
        assert_eq!(entries[0].display_message, "Edited message");
    }

    #[test]
    fn clean_message_without_override() {
        let records = vec![record("a", "2023-10-10T09:00:00Z", None)];
        let entries = resolve(&records, &HashMap::new());
        assert_eq!(entries[0].display_message, "Commit a");
    }

    #[test]
    fn status_and_category_come_from_record_only() {
        let records = vec![record("a", "2023-10-10T09:00:00Z", None)];
        let edits = HashMap::from([("a".to_string(), edit(Some("Edited"), Some(10)))]);

        let entries = resolve(&records, &edits);
        assert_eq!(entries[0].status, Some(WorkStatus::Done));
        assert_eq!(entries[0].category, "general");
    }

    #[test]
    fn overrides_for_unknown_commits_are_ignored() {
        let records = vec![record("a", "2023-10-10T09:00:00Z", None)];
        let edits = HashMap::from([("ghost".to_string(), edit(None, Some(999)))]);

        let entries = resolve(&records, &edits);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].display_duration_minutes, 0);
    }

    #[test]
    fn empty_input_resolves_to_empty() {
        assert!(resolve(&[], &HashMap::new()).is_empty());
    }

    #[test]
    fn edit_override_serde_shape() {
        let json = r#"{"message":"Test","duration":60}"#;
        let parsed: EditOverride = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.message.as_deref(), Some("Test"));
        assert_eq!(parsed.duration, Some(60));

        // Partial edits are valid.
        let partial: EditOverride = serde_json::from_str(r#"{"duration":15}"#).unwrap();
        assert_eq!(partial.message, None);
        assert_eq!(partial.duration, Some(15));
    }

    #[test]
    fn resolved_entry_serializes_camel_case() {
        let records = vec![record("a", "2023-10-10T09:00:00Z", Some(30))];
        let entries = resolve(&records, &HashMap::new());
        let json = serde_json::to_value(&entries[0]).unwrap();
        assert_eq!(json["displayMessage"], "Commit a");
        assert_eq!(json["displayDurationMinutes"], 30);
        assert_eq!(json["status"], "DONE");
    }
}
