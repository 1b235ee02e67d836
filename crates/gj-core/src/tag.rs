//! Bracket tag extraction from commit messages.
//!
//! Authors can embed tags anywhere in a commit message:
//! `[DONE] [1h30] [cicd] Update the pipeline`. A single left-to-right scan
//! classifies each bracket span against [`TagKind`] and strips it from the
//! message. This replaces ordered regex stripping: every span is visited
//! exactly once, so tags cannot shadow each other depending on match order.
//!
//! Chosen stripping behavior: every bracket span is removed from the clean
//! message, whether or not it was recognized as status or duration.
//! Unrecognized spans are classified as category labels, the last one wins.

use crate::duration::{is_duration_token, parse_minutes};
use crate::status::WorkStatus;

/// Classification of a bracket span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Status,
    Duration,
    Category,
}

/// A single classified bracket tag. Transient output of extraction,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub kind: TagKind,
    /// The text between the brackets, as written.
    pub raw: String,
}

/// Result of running tag extraction over a message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// The message with all bracket spans stripped and surrounding
    /// whitespace trimmed.
    pub clean_message: String,
    /// First status tag encountered, if any.
    pub status: Option<WorkStatus>,
    /// Resolved minutes from the first duration tag, if any.
    pub duration_minutes: Option<u32>,
    /// The raw token of the first duration tag, as written (e.g. `"1h30"`).
    pub duration_raw: Option<String>,
    /// Last category tag encountered, lower-cased, if any.
    pub category: Option<String>,
    /// Every classified tag in scan order.
    pub tags: Vec<Tag>,
}

/// Extracts bracket tags from a commit message.
///
/// The scan visits bracket spans left to right. The first span whose body is
/// a status keyword becomes the status; the first remaining span matching the
/// duration grammar becomes the duration; everything else is a category
/// label (last wins). An unterminated `[` is plain text.
///
/// Idempotent on already-clean text: a message without bracket spans comes
/// back trimmed but otherwise unchanged.
#[must_use]
pub fn extract(message: &str) -> Extraction {
    let mut out = Extraction::default();
    let mut clean = String::with_capacity(message.len());
    let mut rest = message;

    while let Some(open) = rest.find('[') {
        let Some(close) = rest[open..].find(']') else {
            // No closing bracket: the remainder is plain text.
            break;
        };
        clean.push_str(&rest[..open]);
        let body = &rest[open + 1..open + close];
        classify(body, &mut out);
        rest = &rest[open + close + 1..];
    }
    clean.push_str(rest);

    out.clean_message = clean.trim().to_string();
    out
}

/// Classifies one bracket span body and records it on the extraction.
fn classify(body: &str, out: &mut Extraction) {
    if out.status.is_none() {
        if let Ok(status) = body.parse::<WorkStatus>() {
            out.status = Some(status);
            out.tags.push(Tag {
                kind: TagKind::Status,
                raw: body.to_string(),
            });
            return;
        }
    }

    if out.duration_minutes.is_none() && is_duration_token(body) {
        out.duration_minutes = Some(parse_minutes(body));
        out.duration_raw = Some(body.trim().to_string());
        out.tags.push(Tag {
            kind: TagKind::Duration,
            raw: body.to_string(),
        });
        return;
    }

    // Everything else is a category label; the last one encountered wins.
    // Empty spans are stripped but produce no category.
    let label = body.trim();
    if !label.is_empty() {
        out.category = Some(label.to_lowercase());
    }
    out.tags.push(Tag {
        kind: TagKind::Category,
        raw: body.to_string(),
    });
}
