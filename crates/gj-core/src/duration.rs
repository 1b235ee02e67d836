//! Free-form duration parsing and formatting.
//!
//! A duration token is what an author writes inside a bracket tag: `"90"`,
//! `"1h"`, `"1h30"`, `"1h30m"` or `"45m"`. Parsing is a total function;
//! anything outside the grammar resolves to zero minutes.

/// Returns true if `text` matches the duration grammar:
/// digits, digits+`h`, digits+`h`+digits(+optional `m`), or digits+`m`.
///
/// Case-insensitive; surrounding whitespace is ignored. Used by tag
/// classification to tell a duration tag apart from a category tag.
#[must_use]
pub fn is_duration_token(text: &str) -> bool {
    let s = text.trim().to_ascii_lowercase();
    if s.is_empty() {
        return false;
    }

    if s.chars().all(|c| c.is_ascii_digit()) {
        return true;
    }

    if let Some((hours, rest)) = s.split_once('h') {
        if hours.is_empty() || !hours.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }
        if rest.is_empty() {
            return true;
        }
        let minutes = rest.strip_suffix('m').unwrap_or(rest);
        return !minutes.is_empty() && minutes.chars().all(|c| c.is_ascii_digit());
    }

    if let Some(minutes) = s.strip_suffix('m') {
        return !minutes.is_empty() && minutes.chars().all(|c| c.is_ascii_digit());
    }

    false
}

/// Parses a duration token into minutes.
///
/// Total function: input outside the grammar yields 0, never an error.
#[must_use]
pub fn parse_minutes(text: &str) -> u32 {
    let s = text.trim().to_ascii_lowercase();
    if !is_duration_token(&s) {
        return 0;
    }

    // Pure digit string: interpreted directly as minutes.
    if s.chars().all(|c| c.is_ascii_digit()) {
        return s.parse().unwrap_or(0);
    }

    if let Some((hours, rest)) = s.split_once('h') {
        let hours: u32 = hours.parse().unwrap_or(0);
        let minutes: u32 = if rest.is_empty() {
            0
        } else {
            let rest = rest.strip_suffix('m').unwrap_or(rest);
            rest.parse().unwrap_or(0)
        };
        return hours.saturating_mul(60).saturating_add(minutes);
    }

    // Remaining shape is digits+`m`.
    s.strip_suffix('m').and_then(|m| m.parse().ok()).unwrap_or(0)
}

/// Formats a minute count for display: `"Xh Ym"` if at least an hour,
/// otherwise `"Xm"`.
#[must_use]
pub fn format_minutes(minutes: u32) -> String {
    let hours = minutes / 60;
    let rest = minutes % 60;
    if hours >= 1 {
        format!("{hours}h {rest}m")
    } else {
        format!("{rest}m")
    }
}
