//! Implementation of the `gj log` command.
//!
//! Reads the commit log, parses bracket tags, and prints the commit listing
//! in chronological order, either human-readable or as JSON.

use std::io::{Write, stdout};
use std::path::Path;

use anyhow::{Context, Result};

use gj_core::{JournalCommit, RecordOptions, build_records};

use crate::Config;
use crate::git;

pub fn run(repo: &Path, limit: Option<usize>, json: bool, config: &Config) -> Result<()> {
    let raw = git::read_log(repo, limit)?;

    let options = RecordOptions {
        default_status: Some(config.default_status),
    };
    let mut records = build_records(&raw, &options).context("failed to parse commit log")?;
    records.sort_by_key(|r| r.timestamp);

    let listing: Vec<JournalCommit> = records.iter().map(JournalCommit::from).collect();
    tracing::debug!(commits = listing.len(), "parsed commit log");

    if json {
        let out = stdout();
        let mut writer = out.lock();
        serde_json::to_writer_pretty(&mut writer, &listing)?;
        writeln!(writer)?;
        return Ok(());
    }

    for commit in &listing {
        let status = commit
            .parsed_status
            .map_or_else(|| "-".to_string(), |s| s.to_string());
        println!(
            "{}  {}  [{}] ({}) {}",
            short_id(&commit.id),
            commit.date.format("%Y-%m-%d %H:%M"),
            status,
            commit.category,
            commit.message,
        );
    }

    Ok(())
}

/// First 7 characters of a commit hash, for compact display.
fn short_id(id: &str) -> &str {
    &id[..7.min(id.len())]
}
