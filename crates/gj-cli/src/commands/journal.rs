//! Implementation of the `gj journal` command.
//!
//! Full pipeline: commit log → parsed records → reconciliation against the
//! stored edits. Prints resolved entries with final durations and messages.

use std::io::{Write, stdout};
use std::path::Path;

use anyhow::{Context, Result};

use gj_core::{RecordOptions, build_records, format_minutes, resolve};
use gj_store::EditStore;

use crate::Config;
use crate::git;

pub fn run(repo: &Path, limit: Option<usize>, json: bool, config: &Config) -> Result<()> {
    let raw = git::read_log(repo, limit)?;

    let options = RecordOptions {
        default_status: Some(config.default_status),
    };
    let mut records = build_records(&raw, &options).context("failed to parse commit log")?;
    records.sort_by_key(|r| r.timestamp);

    let store = EditStore::load(&config.edits_path)
        .with_context(|| format!("failed to load edits from {}", config.edits_path.display()))?;
    tracing::debug!(
        commits = records.len(),
        edits = store.len(),
        "resolving journal entries"
    );

    let entries = resolve(&records, store.overrides());

    if json {
        let out = stdout();
        let mut writer = out.lock();
        serde_json::to_writer_pretty(&mut writer, &entries)?;
        writeln!(writer)?;
        return Ok(());
    }

    // resolve returns entries in chronological order, matching the sorted
    // records, so the two line up index by index.
    for (record, entry) in records.iter().zip(&entries) {
        let status = entry
            .status
            .map_or_else(|| "-".to_string(), |s| s.to_string());
        let subject = entry.display_message.lines().next().unwrap_or("");
        println!(
            "{}  {}  {:>7}  [{}] ({}) {}",
            &record.id[..7.min(record.id.len())],
            record.timestamp.format("%Y-%m-%d %H:%M"),
            format_minutes(entry.display_duration_minutes),
            status,
            entry.category,
            subject,
        );
    }

    let total: u32 = entries
        .iter()
        .map(|e| e.display_duration_minutes)
        .fold(0, u32::saturating_add);
    println!("\nTotal: {} across {} commits", format_minutes(total), entries.len());

    Ok(())
}
