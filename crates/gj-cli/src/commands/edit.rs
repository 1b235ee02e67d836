//! Implementation of `gj edit` and `gj unedit`.
//!
//! Edits go through the store's write queue. For a one-shot CLI invocation
//! the queue is flushed immediately; the debounce interval matters for
//! long-lived callers that stage many edits in a row.

use anyhow::{Context, Result, bail};
use chrono::Utc;

use gj_core::EditOverride;
use gj_store::{EditStore, WriteQueue};

use crate::Config;

pub fn run(
    config: &Config,
    commit: &str,
    message: Option<String>,
    minutes: Option<u32>,
) -> Result<()> {
    if message.is_none() && minutes.is_none() {
        bail!("nothing to store: pass --message and/or --minutes");
    }

    let store = load_store(config)?;

    // Merge with any existing override so a message edit does not wipe an
    // earlier duration edit, and vice versa.
    let mut edit = store.get(commit).cloned().unwrap_or_else(EditOverride::default);
    if message.is_some() {
        edit.message = message;
    }
    if minutes.is_some() {
        edit.duration = minutes;
    }

    let mut queue = WriteQueue::new(store, chrono::Duration::zero());
    queue.stage(commit, edit, Utc::now());
    queue.flush().context("failed to write edit store")?;

    println!("Stored edit for {commit}");
    Ok(())
}

pub fn run_unedit(config: &Config, commit: &str) -> Result<()> {
    let store = load_store(config)?;
    let mut queue = WriteQueue::new(store, chrono::Duration::zero());

    if queue.stage_removal(commit, Utc::now()) {
        queue.flush().context("failed to write edit store")?;
        println!("Removed edit for {commit}");
    } else {
        println!("No stored edit for {commit}");
    }
    Ok(())
}

fn load_store(config: &Config) -> Result<EditStore> {
    EditStore::load(&config.edits_path)
        .with_context(|| format!("failed to load edits from {}", config.edits_path.display()))
}
