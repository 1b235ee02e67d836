//! Implementation of the `gj edits` command: list stored overrides.

use std::io::{Write, stdout};

use anyhow::{Context, Result};

use gj_store::EditStore;

use crate::Config;

pub fn run(config: &Config, json: bool) -> Result<()> {
    let store = EditStore::load(&config.edits_path)
        .with_context(|| format!("failed to load edits from {}", config.edits_path.display()))?;

    if json {
        let out = stdout();
        let mut writer = out.lock();
        serde_json::to_writer_pretty(&mut writer, store.overrides())?;
        writeln!(writer)?;
        return Ok(());
    }

    if store.is_empty() {
        println!("No stored edits");
        return Ok(());
    }

    let mut ids: Vec<&String> = store.overrides().keys().collect();
    ids.sort();
    for id in ids {
        let edit = &store.overrides()[id];
        let duration = edit
            .duration
            .map_or_else(|| "-".to_string(), |m| format!("{m}m"));
        let message = edit.message.as_deref().unwrap_or("-");
        println!("{id}  {duration:>6}  {message}");
    }

    Ok(())
}
