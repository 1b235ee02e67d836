//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Work journal generator for git repositories.
///
/// Derives structured work-log entries from commit messages: bracket tags
/// for status, duration and category, reconciled with timestamp deltas and
/// locally stored edits.
#[derive(Debug, Parser)]
#[command(name = "gj", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List parsed commits with their extracted tags.
    Log {
        /// Path to the repository.
        #[arg(long, default_value = ".")]
        repo: PathBuf,

        /// Only read the N most recent commits.
        #[arg(long)]
        limit: Option<usize>,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show resolved journal entries, merging stored edits and computed
    /// durations.
    Journal {
        /// Path to the repository.
        #[arg(long, default_value = ".")]
        repo: PathBuf,

        /// Only read the N most recent commits.
        #[arg(long)]
        limit: Option<usize>,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Store a manual edit for a commit.
    Edit {
        /// The commit hash the edit applies to.
        commit: String,

        /// Replacement display message.
        #[arg(long)]
        message: Option<String>,

        /// Replacement duration in minutes.
        #[arg(long)]
        minutes: Option<u32>,
    },

    /// Remove the stored edit for a commit.
    Unedit {
        /// The commit hash.
        commit: String,
    },

    /// List stored edits.
    Edits {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },
}
