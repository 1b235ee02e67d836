//! The log-source collaborator: reads commit history via a `git log`
//! subprocess.
//!
//! The output format matches what the engine's record builder expects:
//! commits NUL-separated (`-z`), fields within a commit separated by `|||`
//! in the order hash, strict-ISO author date, full message.

use std::path::Path;
use std::process::Command;

use thiserror::Error;

/// Pretty format handed to `git log`. `%B` is the raw message body, which
/// may contain newlines and pipes; the NUL separator from `-z` keeps
/// commits apart regardless.
const LOG_FORMAT: &str = "%H|||%aI|||%B";

/// Errors from reading the commit log. Distinct from an empty history:
/// a repository with zero commits is not an error here.
#[derive(Debug, Error)]
pub enum LogSourceError {
    /// The path is not inside a git repository.
    #[error("not a git repository: {path}")]
    NotARepository { path: String },

    /// `git log` exited unsuccessfully for another reason.
    #[error("git log failed: {stderr}")]
    CommandFailed { stderr: String },

    /// The git binary could not be spawned at all.
    #[error("failed to run git: {0}")]
    Spawn(#[source] std::io::Error),

    /// The log output was not valid UTF-8.
    #[error("git log produced non-UTF-8 output")]
    InvalidUtf8,
}

/// Reads the raw delimited log stream for a repository.
///
/// Returns the stream as-is; parsing it into records belongs to the engine.
pub fn read_log(repo: &Path, limit: Option<usize>) -> Result<String, LogSourceError> {
    let mut command = Command::new("git");
    command
        .arg("-C")
        .arg(repo)
        .arg("log")
        .arg("-z")
        .arg(format!("--pretty=format:{LOG_FORMAT}"));
    if let Some(limit) = limit {
        command.arg(format!("-n{limit}"));
    }

    let output = command.output().map_err(LogSourceError::Spawn)?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if stderr.contains("not a git repository") {
            return Err(LogSourceError::NotARepository {
                path: repo.display().to_string(),
            });
        }
        // A repository with no commits yet reports a missing HEAD; treat it
        // as empty history rather than a failure.
        if stderr.contains("does not have any commits yet") {
            return Ok(String::new());
        }
        return Err(LogSourceError::CommandFailed { stderr });
    }

    String::from_utf8(output.stdout).map_err(|_| LogSourceError::InvalidUtf8)
}
