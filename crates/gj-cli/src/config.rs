//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use gj_core::WorkStatus;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the edit store file.
    pub edits_path: PathBuf,

    /// Status assigned to commits whose message carries no status tag.
    pub default_status: WorkStatus,
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = dirs_data_path().unwrap_or_else(|| PathBuf::from("."));
        Self {
            edits_path: data_dir.join("edits.json"),
            default_status: WorkStatus::Done,
        }
    }
}

impl Config {
    /// Loads configuration from default locations.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load() -> Result<Self, figment::Error> {
        Self::load_from(None)
    }

    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (GJ_*)
        figment = figment.merge(Env::prefixed("GJ_"));

        figment.extract()
    }
}

/// Returns the platform-specific config directory for gj.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("gitjournal"))
}

/// Returns the platform-specific data directory for gj.
///
/// On Linux: `~/.local/share/gitjournal`
pub fn dirs_data_path() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join("gitjournal"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dirs_data_path_returns_some() {
        assert!(dirs_data_path().is_some());
    }

    #[test]
    fn test_dirs_data_path_ends_with_gitjournal() {
        let path = dirs_data_path().unwrap();
        assert_eq!(path.file_name().unwrap(), "gitjournal");
    }

    #[test]
    fn test_default_config_uses_data_dir_for_edits() {
        let config = Config::default();
        let data_dir = dirs_data_path().unwrap();
        assert_eq!(config.edits_path, data_dir.join("edits.json"));
    }

    #[test]
    fn test_default_status_is_done() {
        assert_eq!(Config::default().default_status, WorkStatus::Done);
    }
}
