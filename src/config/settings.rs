//! Application settings and paths.
//!
//! Manages XDG-compliant paths for configuration and data.

use crate::error::{ConfigError, ConfigResult};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Global paths singleton.
static PATHS: OnceLock<Paths> = OnceLock::new();

/// Application directory paths following XDG Base Directory Specification.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Configuration directory (~/.config/simak)
    pub config_dir: PathBuf,
    /// Data directory (~/.local/share/simak)
    pub data_dir: PathBuf,
}

impl Paths {
    /// Get the global paths instance.
    pub fn get() -> &'static Paths {
        PATHS.get_or_init(|| Self::new().expect("Failed to initialize paths"))
    }

    /// Initialize paths using XDG directories.
    fn new() -> ConfigResult<Self> {
        let project =
            ProjectDirs::from("dev", "simak", "simak").ok_or(ConfigError::DirectoryNotFound)?;

        let paths = Self {
            config_dir: project.config_dir().to_path_buf(),
            data_dir: project.data_dir().to_path_buf(),
        };

        // Ensure directories exist
        fs::create_dir_all(&paths.config_dir)?;
        fs::create_dir_all(&paths.data_dir)?;

        Ok(paths)
    }

    /// Get the path to the settings file.
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("settings.json")
    }
}

/// Application-wide settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Default output format for listings (plain, json, csv).
    pub default_output_format: String,
    /// Ask for confirmation before remove/reset. `--yes` overrides per call.
    pub confirm_destructive: bool,
    /// Directory for exported files. Defaults to the current directory.
    pub export_dir: Option<PathBuf>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            default_output_format: "plain".to_string(),
            confirm_destructive: true,
            export_dir: None,
        }
    }
}

impl AppSettings {
    /// Load settings from the default location.
    pub fn load() -> ConfigResult<Self> {
        let paths = Paths::get();
        let file = paths.settings_file();

        if !file.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&file).map_err(|e| ConfigError::ReadFailed {
            path: file.clone(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| ConfigError::InvalidFormat(e.to_string()))
    }

    /// Load settings from a specific file.
    pub fn load_from(path: &PathBuf) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.clone(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| ConfigError::InvalidFormat(e.to_string()))
    }

    /// Save settings to the default location.
    pub fn save(&self) -> ConfigResult<()> {
        let paths = Paths::get();
        let file = paths.settings_file();

        let content = serde_json::to_string_pretty(self)?;
        fs::write(&file, content).map_err(|e| ConfigError::WriteFailed {
            path: file,
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.default_output_format, "plain");
        assert!(settings.confirm_destructive);
        assert!(settings.export_dir.is_none());
    }

    #[test]
    fn test_settings_serialization() {
        let settings = AppSettings::default();
        let json = serde_json::to_string(&settings).unwrap();
        let parsed: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.default_output_format, settings.default_output_format);
    }

    #[test]
    fn test_unknown_fields_fall_back_to_defaults() {
        let parsed: AppSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.default_output_format, "plain");
    }
}
