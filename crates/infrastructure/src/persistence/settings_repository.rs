//! Extension settings persistence.
//!
//! Reads the YAML settings file that maps config keys to placeholder files.
//! Relative file paths are resolved against the settings file's directory.

use std::path::{Path, PathBuf};

use placeholders_domain::{ConfigMapping, ExtensionSettings};
use tokio::fs;

use crate::serialization::{SerializationError, from_yaml};

/// Error type for settings operations.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The settings file could not be read.
    #[error("Failed to read settings {path}: {source}")]
    Io {
        /// The settings file.
        path: PathBuf,
        /// The underlying error.
        source: std::io::Error,
    },

    /// The settings file is not valid.
    #[error("Invalid settings {path}: {source}")]
    Serialization {
        /// The settings file.
        path: PathBuf,
        /// The underlying error.
        source: SerializationError,
    },
}

/// Loaded settings together with the directory they were read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedSettings {
    /// Parsed settings.
    pub settings: ExtensionSettings,
    /// Directory relative file paths are resolved against.
    pub base_dir: PathBuf,
}

impl LoadedSettings {
    /// Returns the config mapping with absolute file paths.
    #[must_use]
    pub fn config_mapping(&self) -> ConfigMapping {
        self.settings.config_mapping(&self.base_dir)
    }
}

/// Repository for extension settings.
#[derive(Debug, Clone, Default)]
pub struct SettingsRepository;

impl SettingsRepository {
    /// Creates a new settings repository.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Loads settings from `path`.
    ///
    /// An empty file yields default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub async fn load(&self, path: &Path) -> Result<LoadedSettings, SettingsError> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|source| SettingsError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        let settings = if content.trim().is_empty() {
            ExtensionSettings::default()
        } else {
            from_yaml(&content).map_err(|source| SettingsError::Serialization {
                path: path.to_path_buf(),
                source,
            })?
        };

        let base_dir = path
            .parent()
            .map_or_else(PathBuf::new, Path::to_path_buf);

        tracing::debug!(
            path = %path.display(),
            config_keys = settings.config_tags.len(),
            "settings loaded"
        );
        Ok(LoadedSettings { settings, base_dir })
    }
}
