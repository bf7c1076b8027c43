//! Config loading port
//!
//! Defines how placeholder files become config entries.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use placeholders_domain::{ConfigEntry, PlaceholderNode};

/// Errors that can occur while loading placeholder files.
#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    /// A config key was mapped to no files at all.
    #[error("Config '{0}' has no files mapped to it")]
    NoFiles(String),

    /// A file could not be read.
    #[error("Failed to read {path}: {message}")]
    Read {
        /// The file being read.
        path: PathBuf,
        /// The underlying error.
        message: String,
    },

    /// A file could not be parsed.
    #[error("Failed to parse {path}: {message}")]
    Parse {
        /// The file being parsed.
        path: PathBuf,
        /// The underlying error.
        message: String,
    },
}

/// Loads and deep-merges placeholder files.
#[async_trait]
pub trait ConfigLoader: Send + Sync {
    /// Loads a single placeholder file as a document tree.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    async fn load_file(&self, path: &Path) -> Result<PlaceholderNode, ConfigLoadError>;

    /// Loads every file in `paths` and deep-merges them in order.
    ///
    /// Later files override earlier ones at conflicting keys. The entry
    /// records all source paths.
    ///
    /// # Errors
    /// Returns the first read or parse failure.
    async fn load_entry(
        &self,
        key: &str,
        paths: &[PathBuf],
    ) -> Result<ConfigEntry, ConfigLoadError> {
        if paths.is_empty() {
            return Err(ConfigLoadError::NoFiles(key.to_string()));
        }

        let mut document = PlaceholderNode::empty_map();
        for path in paths {
            document.merge(self.load_file(path).await?);
        }

        Ok(ConfigEntry::new(document, paths.to_vec()))
    }
}
