//! Load config store use case

use placeholders_domain::{ConfigMapping, ConfigStore};

use crate::ports::{ConfigLoadError, ConfigLoader};

/// Errors that can occur when building the config store.
#[derive(Debug, thiserror::Error)]
pub enum LoadConfigStoreError {
    /// A config key was mapped to no files.
    #[error("Config '{0}' has no files mapped to it")]
    NoFiles(String),

    /// Failed to read a placeholder file.
    #[error("Failed to read placeholder file for '{key}': {message}")]
    IoError {
        /// The config key being loaded.
        key: String,
        /// The underlying error.
        message: String,
    },

    /// Failed to parse a placeholder file.
    #[error("Failed to parse placeholder file for '{key}': {message}")]
    ParseError {
        /// The config key being loaded.
        key: String,
        /// The underlying error.
        message: String,
    },
}

impl LoadConfigStoreError {
    fn from_load(key: &str, error: ConfigLoadError) -> Self {
        let message = error.to_string();
        match error {
            ConfigLoadError::NoFiles(_) => Self::NoFiles(key.to_string()),
            ConfigLoadError::Read { .. } => Self::IoError {
                key: key.to_string(),
                message,
            },
            ConfigLoadError::Parse { .. } => Self::ParseError {
                key: key.to_string(),
                message,
            },
        }
    }
}

/// Loads every config key of a mapping into an immutable store.
pub struct LoadConfigStore<L> {
    loader: L,
}

impl<L: ConfigLoader> LoadConfigStore<L> {
    /// Creates a new `LoadConfigStore` use case.
    pub const fn new(loader: L) -> Self {
        Self { loader }
    }

    /// Executes the use case.
    ///
    /// # Arguments
    /// * `mapping` - Config keys and the files backing each of them
    ///
    /// # Errors
    /// Any unreadable or unparsable file aborts the whole load.
    pub async fn execute(
        &self,
        mapping: &ConfigMapping,
    ) -> Result<ConfigStore, LoadConfigStoreError> {
        let mut store = ConfigStore::new();

        for (key, paths) in mapping.iter() {
            let entry = self
                .loader
                .load_entry(key, paths)
                .await
                .map_err(|e| LoadConfigStoreError::from_load(key, e))?;

            tracing::debug!(config_key = key, files = paths.len(), "config loaded");
            store.insert(key, entry);
        }

        Ok(store)
    }
}
