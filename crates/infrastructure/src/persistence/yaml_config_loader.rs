//! YAML-backed config loader.
//!
//! Placeholder files are YAML documents shaped as
//! ```text
//! <section>:
//!   placeholders:
//!     <name>:
//!       <environment>:
//!         <variant>: <value>
//! ```
//! where any key may be `$default`.

use std::path::Path;

use async_trait::async_trait;
use placeholders_application::ports::{ConfigLoadError, ConfigLoader, FileSystem};
use placeholders_domain::PlaceholderNode;

use crate::serialization::document_from_yaml;

/// Loads placeholder files through a [`FileSystem`].
#[derive(Debug, Clone)]
pub struct YamlConfigLoader<F> {
    fs: F,
}

impl<F: FileSystem> YamlConfigLoader<F> {
    /// Creates a new YAML config loader.
    pub const fn new(fs: F) -> Self {
        Self { fs }
    }
}

#[async_trait]
impl<F: FileSystem> ConfigLoader for YamlConfigLoader<F> {
    async fn load_file(&self, path: &Path) -> Result<PlaceholderNode, ConfigLoadError> {
        if !self.fs.is_file(path).await {
            return Err(ConfigLoadError::Read {
                path: path.to_path_buf(),
                message: "not a file".to_string(),
            });
        }

        let content = self
            .fs
            .read_file_string(path)
            .await
            .map_err(|e| ConfigLoadError::Read {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let document = document_from_yaml(&content).map_err(|e| ConfigLoadError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        tracing::debug!(path = %path.display(), "placeholder file parsed");
        Ok(document)
    }
}
