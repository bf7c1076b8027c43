//! Extension Settings Domain Model
//!
//! Defines which placeholder files back each config key, and the default
//! environment of a run.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigMapping, resolve_relative};

/// One or several files backing a config key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SourcePaths {
    /// A single file.
    One(PathBuf),
    /// Several files, merged in order.
    Many(Vec<PathBuf>),
}

impl SourcePaths {
    /// Returns the paths as a slice, in merge order.
    #[must_use]
    pub fn as_slice(&self) -> &[PathBuf] {
        match self {
            Self::One(path) => std::slice::from_ref(path),
            Self::Many(paths) => paths,
        }
    }
}

/// Settings for a placeholder-enabled test run.
///
/// ```yaml
/// config_tags:
///   login: features/login.yml
///   checkout: [base.yml, overrides.yml]
/// environment: qa
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionSettings {
    /// Files backing each config key.
    #[serde(default)]
    pub config_tags: IndexMap<String, SourcePaths>,

    /// Environment to use when none is given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
}

impl ExtensionSettings {
    /// Builds the config mapping, resolving relative paths against `base_dir`.
    #[must_use]
    pub fn config_mapping(&self, base_dir: &Path) -> ConfigMapping {
        let mut mapping = ConfigMapping::new();
        for (key, paths) in &self.config_tags {
            let resolved = paths
                .as_slice()
                .iter()
                .map(|p| resolve_relative(base_dir, p))
                .collect();
            mapping.insert(key.clone(), resolved);
        }
        mapping
    }
}
