//! Loaded placeholder configuration
//!
//! A [`ConfigStore`] holds one [`ConfigEntry`] per config key. Each entry is
//! the deep merge of every file mapped to that key, plus the source paths
//! for diagnostics. Entries are immutable once built.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Serialize;

use crate::placeholder::{PLACEHOLDERS_KEY, PlaceholderNode};

/// Maps each config key to the files defining it, in merge order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigMapping {
    entries: IndexMap<String, Vec<PathBuf>>,
}

impl ConfigMapping {
    /// Creates an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps `key` to `paths`, replacing any previous mapping.
    pub fn insert(&mut self, key: impl Into<String>, paths: Vec<PathBuf>) {
        self.entries.insert(key.into(), paths);
    }

    /// Builder-style variant of [`ConfigMapping::insert`].
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, paths: Vec<PathBuf>) -> Self {
        self.insert(key, paths);
        self
    }

    /// Iterates over `(key, paths)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[PathBuf])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Returns the number of config keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no config keys are mapped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The merged document for one config key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigEntry {
    document: PlaceholderNode,
    source_paths: Vec<PathBuf>,
}

impl ConfigEntry {
    /// Creates an entry from an already merged document.
    #[must_use]
    pub const fn new(document: PlaceholderNode, source_paths: Vec<PathBuf>) -> Self {
        Self {
            document,
            source_paths,
        }
    }

    /// Returns the merged document.
    #[must_use]
    pub const fn document(&self) -> &PlaceholderNode {
        &self.document
    }

    /// Returns the files this entry was merged from, in merge order.
    #[must_use]
    pub fn source_paths(&self) -> &[PathBuf] {
        &self.source_paths
    }

    /// Returns the placeholder definitions of `section`.
    ///
    /// `None` when the section does not exist. A section without a
    /// `placeholders` key yields an empty tree.
    #[must_use]
    pub fn section_placeholders(&self, section: &str) -> Option<&PlaceholderNode> {
        static EMPTY: PlaceholderNode = PlaceholderNode::Value(String::new());

        let section = self.document.get(section)?;
        Some(section.get(PLACEHOLDERS_KEY).unwrap_or(&EMPTY))
    }
}

/// Joins paths with `,`.
#[must_use]
pub fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// All loaded config entries, keyed by config key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConfigStore {
    entries: IndexMap<String, ConfigEntry>,
}

impl ConfigStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry, replacing any entry with the same key.
    pub fn insert(&mut self, key: impl Into<String>, entry: ConfigEntry) {
        self.entries.insert(key.into(), entry);
    }

    /// Builder-style variant of [`ConfigStore::insert`].
    #[must_use]
    pub fn with_entry(mut self, key: impl Into<String>, entry: ConfigEntry) -> Self {
        self.insert(key, entry);
        self
    }

    /// Returns the entry for `key`.
    #[must_use]
    pub fn entry(&self, key: &str) -> Option<&ConfigEntry> {
        self.entries.get(key)
    }

    /// Returns the configured config keys, in load order.
    #[must_use]
    pub fn tags(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no entries are loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolves `path` against `base` unless it is already absolute.
#[must_use]
pub fn resolve_relative(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
