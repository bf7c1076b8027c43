//! Placeholder definition trees
//!
//! Definitions are nested mappings keyed, from outermost to innermost, by
//! `placeholder name -> environment -> variant -> value`. Any level may hold
//! the [`DEFAULT_KEY`] wildcard instead of a concrete key.

use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Reserved wildcard key, consulted when an exact key is absent or empty.
pub const DEFAULT_KEY: &str = "$default";

/// Key under a config section holding its placeholder definitions.
pub const PLACEHOLDERS_KEY: &str = "placeholders";

/// A node in a placeholder definition tree.
///
/// Leaves are text. YAML `null` and empty strings are both stored as an empty
/// value and count as "not defined" during lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlaceholderNode {
    /// A scalar leaf value.
    Value(String),
    /// A nested mapping, in declaration order.
    Map(PlaceholderTree),
}

/// Ordered mapping of keys to child nodes.
pub type PlaceholderTree = IndexMap<String, PlaceholderNode>;

impl PlaceholderNode {
    /// Creates an empty mapping node.
    #[must_use]
    pub fn empty_map() -> Self {
        Self::Map(PlaceholderTree::new())
    }

    /// Creates a scalar leaf.
    #[must_use]
    pub fn value(value: impl Into<String>) -> Self {
        Self::Value(value.into())
    }

    /// Returns the scalar text if this node is a leaf.
    #[must_use]
    pub fn as_value(&self) -> Option<&str> {
        match self {
            Self::Value(value) => Some(value),
            Self::Map(_) => None,
        }
    }

    /// Returns the child mapping if this node is a mapping.
    #[must_use]
    pub const fn as_map(&self) -> Option<&PlaceholderTree> {
        match self {
            Self::Value(_) => None,
            Self::Map(map) => Some(map),
        }
    }

    /// Returns the child stored under `key`, if this node is a mapping.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Self> {
        self.as_map().and_then(|map| map.get(key))
    }

    /// Returns true for an empty leaf or an empty mapping.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Value(value) => value.is_empty(),
            Self::Map(map) => map.is_empty(),
        }
    }

    /// Inserts `value` at the nested `path`, creating intermediate mappings.
    ///
    /// A leaf found on the way is replaced by a mapping. Inserting at an
    /// empty path replaces the node itself.
    pub fn insert_path(&mut self, path: &[&str], value: Self) {
        let Some((first, rest)) = path.split_first() else {
            *self = value;
            return;
        };

        if !matches!(self, Self::Map(_)) {
            *self = Self::empty_map();
        }
        if let Self::Map(map) = self {
            map.entry((*first).to_string())
                .or_insert_with(Self::empty_map)
                .insert_path(rest, value);
        }
    }

    /// Deep-merges `other` into this node.
    ///
    /// Mapping-on-mapping merges key by key; any other combination is
    /// replaced by `other`.
    pub fn merge(&mut self, other: Self) {
        match (self, other) {
            (Self::Map(base), Self::Map(overlay)) => {
                for (key, value) in overlay {
                    match base.get_mut(&key) {
                        Some(existing) => existing.merge(value),
                        None => {
                            base.insert(key, value);
                        }
                    }
                }
            }
            (slot, other) => *slot = other,
        }
    }
}

impl Default for PlaceholderNode {
    fn default() -> Self {
        Self::empty_map()
    }
}

impl From<&str> for PlaceholderNode {
    fn from(value: &str) -> Self {
        Self::Value(value.to_string())
    }
}

impl From<String> for PlaceholderNode {
    fn from(value: String) -> Self {
        Self::Value(value)
    }
}

/// A runtime override written as `name[@environment[/variant]]=value`.
///
/// Omitted axes default to [`DEFAULT_KEY`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideSpec {
    /// Placeholder name.
    pub name: String,
    /// Environment the value applies to.
    pub environment: String,
    /// Variant the value applies to.
    pub variant: String,
    /// Replacement text.
    pub value: String,
}

impl FromStr for OverrideSpec {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        let (target, value) = s
            .split_once('=')
            .ok_or_else(|| DomainError::InvalidOverride(format!("missing '=' in '{s}'")))?;

        let (name, axes) = target.split_once('@').unwrap_or((target, ""));
        if name.is_empty() {
            return Err(DomainError::InvalidOverride(format!(
                "missing placeholder name in '{s}'"
            )));
        }

        let (environment, variant) = axes.split_once('/').unwrap_or((axes, ""));
        let or_default = |axis: &str| {
            if axis.is_empty() {
                DEFAULT_KEY.to_string()
            } else {
                axis.to_string()
            }
        };

        Ok(Self {
            name: name.to_string(),
            environment: or_default(environment),
            variant: or_default(variant),
            value: value.to_string(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn map(entries: &[(&str, PlaceholderNode)]) -> PlaceholderNode {
        PlaceholderNode::Map(
            entries
                .iter()
                .map(|(k, v)| ((*k).to_string(), v.clone()))
                .collect(),
        )
    }

    #[test]
    fn test_insert_path_creates_intermediate_maps() {
        let mut root = PlaceholderNode::empty_map();
        root.insert_path(&["host", "qa", DEFAULT_KEY], "qa.example.com".into());

        assert_eq!(
            root.get("host")
                .and_then(|n| n.get("qa"))
                .and_then(|n| n.get(DEFAULT_KEY))
                .and_then(PlaceholderNode::as_value),
            Some("qa.example.com")
        );
    }

    #[test]
    fn test_insert_path_overwrites_existing_leaf() {
        let mut root = PlaceholderNode::empty_map();
        root.insert_path(&["host", "qa", "x"], "first".into());
        root.insert_path(&["host", "qa", "x"], "second".into());

        let leaf = root.get("host").and_then(|n| n.get("qa")).and_then(|n| n.get("x"));
        assert_eq!(leaf, Some(&PlaceholderNode::value("second")));
    }

    #[test]
    fn test_insert_path_replaces_leaf_with_map() {
        let mut root = map(&[("host", "flat".into())]);
        root.insert_path(&["host", "qa"], "nested".into());

        assert_eq!(
            root.get("host").and_then(|n| n.get("qa")),
            Some(&PlaceholderNode::value("nested"))
        );
    }

    #[test]
    fn test_merge_overrides_leaves_and_keeps_siblings() {
        let mut base = map(&[
            ("user", map(&[(DEFAULT_KEY, "alice".into())])),
            ("host", map(&[(DEFAULT_KEY, "localhost".into())])),
        ]);
        let overlay = map(&[("host", map(&[(DEFAULT_KEY, "example.com".into())]))]);

        base.merge(overlay);

        assert_eq!(
            base,
            map(&[
                ("user", map(&[(DEFAULT_KEY, "alice".into())])),
                ("host", map(&[(DEFAULT_KEY, "example.com".into())])),
            ])
        );
    }

    #[test]
    fn test_merge_replaces_map_with_scalar() {
        let mut base = map(&[("host", map(&[("qa", "a".into())]))]);
        base.merge(map(&[("host", "flat".into())]));

        assert_eq!(base.get("host"), Some(&PlaceholderNode::value("flat")));
    }

    #[test]
    fn test_is_empty() {
        assert!(PlaceholderNode::value("").is_empty());
        assert!(PlaceholderNode::empty_map().is_empty());
        assert!(!PlaceholderNode::value("x").is_empty());
    }

    #[test]
    fn test_untagged_serialization() {
        let node = map(&[("greeting", map(&[(DEFAULT_KEY, "Hello".into())]))]);
        let json = serde_json::to_string(&node).unwrap();
        assert_eq!(json, r#"{"greeting":{"$default":"Hello"}}"#);

        let parsed: PlaceholderNode = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, node);
    }

    #[test]
    fn test_parse_override_with_defaults() {
        let spec: OverrideSpec = "token=abc".parse().unwrap();
        assert_eq!(spec.name, "token");
        assert_eq!(spec.environment, DEFAULT_KEY);
        assert_eq!(spec.variant, DEFAULT_KEY);
        assert_eq!(spec.value, "abc");
    }

    #[test]
    fn test_parse_override_with_axes() {
        let spec: OverrideSpec = "token@qa/mobile=a=b".parse().unwrap();
        assert_eq!(spec.name, "token");
        assert_eq!(spec.environment, "qa");
        assert_eq!(spec.variant, "mobile");
        assert_eq!(spec.value, "a=b");
    }

    #[test]
    fn test_parse_override_rejects_malformed() {
        assert!(matches!(
            "token".parse::<OverrideSpec>(),
            Err(DomainError::InvalidOverride(_))
        ));
        assert!(matches!(
            "=abc".parse::<OverrideSpec>(),
            Err(DomainError::InvalidOverride(_))
        ));
    }
}
