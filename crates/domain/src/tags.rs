//! Scenario tag derivation
//!
//! Pure functions deriving the config tag, config key, section and active
//! variant from a scenario's tags. Tags are always handled as an ordered
//! sequence: the last variant tag wins.

use std::fmt;
use std::str::FromStr;

use crate::error::{DomainError, DomainResult};

/// Prefix marking a variant tag, e.g. `$mobile`.
pub const VARIANT_TAG_PREFIX: char = '$';

const CONFIG_TAG_SEPARATOR: char = ':';

/// A tag of the form `<config key>:<section>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigTag {
    key: String,
    section: String,
}

impl ConfigTag {
    /// Creates a config tag from its parts.
    #[must_use]
    pub fn new(key: impl Into<String>, section: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            section: section.into(),
        }
    }

    /// Parses a tag, returning `None` if it is not a config tag.
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        let tag = normalize_tag(tag);
        if tag.starts_with(VARIANT_TAG_PREFIX) {
            return None;
        }

        let (key, section) = tag.split_once(CONFIG_TAG_SEPARATOR)?;
        if key.is_empty() || section.is_empty() || section.contains(CONFIG_TAG_SEPARATOR) {
            return None;
        }
        Some(Self::new(key, section))
    }

    /// The config key selecting a loaded config entry.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The section within the config entry.
    #[must_use]
    pub fn section(&self) -> &str {
        &self.section
    }
}

impl FromStr for ConfigTag {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        Self::parse(s).ok_or_else(|| DomainError::InvalidConfigTag(s.to_string()))
    }
}

impl fmt::Display for ConfigTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{CONFIG_TAG_SEPARATOR}{}", self.key, self.section)
    }
}

/// Strips the leading `@` Gherkin sources put in front of tags.
#[must_use]
pub fn normalize_tag(tag: &str) -> &str {
    tag.strip_prefix('@').unwrap_or(tag)
}

/// Returns the first config tag among `tags`.
#[must_use]
pub fn config_tag<S: AsRef<str>>(tags: &[S]) -> Option<ConfigTag> {
    tags.iter().find_map(|tag| ConfigTag::parse(tag.as_ref()))
}

/// Returns the variant names declared by `tags`, in declaration order.
#[must_use]
pub fn variant_tags<S: AsRef<str>>(tags: &[S]) -> Vec<&str> {
    tags.iter()
        .filter_map(|tag| normalize_tag(tag.as_ref()).strip_prefix(VARIANT_TAG_PREFIX))
        .filter(|name| !name.is_empty())
        .collect()
}

/// Returns the active variant: the last variant tag declared.
#[must_use]
pub fn active_variant<S: AsRef<str>>(tags: &[S]) -> Option<&str> {
    variant_tags(tags).pop()
}
