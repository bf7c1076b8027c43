//! Per-execution resolution scope
//!
//! Bundles everything a resolution depends on besides the stores: the
//! executing scenario's tags (in declaration order) and the environment.

use crate::placeholder::DEFAULT_KEY;
use crate::tags::{ConfigTag, active_variant, config_tag};

/// Environment used when none is selected.
pub const DEFAULT_ENVIRONMENT: &str = "default";

/// The scenario-specific inputs of a resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionScope {
    tags: Vec<String>,
    environment: String,
}

impl ResolutionScope {
    /// Creates a scope from ordered scenario tags and an environment.
    #[must_use]
    pub fn new(tags: Vec<String>, environment: impl Into<String>) -> Self {
        Self {
            tags,
            environment: environment.into(),
        }
    }

    /// Returns the scenario tags in declaration order.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Returns the active environment.
    #[must_use]
    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// Returns the scenario's config tag, if any.
    #[must_use]
    pub fn config_tag(&self) -> Option<ConfigTag> {
        config_tag(&self.tags)
    }

    /// Returns the active variant, if any.
    #[must_use]
    pub fn variant(&self) -> Option<&str> {
        active_variant(&self.tags)
    }

    /// Lookup keys for `placeholder`: `[variant, environment, placeholder]`.
    ///
    /// Without a variant tag only [`DEFAULT_KEY`] applies at the variant level.
    #[must_use]
    pub fn key_path<'a>(&'a self, placeholder: &'a str) -> [&'a str; 3] {
        [
            self.variant().unwrap_or(DEFAULT_KEY),
            self.environment.as_str(),
            placeholder,
        ]
    }
}

impl Default for ResolutionScope {
    fn default() -> Self {
        Self::new(Vec::new(), DEFAULT_ENVIRONMENT)
    }
}
