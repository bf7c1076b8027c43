//! Application error types

use std::path::PathBuf;

use placeholders_domain::DomainError;
use placeholders_domain::config::join_paths;
use thiserror::Error;

/// Where a placeholder was looked up in the file-backed definitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupLocation {
    /// Files the config entry was merged from.
    pub source_paths: Vec<PathBuf>,
    /// Section selected by the scenario's config tag.
    pub section: String,
    /// Active variant, if any.
    pub variant: Option<String>,
    /// Active environment.
    pub environment: String,
}

/// Errors that abort the resolution of a placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// No value was found in any store.
    ///
    /// `location` is `None` when the scenario has no config tag, so only
    /// runtime overrides could have supplied a value.
    #[error("{}", undefined_message(placeholder, location.as_ref()))]
    UndefinedPlaceholder {
        /// The placeholder being resolved.
        placeholder: String,
        /// The file-backed location that was searched.
        location: Option<LookupLocation>,
    },

    /// The scenario's config tag points at a key or section that was not loaded.
    #[error(
        "Section '{section}' of config '{config_key}' was not found in [{}]",
        join_paths(source_paths)
    )]
    MissingSection {
        /// Config key from the scenario's config tag.
        config_key: String,
        /// Files loaded for that key; empty when the key is unknown.
        source_paths: Vec<PathBuf>,
        /// Section from the scenario's config tag.
        section: String,
    },

    /// A placeholder re-entered its own expansion chain.
    #[error(
        "Cyclic placeholder dependency detected. Trying to replace {placeholder} again: {}",
        chain.join(">")
    )]
    CyclicDependency {
        /// The placeholder that was found twice.
        placeholder: String,
        /// Placeholders being expanded, outermost first, ending with `placeholder`.
        chain: Vec<String>,
    },

    /// A domain validation error occurred.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),
}

impl ResolveError {
    /// Returns true for [`ResolveError::UndefinedPlaceholder`].
    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::UndefinedPlaceholder { .. })
    }
}

fn undefined_message(placeholder: &str, location: Option<&LookupLocation>) -> String {
    let Some(location) = location else {
        return format!(
            "No {placeholder} replacement was defined on runtime, \
             and this scenario is not linked with any replacements file"
        );
    };

    format!(
        "No {placeholder} replacement was defined on runtime or on \
         {}>{}>placeholders>{placeholder} for variant {} and environment {}",
        join_paths(&location.source_paths),
        location.section,
        location.variant.as_deref().unwrap_or("(none)"),
        location.environment,
    )
}

/// Result type alias for resolution.
pub type ResolveResult<T> = Result<T, ResolveError>;
