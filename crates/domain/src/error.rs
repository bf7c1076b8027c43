//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation or processing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A tag does not have the `<config key>:<section>` shape.
    #[error("invalid config tag: {0}")]
    InvalidConfigTag(String),

    /// A runtime override definition is malformed.
    #[error("invalid override: {0}")]
    InvalidOverride(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
