//! Serialization of placeholder documents and diagnostics output.

mod json;
mod yaml;

pub use json::to_json_pretty;
pub use yaml::{document_from_yaml, from_yaml, node_from_yaml};

/// Error type for serialization operations.
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    /// YAML parsing failed.
    #[error("YAML parsing failed: {0}")]
    Yaml(serde_yaml::Error),

    /// JSON serialization failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
