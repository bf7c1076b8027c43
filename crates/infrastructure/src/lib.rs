//! Placeholders Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer.

pub mod adapters;
pub mod persistence;
pub mod serialization;

pub use adapters::ScenarioTagsSubscriber;
pub use persistence::{
    LoadedSettings, SettingsError, SettingsRepository, TokioFileSystem, YamlConfigLoader,
};
pub use serialization::{
    SerializationError, document_from_yaml, from_yaml, node_from_yaml, to_json_pretty,
};
