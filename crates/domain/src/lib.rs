//! Placeholders Domain - Core types
//!
//! This crate defines the domain model for resolving `${name}` placeholders
//! in scenario configuration. All types here are pure Rust with no I/O
//! dependencies.

pub mod config;
pub mod error;
pub mod placeholder;
pub mod scope;
pub mod settings;
pub mod tags;

pub use config::{ConfigEntry, ConfigMapping, ConfigStore};
pub use error::{DomainError, DomainResult};
pub use placeholder::{
    DEFAULT_KEY, OverrideSpec, PLACEHOLDERS_KEY, PlaceholderNode, PlaceholderTree,
};
pub use scope::{DEFAULT_ENVIRONMENT, ResolutionScope};
pub use settings::{ExtensionSettings, SourcePaths};
pub use tags::{
    ConfigTag, VARIANT_TAG_PREFIX, active_variant, config_tag, normalize_tag, variant_tags,
};
