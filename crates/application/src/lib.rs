//! Placeholders Application - Resolution engine and ports
//!
//! This crate defines the application layer with:
//! - Port traits (interfaces for external dependencies)
//! - The placeholder resolution engine
//! - Use case orchestration
//! - Application-level error handling

pub mod error;
pub mod placeholder_resolver;
pub mod ports;
pub mod use_cases;

pub use error::{LookupLocation, ResolveError, ResolveResult};
pub use placeholder_resolver::{PlaceholderResolver, RuntimeOverrides};
pub use ports::{
    ConfigLoadError, ConfigLoader, FileSystem, FileSystemError, ScenarioContextProvider,
};
pub use use_cases::{LoadConfigStore, LoadConfigStoreError};
