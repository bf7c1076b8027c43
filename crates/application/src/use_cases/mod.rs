//! Use cases (application services)
//!
//! Use cases orchestrate ports and domain types to load the placeholder
//! configuration a resolver runs against.

pub mod config;

pub use config::{LoadConfigStore, LoadConfigStoreError};
