//! File-backed persistence
//!
//! Implementations for reading settings and placeholder files from disk.

mod file_system;
mod settings_repository;
mod yaml_config_loader;

pub use file_system::TokioFileSystem;
pub use settings_repository::{LoadedSettings, SettingsError, SettingsRepository};
pub use yaml_config_loader::YamlConfigLoader;
