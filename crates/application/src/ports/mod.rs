//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the resolution core and external systems.
//! Each port is a trait that can be implemented by adapters in the infrastructure layer.

mod config_loader;
mod file_system;
mod scenario_context;

pub use config_loader::{ConfigLoadError, ConfigLoader};
pub use file_system::{FileSystem, FileSystemError};
pub use scenario_context::ScenarioContextProvider;
