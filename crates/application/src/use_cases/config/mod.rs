//! Config store use cases

mod load_config_store;

pub use load_config_store::{LoadConfigStore, LoadConfigStoreError};
