//! Placeholder resolution module
//!
//! Provides parsing of `${name}` references, the hierarchical fallback
//! search, runtime overrides and the resolution engine tying them together.
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//!
//! use placeholders_application::placeholder_resolver::PlaceholderResolver;
//! use placeholders_application::ports::ScenarioContextProvider;
//! use placeholders_domain::ConfigStore;
//!
//! struct NoTags;
//!
//! impl ScenarioContextProvider for NoTags {
//!     fn current_scenario_tags(&self) -> Vec<String> {
//!         Vec::new()
//!     }
//! }
//!
//! let mut resolver = PlaceholderResolver::new(Arc::new(ConfigStore::new()), NoTags);
//! resolver.register("host", "localhost");
//! resolver.register("base_url", "http://${host}/api");
//!
//! assert_eq!(resolver.resolve("base_url").unwrap(), "http://localhost/api");
//! ```

pub mod engine;
pub mod overrides;
pub mod parser;
pub mod search;

pub use engine::PlaceholderResolver;
pub use overrides::RuntimeOverrides;
pub use parser::{PlaceholderReference, has_placeholders, parse_placeholders};
pub use search::search;
