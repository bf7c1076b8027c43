//! Infrastructure adapters

mod scenario_tags;

pub use scenario_tags::ScenarioTagsSubscriber;
