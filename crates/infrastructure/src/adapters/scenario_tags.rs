//! Scenario tags adapter
//!
//! Tracks the tags of the scenario currently running. A test harness calls
//! [`ScenarioTagsSubscriber::before_scenario`] and
//! [`ScenarioTagsSubscriber::after_scenario`] around each scenario; the
//! resolver reads the tags through [`ScenarioContextProvider`].

use std::sync::{Arc, PoisonError, RwLock};

use placeholders_application::ScenarioContextProvider;

/// Shared holder for the current scenario's tags.
///
/// Clones share state, so one clone can be handed to the resolver while
/// another is driven by the scenario lifecycle.
#[derive(Debug, Clone, Default)]
pub struct ScenarioTagsSubscriber {
    tags: Arc<RwLock<Vec<String>>>,
}

impl ScenarioTagsSubscriber {
    /// Creates a subscriber with no active scenario.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the tags of the scenario about to run.
    pub fn before_scenario<I, S>(&self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tags: Vec<String> = tags.into_iter().map(Into::into).collect();
        tracing::debug!(?tags, "scenario started");
        *self.tags.write().unwrap_or_else(PoisonError::into_inner) = tags;
    }

    /// Clears the tags once the scenario has finished.
    pub fn after_scenario(&self) {
        self.tags
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl ScenarioContextProvider for ScenarioTagsSubscriber {
    fn current_scenario_tags(&self) -> Vec<String> {
        self.tags
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
