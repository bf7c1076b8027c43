//! Scenario context port

/// Supplies the tags of the scenario currently executing.
pub trait ScenarioContextProvider: Send + Sync {
    /// Returns the current scenario's tags in declaration order.
    fn current_scenario_tags(&self) -> Vec<String>;
}

impl<T: ScenarioContextProvider + ?Sized> ScenarioContextProvider for std::sync::Arc<T> {
    fn current_scenario_tags(&self) -> Vec<String> {
        (**self).current_scenario_tags()
    }
}
