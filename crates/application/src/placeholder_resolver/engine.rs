//! Placeholder resolution engine
//!
//! Resolves `${name}` references against runtime overrides first, then the
//! config section selected by the scenario's config tag, expanding nested
//! references until the value is fully substituted.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use placeholders_domain::{
    ConfigStore, DEFAULT_ENVIRONMENT, OverrideSpec, PlaceholderNode, ResolutionScope,
};

use super::overrides::RuntimeOverrides;
use super::parser::{has_placeholders, parse_placeholders};
use super::search::search;
use crate::error::{LookupLocation, ResolveError, ResolveResult};
use crate::ports::ScenarioContextProvider;

/// The placeholder resolution engine.
///
/// The config store is shared and read-only; runtime overrides and the
/// active environment belong to this engine. Every resolution reads the
/// scenario tags once from the context provider, or takes an explicit
/// [`ResolutionScope`] through the `*_in` methods.
pub struct PlaceholderResolver<P> {
    config: Arc<ConfigStore>,
    overrides: RuntimeOverrides,
    environment: String,
    context: P,
}

impl<P: ScenarioContextProvider> PlaceholderResolver<P> {
    /// Creates a resolver over a loaded config store.
    #[must_use]
    pub fn new(config: Arc<ConfigStore>, context: P) -> Self {
        Self {
            config,
            overrides: RuntimeOverrides::new(),
            environment: DEFAULT_ENVIRONMENT.to_string(),
            context,
        }
    }

    /// Sets the active environment, builder style.
    #[must_use]
    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = environment.into();
        self
    }

    /// Returns the active environment.
    #[must_use]
    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// Sets the active environment for subsequent resolutions.
    pub fn set_environment(&mut self, environment: impl Into<String>) {
        self.environment = environment.into();
    }

    /// Returns the shared config store.
    #[must_use]
    pub fn config(&self) -> &ConfigStore {
        &self.config
    }

    /// Returns a handle to the shared config store, for building sibling engines.
    #[must_use]
    pub fn shared_config(&self) -> Arc<ConfigStore> {
        Arc::clone(&self.config)
    }

    /// Returns the runtime overrides.
    #[must_use]
    pub const fn overrides(&self) -> &RuntimeOverrides {
        &self.overrides
    }

    /// Registers a runtime value for every environment and variant.
    pub fn register(&mut self, name: impl AsRef<str>, value: impl Into<String>) {
        self.overrides.register(name, value);
    }

    /// Registers a runtime value for one environment and variant.
    pub fn register_for(
        &mut self,
        name: impl AsRef<str>,
        value: impl Into<String>,
        environment: impl AsRef<str>,
        variant: impl AsRef<str>,
    ) {
        self.overrides.register_for(name, value, environment, variant);
    }

    /// Parses and registers a `name[@environment[/variant]]=value` override.
    ///
    /// # Errors
    /// Returns [`ResolveError::Domain`] if the definition is malformed.
    pub fn apply_override(&mut self, definition: &str) -> ResolveResult<()> {
        let spec: OverrideSpec = definition.parse()?;
        self.overrides.apply(spec);
        Ok(())
    }

    /// Builds the scope of the scenario currently executing.
    #[must_use]
    pub fn current_scope(&self) -> ResolutionScope {
        ResolutionScope::new(self.context.current_scenario_tags(), self.environment.clone())
    }

    /// Resolves a placeholder for the current scenario and environment.
    ///
    /// # Errors
    /// Fails if the placeholder (or one it references) is undefined, the
    /// scenario's config section is missing, or expansion is cyclic.
    pub fn resolve(&self, name: &str) -> ResolveResult<String> {
        self.resolve_in(name, &self.current_scope())
    }

    /// Resolves a placeholder within an explicit scope.
    ///
    /// # Errors
    /// See [`PlaceholderResolver::resolve`].
    pub fn resolve_in(&self, name: &str, scope: &ResolutionScope) -> ResolveResult<String> {
        self.expand(name, scope, &mut Vec::new())
    }

    /// Replaces every `${name}` in `text` for the current scenario.
    ///
    /// # Errors
    /// Fails on the first reference that cannot be resolved.
    pub fn substitute(&self, text: &str) -> ResolveResult<String> {
        self.substitute_in(text, &self.current_scope())
    }

    /// Replaces every `${name}` in `text` within an explicit scope.
    ///
    /// # Errors
    /// Fails on the first reference that cannot be resolved.
    pub fn substitute_in(&self, text: &str, scope: &ResolutionScope) -> ResolveResult<String> {
        self.replace_references(text, scope, &mut Vec::new())
    }

    /// Resolves `name` and expands its nested references.
    ///
    /// `chain` holds the placeholders currently being expanded, outermost first.
    fn expand(
        &self,
        name: &str,
        scope: &ResolutionScope,
        chain: &mut Vec<String>,
    ) -> ResolveResult<String> {
        if chain.iter().any(|entry| entry == name) {
            let mut chain = chain.clone();
            chain.push(name.to_string());
            return Err(ResolveError::CyclicDependency {
                placeholder: name.to_string(),
                chain,
            });
        }

        let value = self.lookup(name, scope)?;
        if !has_placeholders(value) {
            return Ok(value.to_string());
        }

        chain.push(name.to_string());
        let expanded = self.replace_references(value, scope, chain);
        chain.pop();
        expanded
    }

    /// Substitutes the references in `text`, resolving each distinct name once.
    fn replace_references(
        &self,
        text: &str,
        scope: &ResolutionScope,
        chain: &mut Vec<String>,
    ) -> ResolveResult<String> {
        let references = parse_placeholders(text);
        if references.is_empty() {
            return Ok(text.to_string());
        }

        let mut resolved: HashMap<&str, String> = HashMap::new();
        let mut result = String::with_capacity(text.len());
        let mut last_end = 0;

        for reference in &references {
            result.push_str(&text[last_end..reference.span.start]);

            let name = reference.name.as_str();
            let value = match resolved.get(name) {
                Some(value) => value.clone(),
                None => {
                    let value = self.expand(name, scope, chain)?;
                    resolved.insert(name, value.clone());
                    value
                }
            };
            result.push_str(&value);

            last_end = reference.span.end;
        }

        result.push_str(&text[last_end..]);
        Ok(result)
    }

    /// Finds the raw value of `name`: runtime overrides, then the config section.
    fn lookup(&self, name: &str, scope: &ResolutionScope) -> ResolveResult<&str> {
        let key_path = scope.key_path(name);

        if let Some(value) = search(&key_path, self.overrides.tree()) {
            tracing::debug!(placeholder = name, source = "runtime", "placeholder found");
            return Ok(value);
        }

        let Some(tag) = scope.config_tag() else {
            return Err(ResolveError::UndefinedPlaceholder {
                placeholder: name.to_string(),
                location: None,
            });
        };

        let placeholders = self.section_placeholders(tag.key(), tag.section())?;
        if let Some(value) = search(&key_path, placeholders) {
            tracing::debug!(
                placeholder = name,
                source = "config",
                config_tag = %tag,
                "placeholder found"
            );
            return Ok(value);
        }

        let source_paths = self
            .config
            .entry(tag.key())
            .map(|entry| entry.source_paths().to_vec())
            .unwrap_or_default();

        Err(ResolveError::UndefinedPlaceholder {
            placeholder: name.to_string(),
            location: Some(LookupLocation {
                source_paths,
                section: tag.section().to_string(),
                variant: scope.variant().map(str::to_string),
                environment: scope.environment().to_string(),
            }),
        })
    }

    fn section_placeholders(&self, key: &str, section: &str) -> ResolveResult<&PlaceholderNode> {
        let missing = |source_paths: Vec<PathBuf>| ResolveError::MissingSection {
            config_key: key.to_string(),
            source_paths,
            section: section.to_string(),
        };

        let entry = self.config.entry(key).ok_or_else(|| missing(Vec::new()))?;
        entry
            .section_placeholders(section)
            .ok_or_else(|| missing(entry.source_paths().to_vec()))
    }
}
