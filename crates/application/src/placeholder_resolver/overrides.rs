//! Runtime placeholder overrides
//!
//! Values registered while scenarios run. They share the shape of the
//! file-backed definitions and are always consulted first.

use placeholders_domain::{DEFAULT_KEY, OverrideSpec, PlaceholderNode};

/// In-memory `name -> environment -> variant -> value` tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuntimeOverrides {
    tree: PlaceholderNode,
}

impl RuntimeOverrides {
    /// Creates an empty override store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `value` for `name` under every environment and variant.
    pub fn register(&mut self, name: impl AsRef<str>, value: impl Into<String>) {
        self.register_for(name, value, DEFAULT_KEY, DEFAULT_KEY);
    }

    /// Registers `value` for one `(name, environment, variant)` triple.
    ///
    /// The last registration for a triple wins. Names are not validated.
    pub fn register_for(
        &mut self,
        name: impl AsRef<str>,
        value: impl Into<String>,
        environment: impl AsRef<str>,
        variant: impl AsRef<str>,
    ) {
        self.tree.insert_path(
            &[name.as_ref(), environment.as_ref(), variant.as_ref()],
            PlaceholderNode::Value(value.into()),
        );
    }

    /// Registers a parsed [`OverrideSpec`].
    pub fn apply(&mut self, spec: OverrideSpec) {
        self.register_for(spec.name, spec.value, spec.environment, spec.variant);
    }

    /// Returns the tree searched during resolution.
    #[must_use]
    pub const fn tree(&self) -> &PlaceholderNode {
        &self.tree
    }

    /// Returns the number of placeholder names with overrides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tree.as_map().map_or(0, |map| map.len())
    }

    /// Returns true if nothing has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
