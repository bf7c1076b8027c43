//! YAML placeholder documents.
//!
//! Converts parsed YAML into [`PlaceholderNode`] trees. Every scalar becomes
//! text; no type coercion is kept.

use placeholders_domain::PlaceholderNode;
use serde::de::DeserializeOwned;
use serde_yaml::Value;

use super::SerializationError;

/// Parses a placeholder document.
///
/// An empty document yields an empty mapping.
///
/// # Errors
///
/// Returns an error if the input is not valid YAML.
pub fn document_from_yaml(yaml: &str) -> Result<PlaceholderNode, SerializationError> {
    let value: Value = serde_yaml::from_str(yaml).map_err(SerializationError::Yaml)?;
    Ok(match value {
        Value::Null => PlaceholderNode::empty_map(),
        other => node_from_yaml(other),
    })
}

/// Deserializes a typed value from YAML.
///
/// # Errors
///
/// Returns an error if the YAML is invalid or doesn't match the expected type.
pub fn from_yaml<T: DeserializeOwned>(yaml: &str) -> Result<T, SerializationError> {
    serde_yaml::from_str(yaml).map_err(SerializationError::Yaml)
}

/// Converts a YAML value into a placeholder node.
///
/// - strings are kept, numbers and `true` use their canonical text
/// - `null` and `false` become an empty value, and zero numbers become `"0"`;
///   lookups treat both as undefined
/// - sequences become mappings keyed by index
#[must_use]
pub fn node_from_yaml(value: Value) -> PlaceholderNode {
    match value {
        Value::Null => PlaceholderNode::value(""),
        Value::Bool(true) => PlaceholderNode::value("true"),
        Value::Bool(false) => PlaceholderNode::value(""),
        Value::Number(n) if is_zero(&n) => PlaceholderNode::value("0"),
        Value::Number(n) => PlaceholderNode::value(n.to_string()),
        Value::String(s) => PlaceholderNode::Value(s),
        Value::Sequence(items) => PlaceholderNode::Map(
            items
                .into_iter()
                .enumerate()
                .map(|(i, item)| (i.to_string(), node_from_yaml(item)))
                .collect(),
        ),
        Value::Mapping(mapping) => {
            let mut map = placeholders_domain::PlaceholderTree::new();
            for (key, item) in mapping {
                match key_text(&key) {
                    Some(key) => {
                        map.insert(key, node_from_yaml(item));
                    }
                    None => tracing::warn!(?key, "skipping non-scalar mapping key"),
                }
            }
            PlaceholderNode::Map(map)
        }
        Value::Tagged(tagged) => node_from_yaml(tagged.value),
    }
}

fn is_zero(n: &serde_yaml::Number) -> bool {
    n.as_i64() == Some(0) || n.as_f64().is_some_and(|f| f.abs() < f64::EPSILON)
}

fn key_text(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some("null".to_string()),
        Value::Tagged(tagged) => key_text(&tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => None,
    }
}
