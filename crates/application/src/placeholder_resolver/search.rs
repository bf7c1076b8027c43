//! Hierarchical fallback search
//!
//! One pure function shared by every store. The key path is
//! `[variant, environment, placeholder]` and is consumed from its tail, so the
//! outermost mapping level is keyed by placeholder name and the innermost by
//! variant.

use placeholders_domain::{DEFAULT_KEY, PlaceholderNode};

/// Searches `node` for the value addressed by `key_path`.
///
/// At each level an exact key is tried first; if it is missing or yields no
/// usable value, [`DEFAULT_KEY`] is tried. A leaf reached before the path is
/// exhausted is returned as-is.
///
/// Falsy values (empty text and `"0"`) count as absent and trigger the
/// `$default` fallback at that level. A mapping left over once the path is
/// exhausted is also absent.
#[must_use]
pub fn search<'a>(key_path: &[&str], node: &'a PlaceholderNode) -> Option<&'a str> {
    let map = match node {
        PlaceholderNode::Value(value) => return truthy(value),
        PlaceholderNode::Map(map) => map,
    };

    let Some((key, rest)) = key_path.split_last() else {
        return None;
    };

    if let Some(child) = map.get(*key)
        && let Some(value) = search(rest, child)
    {
        tracing::trace!(key, "exact key matched");
        return Some(value);
    }

    if *key != DEFAULT_KEY
        && let Some(child) = map.get(DEFAULT_KEY)
        && let Some(value) = search(rest, child)
    {
        tracing::trace!(key, "fell back to $default");
        return Some(value);
    }

    None
}

/// Text falsy in the replacement files' loose typing: empty or `"0"`.
fn truthy(value: &str) -> Option<&str> {
    if value.is_empty() || value == "0" {
        None
    } else {
        Some(value)
    }
}
