//! Placeholder parser for `${name}` syntax
//!
//! Parses strings to extract placeholder references with their positions.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

#[allow(clippy::expect_used)]
static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{(?P<placeholder>[A-Za-z0-9_-]+)\}").expect("placeholder regex is valid")
});

/// Represents a parsed placeholder reference in a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderReference {
    /// The placeholder name (without `${ }`).
    pub name: String,

    /// Byte range in the original string where this reference appears.
    pub span: Range<usize>,
}

/// Parses a string and extracts all placeholder references, in order.
///
/// Anything that is not `${identifier}` with `identifier` matching
/// `[A-Za-z0-9_-]+` is left alone.
///
/// # Examples
///
/// ```
/// use placeholders_application::placeholder_resolver::parser::parse_placeholders;
///
/// let refs = parse_placeholders("Hello ${user}, welcome to ${site}");
/// assert_eq!(refs.len(), 2);
/// assert_eq!(refs[0].name, "user");
/// assert_eq!(refs[1].name, "site");
/// ```
#[must_use]
pub fn parse_placeholders(input: &str) -> Vec<PlaceholderReference> {
    PLACEHOLDER_RE
        .captures_iter(input)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let name = caps.name("placeholder")?;
            Some(PlaceholderReference {
                name: name.as_str().to_string(),
                span: whole.range(),
            })
        })
        .collect()
}

/// Returns true if the input string contains any placeholder references.
#[must_use]
pub fn has_placeholders(input: &str) -> bool {
    PLACEHOLDER_RE.is_match(input)
}
