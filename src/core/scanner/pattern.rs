//! Regex matching of quoted identifiers that open a brace.

use regex::Regex;
use std::sync::LazyLock;

/// A double quote, an identifier, then `{`, with optional whitespace around
/// the identifier. Group 1 is the identifier.
pub const IDENTIFIER_PATTERN: &str = r#""\s*([a-zA-Z_][a-zA-Z_0-9]*)\s*\{"#;

static IDENTIFIER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(IDENTIFIER_PATTERN).expect("identifier pattern is a valid regex")
});

/// Finds identifier tokens in single lines of text
#[derive(Debug, Clone)]
pub struct IdentifierPattern {
    regex: Regex,
}

impl Default for IdentifierPattern {
    fn default() -> Self {
        Self {
            regex: IDENTIFIER_REGEX.clone(),
        }
    }
}

impl IdentifierPattern {
    /// Create a matcher using the standard identifier pattern
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the identifier of the first match in `line`, if any.
    ///
    /// Only the leftmost match counts. A line such as `"A{ "B{` yields `A`
    /// and `B` is never seen.
    pub fn first_match<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.regex
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}
