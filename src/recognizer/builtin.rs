//! Built-in recognizers.
//!
//! UUID and integer recognizers share lazily compiled, anchored regexes.
//! Category matching is exact dictionary membership; no stemming.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::recognizer::PatternRecognizer;

static UUID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
        .expect("uuid regex is valid")
});

static INT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("int regex is valid"));

/// Matches hyphenated UUIDs in either case.
#[derive(Debug, Clone)]
pub struct UuidRecognizer {
    name: String,
    placeholder: String,
}

impl UuidRecognizer {
    pub fn new() -> Self {
        Self::with_placeholder("uuid", "{UUID}")
    }

    pub fn with_placeholder(name: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            placeholder: placeholder.into(),
        }
    }
}

impl Default for UuidRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternRecognizer for UuidRecognizer {
    fn name(&self) -> &str {
        &self.name
    }

    fn placeholder(&self) -> &str {
        &self.placeholder
    }

    fn is_match(&self, token: &str) -> bool {
        UUID_REGEX.is_match(token)
    }
}

/// Matches non-empty runs of ASCII digits. Signs and separators are not
/// accepted.
#[derive(Debug, Clone)]
pub struct IntRecognizer {
    name: String,
    placeholder: String,
}

impl IntRecognizer {
    pub fn new() -> Self {
        Self::with_placeholder("int", "{INT}")
    }

    pub fn with_placeholder(name: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            placeholder: placeholder.into(),
        }
    }
}

impl Default for IntRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternRecognizer for IntRecognizer {
    fn name(&self) -> &str {
        &self.name
    }

    fn placeholder(&self) -> &str {
        &self.placeholder
    }

    fn is_match(&self, token: &str) -> bool {
        INT_REGEX.is_match(token)
    }
}

/// Matches tokens that appear verbatim in a fixed word list.
#[derive(Debug, Clone)]
pub struct CategoryRecognizer {
    name: String,
    placeholder: String,
    values: BTreeSet<String>,
}

impl CategoryRecognizer {
    pub fn new<I, S>(name: impl Into<String>, placeholder: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            placeholder: placeholder.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Category recognizer with the conventional `category` / `{CATEGORY}` naming.
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new("category", "{CATEGORY}", values)
    }
}

impl PatternRecognizer for CategoryRecognizer {
    fn name(&self) -> &str {
        &self.name
    }

    fn placeholder(&self) -> &str {
        &self.placeholder
    }

    fn is_match(&self, token: &str) -> bool {
        self.values.contains(token)
    }
}

/// Matches tokens against a user-supplied pattern. The pattern is used
/// as given, so callers anchor it themselves when they need whole-token
/// matches.
#[derive(Debug, Clone)]
pub struct RegexRecognizer {
    name: String,
    placeholder: String,
    regex: Regex,
}

impl RegexRecognizer {
    pub fn new(
        name: impl Into<String>,
        placeholder: impl Into<String>,
        pattern: &str,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            name: name.into(),
            placeholder: placeholder.into(),
            regex: Regex::new(pattern)?,
        })
    }
}

impl PatternRecognizer for RegexRecognizer {
    fn name(&self) -> &str {
        &self.name
    }

    fn placeholder(&self) -> &str {
        &self.placeholder
    }

    fn is_match(&self, token: &str) -> bool {
        self.regex.is_match(token)
    }
}
