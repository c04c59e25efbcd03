//! Pattern recognizer subsystem.
//!
//! # Data Flow
//! ```text
//! RecognizerConfig[] (from config file or defaults)
//!     → build_recognizers() (compile patterns, apply placeholders)
//!     → Box<dyn PatternRecognizer>[] registered on the analyzer
//!     → classifier asks each one, in registration order, about a raw token
//! ```
//!
//! # Design Decisions
//! - Recognizers are read-only once built; `is_match` takes `&self`
//! - First registered match wins; overlapping recognizers are the caller's problem
//! - Placeholders are fixed strings, never derived from the matched token

pub mod builtin;

pub use builtin::{CategoryRecognizer, IntRecognizer, RegexRecognizer, UuidRecognizer};

use crate::config::schema::{RecognizerConfig, RecognizerKind};
use crate::config::validation::ValidationError;

/// Trait for classifying a raw path segment or query value as a known
/// variable pattern.
pub trait PatternRecognizer: Send + Sync + std::fmt::Debug {
    /// Identifier used in logs and listings.
    fn name(&self) -> &str;

    /// Canonical text substituted for every matching token (e.g. `{UUID}`).
    fn placeholder(&self) -> &str;

    /// Returns true if the token belongs to this pattern.
    fn is_match(&self, token: &str) -> bool;
}

/// Build a recognizer from its configuration entry.
///
/// The entry is expected to have passed validation; a regex that fails to
/// compile or a category without values is still reported rather than
/// panicking.
pub fn build_recognizer(
    config: &RecognizerConfig,
) -> Result<Box<dyn PatternRecognizer>, ValidationError> {
    let placeholder = config
        .placeholder
        .clone()
        .unwrap_or_else(|| config.kind.default_placeholder().to_string());

    let recognizer: Box<dyn PatternRecognizer> = match config.kind {
        RecognizerKind::Uuid => {
            Box::new(UuidRecognizer::with_placeholder(&config.name, placeholder))
        }
        RecognizerKind::Int => Box::new(IntRecognizer::with_placeholder(&config.name, placeholder)),
        RecognizerKind::Category => {
            if config.values.is_empty() {
                return Err(ValidationError::MissingCategoryValues(config.name.clone()));
            }
            Box::new(CategoryRecognizer::new(
                &config.name,
                placeholder,
                config.values.iter().cloned(),
            ))
        }
        RecognizerKind::Regex => {
            let pattern = config
                .pattern
                .as_deref()
                .ok_or_else(|| ValidationError::MissingPattern(config.name.clone()))?;
            let recognizer = RegexRecognizer::new(&config.name, placeholder, pattern).map_err(|e| {
                ValidationError::InvalidPattern {
                    name: config.name.clone(),
                    reason: e.to_string(),
                }
            })?;
            Box::new(recognizer)
        }
    };

    Ok(recognizer)
}

/// Build every configured recognizer, preserving configuration order.
pub fn build_recognizers(
    configs: &[RecognizerConfig],
) -> Result<Vec<Box<dyn PatternRecognizer>>, ValidationError> {
    configs.iter().map(build_recognizer).collect()
}
