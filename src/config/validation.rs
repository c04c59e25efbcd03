//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Recognizer names unique and non-empty, placeholders non-empty
//! - Kind-specific requirements (regex compiles, category has values)
//! - Log level is one the subscriber understands
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AnalyzerConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::{AnalyzerConfig, RecognizerKind};
use crate::recognizer::build_recognizer;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("recognizer name must not be empty")]
    EmptyName,

    #[error("duplicate recognizer name '{0}'")]
    DuplicateName(String),

    #[error("recognizer '{0}' has an empty placeholder")]
    EmptyPlaceholder(String),

    #[error("regex recognizer '{0}' requires a pattern")]
    MissingPattern(String),

    #[error("recognizer '{name}' has an invalid pattern: {reason}")]
    InvalidPattern { name: String, reason: String },

    #[error("category recognizer '{0}' requires at least one value")]
    MissingCategoryValues(String),

    #[error("unknown log level '{0}'")]
    UnknownLogLevel(String),
}

/// Check a parsed configuration, collecting every problem found.
pub fn validate_config(config: &AnalyzerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for recognizer in &config.recognizers {
        if recognizer.name.trim().is_empty() {
            errors.push(ValidationError::EmptyName);
        } else if !seen.insert(recognizer.name.as_str()) {
            errors.push(ValidationError::DuplicateName(recognizer.name.clone()));
        }

        if matches!(recognizer.placeholder.as_deref(), Some(p) if p.is_empty()) {
            errors.push(ValidationError::EmptyPlaceholder(recognizer.name.clone()));
        }

        if recognizer.kind == RecognizerKind::Regex || recognizer.kind == RecognizerKind::Category {
            if let Err(e) = build_recognizer(recognizer) {
                errors.push(e);
            }
        }
    }

    let level = config.observability.log_level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
