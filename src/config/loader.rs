//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::{AnalyzerConfig, HostPolicy, OutputFormat};
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<AnalyzerConfig, ConfigError> {
    let config: AnalyzerConfig = toml::from_str(content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<AnalyzerConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config = parse_config(&content)?;

    tracing::debug!(
        path = %path.display(),
        recognizers = config.recognizers.len(),
        "Configuration loaded"
    );

    Ok(config)
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub format: Option<OutputFormat>,
    pub log_level: Option<String>,
    pub host_policy: Option<HostPolicy>,
}

/// Apply `overrides` on top of `config` and validate the result again.
pub fn apply_overrides(
    mut config: AnalyzerConfig,
    overrides: ConfigOverrides,
) -> Result<AnalyzerConfig, ConfigError> {
    if let Some(format) = overrides.format {
        config.output.format = format;
    }
    if let Some(level) = overrides.log_level {
        config.observability.log_level = level;
    }
    if let Some(policy) = overrides.host_policy {
        config.host_policy = policy;
    }

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}
