//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the analyzer.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the request analyzer.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// How hosts of later requests are treated once the root host is set.
    pub host_policy: HostPolicy,

    /// Recognizers, registered in the order listed.
    pub recognizers: Vec<RecognizerConfig>,

    /// Route output settings.
    pub output: OutputConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            host_policy: HostPolicy::default(),
            recognizers: vec![
                RecognizerConfig::builtin("uuid", RecognizerKind::Uuid),
                RecognizerConfig::builtin("int", RecognizerKind::Int),
            ],
            output: OutputConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// Host handling once the tree root exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HostPolicy {
    /// The first ingested host becomes the root; later hosts are ignored.
    #[default]
    FirstSeen,

    /// Requests for any host other than the root host are rejected.
    Strict,
}

/// Recognizer definition.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecognizerConfig {
    /// Recognizer identifier for logging and listings.
    pub name: String,

    /// Which matcher implementation to build.
    pub kind: RecognizerKind,

    /// Override for the canonical placeholder text.
    #[serde(default)]
    pub placeholder: Option<String>,

    /// Pattern for `regex` recognizers.
    #[serde(default)]
    pub pattern: Option<String>,

    /// Word list for `category` recognizers.
    #[serde(default)]
    pub values: Vec<String>,
}

impl RecognizerConfig {
    /// Entry for a built-in kind with its default placeholder.
    pub fn builtin(name: impl Into<String>, kind: RecognizerKind) -> Self {
        Self {
            name: name.into(),
            kind,
            placeholder: None,
            pattern: None,
            values: Vec::new(),
        }
    }
}

/// Available recognizer implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecognizerKind {
    Uuid,
    Int,
    Category,
    Regex,
}

impl RecognizerKind {
    pub fn default_placeholder(self) -> &'static str {
        match self {
            RecognizerKind::Uuid => "{UUID}",
            RecognizerKind::Int => "{INT}",
            RecognizerKind::Category => "{CATEGORY}",
            RecognizerKind::Regex => "{VAR}",
        }
    }
}

/// Route output configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// Output encoding for rendered routes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Compact JSON array.
    #[default]
    Json,
    /// Indented JSON array.
    Pretty,
    /// One `host/path` line per route.
    Text,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
        }
    }
}
