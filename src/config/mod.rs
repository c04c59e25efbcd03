//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → apply_overrides (CLI values, validated again)
//!     → AnalyzerConfig (validated, immutable)
//!     → recognizers built and registered before the first request
//! ```
//!
//! # Design Decisions
//! - Config is read once at startup; there is no reload
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{apply_overrides, load_config, parse_config, ConfigError, ConfigOverrides};
pub use schema::AnalyzerConfig;
pub use schema::HostPolicy;
pub use schema::OutputFormat;
pub use schema::RecognizerConfig;
pub use schema::RecognizerKind;
