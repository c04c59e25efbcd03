//! Request URL structure analyzer.
//!
//! Feeds concrete request URLs into a trie, replacing variable segments
//! with recognizer placeholders and marking parts seen in only some
//! requests as optional, then renders the trie back out as route templates.

pub mod analyzer;
pub mod config;
pub mod error;
pub mod observability;
pub mod output;
pub mod recognizer;

pub use analyzer::{IngestStats, RequestAnalyzer, Route};
pub use config::schema::AnalyzerConfig;
pub use error::{AnalyzerError, IngestError};
pub use recognizer::PatternRecognizer;
