//! Error types for URL ingestion.
//!
//! The tree itself never fails; only turning a raw URL string into a
//! request (and, in strict host mode, accepting it) can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// The URL could not be parsed, even after adding a scheme.
    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The URL parsed but carries no host.
    #[error("URL '{0}' has no host")]
    MissingHost(String),

    /// Strict host mode saw a host other than the root host.
    #[error("host '{actual}' does not match analyzed host '{expected}'")]
    HostMismatch { expected: String, actual: String },
}

/// Failure while ingesting a line-oriented URL stream.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Reading the stream failed; never skipped.
    #[error("failed to read {input}: {error}")]
    Io {
        input: String,
        #[source]
        error: std::io::Error,
    },

    /// The line's bytes are not UTF-8.
    #[error("{input}:{line}: not valid UTF-8: {error}")]
    InvalidUtf8 {
        input: String,
        line: usize,
        #[source]
        error: std::str::Utf8Error,
    },

    /// The line held a URL the analyzer refused.
    #[error("{input}:{line}: {error}")]
    Rejected {
        input: String,
        line: usize,
        #[source]
        error: AnalyzerError,
    },
}
