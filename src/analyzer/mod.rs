//! Request analysis subsystem.
//!
//! # Data Flow
//! ```text
//! URL lines (ingest.rs: blanks and comments ignored, bad lines skipped)
//!     → add_request_url (scheme fix-up, WHATWG parse, host policy)
//!     → insert (host, path segments, query pairs)
//!     → classifier.rs (recognizer placeholder or literal, per token)
//!     → tree.rs (descend / create nodes, end-of-request bookkeeping)
//!
//! analyzed_routes()
//!     → render.rs (depth-first walk, one Route per terminator)
//! ```
//!
//! # Design Decisions
//! - Register recognizers before ingesting; nodes are never reclassified
//! - Single owner, synchronous. Wrap in a `Mutex` to share across threads
//! - Only URL parsing can fail; `insert` and rendering are total

pub mod classifier;
pub mod ingest;
pub mod node;
pub mod render;
pub mod tree;

pub use classifier::{Classification, SegmentClassifier};
pub use ingest::IngestStats;
pub use node::{NodeKind, Role, TreeNode};
pub use render::Route;
pub use tree::{RequestTree, Step};

use url::Url;

use crate::config::schema::{AnalyzerConfig, HostPolicy};
use crate::config::ConfigError;
use crate::error::AnalyzerError;
use crate::observability::metrics::{NODES_CREATED, ROUTES_RENDERED, URLS_INGESTED, URLS_REJECTED};
use crate::recognizer::{build_recognizers, PatternRecognizer};

/// Builds a generalized route model from concrete request URLs.
#[derive(Debug, Default)]
pub struct RequestAnalyzer {
    classifier: SegmentClassifier,
    tree: RequestTree,
    host_policy: HostPolicy,
}

impl RequestAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyzer with the configured recognizers registered in order.
    pub fn from_config(config: &AnalyzerConfig) -> Result<Self, ConfigError> {
        let mut analyzer = Self::new().with_host_policy(config.host_policy);
        for recognizer in
            build_recognizers(&config.recognizers).map_err(|e| ConfigError::Validation(vec![e]))?
        {
            analyzer.register_boxed(recognizer);
        }
        Ok(analyzer)
    }

    pub fn with_host_policy(mut self, policy: HostPolicy) -> Self {
        self.host_policy = policy;
        self
    }

    pub fn host_policy(&self) -> HostPolicy {
        self.host_policy
    }

    pub fn register_recognizer<R>(&mut self, recognizer: R)
    where
        R: PatternRecognizer + 'static,
    {
        self.register_boxed(Box::new(recognizer));
    }

    pub fn register_boxed(&mut self, recognizer: Box<dyn PatternRecognizer>) {
        self.classifier.register(recognizer);
    }

    pub fn recognizers(&self) -> &[Box<dyn PatternRecognizer>] {
        self.classifier.recognizers()
    }

    pub fn classify(&self, token: &str) -> Classification {
        self.classifier.classify(token)
    }

    pub fn tree(&self) -> &RequestTree {
        &self.tree
    }

    /// Parse a URL and insert it. A missing `http://`/`https://` scheme is
    /// assumed to be `http://`.
    pub fn add_request_url(&mut self, url: &str) -> Result<(), AnalyzerError> {
        let parsed = match parse_request_url(url) {
            Ok(parsed) => parsed,
            Err(e) => {
                metrics::counter!(URLS_REJECTED, "reason" => "parse").increment(1);
                return Err(e);
            }
        };

        if self.host_policy == HostPolicy::Strict {
            if let Some(expected) = self.tree.host() {
                if expected != parsed.host {
                    metrics::counter!(URLS_REJECTED, "reason" => "host").increment(1);
                    return Err(AnalyzerError::HostMismatch {
                        expected: expected.to_string(),
                        actual: parsed.host,
                    });
                }
            }
        }

        self.insert(&parsed.host, &parsed.path_segments, &parsed.query);
        Ok(())
    }

    /// Insert an already-split request. Empty path segments are dropped.
    ///
    /// The first request fixes the root host; later hosts are not checked
    /// here regardless of host policy.
    pub fn insert<S, N, V>(&mut self, host: &str, path_segments: &[S], query: &[(N, V)])
    where
        S: AsRef<str>,
        N: AsRef<str>,
        V: AsRef<str>,
    {
        let classifier = &self.classifier;
        let path_steps = path_segments.iter().filter_map(|segment| {
            let segment: &str = segment.as_ref();
            (!segment.is_empty()).then(|| Step::path(classifier.classify(segment)))
        });
        let query_steps = query.iter().map(|(name, value)| {
            let (name, value): (&str, &str) = (name.as_ref(), value.as_ref());
            Step::query(name, classifier.classify(value))
        });

        let created = self.tree.insert(host, path_steps.chain(query_steps));

        metrics::counter!(URLS_INGESTED).increment(1);
        metrics::counter!(NODES_CREATED).increment(created as u64);
        tracing::debug!(host, created, "Request inserted");
    }

    /// Route templates for everything ingested so far.
    pub fn analyzed_routes(&self) -> Vec<Route> {
        let routes = render::render(&self.tree);
        metrics::counter!(ROUTES_RENDERED).increment(routes.len() as u64);
        routes
    }
}

/// A request URL split into the pieces the tree consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRequest {
    pub host: String,
    pub path_segments: Vec<String>,
    pub query: Vec<(String, String)>,
}

/// Split a URL into host (with any non-default port), non-empty path
/// segments and decoded query pairs.
pub fn parse_request_url(raw: &str) -> Result<ParsedRequest, AnalyzerError> {
    let lower = raw.to_ascii_lowercase();
    let with_scheme = if lower.starts_with("http://") || lower.starts_with("https://") {
        raw.to_string()
    } else {
        format!("http://{}", raw)
    };

    let url = Url::parse(&with_scheme).map_err(|source| AnalyzerError::InvalidUrl {
        url: raw.to_string(),
        source,
    })?;

    let host = match (url.host_str(), url.port()) {
        (Some(host), Some(port)) => format!("{}:{}", host, port),
        (Some(host), None) => host.to_string(),
        (None, _) => return Err(AnalyzerError::MissingHost(raw.to_string())),
    };

    let path_segments = url
        .path()
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect();

    let query = url
        .query_pairs()
        .map(|(name, value)| (name.into_owned(), value.into_owned()))
        .collect();

    Ok(ParsedRequest {
        host,
        path_segments,
        query,
    })
}
