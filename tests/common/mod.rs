//! Shared helpers for integration tests.

#![allow(dead_code)]

use request_analyzer::recognizer::{CategoryRecognizer, IntRecognizer, UuidRecognizer};
use request_analyzer::{RequestAnalyzer, Route};

pub const HOST: &str = "www.example.com";

pub const CATEGORIES: [&str; 5] = ["computers", "tvs", "bikes", "toys", "toasters"];

/// Recognizers available to scenarios, registered in the order given.
#[derive(Debug, Clone, Copy)]
pub enum Builtin {
    Uuid,
    Int,
    Category,
}

pub fn analyzer_with(recognizers: &[Builtin]) -> RequestAnalyzer {
    let mut analyzer = RequestAnalyzer::new();
    for recognizer in recognizers {
        match recognizer {
            Builtin::Uuid => analyzer.register_recognizer(UuidRecognizer::new()),
            Builtin::Int => analyzer.register_recognizer(IntRecognizer::new()),
            Builtin::Category => {
                analyzer.register_recognizer(CategoryRecognizer::from_values(CATEGORIES))
            }
        }
    }
    analyzer
}

/// Ingest a demo file through the line reader and render. Every URL line
/// must be accepted.
pub fn analyze_demo(recognizers: &[Builtin], content: &str) -> Vec<Route> {
    let mut analyzer = analyzer_with(recognizers);
    let stats = analyzer.ingest_reader(content.as_bytes(), "demo", true).unwrap();
    assert!(stats.ingested > 0);
    assert_eq!(stats.skipped, 0);
    analyzer.analyzed_routes()
}

/// Ingest every URL and render.
pub fn analyze<'a>(
    recognizers: &[Builtin],
    urls: impl IntoIterator<Item = &'a str>,
) -> Vec<Route> {
    let mut analyzer = analyzer_with(recognizers);
    for url in urls {
        analyzer.add_request_url(url).unwrap();
    }
    analyzer.analyzed_routes()
}

pub fn paths(routes: &[Route]) -> Vec<&str> {
    routes.iter().map(|r| r.path.as_str()).collect()
}
