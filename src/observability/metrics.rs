//! Metric names and descriptions.
//!
//! # Metrics
//! - `request_analyzer_urls_ingested_total` (counter): URLs added to the tree
//! - `request_analyzer_urls_rejected_total` (counter): URLs refused, by reason
//! - `request_analyzer_nodes_created_total` (counter): tree nodes created
//! - `request_analyzer_routes_rendered_total` (counter): routes emitted by rendering
//!
//! # Design Decisions
//! - Recorded through the `metrics` facade only; no exporter is installed
//!   here, so embedding applications choose their own recorder

pub const URLS_INGESTED: &str = "request_analyzer_urls_ingested_total";
pub const URLS_REJECTED: &str = "request_analyzer_urls_rejected_total";
pub const NODES_CREATED: &str = "request_analyzer_nodes_created_total";
pub const ROUTES_RENDERED: &str = "request_analyzer_routes_rendered_total";

/// Register descriptions with whichever recorder is installed.
pub fn describe_metrics() {
    metrics::describe_counter!(URLS_INGESTED, "URLs added to the request tree");
    metrics::describe_counter!(URLS_REJECTED, "URLs refused during ingestion");
    metrics::describe_counter!(NODES_CREATED, "Request tree nodes created");
    metrics::describe_counter!(ROUTES_RENDERED, "Route templates emitted by rendering");
}
