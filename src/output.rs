//! Route list formatting.

use crate::analyzer::Route;
use crate::config::schema::OutputFormat;

/// Encode routes for printing. Text output ends each route with a newline;
/// JSON output is a single array with no trailing newline.
pub fn format_routes(routes: &[Route], format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string(routes),
        OutputFormat::Pretty => serde_json::to_string_pretty(routes),
        OutputFormat::Text => Ok(routes.iter().map(|r| format!("{}\n", r)).collect()),
    }
}
