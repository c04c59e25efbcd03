//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! analyzer, config, CLI produce:
//!     → logging.rs (structured log events on stderr)
//!     → metrics.rs (counters through the metrics facade)
//! ```
//!
//! # Design Decisions
//! - Structured fields on every event (token, host, value, role)
//! - The library never installs a subscriber or recorder; the binary does

pub mod logging;
pub mod metrics;
