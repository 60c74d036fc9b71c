//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Pipeline and fetcher produce:
//!     → logging.rs (structured log events, correlation id as a field)
//!     → metrics.rs (request and upstream counters, latency histograms)
//!
//! Consumers:
//!     → stdout (fmt layer with timestamps and thread names)
//!     → Prometheus scrape endpoint (optional)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through every log line of a request
//! - Metric calls are no-ops until a recorder is installed

pub mod logging;
pub mod metrics;
