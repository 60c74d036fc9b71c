//! Metrics collection and exposition.
//!
//! # Metrics
//! - `gateway_requests_total` (counter): requests by mode and status
//! - `gateway_request_duration_seconds` (histogram): pipeline latency by mode
//! - `gateway_upstream_fetches_total` (counter): fetches by symbol and outcome;
//!   symbols outside the configured list share the `other` label
//! - `gateway_upstream_fetch_duration_seconds` (histogram): fetch latency

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape listener.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record one finished request.
pub fn record_request(mode: &'static str, status: u16, start: Instant) {
    metrics::counter!(
        "gateway_requests_total",
        "mode" => mode,
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!("gateway_request_duration_seconds", "mode" => mode)
        .record(start.elapsed().as_secs_f64());
}

/// Label shared by symbols outside the configured list.
pub const OTHER_SYMBOL: &str = "other";

/// `symbol` if it is one of `known`, [`OTHER_SYMBOL`] otherwise.
pub fn symbol_label(symbol: &str, known: &[String]) -> String {
    if known.iter().any(|s| s == symbol) {
        symbol.to_string()
    } else {
        OTHER_SYMBOL.to_string()
    }
}

/// Record one upstream fetch under a label from [`symbol_label`].
pub fn record_fetch(symbol: String, outcome: &'static str, start: Instant) {
    metrics::counter!(
        "gateway_upstream_fetches_total",
        "symbol" => symbol,
        "outcome" => outcome
    )
    .increment(1);
    metrics::histogram!("gateway_upstream_fetch_duration_seconds")
        .record(start.elapsed().as_secs_f64());
}
