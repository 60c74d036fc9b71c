//! Startup orchestration.
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - The worker pool size comes from config, so the runtime is built by hand
//! - The listener binds last, once everything it serves is ready

use std::io;
use std::net::{AddrParseError, SocketAddr};

use thiserror::Error;
use tokio::net::TcpListener;
use tokio::runtime::Runtime;

use crate::config::{GatewayConfig, ServerConfig};
use crate::http::HttpServer;
use crate::lifecycle::{signals, Shutdown};
use crate::observability::metrics;
use crate::rates::FetchError;

/// Errors that abort startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid address: {0}")]
    Address(#[from] AddrParseError),

    #[error("Metrics setup failed: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    #[error("Upstream client setup failed: {0}")]
    Upstream(#[from] FetchError),
}

/// Build the bounded worker pool that runs every request.
pub fn build_runtime(config: &ServerConfig) -> io::Result<Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.worker_threads)
        .thread_name("gateway-worker")
        .enable_all()
        .build()
}

/// Start every subsystem and serve until a termination signal.
pub async fn run(config: GatewayConfig) -> Result<(), StartupError> {
    if config.observability.metrics_enabled {
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    if config.upstream.api_key.is_empty() {
        tracing::warn!("No upstream API key configured; fetches will likely fail");
    }

    let server = HttpServer::new(config)?;
    let listener = TcpListener::bind(&server.config().server.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    signals::spawn_signal_handler(shutdown.clone());

    server.run(listener, shutdown.subscribe()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_uses_configured_pool() {
        let config = ServerConfig {
            worker_threads: 2,
            ..ServerConfig::default()
        };
        let runtime = build_runtime(&config).unwrap();
        assert_eq!(runtime.metrics().num_workers(), 2);
    }
}
