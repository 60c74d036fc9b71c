//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with the rates handler
//! - Wire up middleware (tracing, request context, response headers)
//! - Serve on a bound listener until shutdown

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, StatusCode},
    middleware,
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::config::GatewayConfig;
use crate::http::rates::get_rates;
use crate::http::request::request_context;
use crate::lifecycle::shutdown;
use crate::pipeline::RatesPipeline;
use crate::rates::{AlphaVantageClient, FetchError, RateSource};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: RatesPipeline,
}

/// HTTP server for the gateway.
pub struct HttpServer {
    router: Router,
    config: Arc<GatewayConfig>,
}

impl HttpServer {
    /// Create a server fetching from the configured upstream.
    pub fn new(config: GatewayConfig) -> Result<Self, FetchError> {
        let source = Arc::new(AlphaVantageClient::new(&config.upstream)?);
        Ok(Self::with_source(config, source))
    }

    /// Create a server over any rate source.
    pub fn with_source(config: GatewayConfig, source: Arc<dyn RateSource>) -> Self {
        let state = AppState {
            pipeline: RatesPipeline::new(source, config.pipeline.symbols.clone()),
        };

        Self {
            router: Self::build_router(state),
            config: Arc::new(config),
        }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/api", get(get_rates))
            .fallback(|| async { (StatusCode::NOT_FOUND, "Not found") })
            .with_state(state)
            .layer(middleware::from_fn(request_context))
            .layer(SetResponseHeaderLayer::overriding(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            ))
            .layer(SetResponseHeaderLayer::overriding(
                header::ACCESS_CONTROL_ALLOW_ORIGIN,
                HeaderValue::from_static("*"),
            ))
            .layer(TraceLayer::new_for_http())
    }

    /// A clone of the router, for driving requests without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Serve on `listener` until `shutdown_rx` fires, then drain in-flight
    /// requests.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown_rx: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let app = self
            .router
            .into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown::wait(shutdown_rx))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
