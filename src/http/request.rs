//! Request context and parameter extraction.
//!
//! # Responsibilities
//! - Generate a correlation id for every inbound request
//! - Split the query string into named parameters
//! - Attach the resulting `RequestContext` to the request extensions
//!
//! # Design Decisions
//! - The id is assigned before any other work so every log line can carry it
//! - Query values are not percent-decoded; they pass through literally

use std::collections::HashMap;
use std::net::SocketAddr;

use axum::{
    body::Body,
    extract::ConnectInfo,
    http::Request,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

/// Correlation identifier of one inbound request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestId(String);

impl RequestId {
    /// Generate a new random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Per-request state, created on arrival and dropped after the response.
#[derive(Debug, Clone)]
pub struct RequestContext {
    id: RequestId,
    remote_addr: Option<SocketAddr>,
    params: HashMap<String, String>,
}

impl RequestContext {
    /// Build a context with a fresh id from the raw query string.
    pub fn new(remote_addr: Option<SocketAddr>, query: Option<&str>) -> Self {
        Self {
            id: RequestId::new(),
            remote_addr,
            params: query.map(parse_query).unwrap_or_default(),
        }
    }

    pub fn id(&self) -> &RequestId {
        &self.id
    }

    /// Remote address for log lines.
    pub fn remote_display(&self) -> String {
        self.remote_addr
            .map(|addr| addr.to_string())
            .unwrap_or_else(|| "unknown".to_string())
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    pub fn params(&self) -> &HashMap<String, String> {
        &self.params
    }
}

/// Split a raw query string into parameters.
///
/// Segments split on `&`, then on the first `=`. Later duplicates replace
/// earlier ones. Empty segments are ignored; a segment without `=` maps to
/// an empty value.
pub fn parse_query(query: &str) -> HashMap<String, String> {
    query
        .split('&')
        .filter(|segment| !segment.is_empty())
        .map(|segment| match segment.split_once('=') {
            Some((name, value)) => (name.to_string(), value.to_string()),
            None => (segment.to_string(), String::new()),
        })
        .collect()
}

/// Middleware that assigns the request context ahead of the handlers.
pub async fn request_context(mut req: Request<Body>, next: Next) -> Response {
    let remote_addr = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);

    let ctx = RequestContext::new(remote_addr, req.uri().query());

    tracing::info!(
        request_id = %ctx.id(),
        remote_addr = %ctx.remote_display(),
        params = ctx.params().len(),
        "Request {} received from {}",
        ctx.id(),
        ctx.remote_display()
    );

    req.extensions_mut().insert(ctx);
    next.run(req).await
}
