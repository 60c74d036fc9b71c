//! Response shaping.
//!
//! # Design Decisions
//! - Success bodies are rendered by `render_rates`, not serde, to keep the
//!   exact wire format
//! - Every failure maps to 500 with a fixed plain-text body; clients never
//!   see which symbol or which layer failed
//! - Content type and CORS headers are added by the router, for all responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::pipeline::PipelineError;
use crate::rates::{render_rates, ExchangeRate};

/// Body of every failed request.
pub const UNEXPECTED_ERROR: &str = "Unexpected error";

/// Successful pipeline output.
#[derive(Debug)]
pub struct RatesResponse(pub Vec<ExchangeRate>);

impl IntoResponse for RatesResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, render_rates(&self.0)).into_response()
    }
}

impl IntoResponse for PipelineError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, UNEXPECTED_ERROR).into_response()
    }
}
