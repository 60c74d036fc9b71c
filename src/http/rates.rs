//! `GET /api` handler.

use std::time::Instant;

use axum::{
    extract::{Extension, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::http::request::RequestContext;
use crate::http::response::RatesResponse;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::pipeline::Mode;

pub async fn get_rates(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
) -> Response {
    let start = Instant::now();
    let mode = Mode::from_context(&ctx);
    let label = mode.label();

    match state.pipeline.run(&ctx, mode).await {
        Ok(rates) => {
            tracing::info!(
                request_id = %ctx.id(),
                remote_addr = %ctx.remote_display(),
                count = rates.len(),
                "Request {} completed",
                ctx.id()
            );
            metrics::record_request(label, StatusCode::OK.as_u16(), start);
            RatesResponse(rates).into_response()
        }
        Err(e) => {
            let status = StatusCode::INTERNAL_SERVER_ERROR;
            tracing::error!(
                request_id = %ctx.id(),
                remote_addr = %ctx.remote_display(),
                error = %e,
                "Request {} failed with code {}",
                ctx.id(),
                status.as_u16()
            );
            metrics::record_request(label, status.as_u16(), start);
            e.into_response()
        }
    }
}
