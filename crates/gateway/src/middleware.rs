use std::sync::Arc;
use std::time::Instant;

use axum::{extract::State, middleware::Next, response::Response};
use tracing::Instrument;
use uuid::Uuid;

use crate::app::state::GatewayState;

/// Count every request and record its duration once the response is ready.
///
/// Runs for the whole router, so `/health` and `/metrics` count too, exactly
/// like the forwarded routes.
pub async fn track_request(
    State(state): State<Arc<GatewayState>>,
    req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let request_id = Uuid::now_v7();
    let started = Instant::now();
    state.metrics.count_request();

    let span = tracing::debug_span!(
        "gateway_request",
        %request_id,
        method = %req.method(),
        path = %req.uri().path(),
    );
    let response = next.run(req).instrument(span).await;

    state
        .metrics
        .record_duration(started.elapsed().as_secs_f64() * 1000.0);
    response
}
