use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde_json::Value;

use fulfillment_core::{DomainError, DomainResult};
use fulfillment_observability::metrics::{Exposition, MetricKind};

use crate::app::errors;
use crate::app::state::GatewayState;

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "api-gateway",
    }))
}

pub async fn create_order(
    State(state): State<Arc<GatewayState>>,
    Json(body): Json<Value>,
) -> axum::response::Response {
    state.metrics.count_order_request();
    let url = format!("{}/orders", state.order_service_url);
    relay(&state, state.client.post(url).json(&body), "Order").await
}

pub async fn list_orders(State(state): State<Arc<GatewayState>>) -> axum::response::Response {
    state.metrics.count_order_request();
    let url = format!("{}/orders", state.order_service_url);
    relay(&state, state.client.get(url), "Order").await
}

pub async fn list_inventory(State(state): State<Arc<GatewayState>>) -> axum::response::Response {
    state.metrics.count_inventory_request();
    let url = format!("{}/inventory", state.inventory_service_url);
    relay(&state, state.client.get(url), "Inventory").await
}

pub async fn update_inventory(
    State(state): State<Arc<GatewayState>>,
    Path(item_id): Path<String>,
    Json(body): Json<Value>,
) -> axum::response::Response {
    state.metrics.count_inventory_request();
    let url = format!("{}/inventory/{}", state.inventory_service_url, item_id);
    relay(&state, state.client.put(url).json(&body), "Inventory").await
}

/// Send the downstream request and translate the outcome.
async fn relay(
    state: &GatewayState,
    request: reqwest::RequestBuilder,
    service: &str,
) -> axum::response::Response {
    match forward(request, service).await {
        Ok(response) => response,
        Err(err) => {
            state.metrics.count_error();
            errors::domain_error_to_response(err)
        }
    }
}

/// Relay a successful downstream response verbatim (status + body); any
/// transport failure or non-success status collapses into
/// [`DomainError::DownstreamUnavailable`] without surfacing detail.
async fn forward(
    request: reqwest::RequestBuilder,
    service: &str,
) -> DomainResult<axum::response::Response> {
    let response = request.send().await.map_err(|err| {
        tracing::warn!(service, error = %err, "downstream request failed");
        DomainError::downstream(service)
    })?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!(service, status = status.as_u16(), "downstream returned failure status");
        return Err(DomainError::downstream(service));
    }

    let body = response.bytes().await.map_err(|err| {
        tracing::warn!(service, error = %err, "downstream body read failed");
        DomainError::downstream(service)
    })?;

    Ok((
        StatusCode::from_u16(status.as_u16()).unwrap_or(StatusCode::OK),
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response())
}

pub async fn metrics(State(state): State<Arc<GatewayState>>) -> axum::response::Response {
    let snapshot = state.metrics.snapshot();

    let mut exp = Exposition::new();
    exp.family(
        "gateway_requests_total",
        "Total number of requests to the API gateway",
        MetricKind::Counter,
    )
    .sample("gateway_requests_total", snapshot.total_requests as f64);
    exp.family(
        "gateway_requests_by_service",
        "Total requests routed to each service",
        MetricKind::Counter,
    )
    .labeled(
        "gateway_requests_by_service",
        &[("service", "order")],
        snapshot.order_requests as f64,
    )
    .labeled(
        "gateway_requests_by_service",
        &[("service", "inventory")],
        snapshot.inventory_requests as f64,
    );
    exp.family(
        "gateway_errors_total",
        "Total number of gateway errors",
        MetricKind::Counter,
    )
    .sample("gateway_errors_total", snapshot.errors as f64);
    exp.family(
        "gateway_request_duration_ms",
        "Average request duration in milliseconds",
        MetricKind::Gauge,
    )
    .sample("gateway_request_duration_ms", snapshot.avg_duration_ms);
    exp.family("gateway_up", "Gateway service status", MetricKind::Gauge)
        .sample("gateway_up", 1.0);

    (
        [(header::CONTENT_TYPE, "text/plain")],
        exp.render(),
    )
        .into_response()
}
