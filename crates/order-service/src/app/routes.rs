use axum::{
    Json,
    extract::{Extension, Path},
    http::{StatusCode, header},
    response::IntoResponse,
};

use fulfillment_observability::metrics::{Exposition, MetricKind};
use fulfillment_orders::{CreateOrder, OrderId, OrderStore};

use crate::app::errors;

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "order-service",
    }))
}

pub async fn create_order(
    Extension(store): Extension<OrderStore>,
    Json(cmd): Json<CreateOrder>,
) -> axum::response::Response {
    match store.create(cmd) {
        Ok(order) => (StatusCode::CREATED, Json(order)).into_response(),
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn list_orders(
    Extension(store): Extension<OrderStore>,
) -> axum::response::Response {
    Json(store.list()).into_response()
}

pub async fn get_order(
    Extension(store): Extension<OrderStore>,
    Path(id): Path<OrderId>,
) -> axum::response::Response {
    match store.get(id) {
        Some(order) => Json(order).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "Order not found"),
    }
}

pub async fn metrics(Extension(store): Extension<OrderStore>) -> axum::response::Response {
    let counters = store.counters();

    let mut exp = Exposition::new();
    exp.family(
        "orders_total",
        "Total number of orders created",
        MetricKind::Counter,
    )
    .sample("orders_total", counters.total as f64);
    exp.family(
        "orders_processed_total",
        "Total number of orders successfully processed",
        MetricKind::Counter,
    )
    .sample("orders_processed_total", counters.processed as f64);
    exp.family(
        "orders_failed_total",
        "Total number of failed orders",
        MetricKind::Counter,
    )
    .sample("orders_failed_total", counters.failed as f64);
    exp.family(
        "orders_by_status",
        "Current orders by status",
        MetricKind::Gauge,
    )
    .labeled(
        "orders_by_status",
        &[("status", "pending")],
        counters.by_status.pending as f64,
    )
    .labeled(
        "orders_by_status",
        &[("status", "processing")],
        counters.by_status.processing as f64,
    )
    .labeled(
        "orders_by_status",
        &[("status", "completed")],
        counters.by_status.completed as f64,
    )
    .labeled(
        "orders_by_status",
        &[("status", "failed")],
        counters.by_status.failed as f64,
    );
    exp.family(
        "orders_revenue_total",
        "Total revenue from completed orders",
        MetricKind::Counter,
    )
    .sample("orders_revenue_total", counters.revenue);
    exp.family(
        "orders_processing_time_ms",
        "Average order processing time in milliseconds",
        MetricKind::Gauge,
    )
    .sample(
        "orders_processing_time_ms",
        counters.avg_processing_time_ms(),
    );
    exp.family("order_service_up", "Order service status", MetricKind::Gauge)
        .sample("order_service_up", 1.0);

    (
        [(header::CONTENT_TYPE, "text/plain")],
        exp.render(),
    )
        .into_response()
}
