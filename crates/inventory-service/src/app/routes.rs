use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Path},
    http::header,
    response::IntoResponse,
};

use fulfillment_inventory::{InventoryStore, ItemId, UpdateItem};
use fulfillment_observability::metrics::{Exposition, MetricKind};

use crate::app::{dto, errors};

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "inventory-service",
    }))
}

pub async fn list_items(
    Extension(store): Extension<Arc<InventoryStore>>,
) -> axum::response::Response {
    Json(store.list()).into_response()
}

pub async fn get_item(
    Extension(store): Extension<Arc<InventoryStore>>,
    Path(id): Path<ItemId>,
) -> axum::response::Response {
    match store.get(id) {
        Some(item) => Json(item).into_response(),
        None => errors::domain_error_to_response(fulfillment_core::DomainError::NotFound),
    }
}

pub async fn update_item(
    Extension(store): Extension<Arc<InventoryStore>>,
    Path(id): Path<ItemId>,
    Json(patch): Json<UpdateItem>,
) -> axum::response::Response {
    match store.update(id, patch) {
        Ok(item) => Json(item).into_response(),
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn reserve_item(
    Extension(store): Extension<Arc<InventoryStore>>,
    Path(id): Path<ItemId>,
    Json(body): Json<dto::ReserveRequest>,
) -> axum::response::Response {
    match store.reserve(id, body.quantity) {
        Ok(item) => Json(item).into_response(),
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn metrics(
    Extension(store): Extension<Arc<InventoryStore>>,
) -> axum::response::Response {
    let snapshot = store.snapshot();

    let mut exp = Exposition::new();
    exp.family(
        "inventory_checks_total",
        "Total number of inventory checks",
        MetricKind::Counter,
    )
    .sample("inventory_checks_total", snapshot.checks as f64);
    exp.family(
        "inventory_updates_total",
        "Total number of inventory updates",
        MetricKind::Counter,
    )
    .sample("inventory_updates_total", snapshot.updates as f64);
    exp.family(
        "inventory_total_value",
        "Total value of all inventory",
        MetricKind::Gauge,
    )
    .sample("inventory_total_value", snapshot.summary.total_value);
    exp.family(
        "inventory_low_stock_alerts",
        "Number of items with low stock",
        MetricKind::Gauge,
    )
    .sample(
        "inventory_low_stock_alerts",
        snapshot.summary.low_stock as f64,
    );
    exp.family(
        "inventory_out_of_stock",
        "Number of items out of stock",
        MetricKind::Gauge,
    )
    .sample("inventory_out_of_stock", snapshot.summary.out_of_stock as f64);
    exp.family(
        "inventory_item_quantity",
        "Current quantity of each inventory item",
        MetricKind::Gauge,
    );
    for item in &snapshot.items {
        exp.labeled(
            "inventory_item_quantity",
            &[("item", &item.name), ("id", &item.id.to_string())],
            item.quantity as f64,
        );
    }
    exp.family(
        "inventory_item_reserved",
        "Currently reserved units of each inventory item",
        MetricKind::Gauge,
    );
    for item in &snapshot.items {
        exp.labeled(
            "inventory_item_reserved",
            &[("item", &item.name), ("id", &item.id.to_string())],
            item.reserved as f64,
        );
    }
    exp.family(
        "inventory_service_up",
        "Inventory service status",
        MetricKind::Gauge,
    )
    .sample("inventory_service_up", 1.0);

    (
        [(header::CONTENT_TYPE, "text/plain")],
        exp.render(),
    )
        .into_response()
}
