//! HTTP application wiring (Axum router over the inventory store).
//!
//! - `routes.rs`: HTTP routes + handlers (one domain area, one file)
//! - `dto.rs`: request DTOs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{
    Extension, Router,
    routing::{get, post},
};
use tower::ServiceBuilder;

use fulfillment_inventory::InventoryStore;

pub mod dto;
pub mod errors;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
pub fn build_app(store: Arc<InventoryStore>) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/metrics", get(routes::metrics))
        .route("/inventory", get(routes::list_items))
        .route(
            "/inventory/:id",
            get(routes::get_item).put(routes::update_item),
        )
        .route("/inventory/:id/reserve", post(routes::reserve_item))
        .layer(ServiceBuilder::new().layer(Extension(store)))
}
