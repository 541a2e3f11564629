//! HTTP application wiring (Axum router over the order store).
//!
//! - `routes.rs`: HTTP routes + handlers (one domain area, one file)
//! - `errors.rs`: consistent error responses

use axum::{
    Extension, Router,
    routing::{get, post},
};
use tower::ServiceBuilder;

use fulfillment_orders::OrderStore;

pub mod errors;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
pub fn build_app(store: OrderStore) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/metrics", get(routes::metrics))
        .route("/orders", post(routes::create_order).get(routes::list_orders))
        .route("/orders/:id", get(routes::get_order))
        .layer(ServiceBuilder::new().layer(Extension(store)))
}
