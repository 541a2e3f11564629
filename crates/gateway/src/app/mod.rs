//! HTTP application wiring (Axum router in front of the downstream
//! services).
//!
//! - `state.rs`: shared client, downstream targets, gateway counters
//! - `routes.rs`: forwarding handlers + gateway-local endpoints
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post, put},
};
use tower::ServiceBuilder;

pub mod errors;
pub mod routes;
pub mod state;

use state::GatewayState;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
pub fn build_app(state: Arc<GatewayState>) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/metrics", get(routes::metrics))
        .route(
            "/api/orders",
            post(routes::create_order).get(routes::list_orders),
        )
        .route("/api/inventory", get(routes::list_inventory))
        .route("/api/inventory/:itemId", put(routes::update_inventory))
        .layer(
            ServiceBuilder::new().layer(axum::middleware::from_fn_with_state(
                Arc::clone(&state),
                crate::middleware::track_request,
            )),
        )
        .with_state(state)
}
