use std::sync::Arc;

use fulfillment_gateway::{app, app::state::GatewayState, config::Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fulfillment_observability::init();

    let config = Config::from_env();
    let state = Arc::new(GatewayState::new(
        config.order_service_url.clone(),
        config.inventory_service_url.clone(),
    ));
    let app = app::build_app(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!(
        port = config.port,
        order_service = %config.order_service_url,
        inventory_service = %config.inventory_service_url,
        "api gateway listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
