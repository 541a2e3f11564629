use fulfillment_order_service::{app, config::Config};
use fulfillment_orders::OrderStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fulfillment_observability::init();

    let config = Config::from_env();
    let store = OrderStore::new();
    let app = app::build_app(store);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!(port = config.port, "order service listening");

    axum::serve(listener, app).await?;
    Ok(())
}
