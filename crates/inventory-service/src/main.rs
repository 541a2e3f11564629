use std::sync::Arc;

use fulfillment_inventory::{InventoryStore, Item};
use fulfillment_inventory_service::{app, config::Config};

/// Catalog the service starts with; there is no persistence, so this is the
/// whole universe of items until someone updates them.
fn default_catalog() -> Vec<Item> {
    let seed = [
        (1, "Laptop", 50, 999.99),
        (2, "Mouse", 200, 29.99),
        (3, "Keyboard", 150, 79.99),
        (4, "Monitor", 75, 299.99),
        (5, "Headphones", 100, 149.99),
    ];

    seed.into_iter()
        .map(|(id, name, quantity, price)| Item {
            id,
            name: name.to_string(),
            quantity,
            price,
            reserved: 0,
        })
        .collect()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fulfillment_observability::init();

    let config = Config::from_env();
    let store = Arc::new(InventoryStore::with_items(default_catalog()));
    let app = app::build_app(store);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!(port = config.port, "inventory service listening");

    axum::serve(listener, app).await?;
    Ok(())
}
