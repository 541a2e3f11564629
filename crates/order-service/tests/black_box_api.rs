use std::time::Duration;

use reqwest::StatusCode;
use serde_json::json;

use fulfillment_order_service::app;
use fulfillment_orders::{OrderStore, ProcessingDelays};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(store: OrderStore) -> Self {
        // Build the app (same router as prod), but bind to an ephemeral port.
        let app = app::build_app(store);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn fast_store() -> OrderStore {
    OrderStore::with_delays(ProcessingDelays {
        to_processing: Duration::from_millis(20),
        to_completed: Duration::from_millis(20),
    })
}

fn laptop_order() -> serde_json::Value {
    json!({
        "customerId": "c1",
        "items": [{ "itemId": 1, "name": "Laptop", "quantity": 1, "price": 999.99 }],
        "totalAmount": 999.99,
    })
}

async fn get_order_eventually(
    client: &reqwest::Client,
    base_url: &str,
    id: u64,
    status: &str,
) -> serde_json::Value {
    // The lifecycle runs on scheduled transitions; poll until the order
    // reaches the expected status.
    for _ in 0..100 {
        let res = client
            .get(format!("{}/orders/{}", base_url, id))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);

        let order: serde_json::Value = res.json().await.unwrap();
        if order["status"] == status {
            return order;
        }

        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    panic!("order {id} did not reach status {status} within timeout");
}

#[tokio::test]
async fn health_reports_the_service_name() {
    let srv = TestServer::spawn(fast_store()).await;

    let client = reqwest::Client::new();
    let res = client
        .get(format!("{}/health", srv.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "order-service");
}

#[tokio::test]
async fn create_order_runs_the_full_lifecycle() {
    let srv = TestServer::spawn(fast_store()).await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/orders", srv.base_url))
        .json(&laptop_order())
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: serde_json::Value = res.json().await.unwrap();
    assert_eq!(created["status"], "pending");
    assert_eq!(created["customerId"], "c1");
    let id = created["id"].as_u64().unwrap();

    let completed = get_order_eventually(&client, &srv.base_url, id, "completed").await;
    assert_eq!(completed["totalAmount"], 999.99);

    let metrics = client
        .get(format!("{}/metrics", srv.base_url))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(metrics.contains("orders_total 1"));
    assert!(metrics.contains("orders_processed_total 1"));
    assert!(metrics.contains("orders_revenue_total 999.99"));
    assert!(metrics.contains("orders_by_status{status=\"completed\"} 1"));
    assert!(metrics.contains("order_service_up 1"));
}

#[tokio::test]
async fn missing_fields_are_rejected_without_a_record() {
    let srv = TestServer::spawn(fast_store()).await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/orders", srv.base_url))
        .json(&json!({ "customerId": "c1", "totalAmount": 10.0 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "Missing required fields");

    let orders: serde_json::Value = client
        .get(format!("{}/orders", srv.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(orders.as_array().unwrap().len(), 0);

    let metrics = client
        .get(format!("{}/metrics", srv.base_url))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(metrics.contains("orders_failed_total 1"));
    assert!(metrics.contains("orders_total 0"));
}

#[tokio::test]
async fn unknown_order_is_404() {
    let srv = TestServer::spawn(fast_store()).await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/orders/999", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "Order not found");
}

#[tokio::test]
async fn list_returns_orders_in_creation_order() {
    let srv = TestServer::spawn(fast_store()).await;
    let client = reqwest::Client::new();

    for _ in 0..3 {
        let res = client
            .post(format!("{}/orders", srv.base_url))
            .json(&laptop_order())
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    let orders: serde_json::Value = client
        .get(format!("{}/orders", srv.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let ids: Vec<u64> = orders
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn metrics_scrape_is_idempotent_once_settled() {
    let srv = TestServer::spawn(fast_store()).await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/orders", srv.base_url))
        .json(&laptop_order())
        .send()
        .await
        .unwrap();
    let id = res.json::<serde_json::Value>().await.unwrap()["id"]
        .as_u64()
        .unwrap();

    // Wait for the lifecycle to settle so no background mutation runs
    // between the two scrapes.
    get_order_eventually(&client, &srv.base_url, id, "completed").await;

    let first = client
        .get(format!("{}/metrics", srv.base_url))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    let second = client
        .get(format!("{}/metrics", srv.base_url))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(first, second);
}
