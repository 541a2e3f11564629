//! Environment-supplied configuration.

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_ORDER_SERVICE_URL: &str = "http://localhost:3001";
const DEFAULT_INVENTORY_SERVICE_URL: &str = "http://localhost:3002";

/// Listen port plus downstream base URLs.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub order_service_url: String,
    pub inventory_service_url: String,
}

impl Config {
    /// Read `PORT`, `ORDER_SERVICE_URL`, and `INVENTORY_SERVICE_URL` from the
    /// environment, falling back to the defaults.
    pub fn from_env() -> Self {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(%raw, "PORT is not a valid port number; using default");
                DEFAULT_PORT
            }),
            Err(_) => DEFAULT_PORT,
        };

        Self {
            port,
            order_service_url: std::env::var("ORDER_SERVICE_URL")
                .unwrap_or_else(|_| DEFAULT_ORDER_SERVICE_URL.to_string()),
            inventory_service_url: std::env::var("INVENTORY_SERVICE_URL")
                .unwrap_or_else(|_| DEFAULT_INVENTORY_SERVICE_URL.to_string()),
        }
    }
}
