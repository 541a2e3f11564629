//! Environment-supplied configuration.

const DEFAULT_PORT: u16 = 3002;

/// Listen configuration for the inventory service.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
}

impl Config {
    /// Read `PORT` from the environment, falling back to the default.
    pub fn from_env() -> Self {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(%raw, "PORT is not a valid port number; using default");
                DEFAULT_PORT
            }),
            Err(_) => DEFAULT_PORT,
        };
        Self { port }
    }
}
