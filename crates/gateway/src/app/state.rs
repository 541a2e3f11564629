//! Shared gateway state: HTTP client, downstream targets, counters.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// How many recent request durations are kept for averaging; the oldest is
/// dropped first once the window is full.
const DURATION_WINDOW: usize = 1000;

/// Downstream targets plus the shared HTTP client and counters. The gateway
/// holds no business state.
#[derive(Debug)]
pub struct GatewayState {
    pub client: reqwest::Client,
    pub order_service_url: String,
    pub inventory_service_url: String,
    pub metrics: GatewayMetrics,
}

impl GatewayState {
    pub fn new(
        order_service_url: impl Into<String>,
        inventory_service_url: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            order_service_url: order_service_url.into(),
            inventory_service_url: inventory_service_url.into(),
            metrics: GatewayMetrics::default(),
        }
    }
}

/// Gateway counters, safe under concurrent increment. Everything is
/// increment-only except the bounded duration window.
#[derive(Debug, Default)]
pub struct GatewayMetrics {
    total_requests: AtomicU64,
    order_requests: AtomicU64,
    inventory_requests: AtomicU64,
    errors: AtomicU64,
    durations_ms: Mutex<VecDeque<f64>>,
}

/// Point-in-time view of the counters for a scrape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GatewayMetricsSnapshot {
    pub total_requests: u64,
    pub order_requests: u64,
    pub inventory_requests: u64,
    pub errors: u64,
    pub avg_duration_ms: f64,
}

impl GatewayMetrics {
    pub fn count_request(&self) {
        self.total_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn count_order_request(&self) {
        self.order_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn count_inventory_request(&self) {
        self.inventory_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn count_error(&self) {
        self.errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Record one request duration, dropping the oldest once the window is
    /// full.
    pub fn record_duration(&self, millis: f64) {
        let mut window = self.durations_ms.lock().unwrap();
        if window.len() == DURATION_WINDOW {
            window.pop_front();
        }
        window.push_back(millis);
    }

    pub fn snapshot(&self) -> GatewayMetricsSnapshot {
        let window = self.durations_ms.lock().unwrap();
        let avg_duration_ms = if window.is_empty() {
            0.0
        } else {
            window.iter().sum::<f64>() / window.len() as f64
        };

        GatewayMetricsSnapshot {
            total_requests: self.total_requests.load(Ordering::Relaxed),
            order_requests: self.order_requests.load(Ordering::Relaxed),
            inventory_requests: self.inventory_requests.load(Ordering::Relaxed),
            errors: self.errors.load(Ordering::Relaxed),
            avg_duration_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_duration_is_zero_with_no_requests() {
        let metrics = GatewayMetrics::default();
        assert_eq!(metrics.snapshot().avg_duration_ms, 0.0);
    }

    #[test]
    fn duration_window_drops_oldest_first() {
        let metrics = GatewayMetrics::default();
        for _ in 0..DURATION_WINDOW {
            metrics.record_duration(100.0);
        }
        // A full second batch pushes every 100 out of the window.
        for _ in 0..DURATION_WINDOW {
            metrics.record_duration(10.0);
        }

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.avg_duration_ms, 10.0);
    }

    #[test]
    fn counters_accumulate() {
        let metrics = GatewayMetrics::default();
        metrics.count_request();
        metrics.count_request();
        metrics.count_order_request();
        metrics.count_inventory_request();
        metrics.count_error();

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.total_requests, 2);
        assert_eq!(snapshot.order_requests, 1);
        assert_eq!(snapshot.inventory_requests, 1);
        assert_eq!(snapshot.errors, 1);
    }
}
