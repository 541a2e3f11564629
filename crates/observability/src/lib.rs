//! Tracing and metrics plumbing shared by every fulfillment service.

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filters, layers).
pub mod tracing;

/// Prometheus text exposition encoding.
pub mod metrics;
