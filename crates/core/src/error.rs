//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic business failures (validation, unknown
/// ids, stock shortfalls). Transport concerns stay in the service crates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Required input was missing or malformed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The requested record does not exist.
    #[error("not found")]
    NotFound,

    /// A reservation asked for more units than are available.
    #[error("insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: u64, available: u64 },

    /// A downstream service could not be reached or answered with a failure.
    #[error("{0} service unavailable")]
    DownstreamUnavailable(String),

    /// An unexpected fault inside a store operation.
    #[error("internal failure: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn downstream(service: impl Into<String>) -> Self {
        Self::DownstreamUnavailable(service.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn downstream_error_renders_service_name() {
        let err = DomainError::downstream("Order");
        assert_eq!(err.to_string(), "Order service unavailable");
    }

    #[test]
    fn insufficient_stock_carries_both_quantities() {
        let err = DomainError::InsufficientStock {
            requested: 10,
            available: 5,
        };
        assert_eq!(
            err.to_string(),
            "insufficient stock: requested 10, available 5"
        );
    }
}
