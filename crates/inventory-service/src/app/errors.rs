use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use fulfillment_core::DomainError;

/// Map a store-level outcome to the wire error contract.
pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(_) => {
            json_error(StatusCode::BAD_REQUEST, "Missing required fields")
        }
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "Item not found"),
        DomainError::InsufficientStock { .. } => {
            json_error(StatusCode::BAD_REQUEST, "Insufficient inventory")
        }
        DomainError::DownstreamUnavailable(service) => json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("{service} service unavailable"),
        ),
        DomainError::Internal(_) => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}

pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": message.into(),
        })),
    )
        .into_response()
}
