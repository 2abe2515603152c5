use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::store::StoreError;

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Response type for unhealthy status
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UnhealthyResponse {
    pub status: String,
    pub error: String,
}

/// Request-shape errors, rejected before the store is called
///
/// Store failures never take this path: the key-value routes report them
/// in the response text instead (see [`in_band`]).
#[derive(Debug)]
pub enum ApiError {
    /// Missing or malformed query parameter
    InvalidQueryParam(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::InvalidQueryParam(msg) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid query parameter: {}", msg),
            ),
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidQueryParam(rejection.body_text())
    }
}

/// Format a store failure as the text body of a successful response
///
/// The failure is logged with its debug representation before being
/// flattened to `ERROR: {kind}: {message}`.
pub fn in_band(operation: &str, key: &str, err: &StoreError) -> String {
    tracing::error!(operation, key, error = ?err, "Store operation failed: {}", err);
    format!("ERROR: {}: {}", err.kind_name(), err)
}
