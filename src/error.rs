use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

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

/// Custom error type for API endpoints
///
/// Maps errors to HTTP status codes and formats them as JSON responses.
/// Unmatched paths never reach this type; they fall through to axum's
/// default 404.
#[derive(Debug)]
pub enum ApiError {
    /// The dataset behind a chart endpoint has no entries
    EmptyDataset(&'static str),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::EmptyDataset(chart) => (
                StatusCode::SERVICE_UNAVAILABLE,
                format!("No data loaded for {} chart", chart),
            ),
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}
