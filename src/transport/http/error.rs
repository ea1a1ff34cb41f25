//! Maps [`ApiError`] to HTTP responses.
//!
//! Handlers return `Result<_, ApiError>`; this impl produces the status code
//! and the `{"error": "..."}` body. Internal details are logged server-side
//! and never reach the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::domain::error::ApiError;
use crate::transport::http::types::ErrorBody;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(detail) = &self {
            tracing::error!(error = %detail, "request failed");
        }

        let status = match &self {
            ApiError::MissingFields(_) | ApiError::NothingToUpdate => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
