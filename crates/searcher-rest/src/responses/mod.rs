//! API response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use searcher_core::{ErrorResponse, SearcherError};
use tracing::error;

/// Application error type for Axum.
#[derive(Debug)]
pub struct AppError(pub SearcherError);

impl From<SearcherError> for AppError {
    fn from(err: SearcherError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        error!(status = %status.as_u16(), code = self.0.error_code(), "{}", self.0);

        let body = Json(ErrorResponse::from_error(&self.0));
        (status, body).into_response()
    }
}

/// Result type for Axum handlers.
pub type ApiResult<T> = Result<Json<T>, AppError>;

/// Helper to create a success response.
pub fn ok<T>(data: T) -> ApiResult<T> {
    Ok(Json(data))
}
