use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use selkit_core::SelkitError;
use serde::Serialize;

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl From<SelkitError> for AppError {
    fn from(err: SelkitError) -> Self {
        match err {
            SelkitError::ValueNotInOptions(_) | SelkitError::MalformedForm(_) => {
                AppError::BadRequest(err.to_string())
            }
            other => {
                tracing::error!("request failed: {}", other);
                AppError::Internal(other.to_string())
            }
        }
    }
}
