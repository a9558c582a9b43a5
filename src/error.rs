use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;
use crate::validation::ValidationError;

/// Service-wide error taxonomy. Every failure a caller can observe is one
/// of these kinds; the transport layer picks the status code by kind.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Transaction with id {0} not found")]
    NotFound(String),

    #[error("Transaction with id {0} already exists")]
    Duplicate(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Duplicate(_) => StatusCode::CONFLICT,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable code carried in the error body.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "TRX_NOT_FOUND",
            AppError::Duplicate(_) => "TRX_DUPLICATE",
            AppError::Validation(_) => "TRX_INVALID",
            AppError::BadRequest(_) => "INVALID_ARGUMENT",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => AppError::NotFound(id),
            StoreError::Duplicate(id) => AppError::Duplicate(id),
            StoreError::InvalidPagination { .. } => AppError::BadRequest(err.to_string()),
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err.message)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({
            "timestamp": Utc::now(),
            "code": self.code(),
            "message": self.to_string(),
        }));

        (status, body).into_response()
    }
}
