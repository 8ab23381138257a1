//! Error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or malformed request fields
    #[error("{0}")]
    Validation(String),

    /// Training preconditions unmet: dataset missing or too small
    #[error("{0}")]
    InsufficientData(String),

    /// Training preconditions unmet: need at least 2 distinct labels
    #[error("{0}")]
    InsufficientClasses(String),

    /// Predict called before any model was trained
    #[error("Model not found. Train first!")]
    ModelNotFound,

    /// Anything else: I/O, deserialization, inconsistent dataset shapes
    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_)
            | AppError::InsufficientData(_)
            | AppError::InsufficientClasses(_)
            | AppError::ModelNotFound => StatusCode::BAD_REQUEST,
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}
