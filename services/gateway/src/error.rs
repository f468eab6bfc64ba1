use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use persistence::log::StoreError;
use serde_json::json;
use thiserror::Error;

/// Central error type for the gateway application
///
/// Validation failures surface as client errors, storage failures as server
/// errors; neither is retried. Corrupt lines found while reading never
/// reach this type — they are absorbed by the scan.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("empty payload")]
    EmptyPayload,

    #[error("invalid json: {0}")]
    InvalidPayload(String),

    #[error("storage failure: {0}")]
    Storage(#[from] StoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::EmptyPayload | AppError::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "status": "error",
            "msg": self.to_string(),
        }));

        (status, body).into_response()
    }
}
