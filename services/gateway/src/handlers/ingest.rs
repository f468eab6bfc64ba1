use crate::error::AppError;
use crate::ingest::IngestOutcome;
use crate::state::AppState;
use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// `POST /upload` — admit one replay payload from the capture script.
///
/// The body is taken raw so admission owns all parsing: a broken body must
/// map to the gateway's own error shape, not axum's rejection.
pub async fn upload(State(state): State<AppState>, body: Bytes) -> Result<Response, AppError> {
    match state.ingestor.ingest(&body)? {
        IngestOutcome::Saved => Ok((
            StatusCode::CREATED,
            Json(json!({"status": "ok", "msg": "saved"})),
        )
            .into_response()),
        IngestOutcome::Ignored => {
            Ok((StatusCode::OK, Json(json!({"status": "ignored"}))).into_response())
        }
    }
}
