use super::scan_records;
use crate::error::AppError;
use crate::state::AppState;
use axum::{Json, extract::State};
use serde_json::{Value, json};
use types::record::Record;

/// `GET /records` — the full persisted history, oldest first.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Record>>, AppError> {
    Ok(Json(scan_records(&state)?))
}

/// `GET /` — small status document for humans poking at the service.
pub async fn status(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let records = scan_records(&state)?;
    Ok(Json(json!({
        "service": "replay-tracker",
        "records": records.len(),
        "dataFile": state.log.path().display().to_string(),
    })))
}
