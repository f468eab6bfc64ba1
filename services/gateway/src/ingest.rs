//! Ingest admission
//!
//! Validates one raw upload body, decides the dedup outcome, stamps the
//! receipt time and hands the record to the log. Exactly one line is
//! appended on success, zero on `Ignored` or any failure — a failed append
//! means the record is lost, with no retry and no buffering.

use crate::error::AppError;
use persistence::log::ReplayLog;
use serde_json::Value;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use types::payload;
use types::record::Record;

/// Outcome of admitting one upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestOutcome {
    /// A new record was appended to the log.
    Saved,
    /// An already-stored `gameId` matched; nothing was written.
    Ignored,
}

/// Admission front of the replay log, shared by handle.
#[derive(Clone)]
pub struct Ingestor {
    log: Arc<ReplayLog>,
    dedup_by_game_id: bool,
}

impl Ingestor {
    pub fn new(log: Arc<ReplayLog>, dedup_by_game_id: bool) -> Self {
        Self {
            log,
            dedup_by_game_id,
        }
    }

    /// Admit one raw request body.
    pub fn ingest(&self, raw: &[u8]) -> Result<IngestOutcome, AppError> {
        if raw.is_empty() {
            return Err(AppError::EmptyPayload);
        }
        let payload: Value =
            serde_json::from_slice(raw).map_err(|err| AppError::InvalidPayload(err.to_string()))?;
        if is_empty_payload(&payload) {
            return Err(AppError::EmptyPayload);
        }

        if self.dedup_by_game_id {
            if let Some(game_id) = payload::game_id(&payload) {
                if self.already_stored(game_id)? {
                    tracing::debug!(game_id, "duplicate replay ignored");
                    return Ok(IngestOutcome::Ignored);
                }
            }
        }

        let record = Record::new(unix_now(), payload);
        self.log.append(&record)?;
        tracing::debug!(received_at = record.received_at, "replay stored");
        Ok(IngestOutcome::Saved)
    }

    /// Full-log scan for a matching `gameId`. O(total records) per upload;
    /// best-effort dedup, not an index.
    fn already_stored(&self, game_id: &str) -> Result<bool, AppError> {
        let scan = self.log.read_all()?;
        Ok(scan
            .records
            .iter()
            .any(|record| payload::game_id(&record.payload) == Some(game_id)))
    }
}

/// `null`, `{}`, `[]` and `""` parse fine but carry nothing worth storing.
fn is_empty_payload(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
        _ => false,
    }
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs() as i64)
        .unwrap_or(0)
}

// ── Tests ───────────────────────────────────────────────────────────
