//! The persisted record envelope
//!
//! A `Record` is what the store writes: the raw payload exactly as the
//! capture script sent it, wrapped with the server-side receipt timestamp.
//! Records are immutable once written — there is no update or delete.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One ingested replay payload plus server-side receipt metadata.
///
/// `received_at` is assigned at admission time from the server wall clock
/// (unix seconds). Under a single serialized writer it is non-decreasing in
/// log order; nothing stronger is guaranteed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Unix timestamp (seconds) at which the server admitted the payload.
    pub received_at: i64,
    /// The payload as submitted. Arbitrary JSON; never validated.
    pub payload: Value,
}

impl Record {
    /// Wrap a payload with its receipt timestamp.
    pub fn new(received_at: i64, payload: Value) -> Self {
        Self {
            received_at,
            payload,
        }
    }
}
