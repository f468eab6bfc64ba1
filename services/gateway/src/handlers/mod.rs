pub mod analytics;
pub mod ingest;
pub mod records;

use crate::error::AppError;
use crate::state::AppState;
use types::record::Record;

/// Fresh scan of the full log. Every endpoint reads from scratch — no
/// derived state is kept between calls. Dropped corrupt lines are logged
/// here and nowhere else; they never fail a request.
pub(crate) fn scan_records(state: &AppState) -> Result<Vec<Record>, AppError> {
    let scan = state.log.read_all()?;
    if !scan.corrupt.is_empty() {
        tracing::warn!(
            dropped = scan.corrupt.len(),
            "skipped corrupt replay log lines"
        );
    }
    Ok(scan.records)
}
