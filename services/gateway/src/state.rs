use crate::ingest::Ingestor;
use persistence::log::ReplayLog;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Shared handle to the append-only replay log.
    pub log: Arc<ReplayLog>,
    pub ingestor: Ingestor,
}

impl AppState {
    pub fn new(log: Arc<ReplayLog>, dedup_by_game_id: bool) -> Self {
        Self {
            ingestor: Ingestor::new(Arc::clone(&log), dedup_by_game_id),
            log,
        }
    }
}
