//! Game-mode distribution
//!
//! Classifies each record's game object with the ordered mode strategies
//! (explicit competitive mode, plain mode, rated flag) and tallies per
//! label.

use crate::tally::Tally;
use serde::Serialize;
use types::payload;
use types::record::Record;

/// One mode label and the number of records classified under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModeCount {
    pub mode: String,
    pub count: u64,
}

/// Tally one mode label per record, in first-seen order.
///
/// A record whose payload has no resolvable game object (not a JSON object
/// in any recognized shape) is skipped rather than counted as `"unknown"`.
pub fn mode_distribution(records: &[Record]) -> Vec<ModeCount> {
    let mut tally = Tally::new();

    for record in records {
        let Some(game) = payload::game_object(&record.payload) else {
            continue;
        };
        tally.bump(payload::mode_label(game).to_owned());
    }

    tally
        .into_first_seen()
        .into_iter()
        .map(|(mode, count)| ModeCount { mode, count })
        .collect()
}
