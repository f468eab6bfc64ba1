//! Geographic heatmap buckets
//!
//! Rounds are bucketed on a grid of 5-decimal-place coordinates (about a
//! meter at the equator), which collapses repeated captures of the same
//! panorama into one weighted point.

use crate::tally::Tally;
use serde::Serialize;
use types::payload;
use types::record::Record;

/// Scale factor for 5 decimal places of coordinate precision.
const GRID_SCALE: f64 = 100_000.0;

/// One grid cell and the number of rounds that fell into it. `lat`/`lng`
/// are the rounded cell coordinates, not any particular round's exact
/// position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatPoint {
    pub lat: f64,
    pub lng: f64,
    pub count: u64,
}

/// Bucket all rounds with both coordinates into grid cells.
///
/// Output order is first-seen and carries no meaning; the consumer plots
/// every point anyway.
pub fn heatmap_points(records: &[Record]) -> Vec<HeatPoint> {
    let mut tally = Tally::new();

    for record in records {
        let Some(game) = payload::game_object(&record.payload) else {
            continue;
        };
        for round in payload::rounds(game) {
            if let Some((lat, lng)) = payload::round_coords(round) {
                tally.bump(grid_cell(lat, lng));
            }
        }
    }

    tally
        .into_first_seen()
        .into_iter()
        .map(|((lat_cell, lng_cell), count)| HeatPoint {
            lat: lat_cell as f64 / GRID_SCALE,
            lng: lng_cell as f64 / GRID_SCALE,
            count,
        })
        .collect()
}

fn grid_cell(lat: f64, lng: f64) -> (i64, i64) {
    (
        (lat * GRID_SCALE).round() as i64,
        (lng * GRID_SCALE).round() as i64,
    )
}
