//! Player rating timeseries
//!
//! Walks every team roster in every record and collects one
//! `(receivedAt, rating)` point per player appearance with a resolvable
//! rating. Each player's series is sorted by timestamp, since log order
//! only matches receipt order under a single serialized writer.

use serde::Serialize;
use std::collections::HashMap;
use types::payload;
use types::record::Record;

/// One observation of a player's rating.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingPoint {
    pub ts: i64,
    pub rating: f64,
}

/// A player's rating over time, points ascending by timestamp.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerSeries {
    pub nick: String,
    pub points: Vec<RatingPoint>,
}

/// Build one series per distinct player identifier, in first-seen order.
///
/// Players without a resolvable rating in a given record contribute no
/// point for it; players with neither `nick` nor `playerId` share the
/// `"unknown"` series.
pub fn rating_timeseries(records: &[Record]) -> Vec<PlayerSeries> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut series: Vec<PlayerSeries> = Vec::new();

    for record in records {
        let Some(game) = payload::game_object(&record.payload) else {
            continue;
        };
        for team in payload::teams(game) {
            for player in payload::players(team) {
                let Some(rating) = payload::player_rating(player) else {
                    continue;
                };
                let nick = payload::player_name(player);
                let slot = *index.entry(nick.clone()).or_insert_with(|| {
                    series.push(PlayerSeries {
                        nick,
                        points: Vec::new(),
                    });
                    series.len() - 1
                });
                series[slot].points.push(RatingPoint {
                    ts: record.received_at,
                    rating,
                });
            }
        }
    }

    for entry in &mut series {
        entry.points.sort_by_key(|point| point.ts);
    }
    series
}
