//! Country frequency across all rounds
//!
//! One tally bump per round with a panorama country code; codes are
//! normalized to lowercase so `BR` and `br` land in the same bucket.

use crate::tally::Tally;
use serde::Serialize;
use types::payload;
use types::record::Record;

/// One country and the number of rounds that landed in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryCount {
    pub country: String,
    pub count: u64,
}

/// Tally rounds per country across all records, descending by count.
///
/// Rounds without a `panorama.countryCode` are skipped. Equal counts keep
/// first-seen order.
pub fn country_counts(records: &[Record]) -> Vec<CountryCount> {
    let mut tally = Tally::new();

    for record in records {
        let Some(game) = payload::game_object(&record.payload) else {
            continue;
        };
        for round in payload::rounds(game) {
            if let Some(code) = payload::round_country(round) {
                tally.bump(code.to_lowercase());
            }
        }
    }

    tally
        .into_by_count_desc()
        .into_iter()
        .map(|(country, count)| CountryCount { country, count })
        .collect()
}
