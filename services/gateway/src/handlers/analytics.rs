//! Analytics endpoints — thin wrappers over the aggregation functions.
//!
//! Each handler re-reads the full log and computes its view fresh; the
//! O(total records) cost per query is the documented trade-off of keeping
//! the log as the only state.

use super::scan_records;
use crate::error::AppError;
use crate::state::AppState;
use analytics::countries::{CountryCount, country_counts};
use analytics::heatmap::{HeatPoint, heatmap_points};
use analytics::modes::{ModeCount, mode_distribution};
use analytics::rating::{PlayerSeries, rating_timeseries};
use axum::{Json, extract::State};

/// `GET /analytics/countries` — rounds per country, descending.
pub async fn countries(State(state): State<AppState>) -> Result<Json<Vec<CountryCount>>, AppError> {
    Ok(Json(country_counts(&scan_records(&state)?)))
}

/// `GET /analytics/heatmap` — bucketed round coordinates.
pub async fn heatmap(State(state): State<AppState>) -> Result<Json<Vec<HeatPoint>>, AppError> {
    Ok(Json(heatmap_points(&scan_records(&state)?)))
}

/// `GET /analytics/mode` — game-mode distribution.
pub async fn mode(State(state): State<AppState>) -> Result<Json<Vec<ModeCount>>, AppError> {
    Ok(Json(mode_distribution(&scan_records(&state)?)))
}

/// `GET /analytics/rating` — per-player rating timeseries.
pub async fn rating(State(state): State<AppState>) -> Result<Json<Vec<PlayerSeries>>, AppError> {
    Ok(Json(rating_timeseries(&scan_records(&state)?)))
}
