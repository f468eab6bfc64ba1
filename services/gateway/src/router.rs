use crate::handlers::{analytics, ingest, records};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    let analytics_routes = Router::new()
        .route("/countries", get(analytics::countries))
        .route("/heatmap", get(analytics::heatmap))
        .route("/mode", get(analytics::mode))
        .route("/rating", get(analytics::rating));

    Router::new()
        .route("/", get(records::status))
        .route("/upload", post(ingest::upload))
        .route("/records", get(records::list))
        .nest("/analytics", analytics_routes)
        // The capture script posts from the game's origin.
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ── Tests ───────────────────────────────────────────────────────────
