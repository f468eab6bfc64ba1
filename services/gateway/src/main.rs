mod config;
mod error;
mod handlers;
mod ingest;
mod router;
mod state;

use config::Config;
use persistence::log::ReplayLog;
use router::create_router;
use state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = Config::from_env();
    tracing::info!(
        data_file = %config.data_file.display(),
        dedup = config.dedup_by_game_id,
        "Starting replay tracker gateway"
    );

    let log = Arc::new(ReplayLog::open(&config.data_file)?);
    let state = AppState::new(Arc::clone(&log), config.dedup_by_game_id);

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;

    log.sync()?;
    tracing::info!("Replay log synced, shutting down");
    Ok(())
}
