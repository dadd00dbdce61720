//! Agenda Clock - meeting page timers and rolling metric date windows
//!
//! This is the main entry point for the agenda-clock service.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use agenda_clock::{
    api::create_router,
    config::Config,
    state::AppState,
    tasks::timer_ticker_task,
    utils::{shutdown_signal, SystemClock},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("agenda_clock={},tower_http=info", config.log_level()))
        .init();

    info!("Starting agenda-clock server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, tick={}ms, frequency={}",
          config.host, config.port, config.tick_ms, config.frequency);

    let state = Arc::new(AppState::new(
        config.port,
        config.host.clone(),
        config.tick_interval(),
        config.frequency,
        Arc::new(SystemClock),
    )?);

    // Start the timer ticker background task
    let ticker_state = Arc::clone(&state);
    tokio::spawn(async move {
        timer_ticker_task(ticker_state).await;
    });

    let app = create_router(state);

    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  PUT  /agenda               - Replace the agenda");
    info!("  POST /pages/:page_id/start - Move to an agenda page");
    info!("  POST /pause, /resume       - Pause or resume the meeting");
    info!("  GET  /timer                - Active page timers");
    info!("  GET  /summary              - Time spent per page");
    info!("  GET  /window, PUT /window  - Metrics date window");
    info!("  POST /window/step          - Page the metrics window");
    info!("  GET  /status               - Meeting status");
    info!("  GET  /health               - Health check");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}
