use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use timetable_server::config::{FeedConfig, ServerConfig};
use timetable_server::query::QueryService;
use timetable_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let feed_config = FeedConfig::from_env();
    let server_config = ServerConfig::from_env();

    // Build the index up front so configuration errors surface at startup
    let timetable = QueryService::new(feed_config);
    match timetable.ensure_built().await {
        Ok(index) => info!(
            stations = index.station_count(),
            entries = index.entry_count(),
            "loaded timetable feeds"
        ),
        Err(e) => {
            error!(error = %e, "failed to load timetable feeds");
            return ExitCode::FAILURE;
        }
    }

    let state = AppState::new(timetable);
    let app = create_router(state, &server_config.static_dir);

    let addr = server_config.addr;
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(%addr, error = %e, "failed to bind");
            return ExitCode::FAILURE;
        }
    };

    info!("Station timetable listening on http://{addr}");
    info!("  GET  /timetable?station=..&direction=down|up");
    info!("  GET  /timetable/stations");
    info!("  GET  /timetable_debug");
    info!("  POST /timetable/reload");

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "server error");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
