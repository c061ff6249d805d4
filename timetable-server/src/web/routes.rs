//! HTTP route handlers.

use std::path::Path;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tracing::error;

use crate::domain::Direction;
use crate::feed::FeedError;
use crate::query::DiagnosticSummary;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
///
/// `static_dir` is the path to the static frontend directory.
pub fn create_router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/timetable", get(timetable))
        .route("/timetable_debug", get(timetable_debug))
        .route("/timetable/stations", get(list_stations))
        .route("/timetable/reload", post(reload))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Timetable for one station.
async fn timetable(
    State(state): State<AppState>,
    Query(req): Query<TimetableRequest>,
) -> Result<Json<TimetableResponse>, AppError> {
    let direction = Direction::parse_filter(req.direction.as_deref());
    let items = state.timetable.lookup(&req.station, direction).await?;

    Ok(Json(TimetableResponse {
        station: req.station,
        direction: req.direction,
        count: items.len(),
        items,
    }))
}

/// Index overview for operators.
async fn timetable_debug(
    State(state): State<AppState>,
) -> Result<Json<DiagnosticSummary>, AppError> {
    Ok(Json(state.timetable.diagnostic_summary().await?))
}

/// All known station names.
async fn list_stations(
    State(state): State<AppState>,
) -> Result<Json<StationListResponse>, AppError> {
    let stations = state.timetable.list_station_names().await?;
    Ok(Json(StationListResponse {
        count: stations.len(),
        stations,
    }))
}

/// Rebuild the index from the feed files.
async fn reload(State(state): State<AppState>) -> Result<Json<ReloadResponse>, AppError> {
    let index = state.timetable.reload().await?;
    Ok(Json(ReloadResponse {
        station_count: index.station_count(),
        entry_count: index.entry_count(),
        built_at: index.built_at(),
    }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    Internal { message: String },
}

impl From<FeedError> for AppError {
    fn from(e: FeedError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        error!(%status, "{message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FeedConfig, SourceFeed};
    use crate::query::QueryService;
    use tempfile::{TempDir, tempdir};

    fn state_with_feed(body: Option<&str>) -> (TempDir, AppState) {
        let dir = tempdir().unwrap();
        if let Some(body) = body {
            std::fs::write(dir.path().join("down.csv"), body).unwrap();
        }
        let config = FeedConfig::new(
            dir.path(),
            vec![SourceFeed::new("down.csv", Direction::Down)],
        );
        (dir, AppState::new(QueryService::new(config)))
    }

    const FEED: &str = "#property,種別,行先,備考,A_発,B_着\n1,local,B,,06:00,06:20\n";

    #[tokio::test]
    async fn timetable_echoes_request() {
        let (_dir, state) = state_with_feed(Some(FEED));

        let Json(resp) = timetable(
            State(state),
            Query(TimetableRequest {
                station: "A".into(),
                direction: Some("kudari".into()),
            }),
        )
        .await
        .unwrap();

        assert_eq!(resp.station, "A");
        assert_eq!(resp.direction.as_deref(), Some("kudari"));
        assert_eq!(resp.count, 1);
        assert_eq!(resp.items[0].time, "06:00");
    }

    #[tokio::test]
    async fn unrecognized_direction_is_not_an_error() {
        let (_dir, state) = state_with_feed(Some(FEED));

        let Json(resp) = timetable(
            State(state),
            Query(TimetableRequest {
                station: "B".into(),
                direction: Some("sideways".into()),
            }),
        )
        .await
        .unwrap();

        assert_eq!(resp.count, 1);
        assert_eq!(resp.items[0].time, "06:20");
    }

    #[tokio::test]
    async fn missing_feed_is_internal_error() {
        let (_dir, state) = state_with_feed(None);

        let err = list_stations(State(state)).await.unwrap_err();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn stations_and_reload() {
        let (_dir, state) = state_with_feed(Some(FEED));

        let Json(list) = list_stations(State(state.clone())).await.unwrap();
        assert_eq!(list.stations, vec!["A", "B"]);
        assert_eq!(list.count, 2);

        let Json(reloaded) = reload(State(state)).await.unwrap();
        assert_eq!(reloaded.station_count, 2);
        assert_eq!(reloaded.entry_count, 2);
    }

    #[tokio::test]
    async fn debug_summary() {
        let (_dir, state) = state_with_feed(Some(FEED));

        let Json(summary) = timetable_debug(State(state)).await.unwrap();
        assert_eq!(summary.station_count, 2);
        assert_eq!(summary.sample_station.as_deref(), Some("A"));
    }

    #[test]
    fn router_builds() {
        let (_dir, state) = state_with_feed(Some(FEED));
        let _router = create_router(state, Path::new("static"));
    }
}
