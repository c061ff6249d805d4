//! Data transfer objects for web requests and responses.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::domain::TimetableItem;

/// Query parameters for a station timetable.
#[derive(Debug, Deserialize)]
pub struct TimetableRequest {
    /// Station name as it appears in the feeds
    pub station: String,

    /// `down`/`up` (or `kudari`/`nobori`); anything else means both
    pub direction: Option<String>,
}

/// Timetable for one station.
#[derive(Debug, Serialize)]
pub struct TimetableResponse {
    /// Station that was asked for
    pub station: String,

    /// Direction filter as supplied by the caller
    pub direction: Option<String>,

    /// Number of items
    pub count: usize,

    /// Departures, or arrivals when the station has no departures
    pub items: Vec<TimetableItem>,
}

/// All station names.
#[derive(Debug, Serialize)]
pub struct StationListResponse {
    /// Number of stations
    pub count: usize,

    /// Station names, ascending
    pub stations: Vec<String>,
}

/// Outcome of a successful reload.
#[derive(Debug, Serialize)]
pub struct ReloadResponse {
    /// Stations in the new index
    pub station_count: usize,

    /// Entries in the new index
    pub entry_count: usize,

    /// When the new index was built
    pub built_at: DateTime<Local>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
