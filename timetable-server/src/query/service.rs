//! Per-station timetable lookups.

use std::sync::Arc;

use tracing::debug;

use crate::cache::TimetableCache;
use crate::config::FeedConfig;
use crate::domain::{Direction, Event, ScheduleEntry, TimetableItem};
use crate::feed::FeedError;
use crate::index::StationIndex;

use super::summary::DiagnosticSummary;

/// Answers timetable queries from the cached index.
///
/// Every query builds the index first if it has not been built yet.
pub struct QueryService {
    cache: TimetableCache,
}

impl QueryService {
    /// Create a service over the given feeds. Nothing is read until the
    /// first query or [`QueryService::reload`].
    pub fn new(config: FeedConfig) -> Self {
        Self {
            cache: TimetableCache::new(config),
        }
    }

    /// All station names, ascending.
    pub async fn list_station_names(&self) -> Result<Vec<String>, FeedError> {
        let index = self.cache.ensure_built().await?;
        Ok(index.station_names().map(str::to_string).collect())
    }

    /// Timetable at `station`, optionally restricted to one direction.
    ///
    /// Unknown stations give an empty result. Departures are returned when
    /// there are any; otherwise arrivals.
    pub async fn lookup(
        &self,
        station: &str,
        direction: Option<Direction>,
    ) -> Result<Vec<TimetableItem>, FeedError> {
        let index = self.cache.ensure_built().await?;
        let items = select_items(index.entries(station), direction);
        debug!(station, ?direction, count = items.len(), "timetable lookup");
        Ok(items)
    }

    /// Counts and samples for operational inspection.
    pub async fn diagnostic_summary(&self) -> Result<DiagnosticSummary, FeedError> {
        let index = self.cache.ensure_built().await?;
        Ok(DiagnosticSummary::from_index(&index))
    }

    /// Rebuild the index from the feed files.
    pub async fn reload(&self) -> Result<Arc<StationIndex>, FeedError> {
        self.cache.reload().await
    }

    /// Build the index now unless it already exists.
    pub async fn ensure_built(&self) -> Result<Arc<StationIndex>, FeedError> {
        self.cache.ensure_built().await
    }

    /// Underlying cache.
    pub fn cache(&self) -> &TimetableCache {
        &self.cache
    }
}

/// Apply the direction filter and the departure-preferred fallback.
///
/// The fallback is decided once over the whole filtered set: if any
/// departure survives the filter, only departures are returned, even when
/// some direction has arrivals only.
pub fn select_items(entries: &[ScheduleEntry], direction: Option<Direction>) -> Vec<TimetableItem> {
    let (departures, arrivals): (Vec<&ScheduleEntry>, Vec<&ScheduleEntry>) = entries
        .iter()
        .filter(|e| direction.is_none_or(|d| e.direction == d))
        .partition(|e| e.event == Event::Departure);

    let chosen = if departures.is_empty() {
        arrivals
    } else {
        departures
    };

    chosen.into_iter().map(ScheduleEntry::to_item).collect()
}
