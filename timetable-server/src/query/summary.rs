//! Diagnostic summary of a built index.

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::domain::ScheduleEntry;
use crate::index::StationIndex;

/// Maximum number of station names in [`DiagnosticSummary::sample_stations`].
pub const SAMPLE_STATION_LIMIT: usize = 30;

/// Maximum number of entries in [`DiagnosticSummary::sample_items`].
pub const SAMPLE_ITEM_LIMIT: usize = 5;

/// Operational overview of the current index.
///
/// Sample entries keep their `event` tag, unlike lookup results.
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticSummary {
    pub station_count: usize,
    pub entry_count: usize,
    pub sample_stations: Vec<String>,
    pub sample_station: Option<String>,
    pub sample_items: Vec<ScheduleEntry>,
    pub built_at: DateTime<Local>,
}

impl DiagnosticSummary {
    /// Summarize an index. The sample station is the first by name.
    pub fn from_index(index: &StationIndex) -> Self {
        let sample_stations: Vec<String> = index
            .station_names()
            .take(SAMPLE_STATION_LIMIT)
            .map(str::to_string)
            .collect();
        let sample_station = sample_stations.first().cloned();
        let sample_items: Vec<ScheduleEntry> = sample_station
            .as_deref()
            .map(|name| {
                index
                    .entries(name)
                    .iter()
                    .take(SAMPLE_ITEM_LIMIT)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        Self {
            station_count: index.station_count(),
            entry_count: index.entry_count(),
            sample_stations,
            sample_station,
            sample_items,
            built_at: index.built_at(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Direction, Event};
    use crate::feed::{FeedFormat, ParsedFeed, StationEntries};

    fn index_with(stations: usize, entries_per_station: usize) -> StationIndex {
        let mut map = StationEntries::new();
        for s in 0..stations {
            let entries = (0..entries_per_station)
                .map(|i| ScheduleEntry {
                    time: format!("{:02}:00", i % 24),
                    destination: "End".into(),
                    train_type: "local".into(),
                    note: String::new(),
                    direction: Direction::Down,
                    event: Event::Arrival,
                })
                .collect();
            map.insert(format!("S{s:03}"), entries);
        }
        StationIndex::from_feeds([ParsedFeed {
            format: FeedFormat::EventColumns,
            rows: 0,
            stations: map,
        }])
    }

    #[test]
    fn samples_are_bounded() {
        let summary = DiagnosticSummary::from_index(&index_with(40, 8));

        assert_eq!(summary.station_count, 40);
        assert_eq!(summary.entry_count, 320);
        assert_eq!(summary.sample_stations.len(), SAMPLE_STATION_LIMIT);
        assert_eq!(summary.sample_stations[0], "S000");
        assert_eq!(summary.sample_station.as_deref(), Some("S000"));
        assert_eq!(summary.sample_items.len(), SAMPLE_ITEM_LIMIT);
    }

    #[test]
    fn sample_items_keep_event() {
        let summary = DiagnosticSummary::from_index(&index_with(1, 1));
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["sample_items"][0]["event"], "arrival");
    }

    #[test]
    fn empty_index() {
        let summary = DiagnosticSummary::from_index(&index_with(0, 0));
        assert_eq!(summary.station_count, 0);
        assert!(summary.sample_stations.is_empty());
        assert_eq!(summary.sample_station, None);
        assert!(summary.sample_items.is_empty());
    }
}
