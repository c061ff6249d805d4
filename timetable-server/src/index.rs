//! Station index: every configured feed merged into station → entries.
//!
//! Each station's entries are concatenated in feed order and then stably
//! sorted by `(direction, time, event, destination)`. Entries with equal
//! keys keep their merge order. The index is immutable once built.

use std::collections::BTreeMap;

use chrono::{DateTime, Local};
use tracing::info;

use crate::config::FeedConfig;
use crate::domain::ScheduleEntry;
use crate::feed::{FeedError, ParsedFeed, parse_feed};

/// Immutable station → sorted entries mapping.
#[derive(Debug, Clone)]
pub struct StationIndex {
    stations: BTreeMap<String, Vec<ScheduleEntry>>,
    built_at: DateTime<Local>,
}

impl StationIndex {
    /// Merge parsed feeds, in order, into one sorted index.
    pub fn from_feeds(feeds: impl IntoIterator<Item = ParsedFeed>) -> Self {
        let mut stations: BTreeMap<String, Vec<ScheduleEntry>> = BTreeMap::new();

        for feed in feeds {
            for (station, entries) in feed.stations {
                stations.entry(station).or_default().extend(entries);
            }
        }

        for entries in stations.values_mut() {
            entries.sort_by(ScheduleEntry::canonical_cmp);
        }

        Self {
            stations,
            built_at: Local::now(),
        }
    }

    /// Entries at a station; empty for unknown stations.
    pub fn entries(&self, station: &str) -> &[ScheduleEntry] {
        self.stations
            .get(station)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Station names in ascending order.
    pub fn station_names(&self) -> impl Iterator<Item = &str> {
        self.stations.keys().map(String::as_str)
    }

    /// Number of distinct stations.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Total number of entries across all stations.
    pub fn entry_count(&self) -> usize {
        self.stations.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// When this index was built.
    pub fn built_at(&self) -> DateTime<Local> {
        self.built_at
    }

    /// Whether two indexes hold the same entries in the same order,
    /// ignoring build time.
    pub fn same_contents(&self, other: &Self) -> bool {
        self.stations == other.stations
    }
}

/// Parse every configured feed and merge them.
///
/// All-or-nothing: the first feed that fails aborts the build.
pub fn build_index(config: &FeedConfig) -> Result<StationIndex, FeedError> {
    let feeds = config
        .sources
        .iter()
        .map(|source| parse_feed(&config.resolve(source), source.direction))
        .collect::<Result<Vec<_>, _>>()?;

    let index = StationIndex::from_feeds(feeds);

    info!(
        feeds = config.sources.len(),
        stations = index.station_count(),
        entries = index.entry_count(),
        "built station index"
    );

    Ok(index)
}
