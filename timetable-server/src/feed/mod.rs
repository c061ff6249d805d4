//! Timetable feed files.
//!
//! Parses the comma-delimited timetables published by the railway
//! operators into per-station [`ScheduleEntry`](crate::domain::ScheduleEntry)
//! lists. Two incompatible column layouts are in circulation; see
//! [`FeedFormat`].

mod error;
mod format;
mod reader;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::debug;

use crate::domain::Direction;

pub use error::FeedError;
pub use format::{
    ARRIVAL_SUFFIX, DEPARTURE_SUFFIX, FeedFormat, StationEntries, detect_format, is_event_column,
    entries_from_table, split_event_column,
};
pub use reader::{
    FeedRow, FeedTable, HEADER_MARKER, Record, cell_or_empty, is_sequence_number, read_table,
};

/// Result of parsing one feed file.
#[derive(Debug, Clone)]
pub struct ParsedFeed {
    /// Layout the file was recognized as.
    pub format: FeedFormat,
    /// Number of data rows read.
    pub rows: usize,
    /// Station name → entries, in file order (not yet sorted).
    pub stations: StationEntries,
}

impl ParsedFeed {
    /// Total number of entries across all stations.
    pub fn entry_count(&self) -> usize {
        self.stations.values().map(Vec::len).sum()
    }
}

/// Parse one feed file, tagging every entry with `direction`.
pub fn parse_feed(path: &Path, direction: Direction) -> Result<ParsedFeed, FeedError> {
    let file = File::open(path).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => FeedError::NotFound {
            path: path.to_path_buf(),
        },
        _ => FeedError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let table = read_table(BufReader::new(file), path)?;
    let (format, stations) = entries_from_table(&table, direction);

    let parsed = ParsedFeed {
        format,
        rows: table.rows.len(),
        stations,
    };

    debug!(
        path = %path.display(),
        %direction,
        format = format.as_str(),
        rows = parsed.rows,
        stations = parsed.stations.len(),
        entries = parsed.entry_count(),
        "parsed feed"
    );

    Ok(parsed)
}
