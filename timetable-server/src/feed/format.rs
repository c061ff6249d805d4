//! The two column layouts published upstream, and their conversion into
//! schedule entries.
//!
//! - **Event columns** (Format A): each station has `<station>_発`
//!   (departure) and/or `<station>_着` (arrival) columns, with service
//!   metadata in named columns (`種別`, `行先`, `備考`).
//! - **Station columns** (Format B): the first two columns are the service
//!   category and an origin→destination description, and every further
//!   column is a station whose cells are departure times.
//!
//! Which layout a file uses is decided by [`detect_format`], a pure function
//! of the header.

use std::collections::HashMap;

use crate::domain::{Direction, Event, ScheduleEntry, is_no_time, normalize_time};

use super::reader::{FeedTable, Record, cell_or_empty};

/// Column-name suffix marking a departure time.
pub const DEPARTURE_SUFFIX: &str = "_発";

/// Column-name suffix marking an arrival time.
pub const ARRIVAL_SUFFIX: &str = "_着";

/// Service category column (event-column layout).
const TRAIN_TYPE_COLUMN: &str = "種別";

/// Destination column names (event-column layout). Publishers use both
/// spellings.
const DESTINATION_COLUMNS: [&str; 2] = ["行先", "行き先"];

/// Remarks column (event-column layout).
const NOTE_COLUMN: &str = "備考";

/// Position of the service category in the station-column layout.
const GRID_TRAIN_TYPE_IDX: usize = 0;

/// Position of the origin→destination description in the station-column
/// layout.
const GRID_DESTINATION_IDX: usize = 1;

/// First station column in the station-column layout.
const GRID_FIRST_STATION_IDX: usize = 2;

/// Per-file result: station name → entries in row order.
pub type StationEntries = HashMap<String, Vec<ScheduleEntry>>;

/// Column layout of a feed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedFormat {
    /// Format A: `<station>_発` / `<station>_着` columns.
    EventColumns,
    /// Format B: one column per station, departures only.
    StationColumns,
}

impl FeedFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedFormat::EventColumns => "event-columns",
            FeedFormat::StationColumns => "station-columns",
        }
    }
}

/// Decide the layout from the header alone.
///
/// Any column ending in a departure or arrival suffix selects
/// [`FeedFormat::EventColumns`], even one with no station name in front.
pub fn detect_format(columns: &[String]) -> FeedFormat {
    if columns.iter().any(|c| is_event_column(c)) {
        FeedFormat::EventColumns
    } else {
        FeedFormat::StationColumns
    }
}

/// Whether a column name carries a departure or arrival suffix.
pub fn is_event_column(column: &str) -> bool {
    let column = column.trim();
    column.ends_with(DEPARTURE_SUFFIX) || column.ends_with(ARRIVAL_SUFFIX)
}

/// Split `<station>_発` / `<station>_着` into station name and event.
///
/// `None` for other columns and for a bare suffix with no station name;
/// such columns yield no entries.
pub fn split_event_column(column: &str) -> Option<(&str, Event)> {
    let (station, event) = if let Some(station) = column.strip_suffix(DEPARTURE_SUFFIX) {
        (station, Event::Departure)
    } else if let Some(station) = column.strip_suffix(ARRIVAL_SUFFIX) {
        (station, Event::Arrival)
    } else {
        return None;
    };

    let station = station.trim();
    (!station.is_empty()).then_some((station, event))
}

/// Convert a tokenized feed into per-station entries using the detected
/// layout.
pub fn entries_from_table(table: &FeedTable, direction: Direction) -> (FeedFormat, StationEntries) {
    let format = detect_format(&table.columns);
    let mut stations = StationEntries::new();

    for record in table.records() {
        let entries = match format {
            FeedFormat::EventColumns => event_column_entries(record, direction),
            FeedFormat::StationColumns => station_column_entries(record, direction),
        };
        for (station, entry) in entries {
            stations.entry(station).or_default().push(entry);
        }
    }

    (format, stations)
}

/// Format A: one entry per populated `_発` / `_着` cell.
pub fn event_column_entries(record: Record<'_>, direction: Direction) -> Vec<(String, ScheduleEntry)> {
    let destination = cell_or_empty(
        DESTINATION_COLUMNS
            .iter()
            .find_map(|name| record.get(name)),
    );
    let train_type = cell_or_empty(record.get(TRAIN_TYPE_COLUMN));
    let note = cell_or_empty(record.get(NOTE_COLUMN));

    record
        .fields()
        .filter_map(|(column, value)| {
            let (station, event) = split_event_column(column)?;
            let time = timed_cell(value)?;
            Some((
                station.to_string(),
                ScheduleEntry {
                    time,
                    destination: destination.clone(),
                    train_type: train_type.clone(),
                    note: note.clone(),
                    direction,
                    event,
                },
            ))
        })
        .collect()
}

/// Format B: one departure entry per populated station cell.
pub fn station_column_entries(
    record: Record<'_>,
    direction: Direction,
) -> Vec<(String, ScheduleEntry)> {
    let train_type = cell_or_empty(record.value_at(GRID_TRAIN_TYPE_IDX));
    let destination = cell_or_empty(record.value_at(GRID_DESTINATION_IDX));

    record
        .fields()
        .skip(GRID_FIRST_STATION_IDX)
        .filter_map(|(station, value)| {
            let station = station.trim();
            if station.is_empty() {
                return None;
            }
            let time = timed_cell(value)?;
            Some((
                station.to_string(),
                ScheduleEntry {
                    time,
                    destination: destination.clone(),
                    train_type: train_type.clone(),
                    note: String::new(),
                    direction,
                    event: Event::Departure,
                },
            ))
        })
        .collect()
}

/// Normalized time for a cell, or `None` when the cell holds no real time.
fn timed_cell(value: &str) -> Option<String> {
    if is_no_time(value.trim()) {
        return None;
    }
    let time = normalize_time(value);
    (!time.is_empty()).then_some(time)
}
