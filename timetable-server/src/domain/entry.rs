//! Schedule entries: one train at one station.

use std::cmp::Ordering;

use serde::Serialize;

use super::direction::{Direction, Event};

/// One (station, service) occurrence as held in the index.
///
/// `time` is canonical `HH:MM` when the feed cell was a clock time, or the
/// trimmed raw token otherwise. It is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleEntry {
    pub time: String,
    pub destination: String,
    pub train_type: String,
    pub note: String,
    pub direction: Direction,
    pub event: Event,
}

impl ScheduleEntry {
    /// Composite key `(direction, time, event, destination)`, all as strings.
    pub fn sort_key(&self) -> (&str, &str, &str, &str) {
        (
            self.direction.as_str(),
            &self.time,
            self.event.as_str(),
            &self.destination,
        )
    }

    /// Compare by [`ScheduleEntry::sort_key`].
    pub fn canonical_cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }

    /// Strip the internal event tag for returning to callers.
    pub fn to_item(&self) -> TimetableItem {
        TimetableItem {
            time: self.time.clone(),
            destination: self.destination.clone(),
            train_type: self.train_type.clone(),
            note: self.note.clone(),
            direction: self.direction,
        }
    }
}

/// Caller-facing view of a [`ScheduleEntry`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimetableItem {
    pub time: String,
    pub destination: String,
    pub train_type: String,
    pub note: String,
    pub direction: Direction,
}
