//! Domain types for the station timetable.
//!
//! These are the values that flow from feed parsing through the index to
//! query results. Construction is infallible: feed cells that cannot be
//! interpreted degrade to empty strings instead of rejecting the row.

mod direction;
mod entry;
mod time;

pub use direction::{Direction, Event, InvalidDirection};
pub use entry::{ScheduleEntry, TimetableItem};
pub use time::{NO_SERVICE_MARKER, is_no_time, normalize_time};
