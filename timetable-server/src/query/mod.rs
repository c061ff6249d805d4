//! Query layer over the station index.
//!
//! [`QueryService`] owns the [`TimetableCache`](crate::cache::TimetableCache)
//! and answers station lookups, station-name listings and diagnostic
//! summaries.

mod service;
mod summary;

pub use service::{QueryService, select_items};
pub use summary::{DiagnosticSummary, SAMPLE_ITEM_LIMIT, SAMPLE_STATION_LIMIT};
