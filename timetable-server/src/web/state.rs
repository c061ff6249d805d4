//! Application state for the web layer.

use std::sync::Arc;

use crate::query::QueryService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Timetable query service (owns the index cache)
    pub timetable: Arc<QueryService>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(timetable: QueryService) -> Self {
        Self {
            timetable: Arc::new(timetable),
        }
    }
}
