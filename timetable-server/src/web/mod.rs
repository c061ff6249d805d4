//! Web layer for the station timetable.
//!
//! Thin HTTP wrappers around [`QueryService`](crate::query::QueryService).

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
