//! Station timetable server.
//!
//! Reads the railway operators' timetable feeds, merges them into one
//! per-station index, and answers "what leaves this station, and when?"

pub mod cache;
pub mod config;
pub mod domain;
pub mod feed;
pub mod index;
pub mod query;
pub mod web;
