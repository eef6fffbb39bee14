//! Notes backend: a small REST service over a single SQLite table of notes.
//!
//! The binary wires these modules into an actix-web server; tests build the
//! same app in-process.

use std::sync::Arc;
use std::time::Instant;

pub mod config;
pub mod controllers;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;

use config::Config;
use db::NoteStore;

/// Shared state handed to every request handler
pub struct AppState {
    pub store: Arc<NoteStore>,
    pub config: Config,
    /// Server start time for uptime calculation
    pub started_at: Instant,
}
