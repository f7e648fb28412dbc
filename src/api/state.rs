//! Application state for the Attendance Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use crate::engine::AttendanceEngine;

/// Shared application state.
///
/// Wraps the engine so every handler reaches storage, the directory,
/// the clock and configuration through one seam.
#[derive(Clone)]
pub struct AppState {
    /// The attendance engine serving this API.
    engine: AttendanceEngine,
}

impl AppState {
    /// Creates a new application state around the given engine.
    pub fn new(engine: AttendanceEngine) -> Self {
        Self { engine }
    }

    /// Returns a reference to the engine.
    pub fn engine(&self) -> &AttendanceEngine {
        &self.engine
    }
}
