//! Calculation logic for the Attendance Engine.
//!
//! This module contains the pure calculation functions behind attendance
//! and payroll: haversine distance and geofence classification for
//! check-in locations, grace-window lateness classification for check-in
//! times, and the salary slip decomposition for a month's payroll.
//!
//! Everything here is side-effect free and independently testable; the
//! engine wires these functions to stored records and configuration.

mod geofence;
mod lateness;
mod salary;

pub use geofence::{Coords, EARTH_RADIUS_METERS, GeofenceResult, classify, distance_meters};
pub use lateness::{classify_check_in, is_past_grace};
pub use salary::compute_slip;
