//! The attendance engine and its operations.
//!
//! [`AttendanceEngine`] is the crate's orchestration layer. Tracking
//! operations record check-ins and check-outs and apply audited admin
//! corrections; payroll operations derive and store monthly salary slips;
//! reporting operations assemble daily and monthly views plus
//! late-arrival notifications. All of them lean on the pure functions in
//! the calculation module and on the storage traits, so the engine itself
//! stays free of persistence and formatting details.

mod payroll;
mod reports;
mod tracking;

pub use reports::{
    DailyReportRow, DailySummary, MonthlyReportRow, format_late_by, format_work_duration,
};
pub use tracking::AttendanceEngine;
