//! Core data models for the attendance and payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod notification;
mod salary_slip;
mod user;

pub use attendance::{AttendanceRecord, AttendanceStatus, AuditLog, RecordCorrection};
pub use notification::{Notification, NotificationKind};
pub use salary_slip::SalarySlip;
pub use user::{NewUser, Role, User};
