//! Attendance record model and related types.
//!
//! This module defines the daily attendance record, its status vocabulary,
//! the append-only audit trail carried on each record, and the partial
//! update shape used by admin corrections.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents the attendance outcome for a user on a given date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// Checked in within the grace window.
    Present,
    /// Checked in after the grace window closed.
    Late,
    /// No check-in for the day.
    Absent,
    /// Worked a partial day.
    HalfDay,
    /// Approved leave.
    OnLeave,
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttendanceStatus::Present => write!(f, "Present"),
            AttendanceStatus::Late => write!(f, "Late"),
            AttendanceStatus::Absent => write!(f, "Absent"),
            AttendanceStatus::HalfDay => write!(f, "Half Day"),
            AttendanceStatus::OnLeave => write!(f, "On Leave"),
        }
    }
}

/// An immutable entry in a record's correction trail.
///
/// Entries are append-only: corrections add new entries and never edit or
/// delete existing ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditLog {
    /// Unique identifier for this entry.
    pub id: Uuid,
    /// The record this entry belongs to.
    pub record_id: Uuid,
    /// The identifier of the user who made the change.
    pub changed_by: String,
    /// When the change was made.
    pub timestamp: NaiveDateTime,
    /// Text snapshot of the record's times before the change.
    pub old_value: String,
    /// Text snapshot of the record's times after the change.
    pub new_value: String,
    /// Why the change was made.
    pub reason: String,
}

/// A single user's attendance for a single calendar date.
///
/// At most one record exists per `(user_id, date)` pair. The record is
/// created on first check-in, closed once by check-out, and after that only
/// changes through audited admin corrections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Unique identifier for the record.
    pub id: Uuid,
    /// The user this record belongs to.
    pub user_id: String,
    /// The calendar date the record covers.
    pub date: NaiveDate,
    /// When the user checked in, if they have.
    pub check_in_time: Option<NaiveDateTime>,
    /// When the user checked out, if they have.
    pub check_out_time: Option<NaiveDateTime>,
    /// The attendance outcome for the day.
    pub status: AttendanceStatus,
    /// Latitude reported at check-in.
    pub location_lat: f64,
    /// Longitude reported at check-in.
    pub location_lng: f64,
    /// Whether the check-in position fell outside the office geofence.
    pub is_remote: bool,
    /// Correction trail, oldest first.
    #[serde(default)]
    pub audit_logs: Vec<AuditLog>,
}

impl AttendanceRecord {
    /// Returns true once the record has a check-out time.
    ///
    /// A checked-out record is terminal for the owning user; only admin
    /// corrections may alter it further.
    pub fn is_checked_out(&self) -> bool {
        self.check_out_time.is_some()
    }

    /// Formats the record's times as audit snapshot text.
    ///
    /// Unset times render as `N/A`.
    ///
    /// # Examples
    ///
    /// ```
    /// use attendance_engine::models::{AttendanceRecord, AttendanceStatus};
    /// use chrono::NaiveDate;
    /// use uuid::Uuid;
    ///
    /// let record = AttendanceRecord {
    ///     id: Uuid::new_v4(),
    ///     user_id: "user_001".to_string(),
    ///     date: NaiveDate::from_ymd_opt(2025, 8, 4).unwrap(),
    ///     check_in_time: NaiveDate::from_ymd_opt(2025, 8, 4).unwrap().and_hms_opt(10, 5, 0),
    ///     check_out_time: None,
    ///     status: AttendanceStatus::Present,
    ///     location_lat: 12.9716,
    ///     location_lng: 77.5946,
    ///     is_remote: false,
    ///     audit_logs: vec![],
    /// };
    /// assert_eq!(record.time_summary(), "In: 10:05:00, Out: N/A");
    /// ```
    pub fn time_summary(&self) -> String {
        let format = |t: Option<NaiveDateTime>| match t {
            Some(t) => t.format("%H:%M:%S").to_string(),
            None => "N/A".to_string(),
        };
        format!(
            "In: {}, Out: {}",
            format(self.check_in_time),
            format(self.check_out_time)
        )
    }
}

/// Partial update applied to a record by an admin correction.
///
/// Fields left as `None` keep their current value. A supplied
/// `check_in_time` also triggers status reclassification, which takes
/// precedence over an explicit `status`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordCorrection {
    /// Replacement check-in time.
    #[serde(default)]
    pub check_in_time: Option<NaiveDateTime>,
    /// Replacement check-out time.
    #[serde(default)]
    pub check_out_time: Option<NaiveDateTime>,
    /// Replacement status.
    #[serde(default)]
    pub status: Option<AttendanceStatus>,
}
