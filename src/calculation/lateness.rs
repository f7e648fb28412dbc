//! Check-in punctuality classification.
//!
//! A check-in is Late when its wall-clock time strictly exceeds the office
//! start hour plus the grace window, compared on the (hour, minute) pair.
//! Seconds never tip a check-in into lateness.

use chrono::{NaiveTime, Timelike};

use crate::models::AttendanceStatus;

/// Returns true when `time` falls after the grace window.
///
/// The comparison is lexicographic on (hour, minute): any hour past
/// `office_start_hour` is late, and within the start hour the minute must
/// strictly exceed `grace_minutes`.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::is_past_grace;
/// use chrono::NaiveTime;
///
/// let on_the_line = NaiveTime::from_hms_opt(10, 15, 59).unwrap();
/// assert!(!is_past_grace(on_the_line, 10, 15));
///
/// let one_minute_over = NaiveTime::from_hms_opt(10, 16, 0).unwrap();
/// assert!(is_past_grace(one_minute_over, 10, 15));
/// ```
pub fn is_past_grace(time: NaiveTime, office_start_hour: u32, grace_minutes: u32) -> bool {
    time.hour() > office_start_hour
        || (time.hour() == office_start_hour && time.minute() > grace_minutes)
}

/// Classifies a check-in time as Present or Late.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::classify_check_in;
/// use attendance_engine::models::AttendanceStatus;
/// use chrono::NaiveTime;
///
/// let early = NaiveTime::from_hms_opt(9, 45, 0).unwrap();
/// assert_eq!(classify_check_in(early, 10, 15), AttendanceStatus::Present);
/// ```
pub fn classify_check_in(
    time: NaiveTime,
    office_start_hour: u32,
    grace_minutes: u32,
) -> AttendanceStatus {
    if is_past_grace(time, office_start_hour, grace_minutes) {
        AttendanceStatus::Late
    } else {
        AttendanceStatus::Present
    }
}
