//! Reporting and notification operations.
//!
//! Reports are assembled on demand from stored records; nothing here is
//! cached or persisted. The daily report and summary cover the whole
//! directory, so users without a record surface as absent rather than
//! disappearing from the output.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{AttendanceRecord, AttendanceStatus, Notification, NotificationKind, User};

use super::payroll::parse_month;
use super::tracking::AttendanceEngine;

/// One user's row in a daily attendance report.
#[derive(Debug, Clone, Serialize)]
pub struct DailyReportRow {
    /// The user the row describes.
    pub user: User,
    /// The day's record, when one exists.
    pub record: Option<AttendanceRecord>,
    /// Effective status for the day; `Absent` when no record exists.
    pub status: AttendanceStatus,
    /// Rendered time between check-in and check-out, or `-`.
    pub work_duration: String,
}

/// One calendar day's row in a user's monthly report.
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyReportRow {
    /// The calendar date the row covers.
    pub date: NaiveDate,
    /// The day's record, when one exists.
    pub record: Option<AttendanceRecord>,
    /// Rendered time between check-in and check-out, or `-`.
    pub work_duration: String,
    /// Rendered lateness past the office start hour, or `-`.
    pub late_by: String,
}

/// Company-wide attendance counts for one day.
#[derive(Debug, Clone, Serialize)]
pub struct DailySummary {
    /// The day the counts cover.
    pub date: NaiveDate,
    /// Users whose record is `Present`.
    pub present: usize,
    /// Users whose record is `Late`.
    pub late: usize,
    /// Users with no record or an `Absent` record.
    pub absent: usize,
    /// Size of the whole directory.
    pub total_employees: usize,
}

/// Renders the time worked between a check-in and a check-out.
///
/// Returns `-` when either time is missing or the span is negative.
///
/// # Example
///
/// ```
/// use attendance_engine::engine::format_work_duration;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2025, 8, 4).unwrap();
/// let check_in = date.and_hms_opt(9, 58, 0);
/// let check_out = date.and_hms_opt(18, 30, 0);
/// assert_eq!(format_work_duration(check_in, check_out), "8h 32m");
/// assert_eq!(format_work_duration(check_in, None), "-");
/// ```
pub fn format_work_duration(
    check_in: Option<NaiveDateTime>,
    check_out: Option<NaiveDateTime>,
) -> String {
    let (Some(check_in), Some(check_out)) = (check_in, check_out) else {
        return "-".to_string();
    };
    let minutes = (check_out - check_in).num_minutes();
    if minutes < 0 {
        return "-".to_string();
    }
    format!("{}h {}m", minutes / 60, minutes % 60)
}

/// Renders how far past the office start hour a check-in landed.
///
/// Lateness here is measured from the start hour itself, not the grace
/// window, so an on-time-but-past-the-hour check-in still shows a value.
/// Returns `-` at or before the start hour, and for sub-minute lateness.
pub fn format_late_by(check_in: NaiveDateTime, office_start_hour: u32) -> String {
    let Some(start) = check_in.date().and_hms_opt(office_start_hour, 0, 0) else {
        return "-".to_string();
    };
    if check_in <= start {
        return "-".to_string();
    }

    let minutes = (check_in - start).num_minutes();
    if minutes == 0 {
        return "-".to_string();
    }
    let hours = minutes / 60;
    if hours > 0 {
        format!("{}h {}m", hours, minutes % 60)
    } else {
        format!("{}m", minutes)
    }
}

impl AttendanceEngine {
    /// Builds the attendance report for one day across every user.
    ///
    /// Users without a record for the day appear with `Absent` status, so
    /// the report always has one row per directory user.
    pub fn daily_report(&self, date: NaiveDate) -> Vec<DailyReportRow> {
        let records = self.store.records_for_date(date);

        self.directory
            .list_users()
            .into_iter()
            .map(|user| {
                let record = records.iter().find(|r| r.user_id == user.id).cloned();
                let status = record
                    .as_ref()
                    .map_or(AttendanceStatus::Absent, |r| r.status);
                let work_duration = record.as_ref().map_or_else(
                    || "-".to_string(),
                    |r| format_work_duration(r.check_in_time, r.check_out_time),
                );
                DailyReportRow {
                    user,
                    record,
                    status,
                    work_duration,
                }
            })
            .collect()
    }

    /// Builds one user's report for a `YYYY-MM` month, newest day first.
    ///
    /// Every calendar day of the month gets a row, recorded or not.
    ///
    /// # Errors
    ///
    /// - `UserNotFound` when the user id is not in the directory
    /// - `InvalidMonth` when the month key is not `YYYY-MM`
    pub fn monthly_report(&self, user_id: &str, month: &str) -> EngineResult<Vec<MonthlyReportRow>> {
        self.user(user_id)?;
        let (year, month_num) = parse_month(month)?;
        let records = self.store.records_for_month(user_id, month);
        let office_start_hour = self.config.attendance().office_start_hour;

        let mut rows = Vec::new();
        let mut day = 1;
        while let Some(date) = NaiveDate::from_ymd_opt(year, month_num, day) {
            let record = records.iter().find(|r| r.date == date).cloned();
            let work_duration = record.as_ref().map_or_else(
                || "-".to_string(),
                |r| format_work_duration(r.check_in_time, r.check_out_time),
            );
            let late_by = record
                .as_ref()
                .and_then(|r| r.check_in_time)
                .map_or_else(|| "-".to_string(), |t| format_late_by(t, office_start_hour));
            rows.push(MonthlyReportRow {
                date,
                record,
                work_duration,
                late_by,
            });
            day += 1;
        }
        rows.reverse();
        Ok(rows)
    }

    /// Counts the directory's attendance statuses for one day.
    ///
    /// Half-day and on-leave records are counted in no bucket; they still
    /// show up in `total_employees`.
    pub fn daily_summary(&self, date: NaiveDate) -> DailySummary {
        let users = self.directory.list_users();
        let records = self.store.records_for_date(date);

        let mut present = 0;
        let mut late = 0;
        let mut absent = 0;
        for user in &users {
            match records.iter().find(|r| r.user_id == user.id) {
                Some(record) => match record.status {
                    AttendanceStatus::Present => present += 1,
                    AttendanceStatus::Late => late += 1,
                    AttendanceStatus::Absent => absent += 1,
                    AttendanceStatus::HalfDay | AttendanceStatus::OnLeave => {}
                },
                None => absent += 1,
            }
        }

        DailySummary {
            date,
            present,
            late,
            absent,
            total_employees: users.len(),
        }
    }

    /// Builds today's late-arrival notifications for one viewer.
    ///
    /// A late viewer gets a personal late mark. Admins and managers
    /// additionally get one alert per other employee who checked in late
    /// today. Notifications are assembled fresh on every call and carry
    /// new identifiers.
    ///
    /// # Errors
    ///
    /// - `UserNotFound` when the viewer id is not in the directory
    pub fn late_arrival_alerts(&self, viewer_id: &str) -> EngineResult<Vec<Notification>> {
        let viewer = self.user(viewer_id)?;
        let now = self.clock.now();
        let rules = self.config.attendance();

        let mut alerts = Vec::new();
        for record in self
            .store
            .records_for_date(now.date())
            .iter()
            .filter(|r| r.status == AttendanceStatus::Late)
        {
            if record.user_id == viewer.id {
                alerts.push(Notification {
                    id: Uuid::new_v4(),
                    user_id: viewer.id.clone(),
                    title: "Late Mark".to_string(),
                    message: format!(
                        "You were marked late today (checked in more than {} minutes after {}:00).",
                        rules.grace_minutes, rules.office_start_hour
                    ),
                    date: now,
                    is_read: false,
                    kind: NotificationKind::Alert,
                });
            } else if viewer.can_view_team() {
                let Some(employee) = self.directory.user(&record.user_id) else {
                    continue;
                };
                let checked_in = record
                    .check_in_time
                    .map_or_else(|| "-".to_string(), |t| t.format("%H:%M").to_string());
                alerts.push(Notification {
                    id: Uuid::new_v4(),
                    user_id: viewer.id.clone(),
                    title: "Late Arrival Alert".to_string(),
                    message: format!("{} checked in late today at {}.", employee.name, checked_in),
                    date: now,
                    is_read: false,
                    kind: NotificationKind::Alert,
                });
            }
        }
        Ok(alerts)
    }
}
