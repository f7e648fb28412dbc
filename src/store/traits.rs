//! Persistence seams for attendance data and the user directory.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{AttendanceRecord, SalarySlip, User};

/// Storage for attendance records and generated salary slips.
///
/// Lookups that can legitimately miss return `Option`; the engine decides
/// which misses are errors. Writes return the stored copy so callers see
/// exactly what was persisted.
pub trait AttendanceStore: Send + Sync {
    /// Stores a new attendance record.
    ///
    /// Fails with `DuplicateRecord` when the user already has a record
    /// for the same date.
    fn create_record(&self, record: AttendanceRecord) -> EngineResult<AttendanceRecord>;

    /// Replaces an existing record, matched by its id.
    ///
    /// Fails with `RecordNotFound` when no record carries that id.
    fn update_record(&self, record: AttendanceRecord) -> EngineResult<AttendanceRecord>;

    /// Returns the user's record for one calendar day.
    fn record_for_day(&self, user_id: &str, date: NaiveDate) -> Option<AttendanceRecord>;

    /// Returns a record by its id.
    fn record_by_id(&self, record_id: Uuid) -> Option<AttendanceRecord>;

    /// Returns every user's record for one calendar day.
    fn records_for_date(&self, date: NaiveDate) -> Vec<AttendanceRecord>;

    /// Returns one user's records within a `YYYY-MM` month.
    fn records_for_month(&self, user_id: &str, month: &str) -> Vec<AttendanceRecord>;

    /// Stores a salary slip, replacing any earlier slip for the same
    /// user and month.
    fn upsert_slip(&self, slip: SalarySlip);

    /// Returns all slips generated for a user.
    fn slips_for_user(&self, user_id: &str) -> Vec<SalarySlip>;

    /// Returns the user's slip for a `YYYY-MM` month, if one was generated.
    fn slip_for_month(&self, user_id: &str, month: &str) -> Option<SalarySlip>;
}

/// Read and write access to the user directory.
pub trait Directory: Send + Sync {
    /// Returns every known user.
    fn list_users(&self) -> Vec<User>;

    /// Returns a user by id.
    fn user(&self, user_id: &str) -> Option<User>;

    /// Returns the user registered under an email address.
    ///
    /// The comparison ignores ASCII case.
    fn find_by_email(&self, email: &str) -> Option<User>;

    /// Registers a new user.
    ///
    /// Fails with `DuplicateUser` when the email is already registered.
    fn create_user(&self, user: User) -> EngineResult<User>;
}
