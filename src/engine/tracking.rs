//! Attendance tracking operations.
//!
//! This module defines [`AttendanceEngine`] and its day-to-day operations:
//! recording check-ins and check-outs, applying audited admin corrections,
//! and managing the user directory. Payroll and reporting operations live
//! in sibling modules and hang off the same engine type.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::calculation::{Coords, classify, classify_check_in};
use crate::clock::Clock;
use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, AuditLog, NewUser, RecordCorrection, User};
use crate::store::{AttendanceStore, Directory};

/// Coordinates attendance tracking, corrections, payroll and reporting.
///
/// The engine owns the business rules: it classifies check-ins against the
/// configured geofence and grace window, enforces the one-record-per-day
/// lifecycle, and appends an audit entry for every correction. Storage,
/// the user directory and the clock are injected seams, so tests can pin
/// time and production can swap the backend.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use attendance_engine::clock::SystemClock;
/// use attendance_engine::config::ConfigLoader;
/// use attendance_engine::engine::AttendanceEngine;
/// use attendance_engine::store::InMemoryStore;
///
/// let config = Arc::new(ConfigLoader::load("./config/techflow")?);
/// let store = Arc::new(InMemoryStore::new());
/// let engine = AttendanceEngine::new(store.clone(), store, Arc::new(SystemClock), config);
/// assert!(engine.users().is_empty());
/// # Ok::<(), attendance_engine::error::EngineError>(())
/// ```
#[derive(Clone)]
pub struct AttendanceEngine {
    pub(crate) store: Arc<dyn AttendanceStore>,
    pub(crate) directory: Arc<dyn Directory>,
    pub(crate) clock: Arc<dyn Clock>,
    pub(crate) config: Arc<ConfigLoader>,
}

impl AttendanceEngine {
    /// Creates an engine over the given storage, directory, clock and
    /// configuration.
    pub fn new(
        store: Arc<dyn AttendanceStore>,
        directory: Arc<dyn Directory>,
        clock: Arc<dyn Clock>,
        config: Arc<ConfigLoader>,
    ) -> Self {
        Self {
            store,
            directory,
            clock,
            config,
        }
    }

    /// Records a check-in for the user at the current clock time.
    ///
    /// The reported position is classified against the office geofence to
    /// decide `is_remote`, and the check-in time against the grace window
    /// to decide the day's status. Checking in again on the same day is a
    /// no-op that returns the existing record unchanged.
    ///
    /// # Errors
    ///
    /// - `UserNotFound` when the user id is not in the directory
    /// - `LocationUnavailable` when no position was supplied
    pub fn check_in(
        &self,
        user_id: &str,
        position: Option<Coords>,
    ) -> EngineResult<AttendanceRecord> {
        let user = self
            .directory
            .user(user_id)
            .ok_or_else(|| EngineError::UserNotFound {
                user_id: user_id.to_string(),
            })?;

        let position = position.ok_or_else(|| EngineError::LocationUnavailable {
            message: "no position supplied with the check-in request".to_string(),
        })?;

        let now = self.clock.now();
        let date = now.date();

        if let Some(existing) = self.store.record_for_day(&user.id, date) {
            info!(
                user_id = %user.id,
                date = %date,
                "Repeat check-in, returning existing record"
            );
            return Ok(existing);
        }

        let rules = self.config.attendance();
        let geofence = classify(position, rules.office_location, rules.radius_meters);
        let status = classify_check_in(now.time(), rules.office_start_hour, rules.grace_minutes);

        let record = AttendanceRecord {
            id: Uuid::new_v4(),
            user_id: user.id.clone(),
            date,
            check_in_time: Some(now),
            check_out_time: None,
            status,
            location_lat: position.lat,
            location_lng: position.lng,
            is_remote: !geofence.in_zone,
            audit_logs: Vec::new(),
        };

        match self.store.create_record(record) {
            Ok(stored) => {
                info!(
                    user_id = %stored.user_id,
                    date = %stored.date,
                    status = %stored.status,
                    is_remote = stored.is_remote,
                    distance_meters = geofence.distance_meters,
                    "Check-in recorded"
                );
                Ok(stored)
            }
            // Lost a same-day race; the record that won is the day's record
            Err(EngineError::DuplicateRecord { .. }) => {
                match self.store.record_for_day(&user.id, date) {
                    Some(existing) => Ok(existing),
                    None => Err(EngineError::DuplicateRecord {
                        user_id: user.id,
                        date,
                    }),
                }
            }
            Err(err) => Err(err),
        }
    }

    /// Records a check-out for the user at the current clock time.
    ///
    /// # Errors
    ///
    /// - `UserNotFound` when the user id is not in the directory
    /// - `NotCheckedIn` when the user has no record for today
    /// - `AlreadyCheckedOut` when today's record is already closed
    pub fn check_out(&self, user_id: &str) -> EngineResult<AttendanceRecord> {
        let user = self
            .directory
            .user(user_id)
            .ok_or_else(|| EngineError::UserNotFound {
                user_id: user_id.to_string(),
            })?;

        let now = self.clock.now();
        let date = now.date();

        let mut record =
            self.store
                .record_for_day(&user.id, date)
                .ok_or_else(|| EngineError::NotCheckedIn {
                    user_id: user.id.clone(),
                    date,
                })?;

        if record.is_checked_out() {
            return Err(EngineError::AlreadyCheckedOut {
                user_id: user.id,
                date,
            });
        }

        record.check_out_time = Some(now);
        let stored = self.store.update_record(record)?;
        info!(user_id = %stored.user_id, date = %stored.date, "Check-out recorded");
        Ok(stored)
    }

    /// Applies an admin correction to a stored record.
    ///
    /// Fields left unset in `updates` keep their current value. A corrected
    /// check-in time re-runs lateness classification and overrides any
    /// status supplied alongside it. Every correction appends an audit
    /// entry with before and after snapshots of the record's times.
    ///
    /// # Errors
    ///
    /// - `Unauthorized` when the actor is not an admin
    /// - `RecordNotFound` when no record carries `record_id`
    pub fn correct_record(
        &self,
        record_id: Uuid,
        updates: RecordCorrection,
        actor: &User,
        reason: &str,
    ) -> EngineResult<AttendanceRecord> {
        if !actor.is_admin() {
            return Err(EngineError::Unauthorized {
                actor_id: actor.id.clone(),
                action: "correct attendance records".to_string(),
            });
        }

        let mut record =
            self.store
                .record_by_id(record_id)
                .ok_or(EngineError::RecordNotFound { record_id })?;

        let old_value = record.time_summary();

        if let Some(check_in) = updates.check_in_time {
            record.check_in_time = Some(check_in);
        }
        if let Some(check_out) = updates.check_out_time {
            record.check_out_time = Some(check_out);
        }
        match (updates.check_in_time, updates.status) {
            // A corrected check-in is reclassified, superseding any
            // explicitly supplied status
            (Some(check_in), _) => {
                let rules = self.config.attendance();
                record.status =
                    classify_check_in(check_in.time(), rules.office_start_hour, rules.grace_minutes);
            }
            (None, Some(status)) => record.status = status,
            (None, None) => {}
        }

        record.audit_logs.push(AuditLog {
            id: Uuid::new_v4(),
            record_id: record.id,
            changed_by: actor.id.clone(),
            timestamp: self.clock.now(),
            old_value,
            new_value: record.time_summary(),
            reason: reason.to_string(),
        });

        let stored = self.store.update_record(record)?;
        info!(
            record_id = %stored.id,
            changed_by = %actor.id,
            status = %stored.status,
            "Attendance record corrected"
        );
        Ok(stored)
    }

    /// Returns every user in the directory.
    pub fn users(&self) -> Vec<User> {
        self.directory.list_users()
    }

    /// Returns a user by id.
    ///
    /// # Errors
    ///
    /// - `UserNotFound` when the id is not in the directory
    pub fn user(&self, user_id: &str) -> EngineResult<User> {
        self.directory
            .user(user_id)
            .ok_or_else(|| EngineError::UserNotFound {
                user_id: user_id.to_string(),
            })
    }

    /// Resolves a login attempt to a directory user.
    ///
    /// The email comparison ignores ASCII case.
    ///
    /// # Errors
    ///
    /// - `UserNotFound` when no user is registered under the email
    pub fn login(&self, email: &str) -> EngineResult<User> {
        self.directory
            .find_by_email(email)
            .ok_or_else(|| EngineError::UserNotFound {
                user_id: email.to_string(),
            })
    }

    /// Registers a new user in the directory.
    ///
    /// The engine assigns the identifier, stamps the join date from the
    /// clock, and derives an avatar URL from the email when none was
    /// supplied.
    ///
    /// # Errors
    ///
    /// - `DuplicateUser` when the email is already registered
    pub fn create_user(&self, profile: NewUser) -> EngineResult<User> {
        let avatar_url = match profile.avatar_url {
            Some(url) => url,
            None => format!("https://i.pravatar.cc/150?u={}", profile.email),
        };

        let user = User {
            id: Uuid::new_v4().to_string(),
            name: profile.name,
            email: profile.email,
            role: profile.role,
            department: profile.department,
            designation: profile.designation,
            base_salary: profile.base_salary,
            join_date: self.clock.now().date(),
            avatar_url,
        };

        let stored = self.directory.create_user(user)?;
        info!(user_id = %stored.id, email = %stored.email, "User created");
        Ok(stored)
    }
}
