//! Error types for the attendance and payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while tracking attendance or
//! generating salary slips.

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

/// The main error type for the attendance and payroll engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but contained inconsistent values.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// A description of what made the configuration invalid.
        message: String,
    },

    /// No user exists for the given identifier.
    #[error("User not found: {user_id}")]
    UserNotFound {
        /// The identifier that did not resolve to a user.
        user_id: String,
    },

    /// No attendance record exists for the given identifier.
    #[error("Attendance record not found: {record_id}")]
    RecordNotFound {
        /// The record identifier that did not resolve.
        record_id: Uuid,
    },

    /// An attendance record already exists for this user and date.
    #[error("Attendance already recorded for '{user_id}' on {date}")]
    DuplicateRecord {
        /// The user the duplicate belongs to.
        user_id: String,
        /// The date already covered by a record.
        date: NaiveDate,
    },

    /// A user with this email already exists in the directory.
    #[error("A user with email '{email}' already exists")]
    DuplicateUser {
        /// The email address that is already taken.
        email: String,
    },

    /// Check-out was attempted without an open check-in for the day.
    #[error("No check-in record found for '{user_id}' on {date}")]
    NotCheckedIn {
        /// The user attempting to check out.
        user_id: String,
        /// The date with no open record.
        date: NaiveDate,
    },

    /// Check-out was attempted on a record that is already closed.
    #[error("Check-out already marked for '{user_id}' on {date}")]
    AlreadyCheckedOut {
        /// The user attempting to check out again.
        user_id: String,
        /// The date whose record is already closed.
        date: NaiveDate,
    },

    /// The acting user lacks the role required for the operation.
    #[error("Unauthorized: '{actor_id}' may not {action}")]
    Unauthorized {
        /// The user who attempted the operation.
        actor_id: String,
        /// The operation that was refused.
        action: String,
    },

    /// No usable position was supplied with a check-in.
    #[error("Location unavailable: {message}")]
    LocationUnavailable {
        /// A description of why no position could be obtained.
        message: String,
    },

    /// A month key did not match the expected `YYYY-MM` form.
    #[error("Invalid month '{value}': expected YYYY-MM")]
    InvalidMonth {
        /// The month key that failed to parse.
        value: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_config_displays_message() {
        let error = EngineError::InvalidConfig {
            message: "salary split must sum to 1".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration: salary split must sum to 1"
        );
    }

    #[test]
    fn test_user_not_found_displays_id() {
        let error = EngineError::UserNotFound {
            user_id: "user_042".to_string(),
        };
        assert_eq!(error.to_string(), "User not found: user_042");
    }

    #[test]
    fn test_duplicate_record_displays_user_and_date() {
        let error = EngineError::DuplicateRecord {
            user_id: "user_001".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 8, 4).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Attendance already recorded for 'user_001' on 2025-08-04"
        );
    }

    #[test]
    fn test_not_checked_in_displays_user_and_date() {
        let error = EngineError::NotCheckedIn {
            user_id: "user_001".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 8, 4).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "No check-in record found for 'user_001' on 2025-08-04"
        );
    }

    #[test]
    fn test_already_checked_out_displays_user_and_date() {
        let error = EngineError::AlreadyCheckedOut {
            user_id: "user_001".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 8, 4).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Check-out already marked for 'user_001' on 2025-08-04"
        );
    }

    #[test]
    fn test_unauthorized_displays_actor_and_action() {
        let error = EngineError::Unauthorized {
            actor_id: "user_007".to_string(),
            action: "correct attendance records".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Unauthorized: 'user_007' may not correct attendance records"
        );
    }

    #[test]
    fn test_invalid_month_displays_value() {
        let error = EngineError::InvalidMonth {
            value: "2025/08".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid month '2025/08': expected YYYY-MM"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_user_not_found() -> EngineResult<()> {
            Err(EngineError::UserNotFound {
                user_id: "missing".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_user_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
