//! Response types for the Attendance Engine API.
//!
//! This module defines the error response structures and error handling
//! for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidConfig { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Invalid configuration", message),
            },
            EngineError::UserNotFound { user_id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "USER_NOT_FOUND",
                    format!("User not found: {}", user_id),
                    "No user with this identifier exists in the directory",
                ),
            },
            EngineError::RecordNotFound { record_id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "RECORD_NOT_FOUND",
                    format!("Attendance record not found: {}", record_id),
                    "No attendance record with this identifier exists",
                ),
            },
            EngineError::DuplicateRecord { user_id, date } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::with_details(
                    "DUPLICATE_RECORD",
                    format!("Attendance already recorded for '{}' on {}", user_id, date),
                    "A user holds at most one attendance record per day",
                ),
            },
            EngineError::DuplicateUser { email } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::with_details(
                    "DUPLICATE_USER",
                    format!("A user with email '{}' already exists", email),
                    "Email addresses are unique across the directory",
                ),
            },
            EngineError::NotCheckedIn { user_id, date } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "NOT_CHECKED_IN",
                    format!("No check-in record found for '{}' on {}", user_id, date),
                    "Check-out requires a check-in earlier the same day",
                ),
            },
            EngineError::AlreadyCheckedOut { user_id, date } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "ALREADY_CHECKED_OUT",
                    format!("Check-out already marked for '{}' on {}", user_id, date),
                    "A checked-out record can only change through an admin correction",
                ),
            },
            EngineError::Unauthorized { actor_id, action } => ApiErrorResponse {
                status: StatusCode::FORBIDDEN,
                error: ApiError::with_details(
                    "UNAUTHORIZED",
                    format!("Unauthorized: '{}' may not {}", actor_id, action),
                    "This operation requires the Admin role",
                ),
            },
            EngineError::LocationUnavailable { message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "LOCATION_UNAVAILABLE",
                    "Location unavailable",
                    message,
                ),
            },
            EngineError::InvalidMonth { value } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_MONTH",
                    format!("Invalid month '{}'", value),
                    "Months are addressed as YYYY-MM",
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_user_not_found_maps_to_404() {
        let engine_error = EngineError::UserNotFound {
            user_id: "user_099".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::NOT_FOUND);
        assert_eq!(api_error.error.code, "USER_NOT_FOUND");
        assert!(api_error.error.message.contains("user_099"));
    }

    #[test]
    fn test_duplicate_record_maps_to_409() {
        let engine_error = EngineError::DuplicateRecord {
            user_id: "user_001".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 8, 4).unwrap(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::CONFLICT);
        assert_eq!(api_error.error.code, "DUPLICATE_RECORD");
    }

    #[test]
    fn test_unauthorized_maps_to_403() {
        let engine_error = EngineError::Unauthorized {
            actor_id: "user_001".to_string(),
            action: "correct attendance records".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::FORBIDDEN);
        assert_eq!(api_error.error.code, "UNAUTHORIZED");
    }

    #[test]
    fn test_not_checked_in_maps_to_400() {
        let engine_error = EngineError::NotCheckedIn {
            user_id: "user_001".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 8, 4).unwrap(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "NOT_CHECKED_IN");
    }
}
