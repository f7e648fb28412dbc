//! Request types for the Attendance Engine API.
//!
//! This module defines the JSON request structures for the tracking,
//! correction, payroll and directory endpoints.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::Coords;
use crate::models::{AttendanceStatus, NewUser, RecordCorrection, Role};

/// Request body for the `/check-in` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckInRequest {
    /// The user checking in.
    pub user_id: String,
    /// The reported position; absent when the device had no fix.
    #[serde(default)]
    pub position: Option<PositionRequest>,
}

/// A geographic position in a request body.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PositionRequest {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

/// Request body for the `/check-out` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckOutRequest {
    /// The user checking out.
    pub user_id: String,
}

/// Request body for the `/corrections` endpoint.
///
/// Unset fields keep the record's current values. The reason defaults to
/// `Admin Correction` when not supplied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrectionRequest {
    /// The record to correct.
    pub record_id: Uuid,
    /// The user applying the correction; must hold the Admin role.
    pub actor_id: String,
    /// Replacement check-in time.
    #[serde(default)]
    pub check_in_time: Option<NaiveDateTime>,
    /// Replacement check-out time.
    #[serde(default)]
    pub check_out_time: Option<NaiveDateTime>,
    /// Replacement status.
    #[serde(default)]
    pub status: Option<AttendanceStatus>,
    /// Why the record is being corrected.
    #[serde(default)]
    pub reason: Option<String>,
}

/// Request body for the `/payroll/preview` and `/payroll/generate`
/// endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlipRequest {
    /// The user the slip is for.
    pub user_id: String,
    /// The month the slip covers, as `YYYY-MM`.
    pub month: String,
}

/// Request body for the `/login` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// The email address to resolve; matching ignores ASCII case.
    pub email: String,
}

/// Request body for the `POST /users` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    /// The user's full name.
    pub name: String,
    /// The user's email address.
    pub email: String,
    /// The user's role.
    pub role: Role,
    /// The department the user belongs to.
    pub department: String,
    /// The user's job title.
    pub designation: String,
    /// The user's annual base salary.
    pub base_salary: Decimal,
    /// Optional avatar image URL.
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl From<PositionRequest> for Coords {
    fn from(req: PositionRequest) -> Self {
        Coords {
            lat: req.lat,
            lng: req.lng,
        }
    }
}

impl From<CorrectionRequest> for RecordCorrection {
    fn from(req: CorrectionRequest) -> Self {
        RecordCorrection {
            check_in_time: req.check_in_time,
            check_out_time: req.check_out_time,
            status: req.status,
        }
    }
}

impl From<CreateUserRequest> for NewUser {
    fn from(req: CreateUserRequest) -> Self {
        NewUser {
            name: req.name,
            email: req.email,
            role: req.role,
            department: req.department,
            designation: req.designation,
            base_salary: req.base_salary,
            avatar_url: req.avatar_url,
        }
    }
}
