//! User model and related types.
//!
//! This module defines the User struct and Role enum for representing
//! employees in the attendance tracking system.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents a user's role within the organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Administrator with correction and payroll privileges.
    Admin,
    /// Manager with visibility over team attendance.
    Manager,
    /// Regular employee.
    Employee,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "Admin"),
            Role::Manager => write!(f, "Manager"),
            Role::Employee => write!(f, "Employee"),
        }
    }
}

/// Represents an employee tracked by the attendance engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user.
    pub id: String,
    /// The user's full name.
    pub name: String,
    /// The user's email address, unique across the directory.
    pub email: String,
    /// The user's role.
    pub role: Role,
    /// The department the user belongs to.
    pub department: String,
    /// The user's job title.
    pub designation: String,
    /// The user's annual base salary.
    pub base_salary: Decimal,
    /// The date the user joined the company.
    pub join_date: NaiveDate,
    /// URL of the user's avatar image.
    pub avatar_url: String,
}

impl User {
    /// Returns true if the user holds the Admin role.
    ///
    /// # Examples
    ///
    /// ```
    /// use attendance_engine::models::{Role, User};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let admin = User {
    ///     id: "user_001".to_string(),
    ///     name: "Priya Sharma".to_string(),
    ///     email: "priya@techflow.example".to_string(),
    ///     role: Role::Admin,
    ///     department: "Operations".to_string(),
    ///     designation: "HR Director".to_string(),
    ///     base_salary: Decimal::from(1_500_000),
    ///     join_date: NaiveDate::from_ymd_opt(2019, 4, 1).unwrap(),
    ///     avatar_url: "https://i.pravatar.cc/150?u=priya".to_string(),
    /// };
    /// assert!(admin.is_admin());
    /// ```
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Returns true if the user may view other employees' attendance.
    pub fn can_view_team(&self) -> bool {
        matches!(self.role, Role::Admin | Role::Manager)
    }
}

/// Input for creating a new user through the directory.
///
/// The engine assigns the identifier and join date; the avatar URL is
/// derived from the email when not supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
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
