//! Salary slip model.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A generated salary slip for one user and one month.
///
/// At most one current slip exists per `(user_id, month)`; regenerating a
/// slip for the same month supersedes the previous one. All monetary fields
/// are rounded to whole currency units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalarySlip {
    /// Unique identifier for the slip.
    pub id: Uuid,
    /// The user the slip belongs to.
    pub user_id: String,
    /// The month covered, as a `YYYY-MM` key.
    pub month: String,
    /// When the slip was generated.
    pub generated_date: NaiveDateTime,
    /// Basic salary component.
    pub basic_salary: Decimal,
    /// House rent allowance component.
    pub hra: Decimal,
    /// Dearness allowance component.
    pub da: Decimal,
    /// Bonus payments.
    pub bonuses: Decimal,
    /// Flat deductions (professional tax).
    pub deductions: Decimal,
    /// Tax deducted at source.
    pub tax: Decimal,
    /// Net amount payable.
    pub net_salary: Decimal,
    /// Days the user was counted present in the month.
    pub present_days: u32,
    /// The payable-day denominator used for the month.
    pub total_days: u32,
}
