//! Salary slip computation.
//!
//! This module derives a month's salary slip from a user's annual base
//! salary and their counted present days. The month is always settled
//! against the configured payable-day denominator, not the calendar length.
//!
//! The decomposition works on the unrounded gross: the basic/HRA/DA split
//! and the TDS check all read the raw amount, and rounding to whole
//! currency units happens only on the fields written to the slip.

use chrono::NaiveDateTime;
use rust_decimal::{Decimal, RoundingStrategy};
use uuid::Uuid;

use crate::config::PayrollRules;
use crate::models::{SalarySlip, User};

/// Rounds a monetary amount to whole currency units, half away from zero.
fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Computes the salary slip for one user and one month.
///
/// The computation is deterministic: the same `(base_salary, month,
/// present_days, rules)` always produces the same amounts. Only the slip
/// identifier and the supplied `generated_at` timestamp vary between calls.
///
/// Steps:
/// 1. `daily_rate = base_salary / 12 / days_per_month`
/// 2. `gross = daily_rate * present_days`
/// 3. basic/HRA/DA = configured shares of the gross
/// 4. TDS applies at the configured rate only when the gross strictly
///    exceeds the threshold; professional tax is a flat amount
/// 5. `net = gross - (professional_tax + tds)`
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::compute_slip;
/// use attendance_engine::config::ConfigLoader;
/// use attendance_engine::models::{Role, User};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let config = ConfigLoader::load("./config/techflow")?;
/// let user = User {
///     id: "user_001".to_string(),
///     name: "Rahul Verma".to_string(),
///     email: "rahul@techflow.example".to_string(),
///     role: Role::Employee,
///     department: "Engineering".to_string(),
///     designation: "Software Engineer".to_string(),
///     base_salary: Decimal::from(800_000),
///     join_date: NaiveDate::from_ymd_opt(2022, 6, 1).unwrap(),
///     avatar_url: String::new(),
/// };
/// let generated_at = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap().and_hms_opt(9, 0, 0).unwrap();
///
/// let slip = compute_slip(&user, "2025-08", 22, generated_at, config.payroll());
/// assert_eq!(slip.net_salary, Decimal::from(48_689));
/// # Ok::<(), attendance_engine::error::EngineError>(())
/// ```
pub fn compute_slip(
    user: &User,
    month: &str,
    present_days: u32,
    generated_at: NaiveDateTime,
    rules: &PayrollRules,
) -> SalarySlip {
    let monthly_salary = user.base_salary / Decimal::from(12);
    let daily_rate = monthly_salary / Decimal::from(rules.days_per_month);
    let gross = daily_rate * Decimal::from(present_days);

    let basic_salary = round_currency(gross * rules.salary_split.basic);
    let hra = round_currency(gross * rules.salary_split.hra);
    let da = round_currency(gross * rules.salary_split.da);

    let tds = if gross > rules.tds_threshold {
        gross * rules.tds_rate
    } else {
        Decimal::ZERO
    };
    let net_salary = round_currency(gross - (rules.professional_tax + tds));

    SalarySlip {
        id: Uuid::new_v4(),
        user_id: user.id.clone(),
        month: month.to_string(),
        generated_date: generated_at,
        basic_salary,
        hra,
        da,
        bonuses: Decimal::ZERO,
        deductions: round_currency(rules.professional_tax),
        tax: round_currency(tds),
        net_salary,
        present_days,
        total_days: rules.days_per_month,
    }
}
