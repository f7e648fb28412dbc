//! Configuration types for the attendance engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::calculation::Coords;
use crate::error::{EngineError, EngineResult};

/// Identifying details of the company operating the engine.
#[derive(Debug, Clone, Deserialize)]
pub struct CompanyProfile {
    /// The registered company name.
    pub name: String,
    /// The office address shown on reports and slips.
    pub address: String,
    /// The currency symbol used when rendering amounts.
    pub currency: String,
}

/// Attendance rules loaded from attendance.yaml.
///
/// These describe the office geofence and the lateness policy applied
/// to check-in times.
#[derive(Debug, Clone, Deserialize)]
pub struct AttendanceRules {
    /// The center of the office geofence.
    pub office_location: Coords,
    /// Geofence radius in meters; check-ins beyond it are remote.
    pub radius_meters: f64,
    /// Hour of day (0-23) at which the working day starts.
    pub office_start_hour: u32,
    /// Minutes past the start hour still counted as on time.
    pub grace_minutes: u32,
}

impl AttendanceRules {
    /// Checks the rules for internally consistent values.
    pub fn validate(&self) -> EngineResult<()> {
        if self.office_start_hour > 23 {
            return Err(EngineError::InvalidConfig {
                message: format!(
                    "office_start_hour must be between 0 and 23, got {}",
                    self.office_start_hour
                ),
            });
        }
        if self.grace_minutes > 59 {
            return Err(EngineError::InvalidConfig {
                message: format!(
                    "grace_minutes must be between 0 and 59, got {}",
                    self.grace_minutes
                ),
            });
        }
        if self.radius_meters <= 0.0 {
            return Err(EngineError::InvalidConfig {
                message: format!("radius_meters must be positive, got {}", self.radius_meters),
            });
        }
        Ok(())
    }
}

/// How the gross monthly amount is split into earning components.
#[derive(Debug, Clone, Deserialize)]
pub struct SalarySplit {
    /// Share of the gross paid as basic salary.
    pub basic: Decimal,
    /// Share of the gross paid as house rent allowance.
    pub hra: Decimal,
    /// Share of the gross paid as dearness allowance.
    pub da: Decimal,
}

/// Payroll rules loaded from payroll.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct PayrollRules {
    /// Payable days in a salary month.
    pub days_per_month: u32,
    /// Split of the gross into basic/HRA/DA components.
    pub salary_split: SalarySplit,
    /// Flat professional tax deducted every month.
    pub professional_tax: Decimal,
    /// Monthly gross above which TDS is withheld.
    pub tds_threshold: Decimal,
    /// TDS rate applied to the gross once past the threshold.
    pub tds_rate: Decimal,
}

impl PayrollRules {
    /// Checks the rules for internally consistent values.
    ///
    /// The salary split must cover the whole gross: basic, HRA and DA
    /// shares have to sum to exactly 1.
    pub fn validate(&self) -> EngineResult<()> {
        if self.days_per_month == 0 {
            return Err(EngineError::InvalidConfig {
                message: "days_per_month must be greater than zero".to_string(),
            });
        }
        let split_total = self.salary_split.basic + self.salary_split.hra + self.salary_split.da;
        if split_total != Decimal::ONE {
            return Err(EngineError::InvalidConfig {
                message: format!("salary split shares must sum to 1, got {}", split_total),
            });
        }
        Ok(())
    }
}

/// The complete engine configuration loaded from YAML files.
///
/// This struct aggregates all configuration loaded from the YAML files
/// in a company configuration directory.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Company profile.
    company: CompanyProfile,
    /// Attendance rules.
    attendance: AttendanceRules,
    /// Payroll rules.
    payroll: PayrollRules,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(company: CompanyProfile, attendance: AttendanceRules, payroll: PayrollRules) -> Self {
        Self {
            company,
            attendance,
            payroll,
        }
    }

    /// Returns the company profile.
    pub fn company(&self) -> &CompanyProfile {
        &self.company
    }

    /// Returns the attendance rules.
    pub fn attendance(&self) -> &AttendanceRules {
        &self.attendance
    }

    /// Returns the payroll rules.
    pub fn payroll(&self) -> &PayrollRules {
        &self.payroll
    }
}
