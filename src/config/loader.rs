//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading company
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{AttendanceRules, CompanyProfile, EngineConfig, PayrollRules};

/// Loads and provides access to company configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory,
/// validates them, and provides access to the company profile and to the
/// attendance and payroll rules.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/techflow/
/// ├── company.yaml     # Company profile
/// ├── attendance.yaml  # Office geofence and lateness policy
/// └── payroll.yaml     # Salary split and statutory deductions
/// ```
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/techflow").unwrap();
///
/// println!("Company: {}", loader.company().name);
/// println!("Geofence radius: {}m", loader.attendance().radius_meters);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/techflow")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The loaded rules fail validation
    ///
    /// # Example
    ///
    /// ```no_run
    /// use attendance_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/techflow")?;
    /// # Ok::<(), attendance_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        // Load company.yaml
        let company_path = path.join("company.yaml");
        let company = Self::load_yaml::<CompanyProfile>(&company_path)?;

        // Load attendance.yaml
        let attendance_path = path.join("attendance.yaml");
        let attendance = Self::load_yaml::<AttendanceRules>(&attendance_path)?;

        // Load payroll.yaml
        let payroll_path = path.join("payroll.yaml");
        let payroll = Self::load_yaml::<PayrollRules>(&payroll_path)?;

        attendance.validate()?;
        payroll.validate()?;

        Ok(Self {
            config: EngineConfig::new(company, attendance, payroll),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the company profile.
    pub fn company(&self) -> &CompanyProfile {
        self.config.company()
    }

    /// Returns the attendance rules.
    pub fn attendance(&self) -> &AttendanceRules {
        self.config.attendance()
    }

    /// Returns the payroll rules.
    pub fn payroll(&self) -> &PayrollRules {
        self.config.payroll()
    }
}
