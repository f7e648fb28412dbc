//! Configuration loading and management for the Attendance Engine.
//!
//! This module provides functionality to load company configuration from
//! YAML files, including the company profile, the office geofence and
//! lateness policy, and the payroll rules.
//!
//! # Example
//!
//! ```no_run
//! use attendance_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/techflow").unwrap();
//! println!("Loaded company: {}", config.company().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AttendanceRules, CompanyProfile, EngineConfig, PayrollRules, SalarySplit};
