//! Attendance Engine for TechFlow Solutions
//!
//! This crate provides geofenced attendance tracking, admin-audited record
//! corrections, salary slip generation and attendance reporting for a single
//! office location and month.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod store;
