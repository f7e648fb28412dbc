//! Payroll operations.
//!
//! Slip computation itself is pure and lives in the calculation module;
//! this module wires it to the directory, the stored attendance records
//! and the slip store. Previewing never writes; generation upserts, so a
//! user holds at most one slip per month.

use tracing::info;

use crate::calculation::compute_slip;
use crate::error::{EngineError, EngineResult};
use crate::models::SalarySlip;

use super::tracking::AttendanceEngine;

/// Parses a `YYYY-MM` month key into year and month numbers.
pub(crate) fn parse_month(month: &str) -> EngineResult<(i32, u32)> {
    let invalid = || EngineError::InvalidMonth {
        value: month.to_string(),
    };

    let (year, month_num) = month.split_once('-').ok_or_else(invalid)?;
    if year.len() != 4
        || month_num.len() != 2
        || !year.bytes().all(|b| b.is_ascii_digit())
        || !month_num.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(invalid());
    }

    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month_num: u32 = month_num.parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&month_num) {
        return Err(invalid());
    }
    Ok((year, month_num))
}

impl AttendanceEngine {
    /// Counts a user's payable days in a `YYYY-MM` month.
    ///
    /// Every stored record counts, whatever its status; absence is simply
    /// the lack of a record for a day.
    ///
    /// # Errors
    ///
    /// - `InvalidMonth` when the month key is not `YYYY-MM`
    pub fn present_days(&self, user_id: &str, month: &str) -> EngineResult<u32> {
        parse_month(month)?;
        Ok(self.store.records_for_month(user_id, month).len() as u32)
    }

    /// Computes a user's salary slip for a month without storing it.
    ///
    /// # Errors
    ///
    /// - `UserNotFound` when the user id is not in the directory
    /// - `InvalidMonth` when the month key is not `YYYY-MM`
    pub fn preview_slip(&self, user_id: &str, month: &str) -> EngineResult<SalarySlip> {
        let user = self.user(user_id)?;
        let present_days = self.present_days(user_id, month)?;
        Ok(compute_slip(
            &user,
            month,
            present_days,
            self.clock.now(),
            self.config.payroll(),
        ))
    }

    /// Computes and stores a user's salary slip for a month.
    ///
    /// Regenerating a month replaces the earlier slip, so a user holds at
    /// most one slip per month.
    ///
    /// # Errors
    ///
    /// - `UserNotFound` when the user id is not in the directory
    /// - `InvalidMonth` when the month key is not `YYYY-MM`
    pub fn generate_slip(&self, user_id: &str, month: &str) -> EngineResult<SalarySlip> {
        let slip = self.preview_slip(user_id, month)?;
        self.store.upsert_slip(slip.clone());
        info!(
            user_id = %slip.user_id,
            month = %slip.month,
            present_days = slip.present_days,
            net_salary = %slip.net_salary,
            "Salary slip generated"
        );
        Ok(slip)
    }

    /// Returns every slip generated for a user.
    ///
    /// # Errors
    ///
    /// - `UserNotFound` when the user id is not in the directory
    pub fn slips_for_user(&self, user_id: &str) -> EngineResult<Vec<SalarySlip>> {
        self.user(user_id)?;
        Ok(self.store.slips_for_user(user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::Coords;
    use crate::clock::FixedClock;
    use crate::config::ConfigLoader;
    use crate::models::{Role, User};
    use crate::store::InMemoryStore;
    use chrono::{NaiveDate, NaiveDateTime};
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use std::sync::Arc;

    const OFFICE: Coords = Coords {
        lat: 12.9716,
        lng: 77.5946,
    };

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_engine(now: NaiveDateTime) -> (AttendanceEngine, Arc<FixedClock>) {
        let config = Arc::new(ConfigLoader::load("./config/techflow").unwrap());
        let store = Arc::new(InMemoryStore::with_users(vec![User {
            id: "user_001".to_string(),
            name: "Rahul Verma".to_string(),
            email: "rahul@techflow.example".to_string(),
            role: Role::Employee,
            department: "Engineering".to_string(),
            designation: "Software Engineer".to_string(),
            base_salary: Decimal::from(800_000),
            join_date: NaiveDate::from_ymd_opt(2022, 6, 1).unwrap(),
            avatar_url: String::new(),
        }]));
        let clock = Arc::new(FixedClock::new(now));
        let engine = AttendanceEngine::new(store.clone(), store, clock.clone(), config);
        (engine, clock)
    }

    fn check_in_on(engine: &AttendanceEngine, clock: &FixedClock, date_str: &str, time_str: &str) {
        clock.set(make_datetime(date_str, time_str));
        engine.check_in("user_001", Some(OFFICE)).unwrap();
    }

    #[test]
    fn test_parse_month_accepts_valid_keys() {
        assert_eq!(parse_month("2025-08").unwrap(), (2025, 8));
        assert_eq!(parse_month("2024-12").unwrap(), (2024, 12));
        assert_eq!(parse_month("2024-01").unwrap(), (2024, 1));
    }

    #[test]
    fn test_parse_month_rejects_malformed_keys() {
        for value in ["2025-8", "08-2025", "2025/08", "2025-13", "2025-00", "abcd-ef", "2025-08-01", "202508", ""] {
            match parse_month(value) {
                Err(EngineError::InvalidMonth { value: v }) => assert_eq!(v, value),
                other => panic!("Expected InvalidMonth for {:?}, got {:?}", value, other),
            }
        }
    }

    #[test]
    fn test_present_days_counts_every_stored_record() {
        let (engine, clock) = create_test_engine(make_datetime("2025-08-04", "09:58:00"));
        check_in_on(&engine, &clock, "2025-08-04", "09:58:00");
        // Late check-ins still count as payable days
        check_in_on(&engine, &clock, "2025-08-05", "10:40:00");
        check_in_on(&engine, &clock, "2025-08-06", "09:45:00");
        // A different month does not count
        check_in_on(&engine, &clock, "2025-09-01", "09:45:00");

        assert_eq!(engine.present_days("user_001", "2025-08").unwrap(), 3);
        assert_eq!(engine.present_days("user_001", "2025-09").unwrap(), 1);
        assert_eq!(engine.present_days("user_001", "2025-07").unwrap(), 0);
    }

    #[test]
    fn test_preview_slip_for_three_worked_days() {
        let (engine, clock) = create_test_engine(make_datetime("2025-08-04", "09:58:00"));
        check_in_on(&engine, &clock, "2025-08-04", "09:58:00");
        check_in_on(&engine, &clock, "2025-08-05", "09:58:00");
        check_in_on(&engine, &clock, "2025-08-06", "09:58:00");

        clock.set(make_datetime("2025-09-01", "09:00:00"));
        let slip = engine.preview_slip("user_001", "2025-08").unwrap();

        assert_eq!(slip.present_days, 3);
        assert_eq!(slip.total_days, 30);
        assert_eq!(slip.basic_salary, dec("3333"));
        assert_eq!(slip.hra, dec("2667"));
        assert_eq!(slip.da, dec("667"));
        assert_eq!(slip.tax, Decimal::ZERO);
        assert_eq!(slip.deductions, dec("200"));
        assert_eq!(slip.net_salary, dec("6467"));
        assert_eq!(slip.generated_date, make_datetime("2025-09-01", "09:00:00"));
    }

    #[test]
    fn test_preview_does_not_store_a_slip() {
        let (engine, clock) = create_test_engine(make_datetime("2025-08-04", "09:58:00"));
        check_in_on(&engine, &clock, "2025-08-04", "09:58:00");

        engine.preview_slip("user_001", "2025-08").unwrap();
        assert!(engine.slips_for_user("user_001").unwrap().is_empty());
    }

    #[test]
    fn test_generate_slip_stores_and_supersedes() {
        let (engine, clock) = create_test_engine(make_datetime("2025-08-04", "09:58:00"));
        check_in_on(&engine, &clock, "2025-08-04", "09:58:00");
        check_in_on(&engine, &clock, "2025-08-05", "09:58:00");

        let first = engine.generate_slip("user_001", "2025-08").unwrap();
        assert_eq!(first.present_days, 2);

        // Another worked day changes the count; regenerating replaces the slip
        check_in_on(&engine, &clock, "2025-08-06", "09:58:00");
        let second = engine.generate_slip("user_001", "2025-08").unwrap();
        assert_eq!(second.present_days, 3);

        let slips = engine.slips_for_user("user_001").unwrap();
        assert_eq!(slips.len(), 1);
        assert_eq!(slips[0].present_days, 3);
        assert_eq!(slips[0].net_salary, dec("6467"));
    }

    #[test]
    fn test_preview_slip_for_unknown_user_fails() {
        let (engine, _) = create_test_engine(make_datetime("2025-08-04", "09:58:00"));

        let result = engine.preview_slip("user_099", "2025-08");
        match result {
            Err(EngineError::UserNotFound { user_id }) => assert_eq!(user_id, "user_099"),
            _ => panic!("Expected UserNotFound error"),
        }
    }

    #[test]
    fn test_preview_slip_with_invalid_month_fails() {
        let (engine, _) = create_test_engine(make_datetime("2025-08-04", "09:58:00"));

        let result = engine.preview_slip("user_001", "August 2025");
        match result {
            Err(EngineError::InvalidMonth { value }) => assert_eq!(value, "August 2025"),
            _ => panic!("Expected InvalidMonth error"),
        }
    }

    #[test]
    fn test_slips_for_unknown_user_fails() {
        let (engine, _) = create_test_engine(make_datetime("2025-08-04", "09:58:00"));

        let result = engine.slips_for_user("user_099");
        match result {
            Err(EngineError::UserNotFound { .. }) => {}
            _ => panic!("Expected UserNotFound error"),
        }
    }
}
