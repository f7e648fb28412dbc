//! In-memory storage backend.
//!
//! [`InMemoryStore`] keeps users, attendance records and salary slips in
//! plain vectors behind a single `RwLock`. Every read clones a snapshot
//! out of the guard, so callers never observe a half-applied write.
//! Volumes are small (one record per user per day), which keeps linear
//! scans perfectly adequate.

use std::sync::RwLock;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, SalarySlip, User};

use super::traits::{AttendanceStore, Directory};

#[derive(Debug, Default)]
struct StoreInner {
    users: Vec<User>,
    records: Vec<AttendanceRecord>,
    slips: Vec<SalarySlip>,
}

/// Vector-backed store holding the directory, attendance records and
/// salary slips for one company.
///
/// Implements both [`AttendanceStore`] and [`Directory`], so a single
/// instance can back the whole engine.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: RwLock<StoreInner>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with a user directory.
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                users,
                records: Vec::new(),
                slips: Vec::new(),
            }),
        }
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, StoreInner> {
        self.inner.read().expect("attendance store poisoned")
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, StoreInner> {
        self.inner.write().expect("attendance store poisoned")
    }
}

impl AttendanceStore for InMemoryStore {
    fn create_record(&self, record: AttendanceRecord) -> EngineResult<AttendanceRecord> {
        let mut inner = self.write();
        let duplicate = inner
            .records
            .iter()
            .any(|r| r.user_id == record.user_id && r.date == record.date);
        if duplicate {
            return Err(EngineError::DuplicateRecord {
                user_id: record.user_id,
                date: record.date,
            });
        }
        inner.records.push(record.clone());
        Ok(record)
    }

    fn update_record(&self, record: AttendanceRecord) -> EngineResult<AttendanceRecord> {
        let mut inner = self.write();
        match inner.records.iter_mut().find(|r| r.id == record.id) {
            Some(stored) => {
                *stored = record.clone();
                Ok(record)
            }
            None => Err(EngineError::RecordNotFound {
                record_id: record.id,
            }),
        }
    }

    fn record_for_day(&self, user_id: &str, date: NaiveDate) -> Option<AttendanceRecord> {
        self.read()
            .records
            .iter()
            .find(|r| r.user_id == user_id && r.date == date)
            .cloned()
    }

    fn record_by_id(&self, record_id: Uuid) -> Option<AttendanceRecord> {
        self.read()
            .records
            .iter()
            .find(|r| r.id == record_id)
            .cloned()
    }

    fn records_for_date(&self, date: NaiveDate) -> Vec<AttendanceRecord> {
        self.read()
            .records
            .iter()
            .filter(|r| r.date == date)
            .cloned()
            .collect()
    }

    fn records_for_month(&self, user_id: &str, month: &str) -> Vec<AttendanceRecord> {
        self.read()
            .records
            .iter()
            .filter(|r| r.user_id == user_id && r.date.format("%Y-%m").to_string() == month)
            .cloned()
            .collect()
    }

    fn upsert_slip(&self, slip: SalarySlip) {
        let mut inner = self.write();
        inner
            .slips
            .retain(|s| !(s.user_id == slip.user_id && s.month == slip.month));
        inner.slips.push(slip);
    }

    fn slips_for_user(&self, user_id: &str) -> Vec<SalarySlip> {
        self.read()
            .slips
            .iter()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect()
    }

    fn slip_for_month(&self, user_id: &str, month: &str) -> Option<SalarySlip> {
        self.read()
            .slips
            .iter()
            .find(|s| s.user_id == user_id && s.month == month)
            .cloned()
    }
}

impl Directory for InMemoryStore {
    fn list_users(&self) -> Vec<User> {
        self.read().users.clone()
    }

    fn user(&self, user_id: &str) -> Option<User> {
        self.read().users.iter().find(|u| u.id == user_id).cloned()
    }

    fn find_by_email(&self, email: &str) -> Option<User> {
        self.read()
            .users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned()
    }

    fn create_user(&self, user: User) -> EngineResult<User> {
        let mut inner = self.write();
        let duplicate = inner
            .users
            .iter()
            .any(|u| u.email.eq_ignore_ascii_case(&user.email));
        if duplicate {
            return Err(EngineError::DuplicateUser { email: user.email });
        }
        inner.users.push(user.clone());
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AttendanceStatus, Role};
    use chrono::NaiveDateTime;
    use rust_decimal::Decimal;

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn make_datetime(year: i32, month: u32, day: u32, hour: u32, min: u32) -> NaiveDateTime {
        make_date(year, month, day).and_hms_opt(hour, min, 0).unwrap()
    }

    fn create_test_user(id: &str, email: &str) -> User {
        User {
            id: id.to_string(),
            name: "Rahul Verma".to_string(),
            email: email.to_string(),
            role: Role::Employee,
            department: "Engineering".to_string(),
            designation: "Software Engineer".to_string(),
            base_salary: Decimal::from(800_000),
            join_date: make_date(2022, 6, 1),
            avatar_url: String::new(),
        }
    }

    fn create_test_record(user_id: &str, date: NaiveDate) -> AttendanceRecord {
        AttendanceRecord {
            id: Uuid::new_v4(),
            user_id: user_id.to_string(),
            date,
            check_in_time: Some(date.and_hms_opt(9, 55, 0).unwrap()),
            check_out_time: None,
            status: AttendanceStatus::Present,
            location_lat: 12.9716,
            location_lng: 77.5946,
            is_remote: false,
            audit_logs: Vec::new(),
        }
    }

    fn create_test_slip(user_id: &str, month: &str, net: Decimal) -> SalarySlip {
        SalarySlip {
            id: Uuid::new_v4(),
            user_id: user_id.to_string(),
            month: month.to_string(),
            generated_date: make_datetime(2025, 9, 1, 9, 0),
            basic_salary: Decimal::ZERO,
            hra: Decimal::ZERO,
            da: Decimal::ZERO,
            bonuses: Decimal::ZERO,
            deductions: Decimal::ZERO,
            tax: Decimal::ZERO,
            net_salary: net,
            present_days: 0,
            total_days: 30,
        }
    }

    #[test]
    fn test_create_and_fetch_record_by_day() {
        let store = InMemoryStore::new();
        let record = create_test_record("user_001", make_date(2025, 8, 18));

        let stored = store.create_record(record.clone()).unwrap();
        assert_eq!(stored.id, record.id);

        let fetched = store.record_for_day("user_001", make_date(2025, 8, 18));
        assert_eq!(fetched.map(|r| r.id), Some(record.id));
        assert!(store.record_for_day("user_001", make_date(2025, 8, 19)).is_none());
        assert!(store.record_for_day("user_002", make_date(2025, 8, 18)).is_none());
    }

    #[test]
    fn test_duplicate_record_for_same_day_rejected() {
        let store = InMemoryStore::new();
        let date = make_date(2025, 8, 18);
        store.create_record(create_test_record("user_001", date)).unwrap();

        let result = store.create_record(create_test_record("user_001", date));
        match result {
            Err(EngineError::DuplicateRecord { user_id, date: d }) => {
                assert_eq!(user_id, "user_001");
                assert_eq!(d, date);
            }
            _ => panic!("Expected DuplicateRecord error"),
        }
    }

    #[test]
    fn test_update_record_replaces_stored_copy() {
        let store = InMemoryStore::new();
        let mut record = store
            .create_record(create_test_record("user_001", make_date(2025, 8, 18)))
            .unwrap();

        record.check_out_time = Some(make_datetime(2025, 8, 18, 18, 30));
        store.update_record(record.clone()).unwrap();

        let fetched = store.record_by_id(record.id).unwrap();
        assert_eq!(fetched.check_out_time, Some(make_datetime(2025, 8, 18, 18, 30)));
    }

    #[test]
    fn test_update_unknown_record_returns_error() {
        let store = InMemoryStore::new();
        let record = create_test_record("user_001", make_date(2025, 8, 18));

        let result = store.update_record(record.clone());
        match result {
            Err(EngineError::RecordNotFound { record_id }) => {
                assert_eq!(record_id, record.id);
            }
            _ => panic!("Expected RecordNotFound error"),
        }
    }

    #[test]
    fn test_records_for_date_spans_users() {
        let store = InMemoryStore::new();
        let date = make_date(2025, 8, 18);
        store.create_record(create_test_record("user_001", date)).unwrap();
        store.create_record(create_test_record("user_002", date)).unwrap();
        store
            .create_record(create_test_record("user_001", make_date(2025, 8, 19)))
            .unwrap();

        assert_eq!(store.records_for_date(date).len(), 2);
    }

    #[test]
    fn test_records_for_month_filters_user_and_month() {
        let store = InMemoryStore::new();
        store
            .create_record(create_test_record("user_001", make_date(2025, 8, 1)))
            .unwrap();
        store
            .create_record(create_test_record("user_001", make_date(2025, 8, 29)))
            .unwrap();
        store
            .create_record(create_test_record("user_001", make_date(2025, 9, 1)))
            .unwrap();
        store
            .create_record(create_test_record("user_002", make_date(2025, 8, 1)))
            .unwrap();

        let august = store.records_for_month("user_001", "2025-08");
        assert_eq!(august.len(), 2);
        assert!(august.iter().all(|r| r.user_id == "user_001"));
    }

    #[test]
    fn test_upsert_slip_supersedes_same_month() {
        let store = InMemoryStore::new();
        store.upsert_slip(create_test_slip("user_001", "2025-08", Decimal::from(48_689)));
        store.upsert_slip(create_test_slip("user_001", "2025-07", Decimal::from(51_000)));
        store.upsert_slip(create_test_slip("user_001", "2025-08", Decimal::from(50_901)));

        let slips = store.slips_for_user("user_001");
        assert_eq!(slips.len(), 2);

        let august = store.slip_for_month("user_001", "2025-08").unwrap();
        assert_eq!(august.net_salary, Decimal::from(50_901));
    }

    #[test]
    fn test_slips_are_scoped_per_user() {
        let store = InMemoryStore::new();
        store.upsert_slip(create_test_slip("user_001", "2025-08", Decimal::from(48_689)));

        assert!(store.slip_for_month("user_002", "2025-08").is_none());
        assert!(store.slips_for_user("user_002").is_empty());
    }

    #[test]
    fn test_with_users_seeds_directory() {
        let store = InMemoryStore::with_users(vec![
            create_test_user("user_001", "rahul@techflow.example"),
            create_test_user("user_002", "priya@techflow.example"),
        ]);

        assert_eq!(store.list_users().len(), 2);
        assert_eq!(store.user("user_002").map(|u| u.email), Some("priya@techflow.example".to_string()));
        assert!(store.user("user_099").is_none());
    }

    #[test]
    fn test_find_by_email_ignores_case() {
        let store = InMemoryStore::with_users(vec![create_test_user(
            "user_001",
            "rahul@techflow.example",
        )]);

        let found = store.find_by_email("RAHUL@TechFlow.Example");
        assert_eq!(found.map(|u| u.id), Some("user_001".to_string()));
        assert!(store.find_by_email("unknown@techflow.example").is_none());
    }

    #[test]
    fn test_create_user_rejects_duplicate_email() {
        let store = InMemoryStore::with_users(vec![create_test_user(
            "user_001",
            "rahul@techflow.example",
        )]);

        let clash = create_test_user("user_002", "Rahul@Techflow.Example");
        let result = store.create_user(clash);
        match result {
            Err(EngineError::DuplicateUser { email }) => {
                assert_eq!(email, "Rahul@Techflow.Example");
            }
            _ => panic!("Expected DuplicateUser error"),
        }
        assert_eq!(store.list_users().len(), 1);
    }
}
