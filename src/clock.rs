//! Time source abstraction for the attendance engine.
//!
//! Lateness classification and record dating depend on the current office
//! wall-clock time, so the engine reads time through the [`Clock`] trait
//! rather than calling the system clock directly. Production code wires in
//! [`SystemClock`]; tests pin time with [`FixedClock`].

use std::sync::Mutex;

use chrono::{Local, NaiveDateTime};

/// Supplies the current office wall-clock time.
pub trait Clock: Send + Sync {
    /// Returns the current local date and time.
    fn now(&self) -> NaiveDateTime;
}

/// A [`Clock`] backed by the system's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A [`Clock`] that reports a fixed, settable instant.
///
/// # Example
///
/// ```
/// use attendance_engine::clock::{Clock, FixedClock};
/// use chrono::NaiveDate;
///
/// let t = NaiveDate::from_ymd_opt(2025, 8, 4).unwrap().and_hms_opt(9, 58, 0).unwrap();
/// let clock = FixedClock::new(t);
/// assert_eq!(clock.now(), t);
/// ```
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<NaiveDateTime>,
}

impl FixedClock {
    /// Creates a clock pinned to the given instant.
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Moves the clock to a new instant.
    pub fn set(&self, now: NaiveDateTime) {
        *self.now.lock().expect("clock poisoned") = now;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        *self.now.lock().expect("clock poisoned")
    }
}
