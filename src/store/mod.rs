//! Storage seams and the in-memory backend.
//!
//! The engine talks to persistence through the [`AttendanceStore`] and
//! [`Directory`] traits so the backend can be swapped without touching
//! attendance or payroll logic. [`InMemoryStore`] is the bundled
//! implementation and backs both traits from one instance.

mod memory;
mod traits;

pub use memory::InMemoryStore;
pub use traits::{AttendanceStore, Directory};
