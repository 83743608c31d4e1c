//! The roster layer: the id-keyed student store, search over it, and
//! per-date attendance snapshots.

pub mod attendance;
pub mod search;
pub mod store;

pub use attendance::{AttendanceLog, AttendanceRecord, AttendanceStatus};
pub use search::SearchCriterion;
pub use store::Roster;
