//! Student Roster - the data and validation core of a student tracking system.
//!
//! This library holds validated student and contact records, an id-keyed
//! roster with a monotonic id counter, per-date attendance snapshots, and
//! the tabular surfaces around them: CSV import/export, text reports, and
//! a recent-activity feed. Everything is synchronous and in-memory; file
//! selection and display belong to the caller.
//!
//! # Architecture
//!
//! - **domain**: validated value objects (ids, phone numbers, emails)
//! - **models**: `Student` and `Contact` records with atomic updates
//! - **roster**: the id-keyed store, search, and attendance tracking
//! - **csv_io**: CSV import/export of the roster
//! - **report**: tabular text reports
//! - **activity**: bounded feed of one-line event descriptions
//! - **error**: custom error types for precise error handling
//! - **config**: configuration management from environment variables

// Re-export commonly used types
pub mod activity;
pub mod config;
pub mod csv_io;
pub mod domain;
pub mod error;
pub mod models;
pub mod report;
pub mod roster;

pub use activity::{ActivityEntry, ActivityEvent, ActivityLog};
pub use config::Config;
pub use domain::{EmailAddress, PhoneNumber, StudentId, ValidationError};
pub use error::{ConfigError, CsvError, RosterError};
pub use models::{Contact, ContactDetails, NewStudent, Student, StudentDetails, StudentUpdate};
pub use roster::{AttendanceLog, AttendanceRecord, AttendanceStatus, Roster, SearchCriterion};
