//! Data models for roster entities.
//!
//! This module contains the record types representing students and their
//! contact information, validated at every mutation.

pub mod contact;
pub mod student;

pub use contact::{Contact, ContactDetails};
pub use student::{NewStudent, Student, StudentDetails, StudentUpdate};
