//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object and record validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided student ID is not a positive integer.
    InvalidId,

    /// The provided phone number is invalid.
    InvalidPhone(String),

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The provided student name is empty or contains digits.
    InvalidName(String),

    /// The provided age is not a positive integer.
    InvalidAge(u32),

    /// The provided grade is empty.
    InvalidGrade(String),

    /// A required field was missing from an update payload.
    MissingField(&'static str),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId => write!(f, "Student ID must be a positive integer"),
            Self::InvalidPhone(phone) => {
                write!(f, "Phone number must be an 11-digit number: {}", phone)
            }
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
            Self::InvalidName(name) => {
                write!(f, "Name must be a non-empty string without digits: {}", name)
            }
            Self::InvalidAge(age) => write!(f, "Age must be a positive integer: {}", age),
            Self::InvalidGrade(grade) => write!(f, "Grade must be a non-empty string: {}", grade),
            Self::MissingField(field) => write!(f, "Missing required field: {}", field),
        }
    }
}

impl std::error::Error for ValidationError {}
