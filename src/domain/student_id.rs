//! StudentId value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for student IDs.
///
/// This ensures that student IDs are validated at construction time
/// and are always positive integers. IDs are ordered so that roster
/// iteration and exports run in id order.
///
/// # Example
///
/// ```
/// use student_roster::domain::StudentId;
///
/// let id = StudentId::new(42).unwrap();
/// assert_eq!(id.as_u32(), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StudentId(u32);

impl StudentId {
    /// Create a new StudentId, validating that it is positive.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidId` if the provided ID is zero.
    pub fn new(id: u32) -> Result<Self, ValidationError> {
        if id == 0 {
            return Err(ValidationError::InvalidId);
        }
        Ok(Self(id))
    }

    /// Get the numeric value of the ID.
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

// Serde support - serialize as a bare number
impl Serialize for StudentId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from a number with validation
impl<'de> Deserialize<'de> for StudentId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let id = u32::deserialize(deserializer)?;
        StudentId::new(id).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_id_valid() {
        let id = StudentId::new(1).unwrap();
        assert_eq!(id.as_u32(), 1);
    }

    #[test]
    fn test_student_id_rejects_zero() {
        assert!(StudentId::new(0).is_err());
    }

    #[test]
    fn test_student_id_ordering() {
        let a = StudentId::new(1).unwrap();
        let b = StudentId::new(2).unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_student_id_display() {
        let id = StudentId::new(17).unwrap();
        assert_eq!(format!("{}", id), "17");
    }

    #[test]
    fn test_student_id_serialization() {
        let id = StudentId::new(5).unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "5");
    }

    #[test]
    fn test_student_id_deserialization() {
        let id: StudentId = serde_json::from_str("5").unwrap();
        assert_eq!(id.as_u32(), 5);
    }

    #[test]
    fn test_student_id_deserialization_zero_fails() {
        let result: Result<StudentId, _> = serde_json::from_str("0");
        assert!(result.is_err());
    }
}
