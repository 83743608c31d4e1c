//! Student record with validated scalar fields and optional contact.

use crate::domain::{StudentId, ValidationError};
use crate::models::contact::{Contact, ContactDetails};
use serde::Serialize;

/// A student in the roster.
///
/// Every field satisfies its validator for the record's entire lifetime;
/// the id never changes after construction. Records only leave a valid
/// state through [`Student::apply_update`], which is all-or-nothing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Student {
    id: StudentId,
    name: String,
    age: u32,
    grade: String,
    contact: Option<Contact>,
}

/// Structured update payload for [`Student::apply_update`].
///
/// `name`, `age`, and `grade` are required; leaving one as `None` fails
/// the update with `ValidationError::MissingField`. `contact` is optional:
/// `Some` replaces the stored contact wholesale, `None` keeps it.
#[derive(Debug, Clone, Default)]
pub struct StudentUpdate {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub grade: Option<String>,
    pub contact: Option<Contact>,
}

/// Fields for admitting a new student; the roster assigns the id.
#[derive(Debug, Clone, Default)]
pub struct NewStudent {
    pub name: String,
    pub age: u32,
    pub grade: String,
    pub contact: Option<Contact>,
}

/// A serializable snapshot of a student's details.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentDetails {
    /// The student's id.
    pub id: StudentId,

    /// The student's name.
    pub name: String,

    /// The student's age.
    pub age: u32,

    /// The student's grade.
    pub grade: String,

    /// Contact details, if a contact is on record.
    pub contact: Option<ContactDetails>,
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() || name.chars().any(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidName(name.to_string()));
    }
    Ok(())
}

fn validate_age(age: u32) -> Result<(), ValidationError> {
    if age == 0 {
        return Err(ValidationError::InvalidAge(age));
    }
    Ok(())
}

fn validate_grade(grade: &str) -> Result<(), ValidationError> {
    if grade.trim().is_empty() {
        return Err(ValidationError::InvalidGrade(grade.to_string()));
    }
    Ok(())
}

impl Student {
    /// Create a new student, validating every field before any is set.
    ///
    /// The first failure aborts construction with no partial object. The
    /// id arrives pre-validated through [`StudentId`], and a contact, if
    /// supplied, is valid by construction.
    ///
    /// # Errors
    ///
    /// Returns the `ValidationError` for the first field that fails.
    pub fn new(
        id: StudentId,
        name: impl Into<String>,
        age: u32,
        grade: impl Into<String>,
        contact: Option<Contact>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let grade = grade.into();

        validate_name(&name)?;
        validate_age(age)?;
        validate_grade(&grade)?;

        Ok(Self {
            id,
            name,
            age,
            grade,
            contact,
        })
    }

    /// Apply an update, validating the full payload before committing.
    ///
    /// All-or-nothing: if any check fails, the student's prior state is
    /// unchanged. The id is not part of the updatable set.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::MissingField` when `name`, `age`, or
    /// `grade` is absent, or the field's own error when a value is invalid.
    pub fn apply_update(&mut self, update: StudentUpdate) -> Result<(), ValidationError> {
        let name = update.name.ok_or(ValidationError::MissingField("name"))?;
        let age = update.age.ok_or(ValidationError::MissingField("age"))?;
        let grade = update.grade.ok_or(ValidationError::MissingField("grade"))?;

        validate_name(&name)?;
        validate_age(age)?;
        validate_grade(&grade)?;

        self.name = name;
        self.age = age;
        self.grade = grade;
        if let Some(contact) = update.contact {
            self.contact = Some(contact);
        }

        Ok(())
    }

    /// Get the student's id.
    pub fn id(&self) -> StudentId {
        self.id
    }

    /// Get the student's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the student's age.
    pub fn age(&self) -> u32 {
        self.age
    }

    /// Get the student's grade.
    pub fn grade(&self) -> &str {
        &self.grade
    }

    /// Get the student's contact, if any.
    pub fn contact(&self) -> Option<&Contact> {
        self.contact.as_ref()
    }

    /// Return a snapshot of the student's details.
    pub fn details(&self) -> StudentDetails {
        StudentDetails {
            id: self.id,
            name: self.name.clone(),
            age: self.age,
            grade: self.grade.clone(),
            contact: self.contact.as_ref().map(Contact::details),
        }
    }
}
