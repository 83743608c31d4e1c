//! Contact record holding a student's phone and email.

use crate::domain::{EmailAddress, PhoneNumber, ValidationError};
use serde::{Deserialize, Serialize};

/// Contact information for a student.
///
/// Both fields are validated value objects, so a `Contact` is valid for
/// its entire lifetime. Updates replace both fields together or leave the
/// record untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    phone: PhoneNumber,
    email: EmailAddress,
}

/// A plain serializable view of a contact's details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    /// The phone number as stored.
    pub phone: String,

    /// The email address as stored.
    pub email: String,
}

impl Contact {
    /// Create a new contact, validating both fields.
    ///
    /// Validation is atomic: if either field is invalid no contact is
    /// produced.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` or
    /// `ValidationError::InvalidEmail` for the first field that fails.
    pub fn new(
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let phone = PhoneNumber::new(phone)?;
        let email = EmailAddress::new(email)?;
        Ok(Self { phone, email })
    }

    /// Replace both fields with newly validated values.
    ///
    /// On failure neither field changes; the prior record remains valid.
    pub fn update(
        &mut self,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(phone)?;
        let email = EmailAddress::new(email)?;
        self.phone = phone;
        self.email = email;
        Ok(())
    }

    /// Get the phone number.
    pub fn phone(&self) -> &PhoneNumber {
        &self.phone
    }

    /// Get the email address.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Return the contact's details as a plain view.
    pub fn details(&self) -> ContactDetails {
        ContactDetails {
            phone: self.phone.as_str().to_string(),
            email: self.email.as_str().to_string(),
        }
    }
}
