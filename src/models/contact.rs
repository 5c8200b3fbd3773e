//! Contact model representing one person in the directory.

use crate::domain::{Address, EmailAddress, PersonName, PhoneNumber, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact: name, phone, email and address.
///
/// Fields are private and typed, so a `Contact` is never observable in an
/// invalid state. Construction validates all four fields in order (name,
/// phone, email, address) and stops at the first failure. Each setter
/// validates only its own field and leaves the contact untouched on error.
///
/// Deserializing re-runs every field rule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    name: PersonName,
    phone: PhoneNumber,
    email: EmailAddress,
    address: Address,
}

impl Contact {
    /// Create a contact from four raw strings.
    ///
    /// # Errors
    ///
    /// Returns the `ValidationError` of the first field that fails its rule.
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: PersonName::new(name)?,
            phone: PhoneNumber::new(phone)?,
            email: EmailAddress::new(email)?,
            address: Address::new(address)?,
        })
    }

    /// Stored (uppercase) name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Phone number, which is also the directory key.
    pub fn phone(&self) -> &str {
        self.phone.as_str()
    }

    /// Stored (lowercase) email.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    pub fn address(&self) -> &str {
        self.address.as_str()
    }

    /// Case-insensitive substring match against the name.
    pub fn name_contains(&self, fragment: &str) -> bool {
        self.name.contains(fragment)
    }

    pub fn set_name(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        self.name = PersonName::new(value)?;
        Ok(())
    }

    /// Replace the phone number.
    ///
    /// A contact stored in a [`ContactDirectory`](crate::ContactDirectory) is
    /// keyed by this value; change it through
    /// [`ContactDirectory::rekey`](crate::ContactDirectory::rekey) instead.
    pub fn set_phone(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        self.phone = PhoneNumber::new(value)?;
        Ok(())
    }

    pub fn set_email(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        self.email = EmailAddress::new(value)?;
        Ok(())
    }

    pub fn set_address(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        self.address = Address::new(value)?;
        Ok(())
    }

    /// One-line, human-readable rendering for display.
    pub fn render(&self) -> String {
        format!(
            "Name: {} | Phone: {} | Email: {} | Address: {}",
            self.name, self.phone, self.email, self.address
        )
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
