//! EmailAddress value object.

use super::errors::{ContactField, ValidationError};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}$").expect("Failed to compile email regex")
});

/// A type-safe wrapper for email addresses.
///
/// Addresses are lowercased before they are checked, so the stored form is
/// always lowercase. Surrounding whitespace is rejected.
///
/// # Example
///
/// ```
/// use contact_directory::domain::EmailAddress;
///
/// let email = EmailAddress::new("Juan@MAIL.com").unwrap();
/// assert_eq!(email.as_str(), "juan@mail.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new EmailAddress, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Local part: one or more of `a-z 0-9 . _ % + -`
    /// - Exactly one '@'
    /// - Domain: one or more of `a-z 0-9 . -`, ending in a label of 2+ letters
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidFormat` for the email field if the
    /// lowercased value does not match.
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();
        let lowered = email.to_lowercase();

        if !EMAIL_REGEX.is_match(&lowered) {
            return Err(ValidationError::invalid(ContactField::Email, email));
        }

        Ok(Self(lowered))
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Serde support - serialize as string
impl Serialize for EmailAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for EmailAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        EmailAddress::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_normalizes_case() {
        let email = EmailAddress::new("Juan@MAIL.com").unwrap();
        assert_eq!(email.as_str(), "juan@mail.com");
    }

    #[test]
    fn test_email_rejects_surrounding_whitespace() {
        let err = EmailAddress::new(" juan@mail.com ").unwrap_err();
        assert_eq!(err.field(), ContactField::Email);
        assert!(EmailAddress::new("ana@correo.es\n").is_err());
        assert!(EmailAddress::new("\tana@correo.es").is_err());
    }

    #[test]
    fn test_email_validates_format() {
        assert!(EmailAddress::new("correo-invalido").is_err());
        assert!(EmailAddress::new("@example.com").is_err());
        assert!(EmailAddress::new("user@").is_err());
        assert!(EmailAddress::new("user@domain").is_err());
        assert!(EmailAddress::new("user@@example.com").is_err());
        assert!(EmailAddress::new("user@example.c").is_err());
        assert!(EmailAddress::new("user@example.c0m").is_err());
        assert!(EmailAddress::new("us er@example.com").is_err());
        assert!(EmailAddress::new("valid@example.com").is_ok());
        assert!(EmailAddress::new("user.name+tag@example.co.uk").is_ok());
        assert!(EmailAddress::new("a_b%c-d@sub-domain.example.org").is_ok());
    }

    #[test]
    fn test_email_error_keeps_raw_input() {
        let err = EmailAddress::new("Not An Email").unwrap_err();
        assert_eq!(err.field(), ContactField::Email);
        assert_eq!(err.value(), "Not An Email");
    }

    #[test]
    fn test_email_serialization() {
        let email = EmailAddress::new("user@example.com").unwrap();
        let json = serde_json::to_string(&email).unwrap();
        assert_eq!(json, "\"user@example.com\"");
    }
}
