//! PersonName value object.

use super::errors::{ContactField, ValidationError};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-ZáéíóúÁÉÍÓÚñÑ]+(?:\s+[a-zA-ZáéíóúÁÉÍÓÚñÑ]+)+$")
        .expect("Failed to compile name regex")
});

/// A person's full name: at least a first name and a last name.
///
/// Tokens are letters only (including the Spanish accented vowels and ñ).
/// The stored form is trimmed and uppercased.
///
/// # Example
///
/// ```
/// use contact_directory::domain::PersonName;
///
/// let name = PersonName::new("juan perez").unwrap();
/// assert_eq!(name.as_str(), "JUAN PEREZ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonName(String);

impl PersonName {
    /// Create a new PersonName, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidFormat` for the name field if the
    /// trimmed value has fewer than two alphabetic tokens, or any token holds
    /// a digit or punctuation.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        let trimmed = name.trim();

        if !NAME_REGEX.is_match(trimmed) {
            return Err(ValidationError::invalid(ContactField::Name, name));
        }

        Ok(Self(trimmed.to_uppercase()))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive substring test against the stored name.
    pub fn contains(&self, fragment: &str) -> bool {
        self.0.contains(&fragment.to_uppercase())
    }
}

impl Serialize for PersonName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PersonName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PersonName::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_normalizes() {
        assert_eq!(PersonName::new("juan perez").unwrap().as_str(), "JUAN PEREZ");
        assert_eq!(
            PersonName::new("  María   Núñez  ").unwrap().as_str(),
            "MARÍA   NÚÑEZ"
        );
    }

    #[test]
    fn test_name_accepts_more_than_two_tokens() {
        assert!(PersonName::new("Juan Alberto Gomez").is_ok());
        assert!(PersonName::new("Ana\tBelén").is_ok());
    }

    #[test]
    fn test_name_validates_format() {
        assert!(PersonName::new("").is_err());
        assert!(PersonName::new("Juan").is_err());
        assert!(PersonName::new("Juan123").is_err());
        assert!(PersonName::new("Juan Perez3").is_err());
        assert!(PersonName::new("Juan O'Brien").is_err());
        assert!(PersonName::new("Juan-Carlos Perez").is_err());
        assert!(PersonName::new("   ").is_err());
    }

    #[test]
    fn test_name_contains_is_case_insensitive() {
        let name = PersonName::new("Juan Pérez").unwrap();
        assert!(name.contains("juan"));
        assert!(name.contains("pérez"));
        assert!(name.contains(""));
        assert!(!name.contains("maria"));
    }
}
