//! Domain validation errors.

use std::fmt;

/// The contact field a value belongs to.
///
/// Every validation failure is tied to exactly one field, which is what lets
/// the console re-ask for that field alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Phone,
    Email,
    Address,
}

impl ContactField {
    /// All fields, in the order a contact is constructed.
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Phone,
        ContactField::Email,
        ContactField::Address,
    ];

    /// Lowercase label used in messages and logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Address => "address",
        }
    }

    /// Check a raw value against this field's rule without building a contact.
    pub fn validate(&self, raw: &str) -> Result<(), ValidationError> {
        match self {
            Self::Name => super::PersonName::new(raw).map(|_| ()),
            Self::Phone => super::PhoneNumber::new(raw).map(|_| ()),
            Self::Email => super::EmailAddress::new(raw).map(|_| ()),
            Self::Address => super::Address::new(raw).map(|_| ()),
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The value does not satisfy the format rule of its field.
    InvalidFormat { field: ContactField, value: String },
}

impl ValidationError {
    pub(crate) fn invalid(field: ContactField, value: impl Into<String>) -> Self {
        Self::InvalidFormat {
            field,
            value: value.into(),
        }
    }

    /// The field whose rule was violated.
    pub fn field(&self) -> ContactField {
        match self {
            Self::InvalidFormat { field, .. } => *field,
        }
    }

    /// The rejected input, as given.
    pub fn value(&self) -> &str {
        match self {
            Self::InvalidFormat { value, .. } => value,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat {
                field: ContactField::Name,
                value,
            } => write!(
                f,
                "Invalid name '{}': it must include at least a first name and a last name (e.g. Juan Pérez)",
                value
            ),
            Self::InvalidFormat {
                field: ContactField::Phone,
                value,
            } => write!(f, "Invalid phone '{}': it must have exactly 9 digits", value),
            Self::InvalidFormat {
                field: ContactField::Email,
                value,
            } => write!(f, "Invalid email address '{}' (e.g. name@domain.com)", value),
            Self::InvalidFormat {
                field: ContactField::Address,
                value,
            } => write!(
                f,
                "Invalid address '{}': it is too short (minimum 4 characters)",
                value
            ),
        }
    }
}

impl std::error::Error for ValidationError {}
