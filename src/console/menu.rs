//! Menu entries and the fields editable from the console.

use crate::directory::ContactMut;
use crate::domain::ValidationError;
use crate::models::Contact;
use std::fmt;

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Register,
    Edit,
    Delete,
    SearchByName,
    SearchByPhone,
    ListAll,
    Exit,
}

impl MenuChoice {
    /// Menu entries in display order; entry `i` is selected with `i + 1`.
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::Register,
        MenuChoice::Edit,
        MenuChoice::Delete,
        MenuChoice::SearchByName,
        MenuChoice::SearchByPhone,
        MenuChoice::ListAll,
        MenuChoice::Exit,
    ];

    /// Parse the option typed by the user ("1" to "7").
    pub fn parse(input: &str) -> Option<Self> {
        let index: usize = input.trim().parse().ok()?;
        index
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Register => "Register contact",
            Self::Edit => "Edit contact",
            Self::Delete => "Delete contact",
            Self::SearchByName => "Search by NAME",
            Self::SearchByPhone => "Search by PHONE",
            Self::ListAll => "List all",
            Self::Exit => "Exit",
        }
    }
}

/// Fields that can be edited on a stored contact. The phone is not one of
/// them; it changes through a rekey.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EditableField {
    Name,
    Email,
    Address,
}

impl EditableField {
    pub(crate) const ALL: [EditableField; 3] = [
        EditableField::Name,
        EditableField::Email,
        EditableField::Address,
    ];

    pub(crate) fn current<'a>(&self, contact: &'a Contact) -> &'a str {
        match self {
            Self::Name => contact.name(),
            Self::Email => contact.email(),
            Self::Address => contact.address(),
        }
    }

    pub(crate) fn apply(
        &self,
        contact: &mut ContactMut<'_>,
        value: String,
    ) -> Result<(), ValidationError> {
        match self {
            Self::Name => contact.set_name(value),
            Self::Email => contact.set_email(value),
            Self::Address => contact.set_address(value),
        }
    }
}

impl fmt::Display for EditableField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Address => "address",
        };
        f.write_str(label)
    }
}
