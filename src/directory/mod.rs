//! In-memory contact directory keyed by phone number.
//!
//! The directory owns every registered [`Contact`]. The key of each entry is
//! always equal to that contact's current phone: the only way to change a
//! stored phone is [`ContactDirectory::rekey`], and stored contacts are handed
//! out for editing through [`ContactMut`], which has no phone setter.
//!
//! Iteration follows insertion order. A rekey takes the contact out and puts
//! it back, so after a rekey (successful or rolled back) it sits last.

mod outcome;

pub use outcome::DirectoryOutcome;

use crate::domain::ValidationError;
use crate::models::Contact;
use std::collections::HashMap;
use std::ops::Deref;
use tracing::{debug, warn};

pub const MSG_SAVED: &str = "Contact saved successfully.";
pub const MSG_ALREADY_REGISTERED: &str = "Error: that phone number is already registered.";
pub const MSG_NO_CHANGES: &str = "No changes to apply.";
pub const MSG_PHONE_TAKEN: &str = "The new phone number already belongs to another contact.";
pub const MSG_NOT_FOUND: &str = "No contact found with that phone number.";
pub const MSG_PHONE_UPDATED: &str = "Phone number updated.";

/// Phone-keyed collection of contacts.
#[derive(Debug, Default)]
pub struct ContactDirectory {
    contacts: HashMap<String, Contact>,
    order: Vec<String>,
}

impl ContactDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Register a contact under its phone number.
    ///
    /// Refuses (ok=false) if the phone is already registered; an existing
    /// entry is never overwritten.
    pub fn register(&mut self, contact: Contact) -> DirectoryOutcome {
        let key = contact.phone().to_string();
        if self.contacts.contains_key(&key) {
            warn!("Rejected registration, phone {} already registered", key);
            return DirectoryOutcome::failure(MSG_ALREADY_REGISTERED);
        }

        debug!("Registered contact {}", key);
        self.order.push(key.clone());
        self.contacts.insert(key, contact);
        DirectoryOutcome::success(MSG_SAVED)
    }

    /// Move the contact stored at `old_phone` to `new_phone`.
    ///
    /// - Same phone: ok, nothing changes.
    /// - `new_phone` already taken, or `old_phone` unknown: ok=false, nothing
    ///   changes.
    /// - Otherwise the contact's phone is replaced and the entry is moved to
    ///   the end of the storage order.
    ///
    /// # Errors
    ///
    /// If `new_phone` is not a valid phone number the contact is put back
    /// under `old_phone`, at the end of the storage order, and the
    /// `ValidationError` is returned unchanged.
    pub fn rekey(
        &mut self,
        old_phone: &str,
        new_phone: &str,
    ) -> Result<DirectoryOutcome, ValidationError> {
        if new_phone == old_phone {
            return Ok(DirectoryOutcome::success(MSG_NO_CHANGES));
        }
        if self.contacts.contains_key(new_phone) {
            warn!("Rejected rekey {} -> {}, target taken", old_phone, new_phone);
            return Ok(DirectoryOutcome::failure(MSG_PHONE_TAKEN));
        }

        let Some(mut contact) = self.contacts.remove(old_phone) else {
            return Ok(DirectoryOutcome::failure(MSG_NOT_FOUND));
        };
        self.order.retain(|k| k != old_phone);

        if let Err(err) = contact.set_phone(new_phone) {
            warn!("Rolled back rekey of {}: {}", old_phone, err);
            self.order.push(old_phone.to_string());
            self.contacts.insert(old_phone.to_string(), contact);
            return Err(err);
        }

        let key = contact.phone().to_string();
        self.order.push(key.clone());
        debug!("Rekeyed contact {} -> {}", old_phone, key);
        self.contacts.insert(key, contact);
        Ok(DirectoryOutcome::success(MSG_PHONE_UPDATED))
    }

    /// Remove the contact stored at `phone`. Returns false if there was none.
    pub fn delete(&mut self, phone: &str) -> bool {
        if self.contacts.remove(phone).is_none() {
            return false;
        }
        self.order.retain(|k| k != phone);
        debug!("Deleted contact {}", phone);
        true
    }

    /// Contacts whose name contains `fragment`, ignoring case.
    pub fn search_by_name(&self, fragment: &str) -> Vec<&Contact> {
        self.iter()
            .filter(|contact| contact.name_contains(fragment))
            .collect()
    }

    pub fn get_by_phone(&self, phone: &str) -> Option<&Contact> {
        self.contacts.get(phone)
    }

    /// Editable view of a stored contact.
    pub fn get_mut(&mut self, phone: &str) -> Option<ContactMut<'_>> {
        self.contacts
            .get_mut(phone)
            .map(|contact| ContactMut { contact })
    }

    /// Every contact, in storage order.
    pub fn list_all(&self) -> Vec<&Contact> {
        self.iter().collect()
    }

    fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.order.iter().filter_map(|key| self.contacts.get(key))
    }
}

/// Mutable access to a stored contact, minus the phone.
///
/// Reads go through `Deref<Target = Contact>`.
#[derive(Debug)]
pub struct ContactMut<'a> {
    contact: &'a mut Contact,
}

impl ContactMut<'_> {
    pub fn set_name(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        self.contact.set_name(value)
    }

    pub fn set_email(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        self.contact.set_email(value)
    }

    pub fn set_address(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        self.contact.set_address(value)
    }
}

impl Deref for ContactMut<'_> {
    type Target = Contact;

    fn deref(&self) -> &Contact {
        &*self.contact
    }
}
