//! Domain value objects and types.
//!
//! Type-safe wrappers for the four contact fields. Each value object
//! validates and normalizes at construction time, so an invalid name, phone,
//! email or address can never be represented in the system.

pub mod address;
pub mod email;
pub mod errors;
pub mod name;
pub mod phone;

pub use address::Address;
pub use email::EmailAddress;
pub use errors::{ContactField, ValidationError};
pub use name::PersonName;
pub use phone::PhoneNumber;
