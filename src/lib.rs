//! Contact Directory - an in-memory contact manager keyed by phone number.
//!
//! Contacts hold a name, a phone, an email and an address. Every field is
//! validated when a contact is built and again whenever it changes, so an
//! invalid contact can never be observed.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects for the four contact fields
//! - **models**: The `Contact` entity
//! - **directory**: Phone-keyed collection with register/rekey/delete/search
//! - **console**: Menu-driven interactive front end
//! - **config**: Configuration from environment variables
//! - **error**: Error types for configuration and the console

pub mod config;
pub mod console;
pub mod directory;
pub mod domain;
pub mod error;
pub mod models;

pub use config::{Config, OutputFormat};
pub use console::{Console, MenuChoice};
pub use directory::{ContactDirectory, ContactMut, DirectoryOutcome};
pub use domain::{ContactField, ValidationError};
pub use error::{ConfigError, ConsoleError};
pub use models::Contact;
