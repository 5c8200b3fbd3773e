//! Shared test data for directory and console tests.

use contact_directory::{Config, Contact, ContactDirectory, OutputFormat};

/// The contact most tests start from.
pub fn juan_perez() -> Contact {
    Contact::new("Juan Perez", "987654321", "juan@mail.com", "Calle 123").unwrap()
}

/// A second contact whose name also contains "Juan".
#[allow(dead_code)]
pub fn juan_alberto() -> Contact {
    Contact::new("Juan Alberto", "900000001", "albert@mail.com", "Calle B1").unwrap()
}

/// A contact that does not match "Juan".
#[allow(dead_code)]
pub fn maria_lopez() -> Contact {
    Contact::new("Maria Lopez", "911222333", "maria@mail.com", "Avenida 456").unwrap()
}

/// Directory holding the given contacts, registered in order.
#[allow(dead_code)]
pub fn directory_with(contacts: Vec<Contact>) -> ContactDirectory {
    let mut directory = ContactDirectory::new();
    for contact in contacts {
        assert!(directory.register(contact).ok, "fixture contacts must be unique");
    }
    directory
}

/// Console config without the menu header, to keep transcripts short.
#[allow(dead_code)]
pub fn quiet_config(output_format: OutputFormat) -> Config {
    Config {
        output_format,
        show_banner: false,
        ..Config::default()
    }
}
