//! Interactive menu over a [`ContactDirectory`].
//!
//! The console is a thin layer: it gathers input, calls directory and
//! contact operations, and prints their results. It is generic over its
//! input and output so sessions can be scripted in tests.

mod menu;
mod prompt;

pub use menu::MenuChoice;
pub use prompt::{read_line, read_valid};

use crate::config::{Config, OutputFormat};
use crate::directory::ContactDirectory;
use crate::domain::ContactField;
use crate::error::ConsoleResult;
use crate::models::Contact;
use menu::EditableField;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

const RULE: &str = "=============================================";

/// Whether the menu loop keeps going after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Render a contact according to the configured output format.
pub fn render_contact(format: OutputFormat, contact: &Contact) -> ConsoleResult<String> {
    match format {
        OutputFormat::Text => Ok(contact.render()),
        OutputFormat::Json => Ok(serde_json::to_string(contact)?),
    }
}

/// Menu-driven session over a reader and a writer.
pub struct Console<R, W> {
    input: R,
    output: W,
    directory: ContactDirectory,
    format: OutputFormat,
    show_banner: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console with an empty directory.
    pub fn new(input: R, output: W, config: &Config) -> Self {
        Self::with_directory(input, output, config, ContactDirectory::new())
    }

    /// Create a console over an existing directory.
    pub fn with_directory(
        input: R,
        output: W,
        config: &Config,
        directory: ContactDirectory,
    ) -> Self {
        Self {
            input,
            output,
            directory,
            format: config.output_format,
            show_banner: config.show_banner,
        }
    }

    /// Consume the console, returning the directory and the output sink.
    pub fn into_parts(self) -> (ContactDirectory, W) {
        (self.directory, self.output)
    }

    /// Run the menu loop until the user exits or input ends.
    pub fn run(&mut self) -> ConsoleResult<()> {
        info!("Console session started");

        loop {
            if self.show_banner {
                self.print_menu()?;
            }

            let Some(raw) = self.prompt("\nSelect an option: ")? else {
                break;
            };

            let flow = match MenuChoice::parse(&raw) {
                Some(choice) => {
                    debug!("Menu choice: {:?}", choice);
                    self.dispatch(choice)?
                }
                None => {
                    writeln!(self.output, "Invalid option.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                break;
            }
        }

        info!(
            "Console session finished with {} contacts",
            self.directory.len()
        );
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> ConsoleResult<Flow> {
        match choice {
            MenuChoice::Register => self.register_contact(),
            MenuChoice::Edit => self.edit_contact(),
            MenuChoice::Delete => self.delete_contact(),
            MenuChoice::SearchByName => self.search_by_name(),
            MenuChoice::SearchByPhone => self.search_by_phone(),
            MenuChoice::ListAll => self.list_all(),
            MenuChoice::Exit => {
                writeln!(self.output, "Leaving the system...")?;
                Ok(Flow::Exit)
            }
        }
    }

    fn print_menu(&mut self) -> ConsoleResult<()> {
        writeln!(self.output, "\n{}", RULE)?;
        writeln!(self.output, "CONTACT MANAGEMENT SYSTEM")?;
        writeln!(self.output, "{}", RULE)?;
        for (i, choice) in MenuChoice::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, choice.label())?;
        }
        Ok(())
    }

    fn prompt(&mut self, prompt: &str) -> ConsoleResult<Option<String>> {
        read_line(&mut self.input, &mut self.output, prompt)
    }

    fn prompt_valid(&mut self, prompt: &str, field: ContactField) -> ConsoleResult<Option<String>> {
        read_valid(&mut self.input, &mut self.output, prompt, field)
    }

    fn register_contact(&mut self) -> ConsoleResult<Flow> {
        let Some(name) = self.prompt_valid("Full name (e.g. Juan Perez): ", ContactField::Name)?
        else {
            return Ok(Flow::Exit);
        };
        let Some(phone) =
            self.prompt_valid("Phone (9 digits, e.g. 123456789): ", ContactField::Phone)?
        else {
            return Ok(Flow::Exit);
        };
        let Some(email) = self.prompt_valid("Email (e.g. name@mail.com): ", ContactField::Email)?
        else {
            return Ok(Flow::Exit);
        };
        let Some(address) = self.prompt_valid("Address (e.g. Calle 78): ", ContactField::Address)?
        else {
            return Ok(Flow::Exit);
        };

        match Contact::new(name, phone, email, address) {
            Ok(contact) => {
                let outcome = self.directory.register(contact);
                writeln!(self.output, "{}", outcome.message)?;
            }
            Err(err) => writeln!(self.output, "Error: {}", err)?,
        }
        Ok(Flow::Continue)
    }

    fn edit_contact(&mut self) -> ConsoleResult<Flow> {
        let Some(mut key) = self.prompt("Phone of the contact to edit: ")? else {
            return Ok(Flow::Exit);
        };

        let Some(contact) = self.directory.get_by_phone(&key) else {
            writeln!(self.output, "No contact found with that phone number.")?;
            return Ok(Flow::Continue);
        };
        writeln!(self.output, "\nEditing: {}", contact.name())?;
        writeln!(self.output, "(Leave blank to keep the current value)")?;

        let Some(new_phone) = self.prompt(&format!("New phone [{}]: ", key))? else {
            return Ok(Flow::Exit);
        };
        if !new_phone.is_empty() {
            match self.directory.rekey(&key, &new_phone) {
                Ok(outcome) => {
                    writeln!(self.output, "{}", outcome.message)?;
                    if !outcome.ok {
                        return Ok(Flow::Continue);
                    }
                    key = new_phone;
                }
                Err(err) => {
                    warn!("Edit of {} aborted: {}", key, err);
                    writeln!(self.output, "Edit failed: {}", err)?;
                    return Ok(Flow::Continue);
                }
            }
        }

        for field in EditableField::ALL {
            let current = match self.directory.get_by_phone(&key) {
                Some(contact) => field.current(contact).to_string(),
                None => return Ok(Flow::Continue),
            };
            let Some(value) = self.prompt(&format!("New {} [{}]: ", field, current))? else {
                return Ok(Flow::Exit);
            };
            if value.is_empty() {
                continue;
            }

            let applied = match self.directory.get_mut(&key) {
                Some(mut editor) => field.apply(&mut editor, value),
                None => return Ok(Flow::Continue),
            };
            if let Err(err) = applied {
                warn!("Edit of {} aborted: {}", key, err);
                writeln!(self.output, "Edit failed: {}", err)?;
                return Ok(Flow::Continue);
            }
        }

        writeln!(self.output, "Contact details updated.")?;
        Ok(Flow::Continue)
    }

    fn delete_contact(&mut self) -> ConsoleResult<Flow> {
        let Some(phone) = self.prompt("Phone of the contact to delete: ")? else {
            return Ok(Flow::Exit);
        };
        if self.directory.delete(&phone) {
            writeln!(self.output, "Contact deleted.")?;
        } else {
            writeln!(self.output, "No such contact.")?;
        }
        Ok(Flow::Continue)
    }

    fn search_by_name(&mut self) -> ConsoleResult<Flow> {
        let Some(fragment) = self.prompt("Name to search: ")? else {
            return Ok(Flow::Exit);
        };

        let matches = self.directory.search_by_name(&fragment);
        if matches.is_empty() {
            writeln!(self.output, "No matches.")?;
        }
        for contact in matches {
            let line = render_contact(self.format, contact)?;
            writeln!(self.output, "{}", line)?;
        }
        Ok(Flow::Continue)
    }

    fn search_by_phone(&mut self) -> ConsoleResult<Flow> {
        let Some(phone) = self.prompt("Phone to search: ")? else {
            return Ok(Flow::Exit);
        };

        match self.directory.get_by_phone(&phone) {
            Some(contact) => {
                let line = render_contact(self.format, contact)?;
                writeln!(self.output, "\nContact details:\n{}", line)?;
            }
            None => writeln!(self.output, "Not found.")?,
        }
        Ok(Flow::Continue)
    }

    fn list_all(&mut self) -> ConsoleResult<Flow> {
        let contacts = self.directory.list_all();
        if contacts.is_empty() {
            writeln!(self.output, "Directory is empty.")?;
            return Ok(Flow::Continue);
        }

        writeln!(self.output, "\n--- LISTING ({} contacts) ---", contacts.len())?;
        for contact in contacts {
            let line = render_contact(self.format, contact)?;
            writeln!(self.output, "{}", line)?;
        }
        Ok(Flow::Continue)
    }
}
