//! Line-oriented prompting over any reader/writer pair.

use crate::domain::ContactField;
use crate::error::ConsoleResult;
use std::io::{BufRead, Write};
use tracing::debug;

/// Write `prompt` and read one line. Returns `None` on end of input.
///
/// The returned line is trimmed.
pub fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> ConsoleResult<Option<String>> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim().to_string()))
}

/// Ask for a value of `field` until it passes the field's rule.
///
/// Each rejected value prints the validation message and asks again for the
/// same field only. Returns `None` on end of input.
pub fn read_valid<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    field: ContactField,
) -> ConsoleResult<Option<String>> {
    loop {
        let Some(value) = read_line(input, output, prompt)? else {
            return Ok(None);
        };
        match field.validate(&value) {
            Ok(()) => return Ok(Some(value)),
            Err(err) => {
                debug!("Re-prompting {}: {}", field, err);
                writeln!(output, "Error: {}", err)?;
            }
        }
    }
}
