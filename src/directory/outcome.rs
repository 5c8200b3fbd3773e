//! Result value for directory operations that can be refused.

use std::fmt;

/// Success flag plus a message for the user.
///
/// Refusals such as a duplicate phone are ordinary outcomes, not errors;
/// callers branch on `ok`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryOutcome {
    pub ok: bool,
    pub message: String,
}

impl DirectoryOutcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}

impl fmt::Display for DirectoryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
