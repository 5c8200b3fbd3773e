//! Error types for the contact directory.
//!
//! Field validation errors live in [`crate::domain::ValidationError`]; this
//! module covers configuration and the console layer.

use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Errors that end a console session.
///
/// Validation failures are not here: the console handles them by asking
/// again.
#[derive(Error, Debug)]
pub enum ConsoleError {
    /// Reading input or writing output failed
    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to render a contact as JSON
    #[error("JSON render error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with ConsoleError
pub type ConsoleResult<T> = Result<T, ConsoleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::InvalidValue {
            var: "CONTACTS_OUTPUT".to_string(),
            reason: "Must be 'text' or 'json'".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for CONTACTS_OUTPUT: Must be 'text' or 'json'"
        );

        let err = ConsoleError::from(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "closed",
        ));
        assert!(err.to_string().contains("closed"));
    }
}
