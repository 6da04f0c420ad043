//! Field-name error types

use thiserror::Error;

/// Errors raised while parsing a degree-day field name
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    /// The name does not follow `hdd(<base>)` / `cdd(<base>)`
    #[error("Malformed degree-day field '{field}' at position {position}: {message}")]
    Malformed {
        field: String,
        position: usize,
        message: String,
    },

    /// The base temperature could not be read as a number
    #[error("Invalid base temperature '{value}' in field '{field}'")]
    InvalidBaseTemperature { field: String, value: String },
}

/// Result type alias for field parsing
pub type FieldResult<T> = std::result::Result<T, FieldError>;

impl FieldError {
    /// Create a malformed-field error
    pub fn malformed(field: &str, position: usize, message: impl Into<String>) -> Self {
        FieldError::Malformed {
            field: field.to_string(),
            position,
            message: message.into(),
        }
    }
}
