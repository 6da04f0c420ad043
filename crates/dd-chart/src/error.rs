//! Chart engine error types

use thiserror::Error;

use dd_core::data::DataError;
use dd_core::fields::FieldError;

/// Chart engine errors
///
/// Chart derivations themselves never fail; missing data degrades to empty
/// geometry or `"N/A"`. Errors come from loading, configuration and payload
/// construction.
#[derive(Debug, Error)]
pub enum ChartError {
    /// Dataset loading error
    #[error("Data error: {0}")]
    Data(#[from] DataError),

    /// Degree-day field name error
    #[error("Field error: {0}")]
    Field(#[from] FieldError),

    /// A regression result key that does not follow the expected format
    #[error("Invalid result key '{key}': {message}")]
    InvalidResultKey {
        /// Raw key
        key: String,
        /// What is wrong with it
        message: String,
    },

    /// Invalid chart configuration
    #[error("Invalid chart configuration: {message}")]
    InvalidConfig {
        /// Configuration error message
        message: String,
    },

    /// JSON (de)serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// No regression results to send for interpretation
    #[error("No regression results available for interpretation")]
    NoResults,
}

/// Result type for chart operations
pub type Result<T> = std::result::Result<T, ChartError>;
