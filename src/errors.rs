//! Core error types for the asset register.
//!
//! Validation happens at the boundary: wire records are checked before any
//! lifecycle arithmetic runs, so malformed input surfaces as a typed error
//! instead of propagating NaN/Infinity into derived figures.

use chrono::ParseError as ChronoParseError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the asset register core.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Lifecycle calculation failed: {0}")]
    Calculation(String),
}

/// Validation errors for wire records and calculator inputs.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A date field could not be parsed as a calendar instant.
    #[error("Field '{field}' is not a valid calendar date: '{value}'")]
    InvalidDate { field: &'static str, value: String },

    /// A numeric field is outside its permitted range (negative cost,
    /// negative or absurd useful life, non-finite wire value).
    #[error("Field '{field}' has an invalid magnitude: {value}")]
    InvalidMagnitude { field: &'static str, value: String },

    /// A required field is absent from the wire record.
    #[error("Required field '{0}' is missing")]
    MissingField(&'static str),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] ChronoParseError),
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
