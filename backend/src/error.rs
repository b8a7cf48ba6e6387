//! Error types for the lunar backend.
//!
//! The phase calculator itself is total and never fails. Errors only arise at
//! the edges: building calendar dates from user input, parsing phase tags and
//! loading configuration.

/// Result type for fallible lunar operations.
pub type LunarResult<T> = Result<T, LunarError>;

/// Error type for lunar operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LunarError {
    /// A calendar date or instant could not be constructed or parsed.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// A phase tag string did not name one of the eight phases.
    #[error("Unknown moon phase: {0}")]
    UnknownPhase(String),

    /// Configuration file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl LunarError {
    /// Create an invalid date error.
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate(message.into())
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
