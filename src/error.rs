//! Library error type.
//!
//! `LibraryError` is the single error kind of the crate. It pairs a
//! human-readable message with a short machine-readable code such as
//! `"TEST_001"`. Both fields are fixed at construction.

use thiserror::Error;

/// Code used when an operation mode label is not recognized
pub const INVALID_MODE: &str = "INVALID_MODE";

/// Code used when environment configuration cannot be parsed
pub const INVALID_CONFIG: &str = "INVALID_CONFIG";

/// Error carrying a message and an opaque code
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct LibraryError {
    message: String,
    code: String,
}

impl LibraryError {
    /// Create a new error from a message and a code
    pub fn new(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: code.into(),
        }
    }

    /// Human-readable description
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Machine-readable identifier
    pub fn code(&self) -> &str {
        &self.code
    }
}

/// Result type for fallible library helpers
pub type Result<T> = std::result::Result<T, LibraryError>;
