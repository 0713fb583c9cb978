//! Validation error surface
//!
//! Failures are human-readable messages, never structured exceptions. This
//! wrapper exists so `check`-style call sites can use `?` against the usual
//! error machinery; it carries no logic of its own.

use thiserror::Error;

/// Result type for `check`-style evaluation.
pub type ValidationResult = Result<(), ValidationError>;

/// A validation failure carrying the failing constraint's message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    /// Wraps a failure message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the failure message.
    pub fn message(&self) -> &str {
        &self.message
    }
}
