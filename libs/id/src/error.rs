//! Error types for salt generation, configuration, and ID extraction.

use thiserror::Error;

/// Errors that can occur when configuring or using deterministic IDs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The requested salt length is below the security floor.
    #[error("salt length must be at least {minimum} bytes for security, got {requested}")]
    SaltTooShort { requested: usize, minimum: usize },

    /// No suffix of the input parses as a UUID.
    #[error("no valid UUID found in '{input}'")]
    NoUuidFound { input: String },

    /// Extraction was asked to split on an empty separator.
    #[error("separator cannot be empty")]
    EmptySeparator,

    /// The configured namespace is not a UUID.
    #[error("namespace must be a UUID, got '{value}': {reason}")]
    InvalidNamespace { value: String, reason: String },
}

impl IdError {
    /// Returns true if this error rejects a caller-supplied value
    /// (salt length, identifier text, separator).
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            IdError::SaltTooShort { .. } | IdError::NoUuidFound { .. } | IdError::EmptySeparator
        )
    }

    /// Returns true if this error indicates a malformed configuration.
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, IdError::InvalidNamespace { .. })
    }
}
