//! Error types for the security tools.

use thiserror::Error;

/// Result type alias for security operations.
pub type SecurityResult<T> = Result<T, SecurityError>;

/// Errors that can occur in the security tools.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SecurityError {
    #[error("Unknown hash algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("Unknown digest encoding: {0}")]
    UnknownEncoding(String),

    #[error("Unknown UUID version: {0}")]
    UnknownUuidVersion(String),

    #[error("Unknown UUID format: {0}")]
    UnknownUuidFormat(String),

    #[error("Batch of {requested} exceeds the maximum of {max}")]
    BatchTooLarge { requested: usize, max: usize },

    #[error("Password length {length} is too short, the selected options require at least {required}")]
    PasswordTooShort { length: usize, required: usize },

    #[error("Password length {length} exceeds the maximum of {max}")]
    PasswordTooLong { length: usize, max: usize },
}
