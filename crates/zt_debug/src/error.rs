//! Error types for the debugging tools.

use thiserror::Error;

/// Result type alias for debugging operations.
pub type DebugResult<T> = Result<T, DebugError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DebugError {
    #[error("Unknown stack-trace language: {0}")]
    UnknownLanguage(String),
}
