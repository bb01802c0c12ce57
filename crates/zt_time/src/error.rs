//! Error types for the date-time tools.

use thiserror::Error;

/// Result type alias for date-time operations.
pub type TimeResult<T> = Result<T, TimeError>;

/// Errors that can occur in the date-time tools.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeError {
    #[error("Invalid date-time: {0}")]
    InvalidDateTime(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Unknown time zone: {0}")]
    UnknownTimezone(String),

    #[error("Unknown time unit: {0}")]
    UnknownUnit(String),

    #[error("Amount is not a number: {0}")]
    InvalidAmount(String),

    #[error("Local time {0} does not exist in the selected time zone")]
    NonexistentLocalTime(String),

    #[error("Result is out of the supported date range")]
    OutOfRange,

    #[error("Cron expression is empty")]
    EmptyCron,

    #[error("Invalid cron expression '{expression}': {message}")]
    InvalidCron { expression: String, message: String },
}
