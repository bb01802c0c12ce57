//! Error types for the text tools.

use thiserror::Error;

/// Result type alias for text operations.
pub type TextResult<T> = Result<T, TextError>;

/// Errors that can occur in the text tools.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TextError {
    #[error("Invalid JSON at line {line}, column {column}: {message}")]
    InvalidJson {
        message: String,
        line: usize,
        column: usize,
    },

    #[error("Invalid YAML: {message}")]
    InvalidYaml {
        message: String,
        line: Option<usize>,
        column: Option<usize>,
    },

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("Unknown diff granularity: {0}")]
    UnknownGranularity(String),

    #[error("Unknown regex template: {0}")]
    UnknownTemplate(String),

    #[error("Invalid regular expression: {0}")]
    InvalidRegex(String),

    #[error("Malformed script at line {line}: {message}")]
    MalformedScript { message: String, line: usize },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for TextError {
    fn from(err: serde_json::Error) -> Self {
        TextError::InvalidJson {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for TextError {
    fn from(err: serde_yaml::Error) -> Self {
        let location = err.location();
        TextError::InvalidYaml {
            message: err.to_string(),
            line: location.as_ref().map(|l| l.line()),
            column: location.as_ref().map(|l| l.column()),
        }
    }
}

impl From<regex::Error> for TextError {
    fn from(err: regex::Error) -> Self {
        TextError::InvalidRegex(err.to_string())
    }
}
