//! Error types for the encoders.

use thiserror::Error;

/// Result type alias for encoding operations.
pub type EncodingResult<T> = Result<T, EncodingError>;

/// Errors raised while decoding user input.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EncodingError {
    #[error("Unknown encoding: {0}")]
    UnknownEncoding(String),

    #[error("Invalid base-{radix} token: '{token}'")]
    InvalidToken { token: String, radix: u32 },

    #[error("Value {0:#x} is not a valid Unicode scalar value")]
    InvalidCodePoint(u32),

    #[error("Token '{token}' decodes to {value}, which does not fit in a byte")]
    ByteOutOfRange { token: String, value: u32 },

    #[error("Invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Decoded bytes are not valid UTF-8: {0}")]
    InvalidUtf8(String),

    #[error("Malformed percent escape at byte {position}")]
    MalformedEscape { position: usize },
}
