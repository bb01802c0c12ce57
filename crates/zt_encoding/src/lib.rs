//! # zt_encoding
//!
//! Encoders and decoders for zt:
//!
//! - **URL Encoder**: `encodeURIComponent`-compatible percent encoding
//! - **Text Encoder**: binary, octal, decimal, hex and base64 renderings of text
//! - **HTML Encoder**: entity escaping with numeric references for non-ASCII
//! - **File Encoder**: the same encodings over raw bytes, with file type detection
//!
//! ## Example
//!
//! ```rust
//! use zt_encoding::{decode_text, encode_component, encode_text, TextEncoding};
//!
//! assert_eq!(encode_component("a b"), "a%20b");
//! let hex = encode_text("Hi", TextEncoding::Hexadecimal);
//! assert_eq!(hex, "48 69");
//! assert_eq!(decode_text(&hex, TextEncoding::Hexadecimal).unwrap(), "Hi");
//! ```

pub mod error;
pub mod file;
pub mod html;
pub mod text;
pub mod url;

pub use error::{EncodingError, EncodingResult};
pub use file::{decode_file, decode_to_bytes, detect_extension, encode_bytes, DecodedFile, FileEncoding};
pub use html::{decode_html, encode_html};
pub use text::{decode_text, encode_text, TextEncoding};
pub use url::{decode_component, decode_form, encode_component, encode_form};

use zt_core::{ToolCategory, ToolDescriptor};

/// Catalog entries for the tools in this crate.
pub fn descriptors() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor::new(
            "url-encoder",
            "URL Encoder",
            ToolCategory::Encoding,
            "Percent-encode or decode URL components",
        ),
        ToolDescriptor::new(
            "text-encoder",
            "Text Encoder",
            ToolCategory::Encoding,
            "Convert text to and from binary, octal, decimal, hex, Base64 or Base64 URL",
        ),
        ToolDescriptor::new(
            "html-encoder",
            "HTML Encoder",
            ToolCategory::Encoding,
            "Escape or unescape HTML entities",
        ),
        ToolDescriptor::new(
            "file-encoder",
            "File Encoder",
            ToolCategory::Encoding,
            "Encode file contents as text and decode them back to a file",
        ),
    ]
}
