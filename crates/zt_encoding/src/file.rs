//! File encoder.
//!
//! Same encodings as the text encoder, applied to raw bytes. Radix tokens are
//! one per byte and zero-padded to a fixed width.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EncodingError, EncodingResult};
use crate::text::{decode_base64_url, parse_radix_tokens, to_radix, TextEncoding, STANDARD_LENIENT, URL_SAFE_LENIENT};

/// Encodings for binary content.
pub type FileEncoding = TextEncoding;

/// Base name of a decoded file.
pub const DECODED_FILE_STEM: &str = "File_Decode_Results";

/// Token width for a radix so every byte renders at the same length.
fn pad_width(radix: u32) -> usize {
    match radix {
        2 => 8,
        8 | 10 => 3,
        16 => 2,
        _ => 0,
    }
}

/// Encode bytes.
pub fn encode_bytes(data: &[u8], encoding: FileEncoding) -> String {
    debug!("Encoding {} bytes as {}", data.len(), encoding);
    match encoding.radix() {
        Some(radix) => data
            .iter()
            .map(|b| to_radix(u32::from(*b), radix, pad_width(radix)))
            .collect::<Vec<_>>()
            .join(" "),
        None => match encoding {
            FileEncoding::Base64Url => URL_SAFE_LENIENT.encode(data),
            _ => STANDARD.encode(data),
        },
    }
}

/// Decode text back to bytes.
pub fn decode_to_bytes(input: &str, encoding: FileEncoding) -> EncodingResult<Vec<u8>> {
    match encoding.radix() {
        Some(radix) => parse_radix_tokens(input, radix)?
            .into_iter()
            .map(|(token, value)| {
                u8::try_from(value).map_err(|_| EncodingError::ByteOutOfRange { token, value })
            })
            .collect(),
        None => match encoding {
            FileEncoding::Base64Url => decode_base64_url(input),
            _ => {
                let cleaned: String = input.chars().filter(|c| !c.is_whitespace()).collect();
                Ok(STANDARD_LENIENT.decode(cleaned)?)
            }
        },
    }
}

/// File extension guessed from magic bytes, `bin` when unknown.
pub fn detect_extension(data: &[u8]) -> &'static str {
    infer::get(data).map(|kind| kind.extension()).unwrap_or("bin")
}

/// Bytes decoded from text, with a suggested file name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DecodedFile {
    #[serde(skip)]
    pub bytes: Vec<u8>,
    pub size: usize,
    pub extension: String,
    pub suggested_name: String,
}

/// Decode text and detect what kind of file it holds.
pub fn decode_file(input: &str, encoding: FileEncoding) -> EncodingResult<DecodedFile> {
    let bytes = decode_to_bytes(input, encoding)?;
    let extension = detect_extension(&bytes).to_string();
    debug!("Decoded {} bytes, detected .{}", bytes.len(), extension);
    Ok(DecodedFile {
        size: bytes.len(),
        suggested_name: format!("{}.{}", DECODED_FILE_STEM, extension),
        extension,
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const GIF_HEADER: &[u8] = b"GIF89a\x01\x00\x01\x00\x00\x00\x00";

    #[test]
    fn test_radix_padding() {
        let data = [0u8, 7, 255];
        assert_eq!(encode_bytes(&data, FileEncoding::Binary), "00000000 00000111 11111111");
        assert_eq!(encode_bytes(&data, FileEncoding::Octal), "000 007 377");
        assert_eq!(encode_bytes(&data, FileEncoding::Decimal), "000 007 255");
        assert_eq!(encode_bytes(&data, FileEncoding::Hexadecimal), "00 07 ff");
    }

    #[test]
    fn test_decode_radix() {
        assert_eq!(
            decode_to_bytes("00 07 FF", FileEncoding::Hexadecimal).unwrap(),
            vec![0, 7, 255]
        );
        assert_eq!(
            decode_to_bytes("256", FileEncoding::Decimal),
            Err(EncodingError::ByteOutOfRange {
                token: "256".to_string(),
                value: 256
            })
        );
    }

    #[test]
    fn test_base64_ignores_line_breaks() {
        let encoded = "AAf/\nAAf/";
        assert_eq!(
            decode_to_bytes(encoded, FileEncoding::Base64).unwrap(),
            vec![0, 7, 255, 0, 7, 255]
        );
    }

    #[test]
    fn test_detect_gif() {
        assert_eq!(detect_extension(GIF_HEADER), "gif");
        assert_eq!(detect_extension(b"just text"), "bin");
        assert_eq!(detect_extension(&[]), "bin");
    }

    #[test]
    fn test_decode_file_names_result() {
        let encoded = encode_bytes(GIF_HEADER, FileEncoding::Base64);
        let decoded = decode_file(&encoded, FileEncoding::Base64).unwrap();
        assert_eq!(decoded.bytes, GIF_HEADER);
        assert_eq!(decoded.extension, "gif");
        assert_eq!(decoded.suggested_name, "File_Decode_Results.gif");
        assert_eq!(decoded.size, GIF_HEADER.len());
    }
}
