//! Text encoder.
//!
//! Radix encodings work on Unicode scalar values, one space-separated token
//! per character. Base64 variants work on the UTF-8 bytes.

use std::fmt;
use std::str::FromStr;

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, NO_PAD, PAD, STANDARD};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::error::{EncodingError, EncodingResult};
use crate::url;

/// URL-safe alphabet, unpadded on encode, padding optional on decode.
pub(crate) const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    NO_PAD.with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Standard alphabet, padding optional on decode.
pub(crate) const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    PAD.with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Supported encodings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TextEncoding {
    Binary,
    Octal,
    Decimal,
    Hexadecimal,
    #[default]
    Base64,
    Base64Url,
}

impl TextEncoding {
    pub const ALL: [TextEncoding; 6] = [
        TextEncoding::Binary,
        TextEncoding::Octal,
        TextEncoding::Decimal,
        TextEncoding::Hexadecimal,
        TextEncoding::Base64,
        TextEncoding::Base64Url,
    ];

    /// Radix for the numeric encodings.
    pub fn radix(&self) -> Option<u32> {
        match self {
            TextEncoding::Binary => Some(2),
            TextEncoding::Octal => Some(8),
            TextEncoding::Decimal => Some(10),
            TextEncoding::Hexadecimal => Some(16),
            TextEncoding::Base64 | TextEncoding::Base64Url => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TextEncoding::Binary => "Binary",
            TextEncoding::Octal => "Octal",
            TextEncoding::Decimal => "Decimal",
            TextEncoding::Hexadecimal => "Hexadecimal",
            TextEncoding::Base64 => "Base64",
            TextEncoding::Base64Url => "Base64 URL",
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TextEncoding {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "binary" | "bin" | "2" => Ok(TextEncoding::Binary),
            "octal" | "oct" | "8" => Ok(TextEncoding::Octal),
            "decimal" | "dec" | "10" => Ok(TextEncoding::Decimal),
            "hexadecimal" | "hex" | "16" => Ok(TextEncoding::Hexadecimal),
            "base64" | "b64" => Ok(TextEncoding::Base64),
            "base64url" | "b64url" => Ok(TextEncoding::Base64Url),
            _ => Err(EncodingError::UnknownEncoding(s.to_string())),
        }
    }
}

/// Format `value` in `radix`, optionally zero-padded to `width`.
pub(crate) fn to_radix(value: u32, radix: u32, width: usize) -> String {
    match radix {
        2 => format!("{:0width$b}", value, width = width),
        8 => format!("{:0width$o}", value, width = width),
        16 => format!("{:0width$x}", value, width = width),
        _ => format!("{:0width$}", value, width = width),
    }
}

/// Parse whitespace-separated radix tokens.
pub(crate) fn parse_radix_tokens(input: &str, radix: u32) -> EncodingResult<Vec<(String, u32)>> {
    input
        .split_whitespace()
        .map(|token| {
            u32::from_str_radix(token, radix)
                .map(|value| (token.to_string(), value))
                .map_err(|_| EncodingError::InvalidToken {
                    token: token.to_string(),
                    radix,
                })
        })
        .collect()
}

/// Decode either URL-safe base64 or the legacy percent-encoded standard form.
pub(crate) fn decode_base64_url(input: &str) -> EncodingResult<Vec<u8>> {
    let cleaned: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    if cleaned.contains('%') {
        let unescaped = url::decode_component(&cleaned)?;
        return Ok(STANDARD_LENIENT.decode(unescaped)?);
    }
    Ok(URL_SAFE_LENIENT.decode(cleaned)?)
}

fn utf8(bytes: Vec<u8>) -> EncodingResult<String> {
    String::from_utf8(bytes).map_err(|e| EncodingError::InvalidUtf8(e.to_string()))
}

/// Encode text.
pub fn encode_text(input: &str, encoding: TextEncoding) -> String {
    match encoding.radix() {
        Some(radix) => input
            .chars()
            .map(|c| to_radix(c as u32, radix, 0))
            .collect::<Vec<_>>()
            .join(" "),
        None => match encoding {
            TextEncoding::Base64Url => URL_SAFE_LENIENT.encode(input.as_bytes()),
            _ => STANDARD.encode(input.as_bytes()),
        },
    }
}

/// Decode text produced by [`encode_text`].
pub fn decode_text(input: &str, encoding: TextEncoding) -> EncodingResult<String> {
    match encoding.radix() {
        Some(radix) => parse_radix_tokens(input, radix)?
            .into_iter()
            .map(|(_, value)| char::from_u32(value).ok_or(EncodingError::InvalidCodePoint(value)))
            .collect(),
        None => {
            let bytes = match encoding {
                TextEncoding::Base64Url => decode_base64_url(input)?,
                _ => STANDARD_LENIENT.decode(input.trim())?,
            };
            utf8(bytes)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radix_encodings() {
        assert_eq!(encode_text("Hi", TextEncoding::Binary), "1001000 1101001");
        assert_eq!(encode_text("Hi", TextEncoding::Octal), "110 151");
        assert_eq!(encode_text("Hi", TextEncoding::Decimal), "72 105");
        assert_eq!(encode_text("Hi", TextEncoding::Hexadecimal), "48 69");
        assert_eq!(encode_text("é", TextEncoding::Decimal), "233");
    }

    #[test]
    fn test_radix_decoding() {
        assert_eq!(decode_text("1001000 1101001", TextEncoding::Binary).unwrap(), "Hi");
        assert_eq!(decode_text(" 48  69\n", TextEncoding::Hexadecimal).unwrap(), "Hi");
        assert_eq!(decode_text("1F600", TextEncoding::Hexadecimal).unwrap(), "😀");
    }

    #[test]
    fn test_radix_decoding_errors() {
        assert_eq!(
            decode_text("102", TextEncoding::Binary),
            Err(EncodingError::InvalidToken {
                token: "102".to_string(),
                radix: 2
            })
        );
        assert_eq!(
            decode_text("d800", TextEncoding::Hexadecimal),
            Err(EncodingError::InvalidCodePoint(0xd800))
        );
    }

    #[test]
    fn test_base64() {
        assert_eq!(encode_text("hello world", TextEncoding::Base64), "aGVsbG8gd29ybGQ=");
        assert_eq!(decode_text("aGVsbG8gd29ybGQ=", TextEncoding::Base64).unwrap(), "hello world");
        assert_eq!(decode_text("aGVsbG8gd29ybGQ", TextEncoding::Base64).unwrap(), "hello world");
        assert!(matches!(
            decode_text("not base64!", TextEncoding::Base64),
            Err(EncodingError::Base64(_))
        ));
    }

    #[test]
    fn test_base64_url() {
        assert_eq!(encode_text("??>", TextEncoding::Base64), "Pz8+");
        assert_eq!(encode_text("??>", TextEncoding::Base64Url), "Pz8-");
        assert_eq!(encode_text("é", TextEncoding::Base64Url), "w6k");
        assert_eq!(decode_text("Pz8-", TextEncoding::Base64Url).unwrap(), "??>");
        assert_eq!(decode_text("w6k=", TextEncoding::Base64Url).unwrap(), "é");
    }

    #[test]
    fn test_base64_url_accepts_percent_encoded_standard() {
        assert_eq!(
            decode_text("aGVsbG8gd29ybGQ%3D", TextEncoding::Base64Url).unwrap(),
            "hello world"
        );
    }

    #[test]
    fn test_base64_invalid_utf8() {
        // 0xff alone is not UTF-8
        assert!(matches!(
            decode_text("/w==", TextEncoding::Base64),
            Err(EncodingError::InvalidUtf8(_))
        ));
    }

    #[test]
    fn test_empty_input() {
        for encoding in TextEncoding::ALL {
            assert_eq!(encode_text("", encoding), "");
            assert_eq!(decode_text("", encoding).unwrap(), "");
        }
    }

    #[test]
    fn test_parse_encoding() {
        assert_eq!("hex".parse::<TextEncoding>().unwrap(), TextEncoding::Hexadecimal);
        assert_eq!("Base64 URL".parse::<TextEncoding>().unwrap(), TextEncoding::Base64Url);
        assert_eq!("2".parse::<TextEncoding>().unwrap(), TextEncoding::Binary);
        assert!("rot13".parse::<TextEncoding>().is_err());
    }
}
