//! URL component encoder.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use tracing::debug;

use crate::error::{EncodingError, EncodingResult};

/// Bytes left untouched by `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Bytes left untouched in `application/x-www-form-urlencoded`.
const FORM: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'*');

/// Percent-encode every byte outside the URI component unreserved set.
pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, COMPONENT).to_string()
}

/// Every `%` must start a two-digit hex escape.
fn check_escapes(input: &str) -> EncodingResult<()> {
    let bytes = input.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes.len() > i + 2
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit();
            if !valid {
                return Err(EncodingError::MalformedEscape { position: i });
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    Ok(())
}

/// Decode a percent-encoded component.
pub fn decode_component(input: &str) -> EncodingResult<String> {
    check_escapes(input)?;
    let decoded = percent_decode_str(input)
        .decode_utf8()
        .map_err(|e| EncodingError::InvalidUtf8(e.to_string()))?;
    debug!("Decoded {} bytes of URL component", input.len());
    Ok(decoded.into_owned())
}

/// Encode as a form value; spaces become `+`.
pub fn encode_form(input: &str) -> String {
    input
        .split(' ')
        .map(|part| utf8_percent_encode(part, FORM).to_string())
        .collect::<Vec<_>>()
        .join("+")
}

/// Decode a form value; `+` becomes a space.
pub fn decode_form(input: &str) -> EncodingResult<String> {
    decode_component(&input.replace('+', " "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_component() {
        assert_eq!(encode_component("a b&c=d/é"), "a%20b%26c%3Dd%2F%C3%A9");
        assert_eq!(encode_component("-_.!~*'()"), "-_.!~*'()");
        assert_eq!(encode_component(""), "");
    }

    #[test]
    fn test_decode_component() {
        assert_eq!(decode_component("a%20b%26c%3Dd%2F%C3%A9").unwrap(), "a b&c=d/é");
        assert_eq!(decode_component("plain+text").unwrap(), "plain+text");
    }

    #[test]
    fn test_decode_malformed_escape() {
        assert_eq!(
            decode_component("100%"),
            Err(EncodingError::MalformedEscape { position: 3 })
        );
        assert_eq!(
            decode_component("%zz"),
            Err(EncodingError::MalformedEscape { position: 0 })
        );
    }

    #[test]
    fn test_decode_invalid_utf8() {
        assert!(matches!(
            decode_component("%C3%28"),
            Err(EncodingError::InvalidUtf8(_))
        ));
    }

    #[test]
    fn test_form_encoding() {
        assert_eq!(encode_form("hello world!"), "hello+world%21");
        assert_eq!(decode_form("hello+world%21").unwrap(), "hello world!");
    }
}
