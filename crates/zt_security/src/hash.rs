//! Hash calculator.
//!
//! One-shot digests over the RustCrypto hash family. Text input is hashed as
//! its UTF-8 bytes.

use std::fmt;
use std::str::FromStr;

use base64::Engine;
use md5::Md5;
use ripemd::Ripemd160;
use serde::{Deserialize, Serialize};
use sha1::Sha1;
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};
use sha3::{Keccak224, Keccak256, Keccak384, Keccak512, Sha3_224, Sha3_256, Sha3_384, Sha3_512};
use tracing::debug;

use crate::error::{SecurityError, SecurityResult};

/// Supported digest algorithms.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum HashAlgorithm {
    #[default]
    Sha3_256,
    Sha3_384,
    Sha3_512,
    Sha3_224,
    Sha256,
    Sha384,
    Sha512,
    Sha224,
    Sha1,
    Keccak256,
    Keccak384,
    Keccak512,
    Keccak224,
    Ripemd160,
    Md5,
}

impl HashAlgorithm {
    /// All algorithms in menu order.
    pub const ALL: [HashAlgorithm; 15] = [
        HashAlgorithm::Sha3_256,
        HashAlgorithm::Sha3_384,
        HashAlgorithm::Sha3_512,
        HashAlgorithm::Sha3_224,
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha384,
        HashAlgorithm::Sha512,
        HashAlgorithm::Sha224,
        HashAlgorithm::Sha1,
        HashAlgorithm::Keccak256,
        HashAlgorithm::Keccak384,
        HashAlgorithm::Keccak512,
        HashAlgorithm::Keccak224,
        HashAlgorithm::Ripemd160,
        HashAlgorithm::Md5,
    ];

    /// Stable key used in configuration and on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha3_256 => "sha3_256",
            HashAlgorithm::Sha3_384 => "sha3_384",
            HashAlgorithm::Sha3_512 => "sha3_512",
            HashAlgorithm::Sha3_224 => "sha3_224",
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha384 => "sha384",
            HashAlgorithm::Sha512 => "sha512",
            HashAlgorithm::Sha224 => "sha224",
            HashAlgorithm::Sha1 => "sha1",
            HashAlgorithm::Keccak256 => "keccak256",
            HashAlgorithm::Keccak384 => "keccak384",
            HashAlgorithm::Keccak512 => "keccak512",
            HashAlgorithm::Keccak224 => "keccak224",
            HashAlgorithm::Ripemd160 => "rmd160",
            HashAlgorithm::Md5 => "md5",
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha3_256 => "SHA3-256",
            HashAlgorithm::Sha3_384 => "SHA3-384",
            HashAlgorithm::Sha3_512 => "SHA3-512",
            HashAlgorithm::Sha3_224 => "SHA3-224",
            HashAlgorithm::Sha256 => "SHA256",
            HashAlgorithm::Sha384 => "SHA384",
            HashAlgorithm::Sha512 => "SHA512",
            HashAlgorithm::Sha224 => "SHA224",
            HashAlgorithm::Sha1 => "SHA1",
            HashAlgorithm::Keccak256 => "Keccak-256",
            HashAlgorithm::Keccak384 => "Keccak-384",
            HashAlgorithm::Keccak512 => "Keccak-512",
            HashAlgorithm::Keccak224 => "Keccak-224",
            HashAlgorithm::Ripemd160 => "RIPEMD-160",
            HashAlgorithm::Md5 => "MD5",
        }
    }

    /// Digest size in bytes.
    pub fn output_len(&self) -> usize {
        match self {
            HashAlgorithm::Md5 => 16,
            HashAlgorithm::Sha1 | HashAlgorithm::Ripemd160 => 20,
            HashAlgorithm::Sha224 | HashAlgorithm::Sha3_224 | HashAlgorithm::Keccak224 => 28,
            HashAlgorithm::Sha256 | HashAlgorithm::Sha3_256 | HashAlgorithm::Keccak256 => 32,
            HashAlgorithm::Sha384 | HashAlgorithm::Sha3_384 | HashAlgorithm::Keccak384 => 48,
            HashAlgorithm::Sha512 | HashAlgorithm::Sha3_512 | HashAlgorithm::Keccak512 => 64,
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn normalize_name(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for HashAlgorithm {
    type Err = SecurityError;

    /// Accepts the key (`sha3_256`) or the label (`SHA3-256`), case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_name(s);
        if wanted == "ripemd160" {
            return Ok(HashAlgorithm::Ripemd160);
        }
        HashAlgorithm::ALL
            .into_iter()
            .find(|alg| normalize_name(alg.key()) == wanted || normalize_name(alg.label()) == wanted)
            .ok_or_else(|| SecurityError::UnknownAlgorithm(s.to_string()))
    }
}

/// How a digest is rendered as text.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DigestEncoding {
    #[default]
    Hex,
    HexUpper,
    Base64,
}

impl DigestEncoding {
    /// Render digest bytes.
    pub fn encode(&self, digest: &[u8]) -> String {
        match self {
            DigestEncoding::Hex => hex::encode(digest),
            DigestEncoding::HexUpper => hex::encode_upper(digest),
            DigestEncoding::Base64 => base64::engine::general_purpose::STANDARD.encode(digest),
        }
    }
}

impl FromStr for DigestEncoding {
    type Err = SecurityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_name(s).as_str() {
            "hex" => Ok(DigestEncoding::Hex),
            "hexupper" | "upperhex" => Ok(DigestEncoding::HexUpper),
            "base64" => Ok(DigestEncoding::Base64),
            _ => Err(SecurityError::UnknownEncoding(s.to_string())),
        }
    }
}

/// A computed digest with its algorithm.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HashOutput {
    pub algorithm: HashAlgorithm,
    pub digest: String,
}

fn digest_with<D: Digest>(data: &[u8]) -> Vec<u8> {
    D::digest(data).to_vec()
}

/// Hash raw bytes.
pub fn hash_bytes(algorithm: HashAlgorithm, data: &[u8]) -> Vec<u8> {
    debug!("Hashing {} bytes with {}", data.len(), algorithm);
    match algorithm {
        HashAlgorithm::Sha3_224 => digest_with::<Sha3_224>(data),
        HashAlgorithm::Sha3_256 => digest_with::<Sha3_256>(data),
        HashAlgorithm::Sha3_384 => digest_with::<Sha3_384>(data),
        HashAlgorithm::Sha3_512 => digest_with::<Sha3_512>(data),
        HashAlgorithm::Sha224 => digest_with::<Sha224>(data),
        HashAlgorithm::Sha256 => digest_with::<Sha256>(data),
        HashAlgorithm::Sha384 => digest_with::<Sha384>(data),
        HashAlgorithm::Sha512 => digest_with::<Sha512>(data),
        HashAlgorithm::Sha1 => digest_with::<Sha1>(data),
        HashAlgorithm::Keccak224 => digest_with::<Keccak224>(data),
        HashAlgorithm::Keccak256 => digest_with::<Keccak256>(data),
        HashAlgorithm::Keccak384 => digest_with::<Keccak384>(data),
        HashAlgorithm::Keccak512 => digest_with::<Keccak512>(data),
        HashAlgorithm::Ripemd160 => digest_with::<Ripemd160>(data),
        HashAlgorithm::Md5 => digest_with::<Md5>(data),
    }
}

/// Lowercase hex digest of the UTF-8 bytes of `text`.
pub fn hash_text(algorithm: HashAlgorithm, text: &str) -> String {
    hex::encode(hash_bytes(algorithm, text.as_bytes()))
}

/// Hash bytes and render the digest.
pub fn hash_encoded(algorithm: HashAlgorithm, data: &[u8], encoding: DigestEncoding) -> HashOutput {
    HashOutput {
        algorithm,
        digest: encoding.encode(&hash_bytes(algorithm, data)),
    }
}

/// Digest of `data` under every supported algorithm, in menu order.
pub fn hash_all(data: &[u8], encoding: DigestEncoding) -> Vec<HashOutput> {
    HashAlgorithm::ALL
        .into_iter()
        .map(|alg| hash_encoded(alg, data, encoding))
        .collect()
}
