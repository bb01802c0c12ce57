//! UUID generation and validation.

use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::{SecurityError, SecurityResult};

/// Largest number of UUIDs produced in one batch.
pub const MAX_BATCH: usize = 10_000;

/// UUID version to generate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum UuidVersion {
    /// Random
    #[default]
    V4,
    /// Unix-time ordered
    V7,
}

impl FromStr for UuidVersion {
    type Err = SecurityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "v4" | "4" => Ok(UuidVersion::V4),
            "v7" | "7" => Ok(UuidVersion::V7),
            _ => Err(SecurityError::UnknownUuidVersion(s.to_string())),
        }
    }
}

/// Textual form of a generated UUID.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum UuidFormat {
    /// `67e55044-10b1-426f-9247-bb680e5fe0c8`
    #[default]
    Hyphenated,
    /// `67e5504410b1426f9247bb680e5fe0c8`
    Simple,
    /// `urn:uuid:67e55044-10b1-426f-9247-bb680e5fe0c8`
    Urn,
    /// `{67e55044-10b1-426f-9247-bb680e5fe0c8}`
    Braced,
}

impl FromStr for UuidFormat {
    type Err = SecurityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hyphenated" | "standard" => Ok(UuidFormat::Hyphenated),
            "simple" | "plain" => Ok(UuidFormat::Simple),
            "urn" => Ok(UuidFormat::Urn),
            "braced" | "braces" => Ok(UuidFormat::Braced),
            _ => Err(SecurityError::UnknownUuidFormat(s.to_string())),
        }
    }
}

/// Options for UUID generation.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UuidOptions {
    pub version: UuidVersion,
    pub format: UuidFormat,
    pub uppercase: bool,
}

fn render(id: Uuid, options: &UuidOptions) -> String {
    match (options.format, options.uppercase) {
        (UuidFormat::Hyphenated, false) => id.hyphenated().to_string(),
        (UuidFormat::Hyphenated, true) => format!("{:X}", id.hyphenated()),
        (UuidFormat::Simple, false) => id.simple().to_string(),
        (UuidFormat::Simple, true) => format!("{:X}", id.simple()),
        (UuidFormat::Braced, false) => id.braced().to_string(),
        (UuidFormat::Braced, true) => format!("{:X}", id.braced()),
        (UuidFormat::Urn, false) => id.urn().to_string(),
        (UuidFormat::Urn, true) => format!("urn:uuid:{:X}", id.hyphenated()),
    }
}

/// Generate a single UUID.
pub fn generate_uuid(options: &UuidOptions) -> String {
    let id = match options.version {
        UuidVersion::V4 => Uuid::new_v4(),
        UuidVersion::V7 => Uuid::now_v7(),
    };
    render(id, options)
}

/// Generate `count` UUIDs.
pub fn generate_uuids(count: usize, options: &UuidOptions) -> SecurityResult<Vec<String>> {
    if count > MAX_BATCH {
        return Err(SecurityError::BatchTooLarge {
            requested: count,
            max: MAX_BATCH,
        });
    }
    debug!("Generating {} UUID(s) ({:?})", count, options.version);
    Ok((0..count).map(|_| generate_uuid(options)).collect())
}

fn canonical_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"(?i)^(?:[0-9a-f]{8}-[0-9a-f]{4}-[1-8][0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}|00000000-0000-0000-0000-000000000000|ffffffff-ffff-ffff-ffff-ffffffffffff)$",
        )
        .expect("UUID pattern is valid")
    })
}

/// Result of checking a single UUID.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UuidCheck {
    pub input: String,
    pub valid: bool,
    /// Version nibble, present for valid input (0 for nil, 15 for max)
    pub version: Option<usize>,
}

/// Check one UUID in canonical hyphenated form.
pub fn validate_uuid(input: &str) -> UuidCheck {
    let valid = canonical_pattern().is_match(input);
    let version = if valid {
        Uuid::parse_str(input).ok().map(|id| id.get_version_num())
    } else {
        None
    };
    UuidCheck {
        input: input.to_string(),
        valid,
        version,
    }
}

/// Result of checking a newline-separated list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UuidReport {
    pub checks: Vec<UuidCheck>,
    pub all_valid: bool,
}

impl UuidReport {
    /// `<line> -> Valid|Invalid`, one per line.
    pub fn render(&self) -> String {
        self.checks
            .iter()
            .map(|c| format!("{} -> {}\n", c.input, if c.valid { "Valid" } else { "Invalid" }))
            .collect()
    }
}

/// Check every line of `text`. Every line counts, including an empty last one.
pub fn validate_batch(text: &str) -> UuidReport {
    let checks: Vec<_> = text
        .split('\n')
        .map(|line| validate_uuid(line.strip_suffix('\r').unwrap_or(line)))
        .collect();
    let all_valid = checks.iter().all(|c| c.valid);
    UuidReport { checks, all_valid }
}
