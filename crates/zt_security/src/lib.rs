//! # zt_security
//!
//! Security tools for zt:
//!
//! - **Hash Calculator**: SHA-1/2/3, Keccak, RIPEMD-160 and MD5 digests
//! - **UUID Generator**: v4 and v7 UUIDs in several textual forms
//! - **UUID Validator**: line-by-line validation of canonical UUIDs
//! - **Password Generator**: class-constrained passwords from a CSPRNG
//!
//! ## Example
//!
//! ```rust
//! use zt_security::{hash_text, HashAlgorithm, validate_uuid};
//!
//! let digest = hash_text(HashAlgorithm::Sha256, "abc");
//! assert!(digest.starts_with("ba7816bf"));
//!
//! assert!(validate_uuid("123e4567-e89b-12d3-a456-426614174000").valid);
//! ```

pub mod error;
pub mod hash;
pub mod password;
pub mod uuids;

pub use error::{SecurityError, SecurityResult};
pub use hash::{hash_all, hash_bytes, hash_encoded, hash_text, DigestEncoding, HashAlgorithm, HashOutput};
pub use password::{
    estimate_strength, generate_password, generate_passwords, PasswordOptions, PasswordStrength,
    StrengthEstimate, MAX_PASSWORD_LENGTH,
};
pub use uuids::{
    generate_uuid, generate_uuids, validate_batch, validate_uuid, UuidCheck, UuidFormat,
    UuidOptions, UuidReport, UuidVersion, MAX_BATCH,
};

use zt_core::{ToolCategory, ToolDescriptor};

/// Catalog entries for the tools in this crate.
pub fn descriptors() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor::new(
            "hash-calculator",
            "Hash Calculator",
            ToolCategory::Security,
            "Compute SHA-1/2/3, Keccak, RIPEMD-160 or MD5 digests of text or files",
        ),
        ToolDescriptor::new(
            "uuid-generator",
            "UUID Generator",
            ToolCategory::Security,
            "Generate one or many random (v4) or time-ordered (v7) UUIDs",
        ),
        ToolDescriptor::new(
            "uuid-validator",
            "UUID Validator",
            ToolCategory::Security,
            "Validate UUIDs line by line",
        ),
        ToolDescriptor::new(
            "password-generator",
            "Password Generator",
            ToolCategory::Security,
            "Generate passwords with per-class minimums",
        ),
    ]
}
