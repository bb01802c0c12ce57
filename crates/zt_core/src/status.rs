//! Validity status shown next to every validated input.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether an input parsed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Validity {
    Valid,
    #[default]
    Invalid,
}

impl Validity {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validity::Valid)
    }

    /// `Valid` for `Ok`, `Invalid` for `Err`.
    pub fn of<T, E>(result: &Result<T, E>) -> Self {
        if result.is_ok() {
            Validity::Valid
        } else {
            Validity::Invalid
        }
    }
}

impl From<bool> for Validity {
    fn from(valid: bool) -> Self {
        if valid {
            Validity::Valid
        } else {
            Validity::Invalid
        }
    }
}

impl fmt::Display for Validity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Validity::Valid => f.write_str("Valid"),
            Validity::Invalid => f.write_str("Invalid"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validity_of_result() {
        let ok: Result<u8, String> = Ok(1);
        let err: Result<u8, String> = Err("bad".to_string());
        assert_eq!(Validity::of(&ok), Validity::Valid);
        assert_eq!(Validity::of(&err), Validity::Invalid);
        assert_eq!(Validity::from(true).to_string(), "Valid");
        assert!(!Validity::default().is_valid());
    }
}
