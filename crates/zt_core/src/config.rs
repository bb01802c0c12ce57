//! Toolbox configuration.
//!
//! User defaults live in a TOML file. Every field has a built-in default, so a
//! missing file or a partial one is fine:
//!
//! ```toml
//! [hash]
//! algorithm = "sha256"
//!
//! [password]
//! length = 16
//! avoid_ambiguous = true
//!
//! [datetime]
//! timezone = "Europe/Amsterdam"
//! ```
//!
//! Values are kept as plain strings and numbers here; the tool crates parse
//! them into their own types.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{CoreError, CoreResult};

/// Environment variable pointing to a configuration file.
pub const CONFIG_ENV_VAR: &str = "ZT_CONFIG";

/// Largest indent width accepted for the beautifier.
const MAX_INDENT: usize = 16;

/// Output rendering for tool results.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Hash calculator defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HashDefaults {
    /// Algorithm key or label, e.g. `sha3_256` or `SHA256`
    pub algorithm: String,
    /// Digest encoding: `hex`, `hex_upper` or `base64`
    pub encoding: String,
}

impl Default for HashDefaults {
    fn default() -> Self {
        Self {
            algorithm: "sha3_256".to_string(),
            encoding: "hex".to_string(),
        }
    }
}

/// UUID generator defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UuidDefaults {
    pub count: usize,
    /// `v4` or `v7`
    pub version: String,
    pub uppercase: bool,
}

impl Default for UuidDefaults {
    fn default() -> Self {
        Self {
            count: 2,
            version: "v4".to_string(),
            uppercase: false,
        }
    }
}

/// Password generator defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PasswordDefaults {
    pub length: usize,
    pub count: usize,
    pub min_numbers: usize,
    pub min_specials: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub specials: bool,
    pub url_safe_specials: bool,
    pub avoid_ambiguous: bool,
}

impl Default for PasswordDefaults {
    fn default() -> Self {
        Self {
            length: 8,
            count: 2,
            min_numbers: 1,
            min_specials: 1,
            uppercase: true,
            lowercase: true,
            numbers: true,
            specials: true,
            url_safe_specials: false,
            avoid_ambiguous: false,
        }
    }
}

/// Beautifier defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BeautifyDefaults {
    pub indent: usize,
}

impl Default for BeautifyDefaults {
    fn default() -> Self {
        Self { indent: 2 }
    }
}

/// Date-time tool defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DateTimeDefaults {
    /// IANA zone name used for naive date-times, e.g. `UTC` or `Asia/Jakarta`
    pub timezone: String,
}

impl Default for DateTimeDefaults {
    fn default() -> Self {
        Self {
            timezone: "UTC".to_string(),
        }
    }
}

/// Output defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputDefaults {
    pub format: OutputFormat,
}

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ToolboxConfig {
    pub hash: HashDefaults,
    pub uuid: UuidDefaults,
    pub password: PasswordDefaults,
    pub beautify: BeautifyDefaults,
    pub datetime: DateTimeDefaults,
    pub output: OutputDefaults,
}

impl ToolboxConfig {
    /// Load configuration.
    ///
    /// An explicit path (or `ZT_CONFIG`) must exist. Otherwise the user config
    /// directory is consulted and defaults are used when nothing is there.
    pub fn load(explicit: Option<&Path>) -> CoreResult<Self> {
        if let Some(path) = explicit {
            return Self::load_file(path);
        }

        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
            return Self::load_file(Path::new(&path));
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::load_file(&path),
            _ => {
                debug!("No configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific file.
    pub fn load_file(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound(path.to_path_buf()));
        }

        info!("Loading configuration from {:?}", path);
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        config.validate().map_err(|message| CoreError::InvalidConfig {
            path: path.to_path_buf(),
            message,
        })?;
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> CoreResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// `<config_dir>/zt/config.toml`, when the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("zt").join("config.toml"))
    }

    /// Check value ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), String> {
        if self.beautify.indent == 0 || self.beautify.indent > MAX_INDENT {
            return Err(format!(
                "beautify.indent must be between 1 and {}, got {}",
                MAX_INDENT, self.beautify.indent
            ));
        }

        if self.password.length == 0 {
            return Err("password.length must be greater than 0".to_string());
        }

        if self.datetime.timezone.trim().is_empty() {
            return Err("datetime.timezone cannot be empty".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_match_original_tool_defaults() {
        let config = ToolboxConfig::default();
        assert_eq!(config.hash.algorithm, "sha3_256");
        assert_eq!(config.uuid.count, 2);
        assert_eq!(config.password.length, 8);
        assert_eq!(config.password.min_numbers, 1);
        assert!(!config.password.url_safe_specials);
        assert_eq!(config.beautify.indent, 2);
        assert_eq!(config.datetime.timezone, "UTC");
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config = ToolboxConfig::from_toml_str(
            r#"
            [password]
            length = 20
            avoid_ambiguous = true

            [output]
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.password.length, 20);
        assert!(config.password.avoid_ambiguous);
        assert!(config.password.specials);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.hash, HashDefaults::default());
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = ToolboxConfig::from_toml_str("").unwrap();
        assert_eq!(config, ToolboxConfig::default());
    }

    #[test]
    fn test_invalid_toml() {
        let result = ToolboxConfig::from_toml_str("[hash\nalgorithm = ");
        assert!(matches!(result, Err(CoreError::Toml(_))));
    }

    #[test]
    fn test_load_explicit_missing_file() {
        let temp = tempdir().unwrap();
        let missing = temp.path().join("nope.toml");
        let result = ToolboxConfig::load(Some(&missing));
        assert!(matches!(result, Err(CoreError::ConfigNotFound(_))));
    }

    #[test]
    fn test_load_rejects_zero_indent() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[beautify]\nindent = 0\n").unwrap();

        let result = ToolboxConfig::load(Some(&path));
        assert!(matches!(result, Err(CoreError::InvalidConfig { .. })));
    }
}
