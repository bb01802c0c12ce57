//! Integration tests for configuration loading.

use std::fs;

use tempfile::tempdir;
use zt_core::{CoreError, OutputFormat, ToolboxConfig};

#[test]
fn test_load_full_config_file() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(
        &path,
        r#"
[hash]
algorithm = "sha256"
encoding = "base64"

[uuid]
count = 5
version = "v7"
uppercase = true

[password]
length = 24
count = 3
min_numbers = 2
min_specials = 0
specials = false

[beautify]
indent = 4

[datetime]
timezone = "Asia/Jakarta"

[output]
format = "json"
"#,
    )
    .unwrap();

    let config = ToolboxConfig::load(Some(&path)).unwrap();

    assert_eq!(config.hash.algorithm, "sha256");
    assert_eq!(config.hash.encoding, "base64");
    assert_eq!(config.uuid.count, 5);
    assert_eq!(config.uuid.version, "v7");
    assert!(config.uuid.uppercase);
    assert_eq!(config.password.length, 24);
    assert_eq!(config.password.count, 3);
    assert!(!config.password.specials);
    assert!(config.password.lowercase);
    assert_eq!(config.beautify.indent, 4);
    assert_eq!(config.datetime.timezone, "Asia/Jakarta");
    assert_eq!(config.output.format, OutputFormat::Json);
}

#[test]
fn test_load_reports_path_for_invalid_values() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[datetime]\ntimezone = \"  \"\n").unwrap();

    match ToolboxConfig::load(Some(&path)) {
        Err(CoreError::InvalidConfig { path: reported, message }) => {
            assert_eq!(reported, path);
            assert!(message.contains("timezone"));
        }
        other => panic!("expected InvalidConfig, got {:?}", other),
    }
}

#[test]
fn test_load_wrong_type_is_toml_error() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[uuid]\ncount = \"many\"\n").unwrap();

    assert!(matches!(
        ToolboxConfig::load(Some(&path)),
        Err(CoreError::Toml(_))
    ));
}
