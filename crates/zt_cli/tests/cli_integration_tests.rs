//! End-to-end tests for the zt binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A `zt` command isolated from the user's configuration.
fn zt(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("zt").unwrap();
    cmd.env_remove("ZT_CONFIG")
        .env_remove("RUST_LOG")
        .env("XDG_CONFIG_HOME", home.path())
        .env("HOME", home.path());
    cmd
}

#[test]
fn test_list_groups_tools() {
    let home = TempDir::new().unwrap();
    zt(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Security Tools"))
        .stdout(predicate::str::contains("password-generator"))
        .stdout(predicate::str::contains("cron-viewer"));
}

#[test]
fn test_hash_sha256() {
    let home = TempDir::new().unwrap();
    zt(&home)
        .args(["hash", "-a", "sha256", "abc"])
        .assert()
        .success()
        .stdout("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad\n");
}

#[test]
fn test_hash_reads_stdin_bytes() {
    let home = TempDir::new().unwrap();
    // Hashing works on raw bytes, so the newline counts.
    zt(&home)
        .args(["hash", "-a", "md5"])
        .write_stdin("abc\n")
        .assert()
        .success()
        .stdout("0bee89b07a248e27c83fc3d5951213c1\n");
}

#[test]
fn test_unknown_algorithm_is_invalid_argument() {
    let home = TempDir::new().unwrap();
    zt(&home)
        .args(["hash", "-a", "whirlpool", "abc"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_encode_text_round_trip() {
    let home = TempDir::new().unwrap();
    zt(&home)
        .args(["encode", "text", "hello"])
        .assert()
        .success()
        .stdout("aGVsbG8=\n");

    zt(&home)
        .args(["encode", "text", "--decode"])
        .write_stdin("aGVsbG8=\n")
        .assert()
        .success()
        .stdout("hello\n");
}

#[test]
fn test_json_compare_mismatch() {
    let home = TempDir::new().unwrap();
    let left = home.path().join("left.json");
    let right = home.path().join("right.json");
    fs::write(&left, r#"{"a":1,"b":true}"#).unwrap();
    fs::write(&right, r#"{"b":true,"a":2}"#).unwrap();

    zt(&home)
        .args(["json", "compare"])
        .arg(&left)
        .arg(&right)
        .assert()
        .code(4)
        .stdout(predicate::str::contains("$.a: 1 -> 2"));

    fs::write(&right, r#"{"b":true,"a":1}"#).unwrap();
    zt(&home)
        .args(["json", "compare"])
        .arg(&left)
        .arg(&right)
        .assert()
        .success();
}

#[test]
fn test_yaml_validate() {
    let home = TempDir::new().unwrap();
    zt(&home)
        .args(["yaml", "validate", "name: zt\nitems:\n  - a\n  - b"])
        .assert()
        .success()
        .stdout("Valid\n");

    zt(&home)
        .args(["yaml", "validate", "a: [1, 2"])
        .assert()
        .code(3)
        .stdout("Invalid\n")
        .stderr(predicate::str::contains("Invalid YAML"));
}

#[test]
fn test_beautify_json() {
    let home = TempDir::new().unwrap();
    zt(&home)
        .args(["beautify", r#"{"a":[1,2]}"#])
        .assert()
        .success()
        .stdout("{\n  \"a\": [\n    1,\n    2\n  ]\n}\n");

    zt(&home)
        .args(["beautify", "--minify", "-l", "json", "{ \"a\" : 1 }"])
        .assert()
        .success()
        .stdout("{\"a\":1}\n");
}

#[test]
fn test_regex_template_match() {
    let home = TempDir::new().unwrap();
    zt(&home)
        .args(["regex", "test", "-t", "email", "dev@example.com"])
        .assert()
        .success()
        .stdout("Match\n");

    zt(&home)
        .args(["regex", "test", "-t", "ipv4", "999.1.1.1"])
        .assert()
        .success()
        .stdout("No match\n");
}

#[test]
fn test_diff_exit_codes() {
    let home = TempDir::new().unwrap();
    let old = home.path().join("old.txt");
    let new = home.path().join("new.txt");
    fs::write(&old, "the quick fox").unwrap();
    fs::write(&new, "the slow fox").unwrap();

    zt(&home)
        .args(["diff", "-g", "words"])
        .arg(&old)
        .arg(&new)
        .assert()
        .code(4)
        .stdout(predicate::str::contains("the [-quick-]{+slow+} fox"));

    zt(&home).arg("diff").arg(&old).arg(&old).assert().success();
}

#[test]
fn test_count() {
    let home = TempDir::new().unwrap();
    zt(&home)
        .args(["count", "héllo 👋"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Characters: 7"))
        .stdout(predicate::str::contains("UTF-16 units: 8"))
        .stdout(predicate::str::contains("Bytes: 11"));
}

#[test]
fn test_datetime_convert() {
    let home = TempDir::new().unwrap();
    zt(&home)
        .args(["datetime", "convert", "--decode", "1704067200", "--tz", "UTC"])
        .assert()
        .success()
        .stdout("2024-01-01 00:00:00\n");

    zt(&home)
        .args(["datetime", "convert", "2024-01-01 00:00:00", "--tz", "Europe/Brussels"])
        .assert()
        .success()
        .stdout("1704063600000\n");
}

#[test]
fn test_datetime_unknown_zone() {
    let home = TempDir::new().unwrap();
    zt(&home)
        .args(["datetime", "convert", "2024-01-01", "--tz", "Mars/Olympus"])
        .assert()
        .code(2);
}

#[test]
fn test_datetime_calc() {
    let home = TempDir::new().unwrap();
    zt(&home)
        .args(["datetime", "calc", "2024-01-31 10:00:00", "--amount", "1", "-u", "M"])
        .assert()
        .success()
        .stdout("Addition: 2024-02-29 10:00:00\nSubtraction: 2023-12-31 10:00:00\n");
}

#[test]
fn test_cron() {
    let home = TempDir::new().unwrap();
    zt(&home)
        .args(["cron", "*/15 * * * 1-5"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Description: Every 15 minutes, Monday through Friday",
        ));

    zt(&home)
        .args(["cron", "61 * * * *"])
        .assert()
        .code(3)
        .stdout("Invalid\n");

    zt(&home)
        .args(["cron", "0 0 * * 1/4294967295"])
        .assert()
        .code(3)
        .stdout("Invalid\n")
        .stderr(predicate::str::contains("step"));
}

#[test]
fn test_cron_upcoming_runs() {
    let home = TempDir::new().unwrap();
    let output = zt(&home)
        .args(["--format", "json", "cron", "0 * * * *", "-n", "3", "--tz", "UTC"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["status"], "Valid");
    assert_eq!(value["upcoming"].as_array().unwrap().len(), 3);
    assert_eq!(value["next"], value["upcoming"][0]);
}

#[test]
fn test_stacktrace_from_stdin() {
    let home = TempDir::new().unwrap();
    zt(&home)
        .arg("stacktrace")
        .write_stdin("java.lang.IllegalStateException: boom at a.B.c(B.java:1) at a.B.d(B.java:2)\n")
        .assert()
        .success()
        .stdout(
            "java.lang.IllegalStateException: boom\n at a.B.c(B.java:1)\n at a.B.d(B.java:2)\n",
        );
}

#[test]
fn test_missing_config_file() {
    let home = TempDir::new().unwrap();
    zt(&home)
        .args(["--config"])
        .arg(home.path().join("absent.toml"))
        .arg("list")
        .assert()
        .code(5);
}

#[test]
fn test_config_sets_defaults() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("zt.toml");
    fs::write(
        &config,
        "[hash]\nalgorithm = \"md5\"\n\n[output]\nformat = \"json\"\n",
    )
    .unwrap();

    zt(&home)
        .env("ZT_CONFIG", &config)
        .args(["hash", "abc"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "\"digest\": \"900150983cd24fb0d6963f7d28e17f72\"",
        ));

    zt(&home)
        .env("ZT_CONFIG", &config)
        .args(["--format", "text", "hash", "abc"])
        .assert()
        .success()
        .stdout("900150983cd24fb0d6963f7d28e17f72\n");
}

#[test]
fn test_password_json_output() {
    let home = TempDir::new().unwrap();
    let output = zt(&home)
        .args(["--format", "json", "password", "-l", "16", "-n", "3"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let passwords = value["passwords"].as_array().unwrap();
    assert_eq!(passwords.len(), 3);
    assert!(passwords
        .iter()
        .all(|p| p.as_str().unwrap().chars().count() == 16));
}
