//! Integration tests for the text tools.

use std::fs;

use tempfile::TempDir;

use zt_text::{
    beautify, compare_json, compare_yaml, descriptors, diff_text, find_template, minify,
    validate_yaml, yaml_to_json, CodeLanguage, DiffGranularity, DifferenceKind, JsonDocument,
};

#[test]
fn test_beautify_then_minify_restores_json() {
    let compact = r#"{"name":"zt","nested":{"list":[1,2,{"deep":true}]}}"#;
    for indent in [1, 2, 4, 8] {
        let pretty = beautify(compact, CodeLanguage::Json, indent).unwrap();
        assert!(pretty.lines().count() > 1);
        assert_eq!(minify(&pretty, CodeLanguage::Json).unwrap(), compact);
    }
}

#[test]
fn test_yaml_and_json_agree() {
    let yaml = "service:\n  name: api\n  ports: [80, 443]\n";
    let json = r#"{"service": {"ports": [80, 443], "name": "api"}}"#;

    let from_yaml = yaml_to_json(yaml).unwrap();
    let doc = JsonDocument::parse(json).unwrap();
    assert!(zt_text::deep_equal(&from_yaml, doc.value()));
}

#[test]
fn test_comparison_reports_nested_paths() {
    let left = "users:\n  - name: a\n    admin: true\n";
    let right = "users:\n  - name: a\n    admin: false\n";
    let result = compare_yaml(left, right);
    assert!(!result.equal);
    assert_eq!(result.differences.len(), 1);
    assert_eq!(result.differences[0].path, "$.users[0].admin");
    assert_eq!(result.differences[0].kind, DifferenceKind::Changed);
}

#[test]
fn test_compare_files_from_disk() {
    let temp_dir = TempDir::new().unwrap();
    let a = temp_dir.path().join("a.json");
    let b = temp_dir.path().join("b.json");
    fs::write(&a, "{\n  \"x\": 1,\n  \"y\": [1, 2]\n}\n").unwrap();
    fs::write(&b, r#"{"y":[1,2],"x":1}"#).unwrap();

    let result = compare_json(&fs::read_to_string(&a).unwrap(), &fs::read_to_string(&b).unwrap());
    assert!(result.equal);
}

#[test]
fn test_validate_yaml_rejects_tabs_indentation() {
    let check = validate_yaml("a:\n\t- b\n");
    assert!(!check.status.is_valid());
    assert!(check.error.is_some());
}

#[test]
fn test_line_diff_of_beautified_code() {
    let before = beautify("a{color:red}", CodeLanguage::Css, 2).unwrap();
    let after = beautify("a{color:blue}", CodeLanguage::Css, 2).unwrap();
    let result = diff_text(&before, &after, DiffGranularity::Lines);
    assert!(result.has_changes());
    assert!(result.render_inline().contains("[-  color:red\n-]{+  color:blue\n+}"));
}

#[test]
fn test_template_round_trip() {
    let template = find_template("ipv4").unwrap();
    assert!(template.pattern.starts_with("/^"));
    assert!(template.pattern.ends_with("/g"));
    assert!(template.is_match("10.0.0.255"));
}

#[test]
fn test_descriptor_ids_unique() {
    let tools = descriptors();
    let mut ids: Vec<&str> = tools.iter().map(|t| t.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), tools.len());
}
