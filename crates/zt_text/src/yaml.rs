//! YAML validator and comparator.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value as JsonValue};
use serde_yaml::Value as YamlValue;
use tracing::debug;
use zt_core::Validity;

use crate::compare::Comparison;
use crate::error::{TextError, TextResult};

/// Where and why YAML failed to parse.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct YamlErrorInfo {
    pub message: String,
    pub line: Option<usize>,
    pub column: Option<usize>,
}

/// Outcome of validating YAML text.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct YamlCheck {
    pub status: Validity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<YamlErrorInfo>,
}

/// Parse a single YAML document. Empty input is a null document.
pub fn parse_yaml(text: &str) -> TextResult<YamlValue> {
    let mut documents = serde_yaml::Deserializer::from_str(text);
    let first = match documents.next() {
        Some(document) => YamlValue::deserialize(document)?,
        None => return Ok(YamlValue::Null),
    };

    if documents.next().is_some() {
        return Err(TextError::InvalidYaml {
            message: "input contains more than one document".to_string(),
            line: None,
            column: None,
        });
    }

    Ok(first)
}

/// Validate YAML text.
pub fn validate_yaml(text: &str) -> YamlCheck {
    match parse_yaml(text) {
        Ok(_) => YamlCheck {
            status: Validity::Valid,
            error: None,
        },
        Err(TextError::InvalidYaml {
            message,
            line,
            column,
        }) => {
            debug!("YAML rejected: {}", message);
            YamlCheck {
                status: Validity::Invalid,
                error: Some(YamlErrorInfo {
                    message,
                    line,
                    column,
                }),
            }
        }
        Err(other) => YamlCheck {
            status: Validity::Invalid,
            error: Some(YamlErrorInfo {
                message: other.to_string(),
                line: None,
                column: None,
            }),
        },
    }
}

/// Convert YAML text to the JSON data model.
pub fn yaml_to_json(text: &str) -> TextResult<JsonValue> {
    parse_yaml(text).map(|value| to_json(&value))
}

/// Compare two YAML texts by their JSON data model.
pub fn compare_yaml(left: &str, right: &str) -> Comparison {
    let l = yaml_to_json(left).ok();
    let r = yaml_to_json(right).ok();
    Comparison::from_values(l.as_ref(), r.as_ref())
}

/// Convert a YAML value. Keys become strings and tags are dropped.
pub fn to_json(value: &YamlValue) -> JsonValue {
    match value {
        YamlValue::Null => JsonValue::Null,
        YamlValue::Bool(b) => JsonValue::Bool(*b),
        YamlValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                JsonValue::from(i)
            } else if let Some(u) = n.as_u64() {
                JsonValue::from(u)
            } else {
                n.as_f64()
                    .and_then(Number::from_f64)
                    .map_or(JsonValue::Null, JsonValue::Number)
            }
        }
        YamlValue::String(s) => JsonValue::String(s.clone()),
        YamlValue::Sequence(items) => JsonValue::Array(items.iter().map(to_json).collect()),
        YamlValue::Mapping(mapping) => {
            let mut map = Map::new();
            for (k, v) in mapping {
                map.insert(key_string(k), to_json(v));
            }
            JsonValue::Object(map)
        }
        YamlValue::Tagged(tagged) => to_json(&tagged.value),
    }
}

fn key_string(key: &YamlValue) -> String {
    match key {
        YamlValue::String(s) => s.clone(),
        YamlValue::Null => "null".to_string(),
        YamlValue::Bool(b) => b.to_string(),
        YamlValue::Number(n) => n.to_string(),
        YamlValue::Tagged(tagged) => key_string(&tagged.value),
        complex => to_json(complex).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_document() {
        let check = validate_yaml("name: zt\ntags:\n  - cli\n  - dev\n");
        assert_eq!(check.status, Validity::Valid);
        assert!(check.error.is_none());
    }

    #[test]
    fn test_empty_is_valid() {
        assert_eq!(validate_yaml("").status, Validity::Valid);
        assert_eq!(yaml_to_json("").unwrap(), JsonValue::Null);
    }

    #[test]
    fn test_invalid_reports_location() {
        let check = validate_yaml("a: 1\nb: [1, 2\nc: 3\n");
        assert_eq!(check.status, Validity::Invalid);
        let error = check.error.unwrap();
        assert!(error.line.is_some());
        assert!(!error.message.is_empty());
    }

    #[test]
    fn test_multiple_documents_invalid() {
        let check = validate_yaml("a: 1\n---\nb: 2\n");
        assert_eq!(check.status, Validity::Invalid);
        assert!(check.error.unwrap().message.contains("more than one document"));
    }

    #[test]
    fn test_to_json_stringifies_keys() {
        let value = yaml_to_json("1: one\ntrue: yes\n~: nothing\nlist: [1, 2.5]\n").unwrap();
        assert_eq!(
            value,
            json!({"1": "one", "true": "yes", "null": "nothing", "list": [1, 2.5]})
        );
    }

    #[test]
    fn test_tags_dropped() {
        let value = yaml_to_json("when: !date 2024-01-01\n").unwrap();
        assert_eq!(value, json!({"when": "2024-01-01"}));
    }

    #[test]
    fn test_compare_yaml_ignores_layout() {
        let left = "a: 1\nb:\n  - x\n  - y\n";
        let right = "b: [x, y]\na: 1.0\n";
        assert!(compare_yaml(left, right).equal);

        let changed = compare_yaml(left, "a: 2\nb: [x, y]\n");
        assert!(!changed.equal);
        assert_eq!(changed.differences[0].path, "$.a");
    }
}
