//! Structural comparison of JSON values.
//!
//! Equality ignores object key order and compares numbers by value, so
//! `{"a": 1, "b": 2}` equals `{"b": 2.0, "a": 1}`.

use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use zt_core::Validity;

/// How a path differs between the two sides.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DifferenceKind {
    /// Present only on the right.
    Added,
    /// Present only on the left.
    Removed,
    Changed,
}

/// A single difference, addressed with `$.a[0].b` notation.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Difference {
    pub path: String,
    pub kind: DifferenceKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<Value>,
}

/// Result of comparing two documents.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Comparison {
    pub left: Validity,
    pub right: Validity,
    pub equal: bool,
    pub differences: Vec<Difference>,
}

impl Comparison {
    /// Compare two parsed sides. `None` marks a side that failed to parse.
    pub fn from_values(left: Option<&Value>, right: Option<&Value>) -> Self {
        let (equal, differences) = match (left, right) {
            (Some(l), Some(r)) => {
                let mut differences = Vec::new();
                collect_differences("$", l, r, &mut differences);
                (differences.is_empty(), differences)
            }
            _ => (false, Vec::new()),
        };

        debug!("Comparison found {} differences", differences.len());

        Self {
            left: left.is_some().into(),
            right: right.is_some().into(),
            equal,
            differences,
        }
    }

    pub fn both_valid(&self) -> bool {
        self.left.is_valid() && self.right.is_valid()
    }

    /// One-line verdict.
    pub fn summary(&self) -> String {
        if !self.both_valid() {
            format!("Cannot compare: left is {}, right is {}", self.left, self.right)
        } else if self.equal {
            "Both documents are equal".to_string()
        } else {
            format!("Documents differ in {} place(s)", self.differences.len())
        }
    }
}

/// Compare two JSON texts.
pub fn compare_json(left: &str, right: &str) -> Comparison {
    let l = serde_json::from_str::<Value>(left).ok();
    let r = serde_json::from_str::<Value>(right).ok();
    Comparison::from_values(l.as_ref(), r.as_ref())
}

/// Deep equality with numeric comparison by value.
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => numbers_equal(x, y),
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| deep_equal(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(k, x)| ys.get(k).map_or(false, |y| deep_equal(x, y)))
        }
        _ => a == b,
    }
}

fn numbers_equal(x: &serde_json::Number, y: &serde_json::Number) -> bool {
    if let (Some(a), Some(b)) = (x.as_i64(), y.as_i64()) {
        return a == b;
    }
    if let (Some(a), Some(b)) = (x.as_u64(), y.as_u64()) {
        return a == b;
    }
    x.as_f64() == y.as_f64()
}

fn key_path(parent: &str, key: &str) -> String {
    let plain = !key.is_empty()
        && !key.starts_with(|c: char| c.is_ascii_digit())
        && key.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '$');
    if plain {
        format!("{}.{}", parent, key)
    } else {
        format!("{}[{}]", parent, Value::from(key))
    }
}

fn collect_differences(path: &str, left: &Value, right: &Value, out: &mut Vec<Difference>) {
    match (left, right) {
        (Value::Object(l), Value::Object(r)) => {
            for (key, lv) in l {
                let child = key_path(path, key);
                match r.get(key) {
                    Some(rv) => collect_differences(&child, lv, rv, out),
                    None => out.push(Difference {
                        path: child,
                        kind: DifferenceKind::Removed,
                        left: Some(lv.clone()),
                        right: None,
                    }),
                }
            }
            for (key, rv) in r.iter().filter(|(k, _)| !l.contains_key(*k)) {
                out.push(Difference {
                    path: key_path(path, key),
                    kind: DifferenceKind::Added,
                    left: None,
                    right: Some(rv.clone()),
                });
            }
        }
        (Value::Array(l), Value::Array(r)) => {
            for i in 0..l.len().max(r.len()) {
                let child = format!("{}[{}]", path, i);
                match (l.get(i), r.get(i)) {
                    (Some(lv), Some(rv)) => collect_differences(&child, lv, rv, out),
                    (Some(lv), None) => out.push(Difference {
                        path: child,
                        kind: DifferenceKind::Removed,
                        left: Some(lv.clone()),
                        right: None,
                    }),
                    (None, Some(rv)) => out.push(Difference {
                        path: child,
                        kind: DifferenceKind::Added,
                        left: None,
                        right: Some(rv.clone()),
                    }),
                    (None, None) => {}
                }
            }
        }
        _ if deep_equal(left, right) => {}
        _ => out.push(Difference {
            path: path.to_string(),
            kind: DifferenceKind::Changed,
            left: Some(left.clone()),
            right: Some(right.clone()),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_key_order_and_numeric_equality() {
        let result = compare_json(r#"{"a": 1, "b": [1, 2]}"#, r#"{"b": [1.0, 2], "a": 1.0}"#);
        assert!(result.equal);
        assert!(result.differences.is_empty());
        assert_eq!(result.summary(), "Both documents are equal");
    }

    #[test]
    fn test_differences_with_paths() {
        let result = compare_json(
            r#"{"a": {"b": [1, 2, 3]}, "gone": true, "same": "x"}"#,
            r#"{"a": {"b": [1, 5]}, "same": "x", "new key": null}"#,
        );
        assert!(!result.equal);

        let paths: Vec<(&str, DifferenceKind)> = result
            .differences
            .iter()
            .map(|d| (d.path.as_str(), d.kind))
            .collect();
        assert_eq!(
            paths,
            vec![
                ("$.a.b[1]", DifferenceKind::Changed),
                ("$.a.b[2]", DifferenceKind::Removed),
                ("$.gone", DifferenceKind::Removed),
                ("$[\"new key\"]", DifferenceKind::Added),
            ]
        );
    }

    #[test]
    fn test_invalid_side_never_equal() {
        let result = compare_json("{}", "{");
        assert_eq!(result.left, Validity::Valid);
        assert_eq!(result.right, Validity::Invalid);
        assert!(!result.equal);
        assert!(result.summary().starts_with("Cannot compare"));
    }

    #[test]
    fn test_falsy_values_compare_equal() {
        assert!(compare_json("null", "null").equal);
        assert!(compare_json("0", "0.0").equal);
        assert!(!compare_json("0", "false").equal);
    }

    #[test]
    fn test_type_change_at_root() {
        let result = compare_json("[1]", r#"{"0": 1}"#);
        assert_eq!(result.differences.len(), 1);
        assert_eq!(result.differences[0].path, "$");
        assert_eq!(result.differences[0].kind, DifferenceKind::Changed);
    }

    #[test]
    fn test_deep_equal_large_integers() {
        assert!(deep_equal(&json!(u64::MAX), &json!(u64::MAX)));
        assert!(!deep_equal(&json!(9007199254740993u64), &json!(9007199254740992u64)));
    }
}
