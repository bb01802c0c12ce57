//! JSON viewer.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};
use zt_core::Validity;

use crate::error::{TextError, TextResult};

/// Label of the top-level node in the outline.
const ROOT_LABEL: &str = "root";

/// A parsed JSON document. Object keys keep their input order.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonDocument {
    value: Value,
}

impl JsonDocument {
    /// Parse JSON text.
    pub fn parse(text: &str) -> TextResult<Self> {
        let value = serde_json::from_str(text)?;
        Ok(Self { value })
    }

    pub fn from_value(value: Value) -> Self {
        Self { value }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    /// Indented tree with container sizes, one node per line.
    ///
    /// ```text
    /// root: {2}
    ///   name: "zt"
    ///   tags: [1]
    ///     0: "cli"
    /// ```
    pub fn outline(&self) -> String {
        let mut out = String::new();
        write_node(&mut out, ROOT_LABEL, &self.value, 0);
        out
    }

    /// Serialize with `indent` spaces per level. Zero gives compact output.
    pub fn pretty(&self, indent: usize) -> TextResult<String> {
        to_string_indented(&self.value, indent)
    }

    pub fn minified(&self) -> String {
        self.value.to_string()
    }

    /// Look up an RFC 6901 pointer such as `/tags/0`.
    pub fn pointer(&self, pointer: &str) -> Option<&Value> {
        self.value.pointer(pointer)
    }
}

/// Status of JSON text.
pub fn json_status(text: &str) -> Validity {
    Validity::of(&serde_json::from_str::<Value>(text))
}

/// Serialize `value` with a custom indent width.
pub(crate) fn to_string_indented(value: &Value, indent: usize) -> TextResult<String> {
    if indent == 0 {
        return Ok(value.to_string());
    }

    let pad = vec![b' '; indent];
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(&pad));
    value.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(|e| TextError::Serialization(e.to_string()))
}

fn write_node(out: &mut String, label: &str, value: &Value, depth: usize) {
    out.push_str(&"  ".repeat(depth));
    match value {
        Value::Object(map) => {
            out.push_str(&format!("{}: {{{}}}\n", label, map.len()));
            for (key, child) in map {
                write_node(out, key, child, depth + 1);
            }
        }
        Value::Array(items) => {
            out.push_str(&format!("{}: [{}]\n", label, items.len()));
            for (index, child) in items.iter().enumerate() {
                write_node(out, &index.to_string(), child, depth + 1);
            }
        }
        scalar => out.push_str(&format!("{}: {}\n", label, scalar)),
    }
}
