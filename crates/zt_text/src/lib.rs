//! # zt_text
//!
//! Text tools for zt:
//!
//! - **JSON Viewer**: validation, outline, pretty and compact output
//! - **JSON / YAML Comparator**: structural equality with per-path differences
//! - **YAML Validator**: single-document validation with error locations
//! - **Beautifier**: pretty-print or minify JSON, HTML, CSS, JavaScript, XML and SQL
//! - **Regex Templates**: common patterns ready to copy and test
//! - **Text Comparator**: character, word or line diffs
//! - **Character Counter**: characters, UTF-16 units, bytes, words and lines
//!
//! ## Example
//!
//! ```rust
//! use zt_text::{beautify, compare_json, CodeLanguage};
//!
//! let pretty = beautify(r#"{"a":1}"#, CodeLanguage::Json, 2).unwrap();
//! assert_eq!(pretty, "{\n  \"a\": 1\n}");
//!
//! assert!(compare_json(r#"{"a":1,"b":2}"#, r#"{"b":2,"a":1.0}"#).equal);
//! ```

pub mod beautify;
pub mod compare;
pub mod count;
pub mod diff;
pub mod error;
pub mod json;
pub mod regex_templates;
pub mod yaml;

pub use beautify::{beautify, minify, process, BeautifyMode, CodeLanguage, DEFAULT_INDENT};
pub use compare::{compare_json, deep_equal, Comparison, Difference, DifferenceKind};
pub use count::{count, CharacterCount};
pub use diff::{diff_text, unified, DiffGranularity, DiffSegment, DiffStats, SegmentTag, TextDiffResult};
pub use error::{TextError, TextResult};
pub use json::{json_status, JsonDocument};
pub use regex_templates::{find_template, template_keys, templates, test_pattern, RegexTemplate};
pub use yaml::{compare_yaml, parse_yaml, validate_yaml, yaml_to_json, YamlCheck, YamlErrorInfo};

use zt_core::{ToolCategory, ToolDescriptor};

/// Catalog entries for the tools in this crate.
pub fn descriptors() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor::new(
            "json-viewer",
            "JSON Viewer",
            ToolCategory::Text,
            "Validate JSON and show it as an outline, pretty or compact",
        ),
        ToolDescriptor::new(
            "json-comparator",
            "JSON Comparator",
            ToolCategory::Text,
            "Compare two JSON documents ignoring key order",
        ),
        ToolDescriptor::new(
            "yaml-validator",
            "YAML Validator",
            ToolCategory::Text,
            "Check that YAML parses as a single document",
        ),
        ToolDescriptor::new(
            "yaml-comparator",
            "YAML Comparator",
            ToolCategory::Text,
            "Compare two YAML documents by their data",
        ),
        ToolDescriptor::new(
            "beautifier",
            "Code Beautifier",
            ToolCategory::Text,
            "Pretty-print or minify JSON, HTML, CSS, JavaScript, XML or SQL",
        ),
        ToolDescriptor::new(
            "regex-templates",
            "Regex Templates",
            ToolCategory::Text,
            "Browse and test common regular expressions",
        ),
        ToolDescriptor::new(
            "text-comparator",
            "Text Comparator",
            ToolCategory::Text,
            "Highlight differences between two texts",
        ),
        ToolDescriptor::new(
            "character-counter",
            "Character Counter",
            ToolCategory::Text,
            "Count characters, words and lines",
        ),
    ]
}
