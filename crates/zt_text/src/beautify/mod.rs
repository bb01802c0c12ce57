//! Code beautifier and minifier.
//!
//! JSON goes through the parser. The markup, CSS and SQL layouts are
//! marker based: the text is cut at significant boundaries and each piece
//! is re-indented by a running depth. JavaScript is tokenized first.

mod css;
mod js;
mod sql;
mod xml;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::{TextError, TextResult};
use crate::json::to_string_indented;

pub use css::{minify_css, pretty_css};
pub use js::{beautify_js, minify_js};
pub use sql::{minify_sql, pretty_sql};
pub use xml::{minify_html, minify_xml, pretty_html, pretty_xml};

/// Indent used when none is given.
pub const DEFAULT_INDENT: usize = 2;

/// Split point inserted before re-indenting.
pub(crate) const MARK: &str = "~::~";

/// A line break followed by `depth` indent steps.
pub(crate) fn shift(depth: usize, indent: usize) -> String {
    format!("\n{}", " ".repeat(depth * indent))
}

/// Languages the beautifier understands.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum CodeLanguage {
    #[default]
    Json,
    Html,
    Css,
    JavaScript,
    Xml,
    Sql,
}

impl CodeLanguage {
    pub const ALL: [CodeLanguage; 6] = [
        CodeLanguage::Json,
        CodeLanguage::Html,
        CodeLanguage::Css,
        CodeLanguage::JavaScript,
        CodeLanguage::Xml,
        CodeLanguage::Sql,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            CodeLanguage::Json => "json",
            CodeLanguage::Html => "html",
            CodeLanguage::Css => "css",
            CodeLanguage::JavaScript => "js",
            CodeLanguage::Xml => "xml",
            CodeLanguage::Sql => "sql",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CodeLanguage::Json => "JSON",
            CodeLanguage::Html => "HTML",
            CodeLanguage::Css => "CSS",
            CodeLanguage::JavaScript => "Javascript",
            CodeLanguage::Xml => "XML",
            CodeLanguage::Sql => "SQL",
        }
    }
}

impl fmt::Display for CodeLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CodeLanguage {
    type Err = TextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(CodeLanguage::Json),
            "html" | "htm" => Ok(CodeLanguage::Html),
            "css" => Ok(CodeLanguage::Css),
            "js" | "javascript" => Ok(CodeLanguage::JavaScript),
            "xml" => Ok(CodeLanguage::Xml),
            "sql" => Ok(CodeLanguage::Sql),
            _ => Err(TextError::UnknownLanguage(s.to_string())),
        }
    }
}

/// Direction of [`process`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum BeautifyMode {
    #[default]
    Beautify,
    Minify,
}

/// Pretty-print `text`. An `indent` of zero uses [`DEFAULT_INDENT`].
pub fn beautify(text: &str, language: CodeLanguage, indent: usize) -> TextResult<String> {
    let indent = if indent == 0 { DEFAULT_INDENT } else { indent };
    debug!("Beautifying {} with indent {}", language, indent);

    match language {
        CodeLanguage::Json => {
            let value: Value = serde_json::from_str(text)?;
            to_string_indented(&value, indent)
        }
        CodeLanguage::Html => Ok(pretty_html(text, indent)),
        CodeLanguage::Css => Ok(pretty_css(text, indent)),
        CodeLanguage::JavaScript => beautify_js(text, indent),
        CodeLanguage::Xml => Ok(pretty_xml(text, indent)),
        CodeLanguage::Sql => Ok(pretty_sql(text, indent)),
    }
}

/// Minify `text`. Comments are removed.
pub fn minify(text: &str, language: CodeLanguage) -> TextResult<String> {
    debug!("Minifying {}", language);

    match language {
        CodeLanguage::Json => {
            let value: Value = serde_json::from_str(text)?;
            Ok(value.to_string())
        }
        CodeLanguage::Html => Ok(minify_html(text)),
        CodeLanguage::Css => Ok(minify_css(text, false)),
        CodeLanguage::JavaScript => minify_js(text),
        CodeLanguage::Xml => Ok(minify_xml(text, false)),
        CodeLanguage::Sql => Ok(minify_sql(text)),
    }
}

/// Run either direction.
pub fn process(
    text: &str,
    language: CodeLanguage,
    mode: BeautifyMode,
    indent: usize,
) -> TextResult<String> {
    match mode {
        BeautifyMode::Beautify => beautify(text, language, indent),
        BeautifyMode::Minify => minify(text, language),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_beautify_and_minify() {
        let text = r#"{"b":1,"a":[true,null]}"#;
        assert_eq!(
            beautify(text, CodeLanguage::Json, 2).unwrap(),
            "{\n  \"b\": 1,\n  \"a\": [\n    true,\n    null\n  ]\n}"
        );
        let pretty = beautify(text, CodeLanguage::Json, 4).unwrap();
        assert_eq!(minify(&pretty, CodeLanguage::Json).unwrap(), text);
    }

    #[test]
    fn test_zero_indent_falls_back() {
        let text = r#"{"a":1}"#;
        assert_eq!(
            beautify(text, CodeLanguage::Json, 0).unwrap(),
            beautify(text, CodeLanguage::Json, DEFAULT_INDENT).unwrap()
        );
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(matches!(
            process("{oops}", CodeLanguage::Json, BeautifyMode::Minify, 2),
            Err(TextError::InvalidJson { .. })
        ));
    }

    #[test]
    fn test_language_parsing() {
        assert_eq!("JavaScript".parse::<CodeLanguage>().unwrap(), CodeLanguage::JavaScript);
        assert_eq!("js".parse::<CodeLanguage>().unwrap(), CodeLanguage::JavaScript);
        assert_eq!("SQL".parse::<CodeLanguage>().unwrap(), CodeLanguage::Sql);
        assert!("cobol".parse::<CodeLanguage>().is_err());
        assert_eq!(CodeLanguage::default(), CodeLanguage::Json);
    }

    #[test]
    fn test_process_dispatch() {
        let css = "a { color: red; }";
        assert_eq!(
            process(css, CodeLanguage::Css, BeautifyMode::Minify, 2).unwrap(),
            "a {color: red;}"
        );
        assert_eq!(
            process(css, CodeLanguage::Css, BeautifyMode::Beautify, 2).unwrap(),
            "a {\n  color: red;\n}"
        );
    }
}
