//! Stack-trace formatter.
//!
//! Traces pasted from logs often arrive flattened onto one line. Each
//! language has a list of rules; every rule matches the start of a frame or
//! section and puts it on its own line, keeping its original leading
//! spacing.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::DebugError;

const JAVA_RULES: [&str; 5] = [
    r"(Caused by: \b[^\s.]\S*\.\S*\b)",
    r"(Suppressed: \b[^\s.]\S*\.\S*\b)",
    r"(\s*\.\.\. \d+ more)",
    r"(\s*\.\.\. \d+ common frames omitted)",
    r"(\s+at \b[^\s.]\S*\.\S*\b)",
];

const PYTHON_RULES: [&str; 5] = [
    r"(Traceback \(most recent call last\):)",
    r"(\s*File .+?, line \d+)",
    r"(During handling of the above exception, another exception occurred:)",
    r"(The above exception was the direct cause of the following exception:)",
    r"(\s*\b[A-Za-z_][\w.]*(?:Error|Exception)\b:)",
];

/// Languages with formatting rules.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum StackTraceLanguage {
    #[default]
    Java,
    Python,
}

impl StackTraceLanguage {
    pub const ALL: [StackTraceLanguage; 2] = [StackTraceLanguage::Java, StackTraceLanguage::Python];

    pub fn key(&self) -> &'static str {
        match self {
            StackTraceLanguage::Java => "java",
            StackTraceLanguage::Python => "python",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StackTraceLanguage::Java => "Java",
            StackTraceLanguage::Python => "Python",
        }
    }

    fn rules(&self) -> &'static [Regex] {
        static JAVA: OnceLock<Vec<Regex>> = OnceLock::new();
        static PYTHON: OnceLock<Vec<Regex>> = OnceLock::new();

        let (cell, patterns) = match self {
            StackTraceLanguage::Java => (&JAVA, &JAVA_RULES),
            StackTraceLanguage::Python => (&PYTHON, &PYTHON_RULES),
        };
        cell.get_or_init(|| {
            patterns
                .iter()
                .map(|p| Regex::new(p).expect("valid regex"))
                .collect()
        })
    }
}

impl fmt::Display for StackTraceLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StackTraceLanguage {
    type Err = DebugError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "java" | "kotlin" | "jvm" => Ok(StackTraceLanguage::Java),
            "python" | "py" => Ok(StackTraceLanguage::Python),
            _ => Err(DebugError::UnknownLanguage(s.to_string())),
        }
    }
}

/// Trailing spaces before a line break, and the blank lines a rule leaves
/// when its match already started on a new line.
fn line_breaks() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[ \t]*\n(?:[ \t]*\n)*").expect("valid regex"))
}

/// Put each frame of `text` on its own line. Formatting an already
/// formatted trace leaves it unchanged.
pub fn format_stack_trace(text: &str, language: StackTraceLanguage) -> String {
    if text.trim().is_empty() {
        return String::new();
    }

    let mut formatted = text.to_string();
    for rule in language.rules() {
        formatted = rule.replace_all(&formatted, "\n${1}").into_owned();
    }
    let formatted = line_breaks().replace_all(&formatted, "\n");
    let formatted = formatted.trim_start_matches('\n').to_string();

    debug!(
        "Formatted {} trace into {} lines",
        language,
        formatted.lines().count()
    );
    formatted
}
