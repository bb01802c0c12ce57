//! Text comparator.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use similar::{ChangeTag, TextDiff};
use tracing::debug;

use crate::error::TextError;

/// Unit the diff is computed over.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DiffGranularity {
    #[default]
    Chars,
    Words,
    Lines,
}

impl fmt::Display for DiffGranularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiffGranularity::Chars => f.write_str("chars"),
            DiffGranularity::Words => f.write_str("words"),
            DiffGranularity::Lines => f.write_str("lines"),
        }
    }
}

impl FromStr for DiffGranularity {
    type Err = TextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "chars" | "char" | "characters" => Ok(DiffGranularity::Chars),
            "words" | "word" => Ok(DiffGranularity::Words),
            "lines" | "line" => Ok(DiffGranularity::Lines),
            _ => Err(TextError::UnknownGranularity(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SegmentTag {
    Equal,
    Insert,
    Delete,
}

impl From<ChangeTag> for SegmentTag {
    fn from(tag: ChangeTag) -> Self {
        match tag {
            ChangeTag::Equal => SegmentTag::Equal,
            ChangeTag::Insert => SegmentTag::Insert,
            ChangeTag::Delete => SegmentTag::Delete,
        }
    }
}

/// A run of text with the same tag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiffSegment {
    pub tag: SegmentTag,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiffStats {
    /// Inserted characters.
    pub insertions: usize,
    /// Deleted characters.
    pub deletions: usize,
    /// Similarity between 0 and 1.
    pub similarity: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TextDiffResult {
    pub granularity: DiffGranularity,
    pub segments: Vec<DiffSegment>,
    pub stats: DiffStats,
}

impl TextDiffResult {
    pub fn has_changes(&self) -> bool {
        self.segments.iter().any(|s| s.tag != SegmentTag::Equal)
    }

    /// HTML with `<del>`, `<ins>` and `<span>` runs. Newlines show as a
    /// pilcrow followed by `<br>`.
    pub fn render_html(&self) -> String {
        self.segments
            .iter()
            .map(|segment| {
                let text = html_escape::encode_text(&segment.text).replace('\n', "&para;<br>");
                match segment.tag {
                    SegmentTag::Insert => format!("<ins style=\"background:#e6ffe6;\">{}</ins>", text),
                    SegmentTag::Delete => format!("<del style=\"background:#ffe6e6;\">{}</del>", text),
                    SegmentTag::Equal => format!("<span>{}</span>", text),
                }
            })
            .collect()
    }

    /// Plain text with `[-deleted-]` and `{+inserted+}` markers.
    pub fn render_inline(&self) -> String {
        self.segments
            .iter()
            .map(|segment| match segment.tag {
                SegmentTag::Insert => format!("{{+{}+}}", segment.text),
                SegmentTag::Delete => format!("[-{}-]", segment.text),
                SegmentTag::Equal => segment.text.clone(),
            })
            .collect()
    }
}

/// Diff two texts.
pub fn diff_text(old: &str, new: &str, granularity: DiffGranularity) -> TextDiffResult {
    let diff = match granularity {
        DiffGranularity::Chars => TextDiff::from_chars(old, new),
        DiffGranularity::Words => TextDiff::from_words(old, new),
        DiffGranularity::Lines => TextDiff::from_lines(old, new),
    };

    let mut segments: Vec<DiffSegment> = Vec::new();
    let mut insertions = 0;
    let mut deletions = 0;

    for change in diff.iter_all_changes() {
        let tag = SegmentTag::from(change.tag());
        let value = change.value();
        match tag {
            SegmentTag::Insert => insertions += value.chars().count(),
            SegmentTag::Delete => deletions += value.chars().count(),
            SegmentTag::Equal => {}
        }

        match segments.last_mut() {
            Some(last) if last.tag == tag => last.text.push_str(value),
            _ => segments.push(DiffSegment {
                tag,
                text: value.to_string(),
            }),
        }
    }

    debug!(
        "Diff by {}: {} segments, +{} -{}",
        granularity,
        segments.len(),
        insertions,
        deletions
    );

    TextDiffResult {
        granularity,
        segments,
        stats: DiffStats {
            insertions,
            deletions,
            similarity: diff.ratio(),
        },
    }
}

/// Unified diff by lines with `context` lines around each hunk.
pub fn unified(old: &str, new: &str, context: usize) -> String {
    TextDiff::from_lines(old, new)
        .unified_diff()
        .context_radius(context)
        .header("old", "new")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_diff_merges_runs() {
        let result = diff_text("kitten", "sitting", DiffGranularity::Chars);
        assert!(result.has_changes());
        assert_eq!(result.stats.insertions, 3);
        assert_eq!(result.stats.deletions, 2);

        let old: String = result
            .segments
            .iter()
            .filter(|s| s.tag != SegmentTag::Insert)
            .map(|s| s.text.as_str())
            .collect();
        assert_eq!(old, "kitten");
        for pair in result.segments.windows(2) {
            assert_ne!(pair[0].tag, pair[1].tag);
        }

        let simple = diff_text("abc", "abd", DiffGranularity::Chars);
        assert_eq!(simple.render_inline(), "ab[-c-]{+d+}");
    }

    #[test]
    fn test_identical_texts() {
        let result = diff_text("same\ntext", "same\ntext", DiffGranularity::Chars);
        assert!(!result.has_changes());
        assert_eq!(result.segments.len(), 1);
        assert_eq!(result.stats.similarity, 1.0);
    }

    #[test]
    fn test_word_diff() {
        let result = diff_text("the quick fox", "the slow fox", DiffGranularity::Words);
        assert_eq!(result.render_inline(), "the [-quick-]{+slow+} fox");
    }

    #[test]
    fn test_render_html_escapes() {
        let result = diff_text("a<b\n", "a>b\n", DiffGranularity::Chars);
        assert_eq!(
            result.render_html(),
            "<span>a</span><del style=\"background:#ffe6e6;\">&lt;</del>\
<ins style=\"background:#e6ffe6;\">&gt;</ins><span>b&para;<br></span>"
        );
    }

    #[test]
    fn test_unified() {
        let patch = unified("a\nb\nc\n", "a\nB\nc\n", 1);
        assert!(patch.starts_with("--- old\n+++ new\n"));
        assert!(patch.contains("-b\n+B\n"));
    }

    #[test]
    fn test_granularity_parsing() {
        assert_eq!("Words".parse::<DiffGranularity>().unwrap(), DiffGranularity::Words);
        assert!("bytes".parse::<DiffGranularity>().is_err());
        assert_eq!(DiffGranularity::default(), DiffGranularity::Chars);
    }
}
