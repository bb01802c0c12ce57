//! CSS layout.

use std::sync::OnceLock;

use regex::Regex;

use super::{shift, MARK};

fn whitespace() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("valid regex"))
}

fn comment() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)/\*.*?\*/").expect("valid regex"))
}

fn space_after_delimiter() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\{|\}|;|/\*|\*/)\s+").expect("valid regex"))
}

/// Pretty-print CSS: one declaration per line, blocks indented, comments
/// on their own lines.
pub fn pretty_css(text: &str, indent: usize) -> String {
    let collapsed = whitespace().replace_all(text, " ");
    let marked = collapsed
        .replace('{', &format!("{{{}", MARK))
        .replace('}', &format!("{}}}{}", MARK, MARK))
        .replace(';', &format!(";{}", MARK))
        .replace("/*", &format!("{}/*", MARK))
        .replace("*/", &format!("*/{}", MARK));

    let mut out = String::new();
    let mut depth = 0usize;
    for piece in marked.split(MARK).map(str::trim).filter(|p| !p.is_empty()) {
        if piece.contains('{') {
            out.push_str(&shift(depth, indent));
            depth += 1;
        } else if piece.contains('}') {
            depth = depth.saturating_sub(1);
            out.push_str(&shift(depth, indent));
        } else {
            out.push_str(&shift(depth, indent));
        }
        out.push_str(piece);
    }

    out.trim_start_matches('\n').to_string()
}

/// Minify CSS. Comments are dropped unless `preserve_comments`.
pub fn minify_css(text: &str, preserve_comments: bool) -> String {
    let stripped = if preserve_comments {
        text.to_string()
    } else {
        comment().replace_all(text, "").into_owned()
    };
    let collapsed = whitespace().replace_all(&stripped, " ");
    space_after_delimiter()
        .replace_all(&collapsed, "$1")
        .trim()
        .to_string()
}
