//! XML and HTML layout.
//!
//! Pretty printing splits the input at tag boundaries and re-indents each
//! piece by tracking open and close tags. It does not build a tree, so it
//! tolerates fragments and unbalanced markup.

use std::sync::OnceLock;

use regex::Regex;

use super::{shift, MARK};

/// Elements that never take a closing tag in HTML.
pub(crate) const HTML_VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

fn between_tags() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r">\s*<").expect("valid regex"))
}

fn xml_comment() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)<![ \r\n\t]*--.*?--[ \r\n\t]*>").expect("valid regex"))
}

fn html_noise() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?m)(?:<!--|<--).*?(?:-->|--!>)|/\*(?s:.*?)\*/|^//.*|\s\B")
            .expect("valid regex")
    })
}

/// Pretty-print XML.
pub fn pretty_xml(text: &str, indent: usize) -> String {
    pretty_markup(text, indent, &[])
}

/// Pretty-print HTML, treating void elements as self-closing.
pub fn pretty_html(text: &str, indent: usize) -> String {
    pretty_markup(text, indent, HTML_VOID_ELEMENTS)
}

/// Drop comments unless `preserve_comments`, then whitespace between tags.
pub fn minify_xml(text: &str, preserve_comments: bool) -> String {
    let stripped = if preserve_comments {
        text.to_string()
    } else {
        xml_comment().replace_all(text, "").into_owned()
    };
    between_tags().replace_all(&stripped, "><").into_owned()
}

/// Drop comments and whitespace that is not at a word boundary.
pub fn minify_html(text: &str) -> String {
    html_noise().replace_all(text, "").into_owned()
}

/// Name of the element a tag opens or closes, if the piece starts with one.
fn tag_name(piece: &str) -> Option<&str> {
    let rest = piece.strip_prefix("</").or_else(|| piece.strip_prefix('<'))?;
    let end = rest
        .find(|c: char| !(c.is_alphanumeric() || matches!(c, '_' | ':' | '-' | '.' | ',')))
        .unwrap_or(rest.len());
    (end > 0).then(|| &rest[..end])
}

fn starts_element(piece: &str) -> bool {
    piece.starts_with('<') && piece[1..].starts_with(|c: char| c.is_alphanumeric() || c == '_')
}

fn contains_element(piece: &str) -> bool {
    piece
        .match_indices('<')
        .any(|(i, _)| piece[i + 1..].starts_with(|c: char| c.is_alphanumeric() || c == '_'))
}

fn has_namespace(piece: &str) -> bool {
    piece.contains("xmlns:") || piece.contains("xmlns=")
}

fn is_void(piece: &str, void_elements: &[&str]) -> bool {
    starts_element(piece)
        && tag_name(piece)
            .map(|name| void_elements.iter().any(|v| v.eq_ignore_ascii_case(name)))
            .unwrap_or(false)
}

fn pretty_markup(text: &str, indent: usize, void_elements: &[&str]) -> String {
    let joined = between_tags().replace_all(text, "><");
    let marked = joined
        .replace("><", &format!(">{}<", MARK))
        .replace("xmlns:", &format!("{}xmlns:", MARK))
        .replace("xmlns=", &format!("{}xmlns=", MARK));
    let pieces: Vec<&str> = marked.split(MARK).collect();

    let mut out = String::new();
    let mut depth = 0usize;
    let mut in_comment = false;
    let mut prev_opened = false;

    for (i, piece) in pieces.iter().copied().enumerate() {
        let mut opened = false;
        let prev = if i > 0 { pieces[i - 1] } else { "" };

        if piece.contains("<!") {
            // comment, CDATA or DOCTYPE
            out.push_str(&shift(depth, indent));
            out.push_str(piece);
            in_comment = !(piece.contains("-->") || piece.contains("]>") || piece.contains("!DOCTYPE"));
        } else if piece.contains("-->") || piece.contains("]>") {
            out.push_str(piece);
            in_comment = false;
        } else if prev_opened
            && piece.starts_with("</")
            && tag_name(prev).is_some()
            && tag_name(prev) == tag_name(piece)
        {
            // <elm></elm> stays on one line
            out.push_str(piece);
            if !in_comment {
                depth = depth.saturating_sub(1);
            }
        } else if contains_element(piece)
            && !piece.contains("</")
            && !piece.contains("/>")
            && !is_void(piece, void_elements)
        {
            if !in_comment {
                out.push_str(&shift(depth, indent));
                depth += 1;
                opened = true;
            }
            out.push_str(piece);
        } else if contains_element(piece) && piece.contains("</") {
            if !in_comment {
                out.push_str(&shift(depth, indent));
            }
            out.push_str(piece);
        } else if piece.contains("</") {
            let level = if has_namespace(piece) {
                let level = depth;
                depth = depth.saturating_sub(1);
                level
            } else {
                depth = depth.saturating_sub(1);
                depth
            };
            if !in_comment {
                out.push_str(&shift(level, indent));
            }
            out.push_str(piece);
        } else if piece.contains("/>") || is_void(piece, void_elements) {
            if !in_comment {
                out.push_str(&shift(depth, indent));
            }
            out.push_str(piece);
            if has_namespace(piece) {
                depth = depth.saturating_sub(1);
            }
        } else if piece.contains("<?") || has_namespace(piece) {
            out.push_str(&shift(depth, indent));
            out.push_str(piece);
        } else {
            out.push_str(piece);
        }

        if !in_comment {
            let trimmed = out.trim_end().len();
            out.truncate(trimmed);
        }
        prev_opened = opened;
    }

    out.strip_prefix('\n').map(str::to_string).unwrap_or(out)
}
