//! SQL layout.
//!
//! Clause keywords start new lines and boolean connectives are indented.
//! Quoted literals are carried through untouched.

use std::sync::OnceLock;

use regex::{NoExpand, Regex};

use super::{shift, MARK};

/// Keyword rewrites applied in order. `{M}` is a line break, `{T}` one
/// indent step.
const RULES: &[(&str, &str)] = &[
    (r"(?i) AND ", "{M}{T}{T}AND "),
    (r"(?i) BETWEEN ", "{M}{T}BETWEEN "),
    (r"(?i) CASE ", "{M}{T}CASE "),
    (r"(?i) ELSE ", "{M}{T}ELSE "),
    (r"(?i) END ", "{M}{T}END "),
    (r"(?i) FROM ", "{M}FROM "),
    (r"(?i) GROUP\s+BY ", "{M}GROUP BY "),
    (r"(?i) HAVING ", "{M}HAVING "),
    (r"(?i) IN ", " IN "),
    (r"(?i) JOIN ", "{M}JOIN "),
    (r"(?i) CROSS~::~+JOIN ", "{M}CROSS JOIN "),
    (r"(?i) INNER~::~+JOIN ", "{M}INNER JOIN "),
    (r"(?i) LEFT~::~+JOIN ", "{M}LEFT JOIN "),
    (r"(?i) RIGHT~::~+JOIN ", "{M}RIGHT JOIN "),
    (r"(?i) FULL~::~+JOIN ", "{M}FULL JOIN "),
    (r"(?i) ON ", "{M}{T}ON "),
    (r"(?i) OR ", "{M}{T}{T}OR "),
    (r"(?i) ORDER\s+BY ", "{M}ORDER BY "),
    (r"(?i) OVER ", "{M}{T}OVER "),
    (r"(?i)\(\s*SELECT ", "{M}(SELECT "),
    (r"(?i)\)\s*SELECT ", "){M}SELECT "),
    (r"(?i) THEN ", " THEN{M}{T}"),
    (r"(?i) UNION ", "{M}UNION{M}"),
    (r"(?i) USING ", "{M}USING "),
    (r"(?i) WHEN ", "{M}{T}WHEN "),
    (r"(?i) WHERE ", "{M}WHERE "),
    (r"(?i) WITH ", "{M}WITH "),
    (r"(?i) ALL ", " ALL "),
    (r"(?i) AS ", " AS "),
    (r"(?i) ASC ", " ASC "),
    (r"(?i) DESC ", " DESC "),
    (r"(?i) DISTINCT ", " DISTINCT "),
    (r"(?i) EXISTS ", " EXISTS "),
    (r"(?i) NOT ", " NOT "),
    (r"(?i) NULL ", " NULL "),
    (r"(?i) LIKE ", " LIKE "),
    (r"(?i)\s*SELECT ", "SELECT "),
    (r"(?:~::~)+", "{M}"),
];

fn compiled_rules() -> &'static [(Regex, &'static str)] {
    static RULES_RE: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    RULES_RE.get_or_init(|| {
        RULES
            .iter()
            .map(|(pattern, replacement)| (Regex::new(pattern).expect("valid regex"), *replacement))
            .collect()
    })
}

fn whitespace() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("valid regex"))
}

fn space_before_open() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+\(").expect("valid regex"))
}

fn space_before_close() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+\)").expect("valid regex"))
}

fn sub_select() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\(\s*SELECT").expect("valid regex"))
}

#[derive(Debug, PartialEq, Eq)]
enum Piece<'a> {
    Code(&'a str),
    Literal(&'a str),
}

/// Split at single- and double-quoted literals. An unterminated literal runs
/// to the end of the input.
fn split_literals(text: &str) -> Vec<Piece<'_>> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for (i, c) in text.char_indices() {
        match quote {
            Some(q) => {
                if escaped {
                    escaped = false;
                } else if c == '\\' {
                    escaped = true;
                } else if c == q {
                    pieces.push(Piece::Literal(&text[start..i + 1]));
                    start = i + 1;
                    quote = None;
                }
            }
            None if c == '\'' || c == '"' => {
                if start < i {
                    pieces.push(Piece::Code(&text[start..i]));
                }
                start = i;
                quote = Some(c);
            }
            None => {}
        }
    }

    if start < text.len() {
        let rest = &text[start..];
        pieces.push(if quote.is_some() {
            Piece::Literal(rest)
        } else {
            Piece::Code(rest)
        });
    }
    pieces
}

fn split_clauses(code: &str, tab: &str) -> Vec<String> {
    let mut text = whitespace().replace_all(code, " ").into_owned();
    for (regex, template) in compiled_rules() {
        let replacement = template.replace("{M}", MARK).replace("{T}", tab);
        text = regex.replace_all(&text, NoExpand(&replacement)).into_owned();
    }
    text.split(MARK).map(str::to_string).collect()
}

/// Put a blank line after every `;` outside a quoted literal.
fn break_statements(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for c in text.chars() {
        out.push(c);
        match quote {
            Some(_) if escaped => escaped = false,
            Some(_) if c == '\\' => escaped = true,
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None if c == '\'' || c == '"' => quote = Some(c),
            None if c == ';' => out.push_str("\n\n"),
            None => {}
        }
    }
    out
}

fn paren_balance(text: &str) -> i64 {
    text.chars().fold(0, |acc, c| match c {
        '(' => acc + 1,
        ')' => acc - 1,
        _ => acc,
    })
}

/// Pretty-print SQL.
pub fn pretty_sql(text: &str, indent: usize) -> String {
    let tab = " ".repeat(indent);
    let mut pieces: Vec<(bool, String)> = Vec::new();
    for piece in split_literals(text) {
        match piece {
            Piece::Code(code) => pieces.extend(split_clauses(code, &tab).into_iter().map(|c| (false, c))),
            Piece::Literal(literal) => pieces.push((true, literal.to_string())),
        }
    }

    let mut out = String::new();
    let mut depth = 0usize;
    let mut parens = 0i64;

    for (is_literal, mut piece) in pieces {
        // Literals stay on the current line but still close a finished
        // sub-select. Parentheses inside them are not counted.
        if is_literal {
            if parens < 1 && depth > 0 {
                depth -= 1;
            }
            out.push_str(&piece);
            continue;
        }
        if piece.trim().is_empty() {
            continue;
        }

        parens += paren_balance(&piece);
        if piece.contains("SELECT") {
            piece = piece.replace(',', &format!(",\n{}{}", tab, tab));
        }

        if sub_select().is_match(&piece) {
            depth += 1;
            out.push_str(&shift(depth, indent));
            out.push_str(&piece);
        } else {
            out.push_str(&shift(depth, indent));
            out.push_str(&piece);
            if parens < 1 && depth > 0 {
                depth -= 1;
            }
        }
    }

    break_statements(out.trim_start_matches('\n'))
        .trim_end()
        .to_string()
}

/// Minify SQL: collapse whitespace and drop the space before the first
/// opening and first closing parenthesis.
pub fn minify_sql(text: &str) -> String {
    let collapsed = whitespace().replace_all(text, " ");
    let open = space_before_open().replace(&collapsed, "(");
    space_before_close().replace(&open, ")").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pretty_select() {
        let sql = "select a, b from users where x = 1 and y = 'a;b' order by a";
        let expected = "\
SELECT a,
    b
FROM users
WHERE x = 1
    AND y = 'a;b'
ORDER BY a";
        assert_eq!(pretty_sql(sql, 2), expected);
    }

    #[test]
    fn test_literal_untouched() {
        let sql = "select * from t where name = 'from  where , and'";
        let pretty = pretty_sql(sql, 2);
        assert!(pretty.ends_with("WHERE name = 'from  where , and'"));
    }

    #[test]
    fn test_joins() {
        let sql = "select * from a left join b on a.id = b.id";
        assert_eq!(pretty_sql(sql, 2), "SELECT *\nFROM a\nLEFT JOIN b\n  ON a.id = b.id");
    }

    #[test]
    fn test_literal_closes_sub_select() {
        let sql = "select a from t where (select count(*) from (select a from u)) = 'y' order by a";
        let expected = concat!(
            "SELECT a\n",
            "FROM t\n",
            "WHERE \n",
            "  (SELECT count(*)\n",
            "  FROM \n",
            "    (SELECT a\n",
            "    FROM u)) = 'y'\n",
            "ORDER BY a",
        );
        assert_eq!(pretty_sql(sql, 2), expected);

        let pretty = pretty_sql("select a from t where b = '(' and c = 1", 2);
        assert_eq!(pretty, "SELECT a\nFROM t\nWHERE b = '('\n    AND c = 1");
    }

    #[test]
    fn test_statements_separated() {
        let sql = "select 1; select 2;";
        assert_eq!(pretty_sql(sql, 2), "SELECT 1;\n\nSELECT 2;");
    }

    #[test]
    fn test_split_literals() {
        assert_eq!(
            split_literals(r#"a = 'x\'y' or b = "z""#),
            vec![
                Piece::Code("a = "),
                Piece::Literal(r"'x\'y'"),
                Piece::Code(" or b = "),
                Piece::Literal("\"z\""),
            ]
        );
    }

    #[test]
    fn test_minify_sql() {
        let sql = "SELECT count (*)\nFROM t\nWHERE id IN (1, 2 )";
        assert_eq!(minify_sql(sql), "SELECT count(*) FROM t WHERE id IN (1, 2)");
    }
}
