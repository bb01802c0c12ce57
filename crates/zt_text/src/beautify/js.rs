//! JavaScript layout.
//!
//! Both directions work on a token stream, so string, template and regex
//! literals pass through unchanged. Line breaks are kept wherever dropping
//! them could change how automatic semicolon insertion reads the code.

use crate::error::{TextError, TextResult};

const PUNCTUATORS: &[&str] = &[
    ">>>=", "...", "===", "!==", "**=", "<<=", ">>=", ">>>", "&&=", "||=", "??=", "=>", "==",
    "!=", "<=", ">=", "&&", "||", "??", "?.", "++", "--", "+=", "-=", "*=", "/=", "%=", "&=",
    "|=", "^=", "**", "<<", ">>", "{", "}", "(", ")", "[", "]", ";", ",", "<", ">", "+", "-",
    "*", "/", "%", "&", "|", "^", "!", "~", "?", ":", "=", ".", "@", "#",
];

/// Keywords after which an expression, not an operator, follows.
const PREFIX_KEYWORDS: &[&str] = &[
    "return", "typeof", "instanceof", "in", "of", "new", "delete", "void", "throw", "case", "do",
    "else", "yield", "await",
];

/// Keywords whose parenthesised head gets a space: `if (`.
const CONTROL_KEYWORDS: &[&str] = &["if", "for", "while", "switch", "catch", "with"];

/// Keywords whose parenthesised head is followed by a statement, so a
/// `/` after the closing `)` starts a regex.
const HEAD_KEYWORDS: &[&str] = &["if", "for", "while", "with"];

/// A line break after these ends the statement.
const RESTRICTED_KEYWORDS: &[&str] = &["return", "break", "continue", "throw", "yield", "async"];

/// Words that continue the previous statement.
const CONTINUATION_KEYWORDS: &[&str] = &["else", "catch", "finally", "in", "of", "instanceof"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Word,
    Str,
    Template,
    Regex,
    Punct,
    LineComment,
    BlockComment,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Token {
    kind: Kind,
    text: String,
    /// The whitespace before this token contained a line break.
    newline_before: bool,
}

impl Token {
    fn is(&self, text: &str) -> bool {
        self.kind == Kind::Punct && self.text == text
    }

    fn is_comment(&self) -> bool {
        matches!(self.kind, Kind::LineComment | Kind::BlockComment)
    }

    fn is_word(&self, words: &[&str]) -> bool {
        self.kind == Kind::Word && words.contains(&self.text.as_str())
    }

    /// Whether the token can close an expression.
    fn ends_expression(&self) -> bool {
        match self.kind {
            Kind::Word => !self.is_word(PREFIX_KEYWORDS),
            Kind::Str | Kind::Template | Kind::Regex => true,
            Kind::Punct => matches!(self.text.as_str(), ")" | "]" | "}" | "++" | "--"),
            Kind::LineComment | Kind::BlockComment => false,
        }
    }
}

/// Whether a line break between `prev` and `next` must survive.
fn breaks_statement(prev: &Token, next: &Token) -> bool {
    if prev.is_word(RESTRICTED_KEYWORDS) || next.is("++") || next.is("--") {
        return true;
    }
    let starts_statement = match next.kind {
        Kind::Word => !next.is_word(CONTINUATION_KEYWORDS),
        Kind::Str => true,
        Kind::Punct => next.text == "{",
        _ => false,
    };
    prev.ends_expression() && starts_statement
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$' || !c.is_ascii()
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$' || !c.is_ascii()
}

struct Lexer<'a> {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    tokens: Vec<Token>,
    source: &'a str,
    /// The last significant token closed an `if (...)` style head.
    after_head: bool,
}

impl<'a> Lexer<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
            tokens: Vec::new(),
            source,
            after_head: false,
        }
    }

    fn error(&self, message: impl Into<String>) -> TextError {
        TextError::MalformedScript {
            message: message.into(),
            line: self.line,
        }
    }

    fn peek(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn slice(&self, start: usize) -> String {
        self.chars[start..self.pos].iter().collect()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.chars.get(self.pos).copied()?;
        self.pos += 1;
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    fn last_significant(&self) -> Option<&Token> {
        self.tokens.iter().rev().find(|t| !t.is_comment())
    }

    fn regex_allowed(&self) -> bool {
        self.after_head || self.last_significant().map_or(true, |t| !t.ends_expression())
    }

    fn tokenize(mut self) -> TextResult<Vec<Token>> {
        // Open bracket, its line, and whether it opened a statement head.
        let mut brackets: Vec<(char, usize, bool)> = Vec::new();
        let mut newline_before = false;

        while let Some(c) = self.peek(0) {
            if c.is_whitespace() {
                newline_before |= c == '\n' || c == '\r' || c == '\u{2028}' || c == '\u{2029}';
                self.advance();
                continue;
            }

            let start = self.pos;
            let kind = match c {
                '/' if self.peek(1) == Some('/') => {
                    while self.peek(0).map_or(false, |c| c != '\n') {
                        self.advance();
                    }
                    Kind::LineComment
                }
                '/' if self.peek(1) == Some('*') => {
                    self.pos += 2;
                    loop {
                        match self.advance() {
                            Some('*') if self.peek(0) == Some('/') => {
                                self.advance();
                                break;
                            }
                            Some(_) => {}
                            None => return Err(self.error("unterminated comment")),
                        }
                    }
                    Kind::BlockComment
                }
                '/' if self.regex_allowed() => {
                    self.scan_regex()?;
                    Kind::Regex
                }
                '\'' | '"' => {
                    self.scan_string(c)?;
                    Kind::Str
                }
                '`' => {
                    self.scan_template()?;
                    Kind::Template
                }
                c if c.is_ascii_digit() || (c == '.' && self.peek(1).map_or(false, |n| n.is_ascii_digit())) => {
                    self.scan_number();
                    Kind::Word
                }
                c if is_ident_start(c) || c == '\\' => {
                    while self.peek(0).map_or(false, |c| is_ident_char(c) || c == '\\') {
                        self.advance();
                    }
                    Kind::Word
                }
                _ => {
                    self.scan_punct()?;
                    Kind::Punct
                }
            };

            let text = self.slice(start);
            let mut closes_head = false;
            if kind == Kind::Punct {
                match text.as_str() {
                    "(" => {
                        let head = self
                            .last_significant()
                            .map_or(false, |t| t.is_word(HEAD_KEYWORDS));
                        brackets.push(('(', self.line, head));
                    }
                    "[" | "{" => brackets.push((text.chars().next().unwrap_or('['), self.line, false)),
                    ")" | "]" | "}" => {
                        let expected = match text.as_str() {
                            ")" => '(',
                            "]" => '[',
                            _ => '{',
                        };
                        match brackets.pop() {
                            Some((open, _, head)) if open == expected => closes_head = head,
                            _ => return Err(self.error(format!("unexpected '{}'", text))),
                        }
                    }
                    _ => {}
                }
            }

            if !matches!(kind, Kind::LineComment | Kind::BlockComment) {
                self.after_head = closes_head;
            }
            self.tokens.push(Token {
                kind,
                text,
                newline_before,
            });
            newline_before = false;
        }

        if let Some((open, line, _)) = brackets.pop() {
            return Err(TextError::MalformedScript {
                message: format!("unclosed '{}'", open),
                line,
            });
        }

        Ok(self.tokens)
    }

    fn scan_string(&mut self, quote: char) -> TextResult<()> {
        self.advance();
        loop {
            match self.advance() {
                Some('\\') => {
                    self.advance();
                }
                Some(c) if c == quote => return Ok(()),
                Some('\n') | None => return Err(self.error("unterminated string literal")),
                Some(_) => {}
            }
        }
    }

    fn scan_template(&mut self) -> TextResult<()> {
        self.advance();
        loop {
            match self.advance() {
                Some('\\') => {
                    self.advance();
                }
                Some('`') => return Ok(()),
                Some('$') if self.peek(0) == Some('{') => {
                    self.advance();
                    self.scan_substitution()?;
                }
                Some(_) => {}
                None => return Err(self.error("unterminated template literal")),
            }
        }
    }

    /// Skip the body of `${...}` up to its closing brace.
    fn scan_substitution(&mut self) -> TextResult<()> {
        let mut depth = 1usize;
        while let Some(c) = self.peek(0) {
            match c {
                '{' => {
                    depth += 1;
                    self.advance();
                }
                '}' => {
                    self.advance();
                    depth -= 1;
                    if depth == 0 {
                        return Ok(());
                    }
                }
                '\'' | '"' => self.scan_string(c)?,
                '`' => self.scan_template()?,
                _ => {
                    self.advance();
                }
            }
        }
        Err(self.error("unterminated template literal"))
    }

    fn scan_regex(&mut self) -> TextResult<()> {
        self.advance();
        let mut in_class = false;
        loop {
            match self.advance() {
                Some('\\') => {
                    self.advance();
                }
                Some('[') => in_class = true,
                Some(']') => in_class = false,
                Some('/') if !in_class => break,
                Some('\n') | None => return Err(self.error("unterminated regular expression")),
                Some(_) => {}
            }
        }
        while self.peek(0).map_or(false, is_ident_char) {
            self.advance();
        }
        Ok(())
    }

    fn scan_number(&mut self) {
        while let Some(c) = self.peek(0) {
            let exponent_sign = (c == '+' || c == '-')
                && self.pos > 0
                && matches!(self.chars[self.pos - 1], 'e' | 'E')
                && !self.slice_from_number_start().starts_with("0x");
            if c.is_ascii_alphanumeric() || c == '.' || c == '_' || exponent_sign {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn slice_from_number_start(&self) -> String {
        let start = self.chars[..self.pos]
            .iter()
            .rposition(|c| !(c.is_ascii_alphanumeric() || *c == '.' || *c == '_'))
            .map_or(0, |i| i + 1);
        self.chars[start..self.pos].iter().collect::<String>().to_ascii_lowercase()
    }

    fn scan_punct(&mut self) -> TextResult<()> {
        let rest: String = self.chars[self.pos..].iter().take(4).collect();
        let punct = PUNCTUATORS
            .iter()
            .find(|p| rest.starts_with(**p))
            .ok_or_else(|| self.error(format!("unexpected character '{}'", self.chars[self.pos])))?;

        // `a?.5:1` is a conditional, not optional chaining
        let len = if *punct == "?." && self.peek(2).map_or(false, |c| c.is_ascii_digit()) {
            1
        } else {
            punct.chars().count()
        };
        for _ in 0..len {
            self.advance();
        }
        Ok(())
    }
}

fn tokenize(source: &str) -> TextResult<Vec<Token>> {
    let lexer = Lexer::new(source);
    tracing::trace!("Tokenizing {} bytes of script", lexer.source.len());
    lexer.tokenize()
}

/// Line-oriented output buffer.
struct Writer {
    out: String,
    unit: String,
    indent: usize,
    line_start: bool,
}

impl Writer {
    fn new(indent: usize) -> Self {
        Self {
            out: String::new(),
            unit: " ".repeat(indent),
            indent: 0,
            line_start: true,
        }
    }

    fn push(&mut self, text: &str) {
        if self.line_start {
            for _ in 0..self.indent {
                self.out.push_str(&self.unit);
            }
            self.line_start = false;
        }
        self.out.push_str(text);
    }

    fn space(&mut self) {
        if !self.line_start && !self.out.ends_with(' ') {
            self.out.push(' ');
        }
    }

    fn newline(&mut self) {
        if !self.line_start {
            let trimmed = self.out.trim_end_matches(' ').len();
            self.out.truncate(trimmed);
            self.out.push('\n');
            self.line_start = true;
        }
    }

    fn finish(self) -> String {
        self.out.trim_end().to_string()
    }
}

fn space_before(prev: &Token, prev_unary: bool, cur: &Token, in_ternary: bool) -> bool {
    if prev_unary {
        return false;
    }
    if prev.kind == Kind::Punct && matches!(prev.text.as_str(), "(" | "[" | "." | "?." | "#" | "@" | "...") {
        return false;
    }
    if cur.kind != Kind::Punct {
        return true;
    }
    match cur.text.as_str() {
        "," | ";" | ")" | "]" | "." | "?." => false,
        "(" => !prev.ends_expression() || prev.is_word(CONTROL_KEYWORDS),
        "[" => !prev.ends_expression(),
        "++" | "--" => !prev.ends_expression(),
        ":" => in_ternary,
        _ => true,
    }
}

fn is_unary(prev: Option<&Token>, cur: &Token) -> bool {
    if cur.kind != Kind::Punct {
        return false;
    }
    match cur.text.as_str() {
        "!" | "~" => true,
        "+" | "-" | "++" | "--" => !prev.map_or(false, Token::ends_expression),
        _ => false,
    }
}

fn next_significant(tokens: &[Token], from: usize) -> Option<&Token> {
    tokens[from..].iter().find(|t| !t.is_comment())
}

/// Beautify JavaScript with `indent` spaces per block level.
pub fn beautify_js(source: &str, indent: usize) -> TextResult<String> {
    let tokens = tokenize(source)?;
    let mut w = Writer::new(indent);
    let mut brackets: Vec<&str> = Vec::new();
    let mut ternaries = 0usize;
    let mut prev: Option<&Token> = None;
    let mut prev_unary = false;
    let mut skip_next = false;

    for (i, tok) in tokens.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }

        match tok.kind {
            Kind::LineComment => {
                if tok.newline_before {
                    w.newline();
                } else {
                    w.space();
                }
                w.push(&tok.text);
                w.newline();
                continue;
            }
            Kind::BlockComment => {
                if tok.newline_before {
                    w.newline();
                } else {
                    w.space();
                }
                w.push(&tok.text);
                if tokens.get(i + 1).map_or(false, |t| t.newline_before) {
                    w.newline();
                }
                continue;
            }
            _ => {}
        }

        if tok.newline_before && prev.map_or(false, |p| breaks_statement(p, tok)) {
            w.newline();
        }

        if tok.is("{") {
            if prev.map_or(false, |p| !p.is("(") && !p.is("[")) {
                w.space();
            }
            if tokens.get(i + 1).map_or(false, |t| t.is("}")) {
                w.push("{}");
                skip_next = true;
                prev = tokens.get(i + 1);
                prev_unary = false;
                continue;
            }
            w.push("{");
            brackets.push("{");
            w.indent += 1;
            w.newline();
        } else if tok.is("}") {
            brackets.pop();
            w.indent = w.indent.saturating_sub(1);
            w.newline();
            w.push("}");
            let keeps_line = next_significant(&tokens, i + 1).map_or(false, |next| {
                matches!(next.text.as_str(), ";" | "," | ")" | "]" | ".")
                    || next.is_word(&["else", "catch", "finally"])
            });
            if !keeps_line {
                w.newline();
            }
        } else if tok.is(";") {
            w.push(";");
            if brackets.last() != Some(&"(") {
                w.newline();
            }
        } else {
            let in_ternary = ternaries > 0;
            if let Some(p) = prev {
                if space_before(p, prev_unary, tok, in_ternary) {
                    w.space();
                }
            }
            w.push(&tok.text);

            match tok.text.as_str() {
                "(" | "[" if tok.kind == Kind::Punct => brackets.push(if tok.text == "(" { "(" } else { "[" }),
                ")" | "]" if tok.kind == Kind::Punct => {
                    brackets.pop();
                }
                "?" if tok.kind == Kind::Punct => ternaries += 1,
                ":" if tok.kind == Kind::Punct && in_ternary => ternaries -= 1,
                _ => {}
            }
        }

        prev_unary = is_unary(prev, tok);
        prev = Some(tok);
    }

    Ok(w.finish())
}

/// Minify JavaScript: comments go, whitespace stays only where tokens would
/// otherwise merge or a line break ends a statement.
pub fn minify_js(source: &str) -> TextResult<String> {
    let tokens = tokenize(source)?;
    let mut out = String::with_capacity(source.len());
    let mut prev: Option<&Token> = None;
    let mut pending_newline = false;

    for tok in &tokens {
        if tok.is_comment() {
            pending_newline |= tok.newline_before
                || tok.kind == Kind::LineComment
                || tok.text.contains('\n');
            continue;
        }

        if let Some(p) = prev {
            let newline = pending_newline || tok.newline_before;
            if newline && breaks_statement(p, tok) {
                out.push('\n');
            } else if needs_space(&out, p, tok) {
                out.push(' ');
            }
        }

        out.push_str(&tok.text);
        prev = Some(tok);
        pending_newline = false;
    }

    Ok(out)
}

fn needs_space(out: &str, prev: &Token, cur: &Token) -> bool {
    let (Some(last), Some(first)) = (out.chars().last(), cur.text.chars().next()) else {
        return false;
    };
    (is_ident_char(last) && is_ident_char(first))
        || (last == '+' && first == '+')
        || (last == '-' && first == '-')
        || (last == '/' && first == '/')
        || (prev.kind == Kind::Word
            && prev.text.starts_with(|c: char| c.is_ascii_digit())
            && !prev.text.contains(['.', 'e', 'E', 'x', 'X'])
            && first == '.')
}
