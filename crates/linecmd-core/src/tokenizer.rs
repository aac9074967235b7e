//! Quote and escape aware line tokenizer
//!
//! Splits one input line into owned tokens in a single left-to-right scan:
//!
//! - unquoted ASCII whitespace separates tokens and is never kept
//! - `'...'` and `"..."` group characters literally; both quote kinds behave the same
//! - a backslash (inside or outside quotes) escapes exactly one following character
//! - fragments with no whitespace between them fuse: `'a'b"c"` is the single token `abc`
//! - `""` is an explicit empty token, a blank line yields no tokens at all
//!
//! Malformed input never fails. An unterminated quote runs to the end of the
//! line and a trailing backslash is dropped; [`Lexer::lex`] reports which of
//! these happened through [`Termination`].

use std::str::Chars;

/// How a scan reached the end of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Every quote was closed and every escape had a character to escape.
    Clean,
    /// The line ended right after an unquoted backslash.
    DanglingEscape,
    /// The line ended inside a quoted region opened by the given character.
    UnterminatedQuote(char),
}

impl Termination {
    pub const fn is_clean(self) -> bool {
        matches!(self, Self::Clean)
    }
}

/// Tokens of one line plus how the scan ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexed {
    pub tokens: Vec<String>,
    pub termination: Termination,
}

/// Single-pass lexer over one line.
///
/// `current` is `None` while no token is being built. A started token may be
/// empty (`""`), which is why the buffer is optional rather than a possibly
/// empty `String`.
pub struct Lexer<'a> {
    chars: Chars<'a>,
    tokens: Vec<String>,
    current: Option<String>,
    termination: Termination,
}

impl<'a> Lexer<'a> {
    fn new(line: &'a str) -> Self {
        Self {
            chars: line.chars(),
            tokens: Vec::new(),
            current: None,
            termination: Termination::Clean,
        }
    }

    /// Tokenize `line`, keeping the termination status.
    pub fn lex(line: &'a str) -> Lexed {
        let mut lexer = Self::new(line);
        lexer.scan();
        lexer.finish()
    }

    fn scan(&mut self) {
        while let Some(c) = self.chars.next() {
            match c {
                c if is_separator(c) => self.end_token(),
                '\\' => match self.chars.next() {
                    Some(escaped) => self.token().push(escaped),
                    None => self.termination = Termination::DanglingEscape,
                },
                '\'' | '"' => self.quoted(c),
                other => self.token().push(other),
            }
        }
    }

    // Reads up to the matching `quote`. The opening quote has already been consumed.
    fn quoted(&mut self, quote: char) {
        // Opening a quote starts a token even if nothing ends up inside it.
        let mut fragment = self.current.take().unwrap_or_default();

        let closed = loop {
            match self.chars.next() {
                None => break false,
                Some(c) if c == quote => break true,
                Some('\\') => match self.chars.next() {
                    Some(escaped) => fragment.push(escaped),
                    None => break false,
                },
                Some(c) => fragment.push(c),
            }
        };

        if !closed {
            self.termination = Termination::UnterminatedQuote(quote);
        }
        self.current = Some(fragment);
    }

    fn token(&mut self) -> &mut String {
        self.current.get_or_insert_with(String::new)
    }

    fn end_token(&mut self) {
        if let Some(token) = self.current.take() {
            self.tokens.push(token);
        }
    }

    fn finish(mut self) -> Lexed {
        self.end_token();
        Lexed {
            tokens: self.tokens,
            termination: self.termination,
        }
    }
}

/// Tokenize `line`. Never fails; see the module docs for the rules.
pub fn tokenize(line: &str) -> Vec<String> {
    Lexer::lex(line).tokens
}

const fn is_separator(c: char) -> bool {
    c.is_ascii_whitespace()
}
