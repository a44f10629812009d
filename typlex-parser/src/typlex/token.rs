//! Token definitions
//!
//!     A token is a classified, contiguous slice of the input. Tokens borrow their text from
//!     the source string and never own it, so a whole stream can be buffered cheaply.
//!
//!     Positions are byte offsets into the input `&str`. For every token
//!     `text == &source[start..start + len]`, and the spans of a complete stream tile the
//!     source with no gaps or overlaps.

use serde::Serialize;
use std::fmt;

/// Lexical class of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenType {
    /// Zero-length sentinel at position 0, always the first token.
    Begin,
    /// Zero-length sentinel at the input length, always the last token.
    TextEnd,
    Word,
    Whitespace,
    LineEnd,
    Symbol,
    CodeNumber,
    Escape,
}

impl TokenType {
    pub fn as_str(self) -> &'static str {
        match self {
            TokenType::Begin => "BEGIN",
            TokenType::TextEnd => "TEXT_END",
            TokenType::Word => "WORD",
            TokenType::Whitespace => "WHITESPACE",
            TokenType::LineEnd => "LINE_END",
            TokenType::Symbol => "SYMBOL",
            TokenType::CodeNumber => "CODE_NUMBER",
            TokenType::Escape => "ESCAPE",
        }
    }

    pub fn is_sentinel(self) -> bool {
        matches!(self, TokenType::Begin | TokenType::TextEnd)
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<'a> {
    pub kind: TokenType,
    pub start: usize,
    pub len: usize,
    pub text: &'a str,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenType, start: usize, text: &'a str) -> Self {
        Self {
            kind,
            start,
            len: text.len(),
            text,
        }
    }

    /// Byte offset just past the token.
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// The character of a SYMBOL token, `None` for every other kind.
    pub fn symbol(&self) -> Option<char> {
        if self.kind != TokenType::Symbol {
            return None;
        }
        self.text.chars().next()
    }

    pub fn is_symbol(&self, ch: char) -> bool {
        self.symbol() == Some(ch)
    }

    pub fn is(&self, kind: TokenType) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}, {}) {:?}", self.kind, self.start, self.len, self.text)
    }
}
