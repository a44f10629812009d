//! Pull-based tokenizer
//!
//!     The tokenizer walks the input one extended grapheme cluster at a time, so combining
//!     marks stay attached to their base letter and `\r\n` is read as one line end. It is
//!     mode agnostic: the same text always tokenizes the same way, and the parser decides
//!     what a token means in its context.

use super::escapes::scan_escape;
use super::numbers::{is_radix_prefix, scan_code_number};
use crate::typlex::token::{Token, TokenType};
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Fresh,
    Scanning,
    Finished,
}

/// Produces the token stream of a text, `BEGIN` first and `TEXT_END` last.
///
/// Once `TEXT_END` has been produced, [`Tokenizer::at_end`] is true and further calls to
/// [`Tokenizer::next_token`] keep returning `TEXT_END`.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    text: &'a str,
    pos: usize,
    state: State,
}

impl<'a> Tokenizer<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: 0,
            state: State::Fresh,
        }
    }

    pub fn at_end(&self) -> bool {
        self.state == State::Finished
    }

    pub fn next_token(&mut self) -> Token<'a> {
        match self.state {
            State::Fresh => {
                self.state = State::Scanning;
                Token::new(TokenType::Begin, 0, "")
            }
            State::Finished => self.text_end(),
            State::Scanning if self.pos >= self.text.len() => {
                self.state = State::Finished;
                self.text_end()
            }
            State::Scanning => {
                let (kind, len) = classify(&self.text[self.pos..]);
                let token = Token::new(kind, self.pos, &self.text[self.pos..self.pos + len]);
                self.pos += len;
                token
            }
        }
    }

    fn text_end(&self) -> Token<'a> {
        Token::new(TokenType::TextEnd, self.text.len(), "")
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.at_end() {
            return None;
        }
        Some(self.next_token())
    }
}

/// Classify the token at the start of a non-empty `rest`, returning its kind and length.
fn classify(rest: &str) -> (TokenType, usize) {
    let Some(first) = rest.graphemes(true).next() else {
        return (TokenType::TextEnd, 0);
    };

    if is_line_end(first) {
        return (TokenType::LineEnd, first.len());
    }
    if first.starts_with(is_horizontal_space) {
        return (TokenType::Whitespace, scan_whitespace(rest));
    }
    if first == "\\" {
        return match scan_escape(rest) {
            Some(len) => (TokenType::Escape, len),
            None => (TokenType::Symbol, first.len()),
        };
    }
    if let Some(len) = scan_code_number(rest) {
        return (TokenType::CodeNumber, len);
    }
    if is_radix_prefix(first) {
        return (TokenType::Word, first.len());
    }
    if is_word_grapheme(first) {
        return (TokenType::Word, scan_word(rest));
    }
    (TokenType::Symbol, first.len())
}

fn is_line_end(grapheme: &str) -> bool {
    matches!(grapheme, "\n" | "\r\n" | "\r")
}

fn is_horizontal_space(ch: char) -> bool {
    ch.is_whitespace() && !matches!(ch, '\n' | '\r')
}

fn is_word_grapheme(grapheme: &str) -> bool {
    grapheme.starts_with(char::is_alphanumeric)
}

fn scan_whitespace(rest: &str) -> usize {
    rest.char_indices()
        .find(|(_, ch)| !is_horizontal_space(*ch))
        .map_or(rest.len(), |(idx, _)| idx)
}

/// Words run over alphanumeric graphemes. Underscores join two word parts but never end
/// a word.
fn scan_word(rest: &str) -> usize {
    let mut end = 0;
    loop {
        let tail = &rest[end..];
        match tail.graphemes(true).next() {
            Some(g) if is_word_grapheme(g) => end += g.len(),
            Some("_") => {
                let underscores = tail.bytes().take_while(|b| *b == b'_').count();
                match tail[underscores..].graphemes(true).next() {
                    Some(g) if is_word_grapheme(g) => end += underscores,
                    _ => break,
                }
            }
            _ => break,
        }
    }
    end
}
