//! Code mode: `#` statements, `{...}` blocks and `(...)` argument lists.

use super::frames::Frame;
use super::parser::{IdentStyle, Parser};
use crate::typlex::highlighting::{MarkerKind, ParsingListener};
use crate::typlex::keywords::Keyword;
use crate::typlex::token::TokenType;

impl<'a, L: ParsingListener> Parser<'a, L> {
    pub(super) fn code_step(&mut self, idx: usize) -> usize {
        if let Some(next) = self.open_comment(idx) {
            return next;
        }

        let token = self.tokens[idx];
        match token.kind {
            TokenType::LineEnd if self.top() == Frame::CodeLine => {
                self.stack.pop();
                return idx;
            }
            TokenType::Whitespace | TokenType::LineEnd => return idx + 1,
            TokenType::Escape => {
                self.emit_token(MarkerKind::Escape, idx);
                return idx + 1;
            }
            _ => {}
        }

        if let Some(end) = self.identifier(idx, IdentStyle::Code) {
            return self.code_identifier(idx, end);
        }
        if let Some(end) = self.number_literal(idx) {
            self.emit_tokens(MarkerKind::NumberLiteral, idx, end);
            return end;
        }

        let Some(ch) = token.symbol() else {
            return idx + 1;
        };
        match ch {
            '"' => self.stack.push(Frame::Str { start: token.start }),
            '`' => return self.raw(idx),
            '$' => return self.open_math(idx),
            '<' => return self.label(idx).unwrap_or(idx + 1),
            '(' => self.stack.push(Frame::CodeParens),
            '{' => self.stack.push(Frame::CodeBlock),
            '[' => self.stack.push(Frame::ContentBlock { depth: 0 }),
            ')' | '}' | ']' | ';' => return self.close_code(idx, ch),
            _ => {}
        }
        idx + 1
    }

    /// Keywords are marked unless they follow a `.`, identifiers only when called. Plain
    /// variable and field names stay unmarked inside code.
    fn code_identifier(&mut self, idx: usize, end: usize) -> usize {
        let after_dot = idx > 0 && self.tokens[idx - 1].is_symbol('.');
        if !after_dot && Keyword::from_ident(self.slice(idx, end)).is_some() {
            self.emit_tokens(MarkerKind::Keyword, idx, end);
        } else if self.opens_call(end) {
            self.emit_tokens(MarkerKind::FunctionName, idx, end);
        }
        end
    }

    /// Handle a closer or `;`. A statement line ends at its `;` or at any closer it did not
    /// open, leaving that closer to the enclosing frame.
    fn close_code(&mut self, idx: usize, ch: char) -> usize {
        match (self.top(), ch) {
            (Frame::CodeParens, ')') | (Frame::CodeBlock, '}') | (Frame::CodeLine, ';') => {
                self.stack.pop();
                idx + 1
            }
            (Frame::CodeLine, _) => {
                self.stack.pop();
                idx
            }
            _ => idx + 1,
        }
    }
}
