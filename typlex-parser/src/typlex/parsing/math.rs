//! Math mode, between a pair of `$`.

use super::frames::Frame;
use super::parser::{IdentStyle, Parser};
use crate::typlex::highlighting::{MarkerKind, ParsingListener};
use crate::typlex::token::TokenType;
use unicode_segmentation::UnicodeSegmentation;

fn is_math_operator(ch: char) -> bool {
    matches!(
        ch,
        '+' | '-' | '*' | '/' | '^' | '_' | '&' | '=' | '<' | '>' | '!' | '|' | '\'' | '~' | '\\'
    )
}

impl<'a, L: ParsingListener> Parser<'a, L> {
    pub(super) fn math_step(&mut self, idx: usize) -> usize {
        if let Some(next) = self.open_comment(idx) {
            return next;
        }
        if let Some(end) = self.identifier(idx, IdentStyle::Math) {
            return self.math_identifier(idx, end);
        }

        let token = self.tokens[idx];
        match token.kind {
            TokenType::Escape => self.emit_token(MarkerKind::Escape, idx),
            TokenType::CodeNumber if token.text.starts_with('-') => {
                self.emit(MarkerKind::MathOperator, token.start, token.start + 1)
            }
            TokenType::Symbol => return self.math_symbol(idx),
            _ => {}
        }
        idx + 1
    }

    fn math_symbol(&mut self, idx: usize) -> usize {
        let token = self.tokens[idx];
        match token.symbol() {
            Some('$') => {
                self.emit_token(MarkerKind::MathDelimiter, idx);
                self.stack.pop();
            }
            Some('"') => self.stack.push(Frame::Str { start: token.start }),
            Some('#') => return self.embed(idx).unwrap_or(idx + 1),
            Some(ch) if is_math_operator(ch) => self.emit_token(MarkerKind::MathOperator, idx),
            _ => {}
        }
        idx + 1
    }

    /// Single letters are plain math. Longer identifiers are variables, or functions when
    /// applied, and each `.segment` after them is marked on its own.
    fn math_identifier(&mut self, idx: usize, end: usize) -> usize {
        let ident = self.slice(idx, end);
        if ident.contains('_') {
            self.math_subscripted(self.tokens[idx].start, ident);
            return end;
        }
        if !is_multi_letter(ident) {
            return end;
        }

        let mut from = idx;
        let mut end = end;
        loop {
            let kind = if self.symbol_at(end, '(') {
                MarkerKind::FunctionName
            } else {
                MarkerKind::VariableName
            };
            self.emit_tokens(kind, from, end);

            if !self.symbol_at(end, '.') {
                return end;
            }
            match self.identifier(end + 1, IdentStyle::Math) {
                Some(next_end) => {
                    from = end + 1;
                    end = next_end;
                }
                None => return end,
            }
        }
    }

    /// A word such as `a_ij` read as letters joined by subscript operators.
    fn math_subscripted(&mut self, start: usize, ident: &str) {
        let mut offset = start;
        for part in ident.split('_') {
            if is_multi_letter(part) {
                self.emit(MarkerKind::VariableName, offset, offset + part.len());
            }
            offset += part.len();
            if offset < start + ident.len() {
                self.emit(MarkerKind::MathOperator, offset, offset + 1);
                offset += 1;
            }
        }
    }
}

fn is_multi_letter(ident: &str) -> bool {
    ident.graphemes(true).nth(1).is_some()
}
