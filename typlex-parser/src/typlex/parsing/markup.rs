//! Markup mode: headings, lists, emphasis, raw spans, references and labels.

use super::frames::Frame;
use super::parser::Parser;
use crate::typlex::highlighting::{MarkerKind, ParsingListener};
use crate::typlex::token::TokenType;

impl<'a, L: ParsingListener> Parser<'a, L> {
    pub(super) fn markup_step(&mut self, idx: usize) -> usize {
        if let Some(next) = self.open_comment(idx) {
            return next;
        }

        let token = self.tokens[idx];
        match token.kind {
            TokenType::LineEnd => return self.markup_line_end(idx),
            TokenType::Whitespace => return idx + 1,
            _ => {}
        }
        self.clear_line_ended();

        if token.kind == TokenType::Escape {
            self.emit_token(MarkerKind::Escape, idx);
            return idx + 1;
        }

        if let Some(line_start) = self.line_start(idx) {
            if let Some(next) = self.heading(idx, line_start) {
                return next;
            }
            if let Some(next) = self.list_entry(idx, line_start) {
                return next;
            }
        }

        let Some(ch) = token.symbol() else {
            return idx + 1;
        };
        match ch {
            '*' if !self.inside_word(idx) => self.toggle(idx, MarkerKind::StrongEmphasis),
            '_' => self.toggle(idx, MarkerKind::Emphasis),
            '`' => self.raw(idx),
            '$' => self.open_math(idx),
            '#' => self.embed(idx).unwrap_or(idx + 1),
            '@' => self.reference(idx).unwrap_or(idx + 1),
            '<' => self.label(idx).unwrap_or(idx + 1),
            '[' => {
                if let Some(depth) = self.enclosing_content_block() {
                    *depth += 1;
                }
                idx + 1
            }
            ']' => self.close_bracket(idx),
            ':' if matches!(self.top(), Frame::Term { .. }) => {
                self.pop_frame(token.start);
                idx + 1
            }
            _ => idx + 1,
        }
    }

    fn markup_line_end(&mut self, idx: usize) -> usize {
        let token = self.tokens[idx];
        match self.top() {
            Frame::Heading { .. } => {
                self.pop_frame(token.end());
                idx + 1
            }
            Frame::Term { .. } => {
                self.pop_frame(token.start);
                idx
            }
            Frame::Strong {
                line_ended: true, ..
            }
            | Frame::Emphasis {
                line_ended: true, ..
            } => {
                while self.top().is_paragraph_scoped() {
                    self.pop_frame(token.end());
                }
                idx + 1
            }
            Frame::Strong { .. } | Frame::Emphasis { .. } => {
                self.set_line_ended(true);
                idx + 1
            }
            _ => idx + 1,
        }
    }

    fn clear_line_ended(&mut self) {
        self.set_line_ended(false);
    }

    fn set_line_ended(&mut self, value: bool) {
        if let Some(Frame::Strong { line_ended, .. } | Frame::Emphasis { line_ended, .. }) =
            self.stack.last_mut()
        {
            *line_ended = value;
        }
    }

    /// Start of the line-start token (`BEGIN` or `LINE_END`) before `idx`, if only
    /// whitespace separates the two.
    fn line_start(&self, idx: usize) -> Option<usize> {
        self.tokens[..idx]
            .iter()
            .rev()
            .find(|t| t.kind != TokenType::Whitespace)
            .filter(|t| matches!(t.kind, TokenType::LineEnd | TokenType::Begin))
            .map(|t| t.start)
    }

    fn heading(&mut self, idx: usize, line_start: usize) -> Option<usize> {
        let equals = self.tokens[idx..]
            .iter()
            .take_while(|t| t.is_symbol('='))
            .count();
        if equals == 0 || !self.kind_at(idx + equals, TokenType::Whitespace) {
            return None;
        }
        self.stack.push(Frame::Heading { start: line_start });
        Some(idx + equals + 1)
    }

    fn list_entry(&mut self, idx: usize, line_start: usize) -> Option<usize> {
        let ch = self.tokens[idx].symbol()?;
        if !matches!(ch, '-' | '+' | '/') || !self.kind_at(idx + 1, TokenType::Whitespace) {
            return None;
        }
        let end = self.tokens[idx + 1].end();
        self.emit(MarkerKind::ListEntry, line_start, end);
        if ch == '/' {
            self.stack.push(Frame::Term { start: end });
        }
        Some(idx + 2)
    }

    /// A `*` with words on both sides is part of the text.
    fn inside_word(&self, idx: usize) -> bool {
        idx > 0
            && self.tokens[idx - 1].kind == TokenType::Word
            && self.kind_at(idx + 1, TokenType::Word)
    }

    /// Close the nearest open span of `kind` in the current paragraph, along with anything
    /// opened inside it, or open a new one.
    fn toggle(&mut self, idx: usize, kind: MarkerKind) -> usize {
        let token = self.tokens[idx];
        let open = self
            .stack
            .iter()
            .rev()
            .take_while(|f| f.is_paragraph_scoped())
            .position(|f| f.marker_kind() == Some(kind));

        match open {
            Some(depth) => {
                for _ in 0..=depth {
                    self.pop_frame(token.end());
                }
            }
            None => self.stack.push(Frame::inline(kind, token.start)),
        }
        idx + 1
    }

    pub(super) fn open_math(&mut self, idx: usize) -> usize {
        self.emit_token(MarkerKind::MathDelimiter, idx);
        self.stack.push(Frame::Math);
        idx + 1
    }

    /// Bracket depth of the content block enclosing the current paragraph, if any.
    fn enclosing_content_block(&mut self) -> Option<&mut usize> {
        match self.stack.iter_mut().rev().find(|f| !f.is_paragraph_scoped())? {
            Frame::ContentBlock { depth } => Some(depth),
            _ => None,
        }
    }

    fn close_bracket(&mut self, idx: usize) -> usize {
        let token = self.tokens[idx];
        let Some(depth) = self.enclosing_content_block() else {
            return idx + 1;
        };
        if *depth > 0 {
            *depth -= 1;
            return idx + 1;
        }
        while self.top().is_paragraph_scoped() {
            self.pop_frame(token.start);
        }
        self.stack.pop();
        idx + 1
    }
}
