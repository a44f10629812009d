use super::frames::Frame;
use crate::typlex::highlighting::{HighlightingMarker, MarkerKind, ParsingListener};
use crate::typlex::keywords::Keyword;
use crate::typlex::lexing::Tokenizer;
use crate::typlex::token::{Token, TokenType};
use log::{debug, trace};

/// Identifier flavours. Code identifiers may contain `_` and `-` between word parts, math
/// identifiers are plain letter runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum IdentStyle {
    Code,
    Math,
}

/// Single-use highlighting parser.
///
/// [`Parser::parse`] consumes the parser, reports markers to the listener, and hands the
/// listener back.
pub struct Parser<'a, L> {
    pub(super) text: &'a str,
    pub(super) tokens: Vec<Token<'a>>,
    pub(super) stack: Vec<Frame>,
    pub(super) listener: L,
    emitted: usize,
    deepest: usize,
}

impl<'a, L: ParsingListener> Parser<'a, L> {
    pub fn new(text: &'a str, listener: L) -> Self {
        Self {
            text,
            tokens: Vec::new(),
            stack: Vec::new(),
            listener,
            emitted: 0,
            deepest: 0,
        }
    }

    pub fn parse(mut self) -> L {
        self.tokens = Tokenizer::new(self.text).collect();
        self.stack.push(Frame::Markup);

        let mut idx = 0;
        while let Some(kind) = self.tokens.get(idx).map(|t| t.kind) {
            if kind == TokenType::TextEnd {
                break;
            }
            idx = self.step(idx);
            self.deepest = self.deepest.max(self.stack.len());
        }
        self.unwind(self.text.len());

        debug!(
            "parsed {} bytes: {} tokens, {} markers, stack depth {}",
            self.text.len(),
            self.tokens.len(),
            self.emitted,
            self.deepest
        );
        self.listener
    }

    /// Handle the token at `idx` under the innermost frame and return the index to continue
    /// from. A frame that ends without consuming its terminator returns `idx` unchanged
    /// after popping itself, so the parent sees the same token.
    fn step(&mut self, idx: usize) -> usize {
        if self.tokens[idx].kind == TokenType::Begin {
            return idx + 1;
        }
        match self.top() {
            Frame::LineComment { .. } => self.line_comment_step(idx),
            Frame::BlockComment { .. } => self.block_comment_step(idx),
            Frame::Str { .. } => self.string_step(idx),
            Frame::Math => self.math_step(idx),
            Frame::Embedded => self.embedded_step(idx),
            frame if frame.is_code() => self.code_step(idx),
            _ => self.markup_step(idx),
        }
    }

    fn unwind(&mut self, end: usize) {
        while self.stack.len() > 1 {
            trace!("closing {:?} at end of text", self.top());
            self.pop_frame(end);
        }
    }

    pub(super) fn top(&self) -> Frame {
        self.stack.last().copied().unwrap_or(Frame::Markup)
    }

    /// Pop the innermost frame, reporting its span up to `end`. The root frame stays.
    pub(super) fn pop_frame(&mut self, end: usize) {
        if self.stack.len() <= 1 {
            return;
        }
        if let Some((kind, start)) = self.stack.pop().and_then(Frame::marker) {
            self.emit(kind, start, end);
        }
    }

    pub(super) fn emit(&mut self, kind: MarkerKind, start: usize, end: usize) {
        if end <= start {
            return;
        }
        self.emitted += 1;
        self.listener
            .on_marker(HighlightingMarker::new(kind, start, end - start));
    }

    pub(super) fn emit_token(&mut self, kind: MarkerKind, idx: usize) {
        let token = self.tokens[idx];
        self.emit(kind, token.start, token.end());
    }

    /// Report the tokens `from..to` as one span.
    pub(super) fn emit_tokens(&mut self, kind: MarkerKind, from: usize, to: usize) {
        let start = self.tokens[from].start;
        let end = self.tokens[to - 1].end();
        self.emit(kind, start, end);
    }

    pub(super) fn symbol_at(&self, idx: usize, ch: char) -> bool {
        self.tokens.get(idx).is_some_and(|t| t.is_symbol(ch))
    }

    pub(super) fn kind_at(&self, idx: usize, kind: TokenType) -> bool {
        self.tokens.get(idx).is_some_and(|t| t.is(kind))
    }

    pub(super) fn slice(&self, from: usize, to: usize) -> &'a str {
        &self.text[self.tokens[from].start..self.tokens[to - 1].end()]
    }

    // Comments

    /// Open a `//` or `/*` comment at `idx`.
    pub(super) fn open_comment(&mut self, idx: usize) -> Option<usize> {
        let token = self.tokens[idx];
        if !token.is_symbol('/') {
            return None;
        }
        let frame = match self.tokens.get(idx + 1)?.symbol()? {
            '/' => Frame::LineComment { start: token.start },
            '*' => Frame::BlockComment { start: token.start },
            _ => return None,
        };
        self.stack.push(frame);
        Some(idx + 2)
    }

    /// The comment covers its line end, but the enclosing frame still sees it, so a
    /// statement, heading or paragraph ends there as it would without the comment.
    fn line_comment_step(&mut self, idx: usize) -> usize {
        let token = self.tokens[idx];
        if token.kind == TokenType::LineEnd {
            self.pop_frame(token.end());
            return idx;
        }
        idx + 1
    }

    fn block_comment_step(&mut self, idx: usize) -> usize {
        if let Some(next) = self.open_comment(idx) {
            return next;
        }
        if self.tokens[idx].is_symbol('*') && self.symbol_at(idx + 1, '/') {
            self.pop_frame(self.tokens[idx + 1].end());
            return idx + 2;
        }
        idx + 1
    }

    // Strings

    fn string_step(&mut self, idx: usize) -> usize {
        let token = self.tokens[idx];
        if token.kind == TokenType::Escape {
            self.emit_token(MarkerKind::Escape, idx);
        } else if token.is_symbol('"') {
            self.pop_frame(token.end());
        }
        idx + 1
    }

    // Raw

    /// Report the raw span opened by the backtick run at `idx` and skip past it.
    ///
    /// The span closes at the first run of as many consecutive backticks as opened it. An
    /// unclosed double backtick is an empty raw span on its own, any other unclosed fence
    /// runs to the end of the text.
    pub(super) fn raw(&mut self, idx: usize) -> usize {
        let fence = self.tokens[idx..]
            .iter()
            .take_while(|t| t.is_symbol('`'))
            .count();
        let open_end = idx + fence;
        let close_end = match self.closing_fence(open_end, fence) {
            Some(end) => end,
            None if fence == 2 => open_end,
            None => self.tokens.len() - 1,
        };
        self.emit_tokens(MarkerKind::Raw, idx, close_end);
        close_end
    }

    fn closing_fence(&self, from: usize, fence: usize) -> Option<usize> {
        let mut run = 0;
        for (idx, token) in self.tokens.iter().enumerate().skip(from) {
            if token.is_symbol('`') {
                run += 1;
                if run == fence {
                    return Some(idx + 1);
                }
            } else {
                run = 0;
            }
        }
        None
    }

    // Identifiers, numbers, labels

    /// End index of the identifier starting at `idx`, if one starts there.
    pub(super) fn identifier(&self, idx: usize, style: IdentStyle) -> Option<usize> {
        let first = self.tokens.get(idx)?;
        let starts = match first.kind {
            TokenType::Word => true,
            TokenType::CodeNumber => first.text.starts_with(|c: char| c.is_ascii_alphabetic()),
            TokenType::Symbol => style == IdentStyle::Code && first.is_symbol('_'),
            _ => false,
        };
        if !starts {
            return None;
        }

        let mut end = idx + 1;
        while let Some(token) = self.tokens.get(end) {
            let continues = match token.kind {
                TokenType::Word => true,
                TokenType::CodeNumber => token.text.bytes().all(|b| b.is_ascii_alphanumeric()),
                TokenType::Symbol if style == IdentStyle::Code => match token.symbol() {
                    Some('_') => true,
                    Some('-') => self.tokens.get(end + 1).is_some_and(|next| {
                        next.kind == TokenType::Word || next.is_symbol('_')
                    }),
                    _ => false,
                },
                _ => false,
            };
            if !continues {
                break;
            }
            end += 1;
        }
        Some(end)
    }

    /// Whether the token at `idx` makes the preceding identifier a call.
    pub(super) fn opens_call(&self, idx: usize) -> bool {
        self.symbol_at(idx, '(') || self.symbol_at(idx, '[')
    }

    /// End index of a numeric literal with its optional unit (`1cm`, `40em`, `12%`).
    pub(super) fn number_literal(&self, idx: usize) -> Option<usize> {
        let token = self.tokens.get(idx)?;
        let numeric = token.text.starts_with(|c: char| c.is_ascii_digit() || c == '-');
        if token.kind != TokenType::CodeNumber || !numeric {
            return None;
        }
        let mut end = idx + 1;
        if self.symbol_at(end, '%') {
            end += 1;
        } else {
            while self.kind_at(end, TokenType::Word) {
                end += 1;
            }
        }
        Some(end)
    }

    fn label_run(&self, from: usize) -> Option<usize> {
        let len = self
            .tokens
            .get(from..)?
            .iter()
            .take_while(|t| is_label_material(t))
            .count();
        (len > 0).then_some(from + len)
    }

    /// `<name>` at `idx`.
    pub(super) fn label(&mut self, idx: usize) -> Option<usize> {
        let end = self.label_run(idx + 1)?;
        if !self.symbol_at(end, '>') {
            return None;
        }
        self.emit_tokens(MarkerKind::Label, idx, end + 1);
        Some(end + 1)
    }

    /// `@name` at `idx`. Trailing `.` and `:` are punctuation, not part of the name.
    pub(super) fn reference(&mut self, idx: usize) -> Option<usize> {
        let mut end = self.label_run(idx + 1)?;
        while end > idx + 1 && matches!(self.tokens[end - 1].symbol(), Some('.' | ':')) {
            end -= 1;
        }
        if end == idx + 1 {
            return None;
        }
        self.emit_tokens(MarkerKind::Reference, idx, end);
        Some(end)
    }

    // Embedded expressions

    /// A `#` expression at `idx`, from markup or math. Returns `None` when the `#` is plain
    /// text.
    pub(super) fn embed(&mut self, idx: usize) -> Option<usize> {
        let next = idx + 1;

        if let Some(end) = self.identifier(next, IdentStyle::Code) {
            let kind = match Keyword::from_ident(self.slice(next, end)) {
                Some(keyword) if keyword.opens_statement() => {
                    self.stack.push(Frame::CodeLine);
                    MarkerKind::Keyword
                }
                Some(_) => {
                    self.stack.push(Frame::Embedded);
                    MarkerKind::Keyword
                }
                None if self.opens_call(end) => {
                    self.stack.push(Frame::Embedded);
                    MarkerKind::FunctionName
                }
                None => {
                    self.stack.push(Frame::Embedded);
                    MarkerKind::VariableName
                }
            };
            self.emit_tokens(kind, idx, end);
            return Some(end);
        }

        if !self.tokens.get(next)?.text.starts_with('-') {
            if let Some(end) = self.number_literal(next) {
                self.stack.push(Frame::Embedded);
                self.emit_tokens(MarkerKind::NumberLiteral, idx, end);
                return Some(end);
            }
        }

        let opened = match self.tokens[next].symbol()? {
            '"' => Frame::Str {
                start: self.tokens[idx].start,
            },
            '(' => Frame::CodeParens,
            '{' => Frame::CodeBlock,
            '[' => Frame::ContentBlock { depth: 0 },
            _ => return None,
        };
        self.stack.push(Frame::Embedded);
        self.stack.push(opened);
        Some(next + 1)
    }

    fn embedded_step(&mut self, idx: usize) -> usize {
        match self.tokens[idx].symbol() {
            Some('(') => {
                self.stack.push(Frame::CodeParens);
                return idx + 1;
            }
            Some('[') => {
                self.stack.push(Frame::ContentBlock { depth: 0 });
                return idx + 1;
            }
            Some('.') => {
                if let Some(end) = self.identifier(idx + 1, IdentStyle::Code) {
                    let kind = if self.opens_call(end) {
                        MarkerKind::FunctionName
                    } else {
                        MarkerKind::VariableName
                    };
                    self.emit_tokens(kind, idx + 1, end);
                    return end;
                }
            }
            _ => {}
        }
        self.stack.pop();
        idx
    }
}

fn is_label_material(token: &Token<'_>) -> bool {
    match token.kind {
        TokenType::Word => true,
        TokenType::CodeNumber => !token.text.contains('+'),
        TokenType::Symbol => matches!(token.symbol(), Some('_' | '-' | ':' | '.')),
        _ => false,
    }
}
