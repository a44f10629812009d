use crate::typlex::highlighting::MarkerKind;

/// One entry of the parser's mode stack.
///
/// Frames that report a span remember where it started; the span ends wherever the frame
/// is popped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Frame {
    /// Document level markup. Always at the bottom of the stack.
    Markup,
    /// Markup inside `[...]`, counting plain brackets opened within it.
    ContentBlock { depth: usize },
    Heading { start: usize },
    Strong { start: usize, line_ended: bool },
    Emphasis { start: usize, line_ended: bool },
    Term { start: usize },
    LineComment { start: usize },
    BlockComment { start: usize },
    Str { start: usize },
    Math,
    /// A `#` expression, extended by `.field`, `(args)` and `[content]` suffixes.
    Embedded,
    /// A `#` statement, running to the end of the line.
    CodeLine,
    CodeBlock,
    CodeParens,
}

impl Frame {
    pub(super) fn inline(kind: MarkerKind, start: usize) -> Self {
        match kind {
            MarkerKind::StrongEmphasis => Frame::Strong {
                start,
                line_ended: false,
            },
            _ => Frame::Emphasis {
                start,
                line_ended: false,
            },
        }
    }

    pub(super) fn marker(self) -> Option<(MarkerKind, usize)> {
        match self {
            Frame::Heading { start } => Some((MarkerKind::Heading, start)),
            Frame::Strong { start, .. } => Some((MarkerKind::StrongEmphasis, start)),
            Frame::Emphasis { start, .. } => Some((MarkerKind::Emphasis, start)),
            Frame::Term { start } => Some((MarkerKind::Term, start)),
            Frame::LineComment { start } | Frame::BlockComment { start } => {
                Some((MarkerKind::Comment, start))
            }
            Frame::Str { start } => Some((MarkerKind::StringLiteral, start)),
            _ => None,
        }
    }

    pub(super) fn marker_kind(self) -> Option<MarkerKind> {
        self.marker().map(|(kind, _)| kind)
    }

    /// Frames that a paragraph break closes.
    pub(super) fn is_paragraph_scoped(self) -> bool {
        matches!(
            self,
            Frame::Heading { .. }
                | Frame::Strong { .. }
                | Frame::Emphasis { .. }
                | Frame::Term { .. }
        )
    }

    pub(super) fn is_code(self) -> bool {
        matches!(self, Frame::CodeLine | Frame::CodeBlock | Frame::CodeParens)
    }
}
