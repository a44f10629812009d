//! Highlighting markers and listeners
//!
//!     The parser reports what it recognizes as flat [`HighlightingMarker`]s pushed into a
//!     [`ParsingListener`]. Markers may overlap and arrive in no particular order; consumers
//!     that need order sort by start position.
//!
//!     [`HighlightingListener`] simply collects everything. [`CoalescingListener`] is the
//!     variant meant for painters: it sorts, deduplicates and merges, and can cut the result
//!     into per-line spans.

pub mod coalescing;

pub use coalescing::{CoalescingListener, LineSpan};

use serde::Serialize;
use std::fmt;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MarkerKind {
    Comment,
    StringLiteral,
    MathDelimiter,
    MathOperator,
    VariableName,
    FunctionName,
    NumberLiteral,
    Keyword,
    Escape,
    Emphasis,
    StrongEmphasis,
    Heading,
    ListEntry,
    Term,
    Raw,
    Reference,
    Label,
}

impl MarkerKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MarkerKind::Comment => "COMMENT",
            MarkerKind::StringLiteral => "STRING_LITERAL",
            MarkerKind::MathDelimiter => "MATH_DELIMITER",
            MarkerKind::MathOperator => "MATH_OPERATOR",
            MarkerKind::VariableName => "VARIABLE_NAME",
            MarkerKind::FunctionName => "FUNCTION_NAME",
            MarkerKind::NumberLiteral => "NUMBER_LITERAL",
            MarkerKind::Keyword => "KEYWORD",
            MarkerKind::Escape => "ESCAPE",
            MarkerKind::Emphasis => "EMPHASIS",
            MarkerKind::StrongEmphasis => "STRONG_EMPHASIS",
            MarkerKind::Heading => "HEADING",
            MarkerKind::ListEntry => "LIST_ENTRY",
            MarkerKind::Term => "TERM",
            MarkerKind::Raw => "RAW",
            MarkerKind::Reference => "REFERENCE",
            MarkerKind::Label => "LABEL",
        }
    }
}

impl fmt::Display for MarkerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct HighlightingMarker {
    pub kind: MarkerKind,
    pub start: usize,
    pub len: usize,
}

impl HighlightingMarker {
    pub fn new(kind: MarkerKind, start: usize, len: usize) -> Self {
        Self { kind, start, len }
    }

    pub fn end(&self) -> usize {
        self.start + self.len
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    pub fn contains(&self, pos: usize) -> bool {
        self.range().contains(&pos)
    }

    /// The marked slice of `source`, or `None` if the marker does not fit it.
    pub fn text<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.range())
    }
}

impl fmt::Display for HighlightingMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}, {})", self.kind, self.start, self.len)
    }
}

/// Sink for the markers reported during a parse.
pub trait ParsingListener {
    fn on_marker(&mut self, marker: HighlightingMarker);
}

impl<L: ParsingListener + ?Sized> ParsingListener for &mut L {
    fn on_marker(&mut self, marker: HighlightingMarker) {
        (**self).on_marker(marker);
    }
}

impl ParsingListener for Vec<HighlightingMarker> {
    fn on_marker(&mut self, marker: HighlightingMarker) {
        self.push(marker);
    }
}

/// Adapts a closure into a [`ParsingListener`].
pub struct FnListener<F>(pub F);

impl<F: FnMut(HighlightingMarker)> ParsingListener for FnListener<F> {
    fn on_marker(&mut self, marker: HighlightingMarker) {
        (self.0)(marker);
    }
}

/// Collects markers in emission order.
#[derive(Debug, Clone, Default)]
pub struct HighlightingListener {
    markers: Vec<HighlightingMarker>,
}

impl HighlightingListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn markers(&self) -> &[HighlightingMarker] {
        &self.markers
    }

    /// Markers ordered by start position, longer spans first on ties.
    pub fn sorted(mut self) -> Vec<HighlightingMarker> {
        sort_markers(&mut self.markers);
        self.markers
    }
}

impl ParsingListener for HighlightingListener {
    fn on_marker(&mut self, marker: HighlightingMarker) {
        self.markers.push(marker);
    }
}

pub fn sort_markers(markers: &mut [HighlightingMarker]) {
    markers.sort_by(|a, b| {
        a.start
            .cmp(&b.start)
            .then(b.len.cmp(&a.len))
            .then(a.kind.cmp(&b.kind))
    });
}
