//! Testing utilities
//!
//!     Factories and helpers shared by the unit tests next to the code and the integration
//!     tests under `tests/`.
//!
//!     Marker assertions compare sorted marker lists. The parser reports markers in no
//!     particular order, so tests must never depend on emission order; [`highlight_text`]
//!     and [`assert_markers`] take care of sorting.

use crate::typlex::highlighting::{sort_markers, HighlightingMarker, MarkerKind};
use crate::typlex::lexing::Tokenizer;
use crate::typlex::parsing::highlight;
use crate::typlex::token::{Token, TokenType};
use std::fmt::Write;

/// All tokens of `text`, from `BEGIN` to `TEXT_END`.
pub fn tokenize_string(text: &str) -> Vec<Token<'_>> {
    Tokenizer::new(text).collect()
}

pub fn token(kind: TokenType, start: usize, text: &str) -> Token<'_> {
    Token::new(kind, start, text)
}

pub fn marker(kind: MarkerKind, start: usize, len: usize) -> HighlightingMarker {
    HighlightingMarker::new(kind, start, len)
}

/// Markers of `text`, sorted.
pub fn highlight_text(text: &str) -> Vec<HighlightingMarker> {
    highlight(text)
}

/// Assert that `text` produces exactly `expected`, in any order.
#[track_caller]
pub fn assert_markers(text: &str, expected: &[HighlightingMarker]) {
    let mut expected = expected.to_vec();
    sort_markers(&mut expected);
    assert_eq!(highlight_text(text), expected, "markers for {text:?}");
}

/// One line per marker: kind, span and the covered text. Used for snapshots.
pub fn render_markers(text: &str, markers: &[HighlightingMarker]) -> String {
    let mut out = String::new();
    for marker in markers {
        let covered = marker.text(text).unwrap_or("");
        let _ = writeln!(
            out,
            "{:<16} {:>3}..{:<3} {:?}",
            marker.kind.as_str(),
            marker.start,
            marker.end(),
            covered
        );
    }
    out
}
