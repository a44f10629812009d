//! Coalescing listener for painters
//!
//!     A painter does not care how many markers of the same kind cover a character, only
//!     that one does. [`CoalescingListener::finish`] folds overlapping and touching markers of
//!     the same kind into one and returns the result in start order. Painters that work one
//!     line at a time use [`CoalescingListener::split_lines`].

use super::{sort_markers, HighlightingMarker, MarkerKind, ParsingListener};
use serde::Serialize;

#[derive(Debug, Clone, Default)]
pub struct CoalescingListener {
    markers: Vec<HighlightingMarker>,
}

/// Part of a marker restricted to one line. `column` is a byte offset from the line start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineSpan {
    pub line: usize,
    pub column: usize,
    pub len: usize,
    pub kind: MarkerKind,
}

impl CoalescingListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(mut self) -> Vec<HighlightingMarker> {
        self.markers.sort_by(|a, b| a.kind.cmp(&b.kind).then(a.start.cmp(&b.start)));

        let mut merged: Vec<HighlightingMarker> = Vec::with_capacity(self.markers.len());
        for marker in self.markers {
            match merged.last_mut() {
                Some(last) if last.kind == marker.kind && marker.start <= last.end() => {
                    let end = last.end().max(marker.end());
                    last.len = end - last.start;
                }
                _ => merged.push(marker),
            }
        }

        sort_markers(&mut merged);
        merged
    }

    /// Coalesce, then cut every marker at line boundaries of `text`.
    ///
    /// Line terminators belong to the line they end.
    pub fn split_lines(self, text: &str) -> Vec<LineSpan> {
        let starts = line_starts(text);
        let mut spans = Vec::new();

        for marker in self.finish() {
            let first = starts
                .partition_point(|s| *s <= marker.start)
                .saturating_sub(1);
            for (line, &line_start) in starts.iter().enumerate().skip(first) {
                if line_start >= marker.end() {
                    break;
                }
                let line_end = starts.get(line + 1).copied().unwrap_or(text.len());
                let from = marker.start.max(line_start);
                let to = marker.end().min(line_end);
                if from < to {
                    spans.push(LineSpan {
                        line,
                        column: from - line_start,
                        len: to - from,
                        kind: marker.kind,
                    });
                }
            }
        }

        spans.sort_by(|a, b| (a.line, a.column).cmp(&(b.line, b.column)));
        spans
    }
}

impl ParsingListener for CoalescingListener {
    fn on_marker(&mut self, marker: HighlightingMarker) {
        if marker.len > 0 {
            self.markers.push(marker);
        }
    }
}

fn line_starts(text: &str) -> Vec<usize> {
    let bytes = text.as_bytes();
    let mut starts = vec![0];
    for (idx, byte) in bytes.iter().enumerate() {
        match byte {
            b'\n' => starts.push(idx + 1),
            b'\r' if bytes.get(idx + 1) != Some(&b'\n') => starts.push(idx + 1),
            _ => {}
        }
    }
    starts
}
