//! Prose word spans for spell checking
//!
//!     Spell checking itself lives outside this crate. What the core provides is the list of
//!     words worth checking: Unicode words (UAX #29 word boundaries) that fall in prose,
//!     outside raw spans, comments, strings, math, labels, references and marked code.
//!
//!     A checker is plugged in through [`WordChecker`]. The result, [`MisspelledWords`],
//!     answers the one question an editor asks of it: which misspelled word is under the
//!     cursor.

use crate::typlex::highlighting::{HighlightingMarker, MarkerKind};
use crate::typlex::parsing::highlight;
use serde::Serialize;
use std::collections::HashSet;
use std::ops::Range;
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WordSpan<'a> {
    pub start: usize,
    pub len: usize,
    pub word: &'a str,
}

impl WordSpan<'_> {
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Decides whether a word is spelled correctly.
pub trait WordChecker {
    fn is_correct(&self, word: &str) -> bool;
}

impl<F: Fn(&str) -> bool> WordChecker for F {
    fn is_correct(&self, word: &str) -> bool {
        self(word)
    }
}

/// A plain set of known words, one per line when read from text.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    /// Read a word list, skipping blank lines and `#` comments.
    pub fn parse(contents: &str) -> Self {
        contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for WordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl WordChecker for WordList {
    /// Exact match, or a capitalized word whose lowercase form is listed.
    fn is_correct(&self, word: &str) -> bool {
        self.words.contains(word) || self.words.contains(&word.to_lowercase())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MisspelledWords<'a> {
    words: Vec<WordSpan<'a>>,
}

impl<'a> MisspelledWords<'a> {
    /// The word touching `pos`. A position right after the last letter still counts, like
    /// a cursor sitting at the end of the word.
    pub fn word_at(&self, pos: usize) -> Option<&WordSpan<'a>> {
        self.words
            .iter()
            .find(|w| pos >= w.start && pos <= w.end())
    }

    pub fn iter(&self) -> impl Iterator<Item = &WordSpan<'a>> {
        self.words.iter()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn into_vec(self) -> Vec<WordSpan<'a>> {
        self.words
    }
}

fn excludes_words(kind: MarkerKind) -> bool {
    !matches!(
        kind,
        MarkerKind::Emphasis
            | MarkerKind::StrongEmphasis
            | MarkerKind::Heading
            | MarkerKind::ListEntry
            | MarkerKind::Term
            | MarkerKind::MathDelimiter
    )
}

/// Regions of `markers` that hold no prose: every non-structural marker, plus whatever lies
/// between consecutive math delimiters.
fn excluded_regions(markers: &[HighlightingMarker], text_len: usize) -> Vec<Range<usize>> {
    let mut regions: Vec<Range<usize>> = markers
        .iter()
        .filter(|m| excludes_words(m.kind))
        .map(HighlightingMarker::range)
        .collect();

    let mut delimiters: Vec<usize> = markers
        .iter()
        .filter(|m| m.kind == MarkerKind::MathDelimiter)
        .map(|m| m.start)
        .collect();
    delimiters.sort_unstable();
    for pair in delimiters.chunks(2) {
        match *pair {
            [open, close] => regions.push(open..close + 1),
            [open] => regions.push(open..text_len),
            _ => {}
        }
    }

    regions.sort_by_key(|r| r.start);
    regions
}

/// Words of `text` outside the non-prose regions described by `markers`.
pub fn prose_words<'a>(text: &'a str, markers: &[HighlightingMarker]) -> Vec<WordSpan<'a>> {
    let regions = excluded_regions(markers, text.len());
    text.unicode_word_indices()
        .map(trim_underscores)
        .filter(|(_, word)| !word.is_empty() && !word.chars().all(|c| c.is_numeric()))
        .filter(|(start, word)| {
            let end = start + word.len();
            !regions.iter().any(|r| *start < r.end && r.start < end)
        })
        .map(|(start, word)| WordSpan {
            start,
            len: word.len(),
            word,
        })
        .collect()
}

/// Word segmentation glues underscores to letters, so `_word_` is one segment. The
/// underscores are emphasis markup here.
fn trim_underscores((start, word): (usize, &str)) -> (usize, &str) {
    let trimmed = word.trim_start_matches('_');
    (start + word.len() - trimmed.len(), trimmed.trim_end_matches('_'))
}

pub fn find_misspellings<'a, C>(words: &[WordSpan<'a>], checker: &C) -> MisspelledWords<'a>
where
    C: WordChecker + ?Sized,
{
    MisspelledWords {
        words: words
            .iter()
            .filter(|w| !checker.is_correct(w.word))
            .copied()
            .collect(),
    }
}

/// Highlight `text`, then check its prose words.
pub fn check_spelling<'a, C>(text: &'a str, checker: &C) -> MisspelledWords<'a>
where
    C: WordChecker + ?Sized,
{
    let markers = highlight(text);
    find_misspellings(&prose_words(text, &markers), checker)
}
