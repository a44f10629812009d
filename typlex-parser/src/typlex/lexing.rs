//! Lexer
//!
//!     Tokenization turns a source string into a flat stream of typed tokens. The stream is
//!     pulled lazily through [`Tokenizer`], bounded by the `BEGIN` and `TEXT_END` sentinels.
//!
//! Classification
//!
//!     Each token is read from the first grapheme cluster at the current position:
//!
//!         - LINE_END: `\n`, `\r\n` or a lone `\r`. Consecutive line ends stay separate.
//!         - WHITESPACE: a maximal run of horizontal whitespace.
//!         - ESCAPE: a backslash escape, see [escapes].
//!         - CODE_NUMBER: the longest complete number, see [numbers].
//!         - WORD: a run of letters and digits starting with a letter (or a non-ASCII digit).
//!         - SYMBOL: any other single grapheme.
//!
//!     The tokenizer never fails. Every ambiguity is settled locally by falling back to a
//!     shorter token and re-reading the rest.

pub mod escapes;
pub mod numbers;
pub mod tokenizer;

pub use tokenizer::Tokenizer;

use crate::typlex::token::Token;

/// Tokenize a whole text, sentinels included.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    Tokenizer::new(text).collect()
}
