//! # typlex
//!
//! Tokenizer and highlighting parser for Typst-like markup.
//!
//! Processing runs in two stages:
//!
//!     source text
//!       -> lexing::Tokenizer          flat tokens with exact byte spans
//!       -> parsing::Parser            highlighting markers pushed to a listener
//!
//! The stages share nothing but the token type. Spell checkers and painters consume the
//! marker stream, see [highlighting](typlex::highlighting) and [spelling](typlex::spelling).
//!
//! For test factories and helpers, see the [testing module](typlex::testing).

pub mod typlex;

pub use typlex::highlighting::{
    HighlightingListener, HighlightingMarker, MarkerKind, ParsingListener,
};
pub use typlex::lexing::{tokenize, Tokenizer};
pub use typlex::parsing::{highlight, Parser};
pub use typlex::token::{Token, TokenType};
