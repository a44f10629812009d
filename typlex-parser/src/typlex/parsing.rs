//! Highlighting parser
//!
//!     The parser buffers the token stream of a text and walks it once, driving an explicit
//!     stack of mode frames. Each step looks at the innermost frame and the current token,
//!     then consumes tokens, pushes a frame, or pops the frame and hands the same token to
//!     the parent. Because the stack lives on the heap, nesting depth is only bounded by
//!     memory.
//!
//! Modes
//!
//!     - Markup: headings, list entries and terms, strong and emphasis, raw spans, references,
//!       labels, and the `$` and `#` entry points into math and code.
//!     - Math: operators, multi-letter identifiers and function names, strings, and `#`.
//!     - Code: keywords, called functions, numbers with units, strings, labels, and nested
//!       `{}`, `()` and `[]` blocks. Content blocks switch back into markup.
//!     - Comments and strings: inert apart from nested comments and string escapes.
//!
//!     Constructs left open at the end of the text are closed there. The parser never fails.
//!
//! Usage
//!
//!     let markers = Parser::new(text, HighlightingListener::new()).parse().sorted();
//!
//!     or simply [`highlight`].

mod code;
mod frames;
mod markup;
mod math;
pub mod parser;

pub use parser::Parser;

use crate::typlex::highlighting::{HighlightingListener, HighlightingMarker};

/// Parse `text` and return its markers sorted by start position.
pub fn highlight(text: &str) -> Vec<HighlightingMarker> {
    Parser::new(text, HighlightingListener::new()).parse().sorted()
}
