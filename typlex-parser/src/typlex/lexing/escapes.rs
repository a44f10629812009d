//! Backslash escapes
//!
//!     `\u{1F600}` is a unicode escape; any other backslash followed by a visible grapheme
//!     escapes that grapheme. A backslash before whitespace, before the end of the text, or
//!     opening a malformed `\u{` is not an escape and is left to be a plain symbol.

use unicode_segmentation::UnicodeSegmentation;

/// Length in bytes of the escape at the start of `input`, if `input` starts with one.
pub fn scan_escape(input: &str) -> Option<usize> {
    let rest = input.strip_prefix('\\')?;

    if let Some(body) = rest.strip_prefix("u{") {
        let digits = body.bytes().take_while(u8::is_ascii_hexdigit).count();
        if digits > 0 && body.as_bytes().get(digits) == Some(&b'}') {
            return Some("\\u{".len() + digits + 1);
        }
        return None;
    }

    let escaped = rest.graphemes(true).next()?;
    if escaped.starts_with(char::is_whitespace) {
        return None;
    }
    Some(1 + escaped.len())
}
