//! Code number grammar
//!
//!     number  := "-"? (radix | decimal)
//!     radix   := ("b" | "o" | "x") digits ("." digits)?
//!     decimal := dec+ ("." dec+)? (("e" | "E") ("+" | "-")? dec+)?
//!
//!     Scanning is greedy and falls back to the longest prefix that is still a complete
//!     number, so `12e-` yields `12` and leaves `e-` for ordinary tokenization. The grammar
//!     is ASCII only; every returned length is therefore a char boundary.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Radix {
    Binary,
    Octal,
    Decimal,
    Hex,
}

impl Radix {
    fn from_prefix(byte: u8) -> Option<Self> {
        match byte {
            b'b' => Some(Radix::Binary),
            b'o' => Some(Radix::Octal),
            b'x' => Some(Radix::Hex),
            _ => None,
        }
    }

    fn accepts(self, byte: u8) -> bool {
        match self {
            Radix::Binary => matches!(byte, b'0' | b'1'),
            Radix::Octal => matches!(byte, b'0'..=b'7'),
            Radix::Decimal => byte.is_ascii_digit(),
            Radix::Hex => byte.is_ascii_hexdigit(),
        }
    }

    fn count(self, bytes: &[u8]) -> usize {
        bytes.iter().take_while(|b| self.accepts(**b)).count()
    }
}

/// Length in bytes of the longest code number at the start of `input`, if any.
pub fn scan_code_number(input: &str) -> Option<usize> {
    let bytes = input.as_bytes();
    let mut pos = usize::from(bytes.first() == Some(&b'-'));

    let radix = match bytes.get(pos) {
        Some(b) if b.is_ascii_digit() => Radix::Decimal,
        Some(b) => {
            let radix = Radix::from_prefix(*b)?;
            pos += 1;
            radix
        }
        None => return None,
    };

    let digits = radix.count(&bytes[pos..]);
    if digits == 0 {
        return None;
    }
    pos += digits;
    let mut accepted = pos;

    if bytes.get(pos) == Some(&b'.') {
        let fraction = radix.count(&bytes[pos + 1..]);
        if fraction > 0 {
            pos += 1 + fraction;
            accepted = pos;
        }
    }

    if radix == Radix::Decimal && matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut exponent = pos + 1;
        if matches!(bytes.get(exponent), Some(b'+' | b'-')) {
            exponent += 1;
        }
        let digits = Radix::Decimal.count(&bytes[exponent..]);
        if digits > 0 {
            accepted = exponent + digits;
        }
    }

    Some(accepted)
}

/// Whether `grapheme` is a lone radix prefix letter.
///
/// When no number can be read from a prefix letter, the tokenizer still splits it off as a
/// one-letter word.
pub fn is_radix_prefix(grapheme: &str) -> bool {
    matches!(grapheme, "b" | "o" | "x")
}
