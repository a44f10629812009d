//! Code mode keywords
//!
//!     The keyword table is a logos lexer. Identifiers are matched whole: an identifier is a
//!     keyword only when the first lexed keyword covers all of it, so `letter` or `inside`
//!     are plain identifiers.

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    #[token("none")]
    None,
    #[token("auto")]
    Auto,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("not")]
    Not,
    #[token("and")]
    And,
    #[token("or")]
    Or,
    #[token("let")]
    Let,
    #[token("set")]
    Set,
    #[token("show")]
    Show,
    #[token("context")]
    Context,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("for")]
    For,
    #[token("in")]
    In,
    #[token("while")]
    While,
    #[token("break")]
    Break,
    #[token("continue")]
    Continue,
    #[token("return")]
    Return,
    #[token("import")]
    Import,
    #[token("include")]
    Include,
    #[token("as")]
    As,
}

impl Keyword {
    pub fn from_ident(ident: &str) -> Option<Self> {
        let mut lexer = Keyword::lexer(ident);
        match lexer.next() {
            Some(Ok(keyword)) if lexer.span() == (0..ident.len()) => Some(keyword),
            _ => None,
        }
    }

    /// Keywords that start a statement running to the end of the line when embedded in
    /// markup with `#`.
    pub fn opens_statement(self) -> bool {
        matches!(
            self,
            Keyword::Let
                | Keyword::Set
                | Keyword::Show
                | Keyword::Context
                | Keyword::If
                | Keyword::For
                | Keyword::While
                | Keyword::Break
                | Keyword::Continue
                | Keyword::Return
                | Keyword::Import
                | Keyword::Include
        )
    }
}
