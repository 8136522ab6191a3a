use logos::Logos;
use std::ops::Range;

/// The different kinds of tokens that can be produced by the tokenizer.
#[derive(Logos, Clone, Copy, Debug, PartialEq)]
pub enum TokenKind {
    #[regex(r"[ \t\n\r]+")]
    Whitespace,

    #[token("[")]
    OpenBracket,

    #[token("]")]
    CloseBracket,

    #[token(",")]
    Comma,

    #[token("+")]
    Add,

    #[token("*")]
    Mul,

    #[token("-")]
    Neg,

    #[regex(r"-?[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]*)?")]
    Number,

    #[token("inf")]
    #[token("-inf")]
    #[token("NaN")]
    NonFinite,

    #[regex(r#""([^"\\]|\\.)*""#)]
    Str,

    #[regex(r#""([^"\\]|\\.)*\\?"#)]
    UnterminatedStr,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Name,

    #[regex(r".", priority = 0)]
    Symbol,
}

impl TokenKind {
    /// Returns true if the token represents whitespace.
    pub fn is_whitespace(self) -> bool {
        matches!(self, TokenKind::Whitespace)
    }

    /// Returns true if the token is read as a [`SeqKind::Symbol`](symex_core::SeqKind::Symbol).
    pub fn is_symbol(self) -> bool {
        matches!(self, TokenKind::Name | TokenKind::Add | TokenKind::Mul | TokenKind::Neg)
    }

    /// A short description of the token, used in error messages.
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::Whitespace => "whitespace",
            TokenKind::OpenBracket => "`[`",
            TokenKind::CloseBracket => "`]`",
            TokenKind::Comma => "`,`",
            TokenKind::Add | TokenKind::Mul | TokenKind::Neg | TokenKind::Name => "a name",
            TokenKind::Number | TokenKind::NonFinite => "a number",
            TokenKind::Str | TokenKind::UnterminatedStr => "a string",
            TokenKind::Symbol => "an unknown character",
        }
    }
}

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'source> {
    /// The region of the source code that this token originated from.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,

    /// The raw lexeme that was parsed into this token.
    pub lexeme: &'source str,
}

impl Token<'_> {
    /// Returns true if the token represents whitespace.
    pub fn is_whitespace(&self) -> bool {
        self.kind.is_whitespace()
    }
}
