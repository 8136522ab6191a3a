//! The kinds of errors produced while reading text into sequences.

use ariadne::Fmt;
use symex_attrs::ErrorKind;
use symex_error::EXPR;
use crate::tokenizer::TokenKind;

/// The end of the input was reached while an element was expected.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of input",
    labels = [format!("I expected an element here, such as {}", "[number, 1]".fg(EXPR))],
)]
pub struct UnexpectedEof;

/// The end of the input was expected, but something else was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected end of input",
    labels = ["I could not understand the remaining input here"],
    help = "an expression is a single sequence; wrap multiple elements in `[` and `]`",
)]
pub struct ExpectedEof;

/// An unexpected token was encountered.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected token",
    labels = [format!(
        "expected {}",
        self.expected.iter().map(|kind| kind.describe()).collect::<Vec<_>>().join(" or "),
    )],
    help = format!("found {}", self.found.describe()),
)]
pub struct UnexpectedToken {
    /// The token(s) that were expected.
    pub expected: &'static [TokenKind],

    /// The token that was found.
    pub found: TokenKind,
}

/// A `[` was never closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed bracket",
    labels = ["this bracket is never closed".to_string(), format!("I expected a {} here", "]".fg(EXPR))],
)]
pub struct UnclosedBracket;

/// A string literal was never closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unterminated string",
    labels = ["this string is never closed"],
    help = format!("add a {} at the end of the string", "\"".fg(EXPR)),
)]
pub struct UnterminatedString;

/// A numeric literal is malformed, or too large to be represented.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not a valid number", self.lexeme),
    labels = ["this number is malformed or out of range"],
    help = format!("write numbers like {} or {}", "-0.5".fg(EXPR), "2e10".fg(EXPR)),
)]
pub struct InvalidNumber {
    /// The numeric literal as written.
    pub lexeme: String,
}

/// A character that cannot start any token was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unexpected character `{}`", self.character),
    labels = ["here"],
    help = "elements are brackets, numbers, quoted strings, names, and the symbols `+`, `*` and `-`",
)]
pub struct UnknownCharacter {
    /// The unrecognized character.
    pub character: String,
}
