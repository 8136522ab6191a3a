//! Nested sequences, the input of the [builder](crate::build()).
//!
//! A [`Seq`] is a tree of symbols, numbers, strings and lists, in the shape of the prefix notation
//! used to describe expressions: `[+, [number, 3], [variable, "x"]]`. Each element remembers the
//! span of text it was read from, so that errors found while building can point back at it.
//! Sequences built in code have empty spans.
//!
//! The [`seq!`](crate::seq!) macro writes sequences with the same notation:
//!
//! ```
//! use symex_core::{seq, Seq};
//!
//! let seq = seq![+, [number, 3], [variable, "x"]];
//! assert_eq!(seq, Seq::list(vec![
//!     Seq::symbol("+"),
//!     Seq::list(vec![Seq::symbol("number"), Seq::number(3.0)]),
//!     Seq::list(vec![Seq::symbol("variable"), Seq::string("x")]),
//! ]));
//! ```

use std::{fmt::{self, Display, Formatter}, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The kind of a [`Seq`] element.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SeqKind {
    /// A bare symbol, such as `+`, `sin`, or `x`.
    Symbol(String),

    /// A numeric literal.
    Number(f64),

    /// A quoted string literal.
    Str(String),

    /// A nested sequence.
    List(Vec<Seq>),
}

/// An element of a nested sequence.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Seq {
    /// The kind of element.
    pub kind: SeqKind,

    /// The region of the source text this element was read from.
    pub span: Range<usize>,
}

impl Seq {
    /// Creates an element of the given kind with an empty span.
    pub fn new(kind: SeqKind) -> Self {
        Self { kind, span: 0..0 }
    }

    /// Creates a [`SeqKind::Symbol`] element.
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::new(SeqKind::Symbol(name.into()))
    }

    /// Creates a [`SeqKind::Number`] element.
    pub fn number(value: f64) -> Self {
        Self::new(SeqKind::Number(value))
    }

    /// Creates a [`SeqKind::Str`] element.
    pub fn string(value: impl Into<String>) -> Self {
        Self::new(SeqKind::Str(value.into()))
    }

    /// Creates a [`SeqKind::List`] element.
    pub fn list(items: Vec<Seq>) -> Self {
        Self::new(SeqKind::List(items))
    }

    /// Replaces the span of this element.
    pub fn with_span(mut self, span: Range<usize>) -> Self {
        self.span = span;
        self
    }

    /// If the element is a list, returns its items.
    pub fn as_list(&self) -> Option<&[Seq]> {
        match &self.kind {
            SeqKind::List(items) => Some(items),
            _ => None,
        }
    }

    /// If the element is a symbol or a string, returns its text.
    pub fn as_name(&self) -> Option<&str> {
        match &self.kind {
            SeqKind::Symbol(name) | SeqKind::Str(name) => Some(name),
            _ => None,
        }
    }

    /// A short description of the kind of element, used in error messages.
    pub fn describe(&self) -> &'static str {
        match self.kind {
            SeqKind::Symbol(_) => "a symbol",
            SeqKind::Number(_) => "a number",
            SeqKind::Str(_) => "a string",
            SeqKind::List(_) => "a sequence",
        }
    }
}

impl From<f64> for Seq {
    fn from(value: f64) -> Self {
        Self::number(value)
    }
}

impl From<i32> for Seq {
    fn from(value: i32) -> Self {
        Self::number(value.into())
    }
}

impl From<&str> for Seq {
    fn from(value: &str) -> Self {
        Self::string(value)
    }
}

impl From<String> for Seq {
    fn from(value: String) -> Self {
        Self::string(value)
    }
}

impl From<Vec<Seq>> for Seq {
    fn from(items: Vec<Seq>) -> Self {
        Self::list(items)
    }
}

/// Writes a string literal, escaping only `"` and `\` with a backslash. Any other character,
/// including a newline, is written as is.
pub(crate) fn write_quoted(f: &mut Formatter<'_>, value: &str) -> fmt::Result {
    f.write_str("\"")?;
    for c in value.chars() {
        if matches!(c, '"' | '\\') {
            f.write_str("\\")?;
        }
        write!(f, "{}", c)?;
    }
    f.write_str("\"")
}

impl Display for Seq {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.kind {
            SeqKind::Symbol(name) => f.write_str(name),
            SeqKind::Number(value) => write!(f, "{}", value),
            SeqKind::Str(value) => write_quoted(f, value),
            SeqKind::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            },
        }
    }
}

/// Builds a [`Seq`] list from prefix notation.
///
/// Brackets nest lists, the operators `+`, `*`, `-` and bare identifiers become symbols, and
/// literals become numbers or strings. Any other Rust expression can be spliced in by wrapping it
/// in parentheses, which is also how negative numbers are written:
///
/// ```
/// use symex_core::{seq, Seq};
///
/// let offset = 2.5;
/// let seq = seq![*, [number, (-1.0)], [+, [variable, x], [number, (offset)]]];
/// assert_eq!(seq.to_string(), "[*, [number, -1], [+, [variable, x], [number, 2.5]]]");
/// ```
#[macro_export]
macro_rules! seq {
    ($($item:tt),* $(,)?) => {
        $crate::seq::Seq::list(vec![$($crate::seq_item!($item)),*])
    };
}

/// Builds a single element of a [`seq!`] list.
#[doc(hidden)]
#[macro_export]
macro_rules! seq_item {
    ([$($inner:tt)*]) => { $crate::seq!($($inner)*) };
    (+) => { $crate::seq::Seq::symbol("+") };
    (*) => { $crate::seq::Seq::symbol("*") };
    (-) => { $crate::seq::Seq::symbol("-") };
    ($name:ident) => { $crate::seq::Seq::symbol(stringify!($name)) };
    ($value:literal) => { $crate::seq::Seq::from($value) };
    (($value:expr)) => { $crate::seq::Seq::from($value) };
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn macro_nests_lists() {
        let seq = seq![sin, [-, [variable, "x"]]];
        assert_eq!(seq, Seq::list(vec![
            Seq::symbol("sin"),
            Seq::list(vec![
                Seq::symbol("-"),
                Seq::list(vec![Seq::symbol("variable"), Seq::string("x")]),
            ]),
        ]));
    }

    #[test]
    fn macro_splices_expressions() {
        let value = -4.0;
        let seq = seq![number, (value)];
        assert_eq!(seq.as_list().unwrap()[1], Seq::number(-4.0));
    }

    #[test]
    fn names_are_symbols_or_strings() {
        assert_eq!(Seq::symbol("x").as_name(), Some("x"));
        assert_eq!(Seq::string("x").as_name(), Some("x"));
        assert_eq!(Seq::number(1.0).as_name(), None);
        assert_eq!(seq![].as_name(), None);
    }

    #[test]
    fn display_escapes_quotes_and_backslashes() {
        let seq = seq![variable, "say \"hi\" \\ bye"];
        assert_eq!(seq.to_string(), r#"[variable, "say \"hi\" \\ bye"]"#);
    }

    #[test]
    fn display() {
        let seq = seq![+, [number, 0.5], [variable, "x"]];
        assert_eq!(seq.to_string(), r#"[+, [number, 0.5], [variable, "x"]]"#);
    }
}
