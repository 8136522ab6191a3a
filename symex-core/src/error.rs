//! The kinds of errors produced by this crate.
//!
//! Every kind is wrapped in a [`symex_error::Error`]. Errors found while building carry the span
//! of the offending [`Seq`](crate::Seq) element; errors found while evaluating carry no span.

use symex_attrs::ErrorKind;
use symex_error::{ariadne::Fmt, EXPR};

/// Formats a list of suggestions as a help message, or returns the fallback if there are none.
fn suggest(suggestions: &[String], what: &str, fallback: &str) -> String {
    match suggestions {
        [] => fallback.to_string(),
        [one] => format!("did you mean the `{}` {}?", one.fg(EXPR), what),
        many => format!(
            "did you mean one of these {}s? {}",
            what,
            many.iter()
                .map(|s| format!("`{}`", s.fg(EXPR)))
                .collect::<Vec<_>>()
                .join(", "),
        ),
    }
}

/// A variable was evaluated without a value bound to it in the environment.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not bound", self.name),
    labels = ["this variable"],
    help = suggest(
        &self.suggestions,
        "variable",
        &format!("add a value for {} to the environment", (&self.name).fg(EXPR)),
    ),
)]
pub struct UnboundVariable {
    /// The name of the variable.
    pub name: String,

    /// Names bound in the environment that are similar to `name`.
    pub suggestions: Vec<String>,
}

/// The first element of a sequence is not a known operator tag.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not an operator tag", self.tag),
    labels = ["this tag"],
    help = suggest(
        &self.suggestions,
        "tag",
        "the tags are `number`, `variable`, `+`, `*`, `-`, `sin` and `cos`",
    ),
)]
pub struct UnknownTag {
    /// The element found where the tag was expected.
    pub tag: String,

    /// Known tags that are similar to `tag`.
    pub suggestions: Vec<String>,
}

/// A sequence ended before all the operands of its tag were found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing operand",
    labels = [format!("I expected to see {} before the end of this sequence", self.expected)],
)]
pub struct MissingOperand {
    /// A description of the missing operand, starting with "a" or "an".
    pub expected: &'static str,
}

/// A sequence had more elements than its tag consumes.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "too many operands",
    labels = [format!("`{}` takes {} operand(s); this one is extra", self.tag, self.arity)],
    help = "remove the extra operands",
)]
pub struct TrailingOperand {
    /// The tag of the sequence.
    pub tag: &'static str,

    /// The number of operands the tag takes.
    pub arity: usize,
}

/// An expression (a nested sequence) was expected, but something else was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected an expression",
    labels = [format!("I expected a sequence such as {} here, but found {}", "[number, 1]".fg(EXPR), self.found)],
)]
pub struct ExpectedList {
    /// A description of what was found instead.
    pub found: &'static str,
}

/// A number was expected after the `number` tag.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected a number",
    labels = [format!("I expected a number here, but found {}", self.found)],
)]
pub struct ExpectedNumber {
    /// A description of what was found instead.
    pub found: &'static str,
}

/// A name was expected after the `variable` tag.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected a variable name",
    labels = [format!("I expected a symbol or string here, but found {}", self.found)],
)]
pub struct ExpectedName {
    /// A description of what was found instead.
    pub found: &'static str,
}
