//! The [`ErrorKind`] trait, implemented by every kind of user-facing error, and the [`Error`]
//! type that pairs an error kind with the regions of input it points at.
//!
//! Error kinds are usually plain structs that derive [`ErrorKind`] through the `symex-attrs`
//! crate. Because the derived implementation refers to [`ariadne`] through this crate, dependents
//! do not need to depend on [`ariadne`] themselves.

pub use ariadne;

use ariadne::{Color, Report};
use std::{any::Any, fmt::{self, Debug, Display}, ops::Range};

/// The color used to highlight expressions and names in reports.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// A kind of error that can be rendered as a report.
pub trait ErrorKind: Debug + Send + Sync {
    /// Returns `self` as [`Any`], so that the concrete kind can be recovered from a
    /// `Box<dyn ErrorKind>`.
    fn as_any(&self) -> &dyn Any;

    /// The one-line message describing this error.
    fn message(&self) -> String;

    /// Builds the report for this error.
    ///
    /// Labels are attached to the given spans in order. If there are fewer spans than labels, the
    /// extra labels are dropped, so a kind with no spans produces a report with only a message and
    /// optional help text.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of the input that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the input that this error originated from. This can be empty if the error
    /// did not originate from any textual input, such as when evaluating an expression.
    pub spans: Vec<Range<usize>>,

    /// What went wrong.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Creates a new error that does not point at any input.
    pub fn unspanned(kind: impl ErrorKind + 'static) -> Self {
        Self::new(Vec::new(), kind)
    }

    /// Returns true if the kind of this error is `K`.
    pub fn is<K: ErrorKind + 'static>(&self) -> bool {
        self.kind.as_any().is::<K>()
    }

    /// Returns a reference to the kind of this error if it is `K`.
    pub fn downcast_ref<K: ErrorKind + 'static>(&self) -> Option<&K> {
        self.kind.as_any().downcast_ref::<K>()
    }

    /// Builds the report for this error, labeling its spans.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.kind.message())
    }
}

impl std::error::Error for Error {}
