//! Building expression trees from nested prefix sequences.
//!
//! Each sequence starts with an operator [`Tag`], followed by its operands:
//!
//! | Tag        | Operands                  | Builds                    |
//! | ---------- | ------------------------- | ------------------------- |
//! | `number`   | a number                  | [`Node::Number`]          |
//! | `variable` | a symbol or string        | [`Node::Variable`]        |
//! | `-`        | one expression            | [`Node::Negation`]        |
//! | `sin`      | one expression            | [`Node::Sine`]            |
//! | `cos`      | one expression            | [`Node::Cosine`]          |
//! | `+`        | two expressions           | [`Node::Addition`]        |
//! | `*`        | two expressions           | [`Node::Multiplication`]  |
//!
//! Operands are consumed left to right with a cursor into the borrowed input; the input is never
//! modified. Malformed input is rejected with an error pointing at the offending element, and no
//! partial tree is ever returned.
//!
//! ```
//! use symex_core::{build, seq, Node};
//!
//! let node = build(&seq![+, [number, 3], [variable, "x"]]).unwrap();
//! assert_eq!(node, Node::add(Node::number(3.0), Node::variable("x")));
//! ```

use crate::error::{
    ExpectedList,
    ExpectedName,
    ExpectedNumber,
    MissingOperand,
    TrailingOperand,
    UnknownTag,
};
use crate::node::Node;
use crate::seq::{Seq, SeqKind};
use levenshtein::levenshtein;
use std::{fmt::{self, Display, Formatter}, ops::Range};
use symex_error::Error;

/// The operator tag at the start of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    /// `number`
    Number,

    /// `variable`
    Variable,

    /// `-`
    Neg,

    /// `sin`
    Sin,

    /// `cos`
    Cos,

    /// `+`
    Add,

    /// `*`
    Mul,
}

impl Tag {
    /// Every tag, in the order they are listed in documentation.
    pub const ALL: [Tag; 7] = [
        Tag::Number,
        Tag::Variable,
        Tag::Add,
        Tag::Mul,
        Tag::Neg,
        Tag::Sin,
        Tag::Cos,
    ];

    /// Returns the tag spelled by the given symbol, if any.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.as_str() == symbol)
    }

    /// The symbol that spells this tag.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Variable => "variable",
            Self::Neg => "-",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Add => "+",
            Self::Mul => "*",
        }
    }

    /// The number of operands that follow this tag.
    pub fn arity(self) -> usize {
        match self {
            Self::Add | Self::Mul => 2,
            _ => 1,
        }
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reads the tag at the start of a sequence.
fn read_tag(seq: &Seq) -> Result<Tag, Error> {
    let Some(symbol) = seq.as_name() else {
        return Err(Error::new(vec![seq.span.clone()], UnknownTag {
            tag: seq.to_string(),
            suggestions: Vec::new(),
        }));
    };

    Tag::from_symbol(symbol).ok_or_else(|| {
        let suggestions = Tag::ALL
            .into_iter()
            .map(Tag::as_str)
            .filter(|candidate| candidate.len() > 1 && levenshtein(candidate, symbol) <= 2)
            .map(str::to_string)
            .collect();
        Error::new(vec![seq.span.clone()], UnknownTag { tag: symbol.to_string(), suggestions })
    })
}

/// A cursor over the elements of one sequence.
struct Cursor<'a> {
    /// The span of the whole sequence.
    span: Range<usize>,

    /// The elements of the sequence.
    items: &'a [Seq],

    /// The index of the **next** element to be consumed.
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor over the given sequence, which must be a list.
    fn new(seq: &'a Seq) -> Result<Self, Error> {
        let items = seq.as_list().ok_or_else(|| {
            Error::new(vec![seq.span.clone()], ExpectedList { found: seq.describe() })
        })?;

        Ok(Self { span: seq.span.clone(), items, pos: 0 })
    }

    /// A span pointing at the end of the sequence, where a missing element would go.
    fn end_span(&self) -> Range<usize> {
        self.span.end.saturating_sub(1)..self.span.end
    }

    /// Returns the next element and advances the cursor, or fails with [`MissingOperand`] if the
    /// sequence is exhausted.
    fn next(&mut self, expected: &'static str) -> Result<&'a Seq, Error> {
        let item = self.items
            .get(self.pos)
            .ok_or_else(|| Error::new(vec![self.end_span()], MissingOperand { expected }))?;
        self.pos += 1;
        Ok(item)
    }

    /// Checks that every element of the sequence was consumed.
    fn finish(self, tag: Tag) -> Result<(), Error> {
        match self.items.get(self.pos) {
            Some(extra) => Err(Error::new(vec![extra.span.clone()], TrailingOperand {
                tag: tag.as_str(),
                arity: tag.arity(),
            })),
            None => Ok(()),
        }
    }

    /// Consumes the next element as a nested expression and builds it.
    fn next_node(&mut self) -> Result<Node, Error> {
        build(self.next("an expression")?)
    }

    /// Consumes the next element as a number.
    fn next_number(&mut self) -> Result<f64, Error> {
        let item = self.next("a number")?;
        match item.kind {
            SeqKind::Number(value) => Ok(value),
            _ => Err(Error::new(vec![item.span.clone()], ExpectedNumber { found: item.describe() })),
        }
    }

    /// Consumes the next element as a variable name.
    fn next_name(&mut self) -> Result<String, Error> {
        let item = self.next("a variable name")?;
        item.as_name()
            .map(str::to_string)
            .ok_or_else(|| Error::new(vec![item.span.clone()], ExpectedName { found: item.describe() }))
    }
}

/// Builds an expression tree from a nested prefix sequence.
///
/// Returns an error if the sequence is malformed: an unknown tag, a missing or extra operand, or
/// an operand of the wrong kind.
pub fn build(seq: &Seq) -> Result<Node, Error> {
    let mut cursor = Cursor::new(seq)?;
    let tag = read_tag(cursor.next("an operator tag")?)?;

    let node = match tag {
        Tag::Number => Node::Number(cursor.next_number()?),
        Tag::Variable => Node::Variable(cursor.next_name()?),
        Tag::Neg => Node::neg(cursor.next_node()?),
        Tag::Sin => Node::sin(cursor.next_node()?),
        Tag::Cos => Node::cos(cursor.next_node()?),
        Tag::Add => {
            let left = cursor.next_node()?;
            let right = cursor.next_node()?;
            Node::add(left, right)
        },
        Tag::Mul => {
            let left = cursor.next_node()?;
            let right = cursor.next_node()?;
            Node::mul(left, right)
        },
    };

    cursor.finish(tag)?;
    Ok(node)
}
