//! The expression tree.
//!
//! # Structural equality
//!
//! The [`PartialEq`] and [`Eq`] implementations for [`Node`] implement **structural** equality.
//! Two nodes are equal if they are the same variant, their leaf payloads are equal, and their
//! children are equal position by position. No algebraic normalization takes place, so `1 + x`
//! and `x + 1` are different trees, even though they always evaluate to the same number:
//!
//! ```
//! use symex_core::Node;
//!
//! let a = Node::add(Node::number(1.0), Node::variable("x"));
//! let b = Node::add(Node::variable("x"), Node::number(1.0));
//! assert_ne!(a, b);
//! ```
//!
//! Numbers are compared by value, except that two NaN literals are considered equal. This keeps
//! equality reflexive, which the simplifier relies on to detect whether a child changed.

mod iter;

use crate::build::Tag;
use crate::seq::write_quoted;
pub use iter::NodeIter;
use std::fmt::{self, Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A node of an algebraic expression tree.
///
/// Nodes are immutable once built: every operation in this crate that transforms a tree, such
/// as [`crate::simplify()`] or [`crate::derive()`], returns a new tree.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Node {
    /// A numerical constant, such as `3` or `-0.5`.
    Number(f64),

    /// A free symbol, such as `x`.
    Variable(String),

    /// The negation of the child, `-a`.
    Negation(Box<Node>),

    /// The sine of the child, in radians.
    Sine(Box<Node>),

    /// The cosine of the child, in radians.
    Cosine(Box<Node>),

    /// The sum of the left and right children.
    Addition(Box<Node>, Box<Node>),

    /// The product of the left and right children.
    Multiplication(Box<Node>, Box<Node>),
}

impl Node {
    /// Creates a [`Node::Number`].
    pub fn number(value: f64) -> Self {
        Self::Number(value)
    }

    /// Creates a [`Node::Variable`].
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    /// Creates a [`Node::Negation`].
    pub fn neg(arg: Node) -> Self {
        Self::Negation(Box::new(arg))
    }

    /// Creates a [`Node::Sine`].
    pub fn sin(arg: Node) -> Self {
        Self::Sine(Box::new(arg))
    }

    /// Creates a [`Node::Cosine`].
    pub fn cos(arg: Node) -> Self {
        Self::Cosine(Box::new(arg))
    }

    /// Creates a [`Node::Addition`].
    pub fn add(left: Node, right: Node) -> Self {
        Self::Addition(Box::new(left), Box::new(right))
    }

    /// Creates a [`Node::Multiplication`].
    pub fn mul(left: Node, right: Node) -> Self {
        Self::Multiplication(Box::new(left), Box::new(right))
    }

    /// The tag that builds this kind of node.
    pub fn tag(&self) -> Tag {
        match self {
            Self::Number(_) => Tag::Number,
            Self::Variable(_) => Tag::Variable,
            Self::Negation(_) => Tag::Neg,
            Self::Sine(_) => Tag::Sin,
            Self::Cosine(_) => Tag::Cos,
            Self::Addition(..) => Tag::Add,
            Self::Multiplication(..) => Tag::Mul,
        }
    }

    /// If the node is a [`Node::Number`], returns the contained number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// If the node is a [`Node::Variable`], returns the name of the variable.
    pub fn as_variable(&self) -> Option<&str> {
        match self {
            Self::Variable(name) => Some(name),
            _ => None,
        }
    }

    /// Returns true if the tree contains no [`Node::Variable`]s, meaning it evaluates to the same
    /// number under every environment.
    ///
    /// A [`Node::Number`] is exact, a [`Node::Variable`] is not, and every other node is exact if
    /// all of its children are.
    pub fn is_exact(&self) -> bool {
        self.post_order_iter()
            .all(|node| !matches!(node, Self::Variable(_)))
    }

    /// Returns the names of the variables in the tree, in order of first appearance, without
    /// duplicates.
    pub fn variables(&self) -> Vec<&str> {
        let mut names = Vec::new();
        for name in self.post_order_iter().filter_map(Self::as_variable) {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }

    /// Returns an iterator that traverses the tree in left-to-right post-order (i.e. depth-first).
    pub fn post_order_iter(&self) -> NodeIter {
        NodeIter::new(self)
    }

    /// Simplifies this tree. See [`crate::simplify()`].
    pub fn simplify(&self) -> Node {
        crate::simplify(self)
    }

    /// Differentiates this tree with respect to the given variable. See [`crate::derive()`].
    pub fn derive(&self, variable: &str) -> Node {
        crate::derive(self, variable)
    }
}

/// Checks if two nodes are **structurally** equal.
///
/// For more information, see the [module-level documentation](crate::node).
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(lhs), Self::Number(rhs)) => lhs == rhs || lhs.is_nan() && rhs.is_nan(),
            (Self::Variable(lhs), Self::Variable(rhs)) => lhs == rhs,
            (Self::Negation(lhs), Self::Negation(rhs))
                | (Self::Sine(lhs), Self::Sine(rhs))
                | (Self::Cosine(lhs), Self::Cosine(rhs)) => lhs == rhs,
            (Self::Addition(lhs_left, lhs_right), Self::Addition(rhs_left, rhs_right))
                | (Self::Multiplication(lhs_left, lhs_right), Self::Multiplication(rhs_left, rhs_right)) => {
                lhs_left == rhs_left && lhs_right == rhs_right
            },
            _ => false,
        }
    }
}

/// NaN literals compare equal to each other (see [`PartialEq`]), so equality is an equivalence
/// relation.
impl Eq for Node {}

/// Prints the node in the same nested prefix notation it is built from, e.g.
/// `[+, [number, 3], [variable, "x"]]`.
///
/// Variable names are quoted, with `"` and `\` escaped by a backslash. Non-finite numbers are
/// printed as `inf`, `-inf` and `NaN`. `symex-reader` reads all of these back.
impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let tag = self.tag();
        match self {
            Self::Number(value) => write!(f, "[{}, {}]", tag, value),
            Self::Variable(name) => {
                write!(f, "[{}, ", tag)?;
                write_quoted(f, name)?;
                f.write_str("]")
            },
            Self::Negation(arg) | Self::Sine(arg) | Self::Cosine(arg) => {
                write!(f, "[{}, {}]", tag, arg)
            },
            Self::Addition(left, right) | Self::Multiplication(left, right) => {
                write!(f, "[{}, {}, {}]", tag, left, right)
            },
        }
    }
}
