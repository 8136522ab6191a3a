#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Possible simplification steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Step {
    /// A variable-free subtree was replaced by its value.
    ///
    /// `2+3 = 5`
    /// `sin(0) = 0`
    ConstantFold,

    /// `0+a = a`
    /// `a+0 = a`
    AddZero,

    /// `0*a = 0`
    /// `a*0 = 0`
    MultiplyZero,

    /// `1*a = a`
    /// `a*1 = a`
    MultiplyOne,

    /// A child of the node was simplified, so the rebuilt node was simplified again.
    Resimplify,
}
