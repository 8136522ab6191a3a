//! Simplification of expression trees.
//!
//! The simplifier applies a fixed, finite list of [rules](rules) to a tree, from the root down:
//!
//! 1. A variable-free subtree is replaced by its value ([`Step::ConstantFold`]).
//! 2. `0+a` and `a+0` become `a` ([`Step::AddZero`]).
//! 3. `0*a` and `a*0` become `0` ([`Step::MultiplyZero`]); `1*a` and `a*1` become `a`
//!    ([`Step::MultiplyOne`]).
//!
//! If no rule applies to a node, its children are simplified. When any child changes, the node is
//! rebuilt from the new children and simplified again ([`Step::Resimplify`]), since the new
//! children may expose a rule that did not apply before, such as `sin(0 * y) + x` becoming `0 + x`.
//! The result is a fixed point: simplifying it again returns the same tree.
//!
//! ```
//! use symex_core::{build, seq, simplify, Node};
//!
//! let node = build(&seq![+, [*, [number, 0], [variable, "y"]], [variable, "x"]]).unwrap();
//! assert_eq!(simplify(&node), Node::variable("x"));
//! ```
//!
//! The simplifier is not complete; `x + x` and `x * x` are left as they are.

pub mod rules;
pub mod step;

use crate::node::Node;
use crate::step_collector::StepCollector;
use step::Step;
use tracing::trace;

/// Simplifies a child, and rebuilds and re-simplifies the node if the child changed.
fn simplify_unary(
    node: &Node,
    arg: &Node,
    rebuild: fn(Node) -> Node,
    step_collector: &mut dyn StepCollector<Step>,
) -> Node {
    let new_arg = simplify_node(arg, step_collector);
    if new_arg == *arg {
        return node.clone();
    }

    trace!(%node, "child changed");
    step_collector.push(Step::Resimplify);
    simplify_node(&rebuild(new_arg), step_collector)
}

/// Simplifies both children, and rebuilds and re-simplifies the node if either child changed.
fn simplify_binary(
    node: &Node,
    left: &Node,
    right: &Node,
    rebuild: fn(Node, Node) -> Node,
    step_collector: &mut dyn StepCollector<Step>,
) -> Node {
    let new_left = simplify_node(left, step_collector);
    let new_right = simplify_node(right, step_collector);
    if new_left == *left && new_right == *right {
        return node.clone();
    }

    trace!(%node, "children changed");
    step_collector.push(Step::Resimplify);
    simplify_node(&rebuild(new_left, new_right), step_collector)
}

/// Simplifies a node, reporting every rule that fires to the step collector.
pub(crate) fn simplify_node(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Node {
    if let Some(simplified) = rules::all(node, step_collector) {
        return simplified;
    }

    match node {
        Node::Number(_) | Node::Variable(_) => node.clone(),
        Node::Negation(arg) => simplify_unary(node, arg, Node::neg, step_collector),
        Node::Sine(arg) => simplify_unary(node, arg, Node::sin, step_collector),
        Node::Cosine(arg) => simplify_unary(node, arg, Node::cos, step_collector),
        Node::Addition(left, right) => simplify_binary(node, left, right, Node::add, step_collector),
        Node::Multiplication(left, right) => {
            simplify_binary(node, left, right, Node::mul, step_collector)
        },
    }
}

/// Simplifies the given tree, returning a new tree that evaluates to the same number under every
/// environment that binds its variables.
pub fn simplify(node: &Node) -> Node {
    simplify_node(node, &mut ())
}

/// Simplifies the given tree, also returning the steps taken, in the order they were applied.
pub fn simplify_with_steps(node: &Node) -> (Node, Vec<Step>) {
    let mut steps = Vec::new();
    let simplified = simplify_node(node, &mut steps);
    (simplified, steps)
}
