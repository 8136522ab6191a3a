//! The simplification rules.
//!
//! Each rule takes the node to simplify and returns `Some(node)` with the simplified node if the
//! rule applies, or `None` if it does not. Rules that keep one operand return that operand
//! already simplified.

use crate::node::Node;
use crate::step_collector::StepCollector;
use super::{simplify_node, step::Step};
use tracing::trace;

/// Returns true if the node is variable-free and evaluates to the given value.
fn is_constant(node: &Node, value: f64) -> bool {
    node.constant_value() == Some(value)
}

/// Replaces a variable-free subtree with a [`Node::Number`] holding its value.
///
/// `2+3 = 5`
pub fn constant_fold(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    if node.as_number().is_some() {
        return None;
    }

    let value = node.constant_value()?;
    trace!(rule = "constant_fold", %node, value, "rule applied");
    step_collector.push(Step::ConstantFold);
    Some(Node::Number(value))
}

/// `0+a = a`
/// `a+0 = a`
///
/// The left operand is checked first.
pub fn add_zero(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let Node::Addition(left, right) = node else {
        return None;
    };

    let kept = if is_constant(left, 0.0) {
        right
    } else if is_constant(right, 0.0) {
        left
    } else {
        return None;
    };

    trace!(rule = "add_zero", %node, "rule applied");
    step_collector.push(Step::AddZero);
    Some(simplify_node(kept, step_collector))
}

/// `0*a = 0`
/// `1*a = a`
/// `a*0 = 0`
/// `a*1 = a`
///
/// The left operand is checked for both identities before the right one. When an operand is
/// zero, the other operand is never inspected, even if it cannot be evaluated.
pub fn multiply_identities(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let Node::Multiplication(left, right) = node else {
        return None;
    };

    for (operand, other) in [(left, right), (right, left)] {
        match operand.constant_value() {
            Some(value) if value == 0.0 => {
                trace!(rule = "multiply_zero", %node, "rule applied");
                step_collector.push(Step::MultiplyZero);
                return Some(Node::Number(0.0));
            },
            Some(value) if value == 1.0 => {
                trace!(rule = "multiply_one", %node, "rule applied");
                step_collector.push(Step::MultiplyOne);
                return Some(simplify_node(other, step_collector));
            },
            _ => (),
        }
    }

    None
}

/// Applies the first rule that matches the node.
pub fn all(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    constant_fold(node, step_collector)
        .or_else(|| add_zero(node, step_collector))
        .or_else(|| multiply_identities(node, step_collector))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn x() -> Node {
        Node::variable("x")
    }

    #[test]
    fn fold_skips_numbers_and_variables() {
        assert_eq!(constant_fold(&Node::number(2.0), &mut ()), None);
        assert_eq!(constant_fold(&x(), &mut ()), None);
        assert_eq!(constant_fold(&Node::neg(x()), &mut ()), None);
    }

    #[test]
    fn add_zero_prefers_left() {
        let mut steps = Vec::new();
        let node = Node::add(Node::number(0.0), Node::number(0.0));
        assert_eq!(add_zero(&node, &mut steps), Some(Node::number(0.0)));
        assert_eq!(steps, vec![Step::AddZero]);
    }

    #[test]
    fn add_zero_needs_a_zero() {
        let node = Node::add(Node::number(1.0), x());
        assert_eq!(add_zero(&node, &mut ()), None);
        assert_eq!(add_zero(&Node::mul(Node::number(0.0), x()), &mut ()), None);
    }

    #[test]
    fn add_zero_matches_exact_subtrees() {
        let zero = Node::add(Node::number(2.0), Node::number(-2.0));
        let node = Node::add(x(), zero);
        assert_eq!(add_zero(&node, &mut ()), Some(x()));
    }

    #[test]
    fn multiply_one_simplifies_other_operand() {
        let mut steps = Vec::new();
        let node = Node::mul(Node::number(1.0), Node::sin(Node::number(0.0)));
        assert_eq!(multiply_identities(&node, &mut steps), Some(Node::number(0.0)));
        assert_eq!(steps, vec![Step::MultiplyOne, Step::ConstantFold]);
    }

    #[test]
    fn multiply_right_identities() {
        let node = Node::mul(x(), Node::number(1.0));
        assert_eq!(multiply_identities(&node, &mut ()), Some(x()));

        let node = Node::mul(x(), Node::cos(Node::number(std::f64::consts::FRAC_PI_2)));
        assert_eq!(multiply_identities(&node, &mut ()), None);

        let node = Node::mul(x(), Node::neg(Node::number(0.0)));
        assert_eq!(multiply_identities(&node, &mut ()), Some(Node::number(0.0)));
    }

    #[test]
    fn multiply_zero_ignores_other_operand() {
        let node = Node::mul(Node::number(0.0), Node::variable("unbound"));
        assert_eq!(all(&node, &mut ()), Some(Node::number(0.0)));
    }
}
