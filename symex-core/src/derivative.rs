//! Symbolic differentiation.

use crate::node::Node;
use crate::simplify::simplify;
use tracing::debug;

/// `(f + g)' = f' + g'`
fn sum_rule(left: &Node, right: &Node, variable: &str) -> Node {
    Node::add(derivative(left, variable), derivative(right, variable))
}

/// `(f * g)' = f' * g + f * g'`
fn product_rule(left: &Node, right: &Node, variable: &str) -> Node {
    Node::add(
        Node::mul(derivative(left, variable), right.clone()),
        Node::mul(left.clone(), derivative(right, variable)),
    )
}

/// `sin(f)' = f' * cos(f)`
/// `cos(f)' = f' * -sin(f)`
fn chain_rule(arg: &Node, outer_derivative: Node, variable: &str) -> Node {
    Node::mul(derivative(arg, variable), outer_derivative)
}

/// Computes the simplified derivative of each subtree, bottom-up.
fn derivative(node: &Node, variable: &str) -> Node {
    let derived = match node {
        Node::Number(_) => return Node::Number(0.0),
        Node::Variable(name) => {
            return Node::Number(if name == variable { 1.0 } else { 0.0 });
        },
        Node::Negation(arg) => Node::neg(derivative(arg, variable)),
        Node::Sine(arg) => chain_rule(arg, Node::cos((**arg).clone()), variable),
        Node::Cosine(arg) => chain_rule(arg, Node::neg(Node::sin((**arg).clone())), variable),
        Node::Addition(left, right) => sum_rule(left, right, variable),
        Node::Multiplication(left, right) => product_rule(left, right, variable),
    };

    simplify(&derived)
}

/// Differentiates the tree with respect to the given variable, returning a new, simplified tree.
///
/// Every other variable is treated as a constant, so the result is a partial derivative.
///
/// ```
/// use symex_core::{build, derive, seq, Node};
///
/// let node = build(&seq![sin, [variable, "x"]]).unwrap();
/// assert_eq!(derive(&node, "x"), Node::cos(Node::variable("x")));
/// ```
pub fn derive(node: &Node, variable: &str) -> Node {
    debug!(%node, variable, "differentiating");
    derivative(node, variable)
}

#[cfg(test)]
mod tests {
    use assert_float_eq::*;
    use crate::{build, seq, Env, Seq};
    use pretty_assertions::assert_eq;
    use super::*;

    fn x() -> Node {
        Node::variable("x")
    }

    /// Evaluates the tree with `x` bound to the given value.
    fn eval_x(node: &Node, x: f64) -> f64 {
        node.evaluate(&Env::new().with_var("x", x)).unwrap()
    }

    /// Approximates the derivative of the tree at the given point with a central difference.
    fn finite_difference(node: &Node, x: f64) -> f64 {
        const DX: f64 = 0.00001;
        (eval_x(node, x + DX) - eval_x(node, x - DX)) / (2.0 * DX)
    }

    fn test_for_function(function: Seq, points: impl IntoIterator<Item = f64>) {
        const TOL: f64 = 0.0001;

        let node = build(&function).unwrap();
        let symbolic = derive(&node, "x");

        for point in points {
            let symbolically_computed = eval_x(&symbolic, point);
            let numerically_computed = finite_difference(&node, point);

            assert!(
                (symbolically_computed - numerically_computed).abs() < TOL,
                "For {function} at x={point}, symbolically computed derivative was {symbolically_computed} but numerically computed derivative was {numerically_computed}, which was out of tolerance {TOL}",
            );
        }
    }

    #[test]
    fn constants() {
        assert_eq!(derive(&Node::number(9.0), "x"), Node::number(0.0));
        assert_eq!(derive(&Node::variable("y"), "x"), Node::number(0.0));
        assert_eq!(derive(&x(), "x"), Node::number(1.0));
    }

    #[test]
    fn square() {
        let node = build(&seq![*, [variable, "x"], [variable, "x"]]).unwrap();
        let derived = derive(&node, "x");
        assert_eq!(derived, Node::add(x(), x()));

        for point in [-3.0, -0.5, 0.0, 1.0, 2.5, 10.0] {
            assert_float_absolute_eq!(eval_x(&derived, point), 2.0 * point);
        }
    }

    #[test]
    fn sine_and_cosine() {
        assert_eq!(derive(&Node::sin(x()), "x"), Node::cos(x()));
        assert_eq!(derive(&Node::cos(x()), "x"), Node::neg(Node::sin(x())));
    }

    #[test]
    fn negation() {
        let node = build(&seq![-, [*, [number, 3], [variable, "x"]]]).unwrap();
        assert_eq!(derive(&node, "x"), Node::number(-3.0));
    }

    #[test]
    fn partial_derivative() {
        let node = build(&seq![*, [variable, "x"], [variable, "y"]]).unwrap();
        assert_eq!(derive(&node, "x"), Node::variable("y"));
        assert_eq!(derive(&node, "y"), x());
        assert_eq!(derive(&node, "z"), Node::number(0.0));
    }

    #[test]
    fn constant_factor_is_kept() {
        let node = build(&seq![*, [number, 2], [sin, [variable, "x"]]]).unwrap();
        assert_eq!(derive(&node, "x"), Node::mul(Node::number(2.0), Node::cos(x())));
    }

    #[test]
    fn method_forwards() {
        let node = Node::add(x(), Node::cos(x()));
        assert_eq!(node.derive("x"), derive(&node, "x"));
    }

    #[test]
    fn polynomial() {
        test_for_function(
            seq![+, [*, [variable, x], [variable, x]], [+, [variable, x], [number, 1]]],
            [0., 1., 2., 5., 8.],
        );
    }

    #[test]
    fn chain_rule_nested() {
        test_for_function(
            seq![sin, [*, [variable, x], [cos, [variable, x]]]],
            [-2., -0.3, 0., 0.7, 3.],
        );
    }

    #[test]
    fn product_of_trig() {
        test_for_function(
            seq![*, [sin, [variable, x]], [-, [cos, [+, [variable, x], [number, 2]]]]],
            [-1., 0., 0.5, 1.5],
        );
    }
}
