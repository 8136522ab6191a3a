//! Numerical evaluation of expression trees.

use crate::env::Env;
use crate::error::UnboundVariable;
use crate::node::Node;
use symex_error::Error;

impl Node {
    /// Evaluates the tree to a number, looking up variables in the given environment.
    ///
    /// Fails with [`UnboundVariable`] if the tree contains a variable the environment does not
    /// bind. Trigonometric functions use radians.
    ///
    /// ```
    /// use symex_core::{Env, Node};
    ///
    /// let node = Node::add(Node::number(3.0), Node::variable("x"));
    /// let env = Env::new().with_var("x", 4.0);
    /// assert_eq!(node.evaluate(&env).unwrap(), 7.0);
    /// ```
    pub fn evaluate(&self, env: &Env) -> Result<f64, Error> {
        self.eval_with(&|name| env.get_var(name)).map_err(|name| {
            Error::unspanned(UnboundVariable {
                name: name.to_string(),
                suggestions: env.get_similar_vars(name)
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            })
        })
    }

    /// Evaluates the tree if it is exact, returning [`None`] if it contains any variable.
    pub fn constant_value(&self) -> Option<f64> {
        self.eval_with(&|_| None).ok()
    }

    /// Evaluates the tree with the given variable lookup. On failure, returns the name of the
    /// first variable the lookup could not resolve.
    fn eval_with<'a>(&'a self, lookup: &dyn Fn(&str) -> Option<f64>) -> Result<f64, &'a str> {
        Ok(match self {
            Self::Number(value) => *value,
            Self::Variable(name) => lookup(name).ok_or(name.as_str())?,
            Self::Negation(arg) => -arg.eval_with(lookup)?,
            Self::Sine(arg) => arg.eval_with(lookup)?.sin(),
            Self::Cosine(arg) => arg.eval_with(lookup)?.cos(),
            Self::Addition(left, right) => left.eval_with(lookup)? + right.eval_with(lookup)?,
            Self::Multiplication(left, right) => left.eval_with(lookup)? * right.eval_with(lookup)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::*;
    use crate::{build, seq};
    use super::*;

    #[test]
    fn add_variable() {
        let node = build(&seq![+, [number, 3], [variable, "x"]]).unwrap();
        let env = Env::new().with_var("x", 4.0);
        assert_eq!(node.evaluate(&env).unwrap(), 7.0);
    }

    #[test]
    fn sine_of_zero() {
        let node = build(&seq![sin, [number, 0]]).unwrap();
        assert_eq!(node.evaluate(&Env::default()).unwrap(), 0.0);
    }

    #[test]
    fn double_negation() {
        let node = build(&seq![-, [-, [number, 5]]]).unwrap();
        assert_eq!(node.evaluate(&Env::default()).unwrap(), 5.0);
    }

    #[test]
    fn trigonometry_uses_radians() {
        let node = build(&seq![*, [cos, [variable, "t"]], [sin, [variable, "t"]]]).unwrap();
        let env = Env::new().with_var("t", std::f64::consts::FRAC_PI_4);
        assert_float_absolute_eq!(node.evaluate(&env).unwrap(), 0.5);
    }

    #[test]
    fn unbound_variable() {
        let err = Node::variable("x").evaluate(&Env::default()).unwrap_err();
        let kind = err.downcast_ref::<UnboundVariable>().unwrap();
        assert_eq!(kind.name, "x");
        assert!(kind.suggestions.is_empty());
        assert!(err.spans.is_empty());
    }

    #[test]
    fn unbound_variable_suggestions() {
        let node = Node::mul(Node::variable("x"), Node::variable("y"));
        let env = Env::new().with_var("x", 1.0).with_var("yy", 2.0);
        let err = node.evaluate(&env).unwrap_err();
        assert_eq!(err.downcast_ref::<UnboundVariable>(), Some(&UnboundVariable {
            name: "y".to_string(),
            suggestions: vec!["yy".to_string()],
        }));
    }

    #[test]
    fn constant_value_only_for_exact_trees() {
        let exact = Node::add(Node::number(2.0), Node::neg(Node::number(3.0)));
        assert_eq!(exact.constant_value(), Some(-1.0));
        assert_eq!(Node::sin(Node::variable("x")).constant_value(), None);
    }
}
