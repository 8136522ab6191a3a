use levenshtein::levenshtein;
use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The environment used when evaluating an expression, binding variable names to values.
///
/// The default environment is empty. Expressions without variables never need one.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Env {
    /// The variables in the environment.
    vars: HashMap<String, f64>,
}

impl Env {
    /// Creates a new empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a variable, replacing any previous value.
    pub fn add_var(&mut self, name: &str, value: f64) {
        self.vars.insert(name.to_string(), value);
    }

    /// Returns the environment with the given variable bound.
    pub fn with_var(mut self, name: &str, value: f64) -> Self {
        self.add_var(name, value);
        self
    }

    /// Get the value of a variable in the environment.
    pub fn get_var(&self, name: &str) -> Option<f64> {
        self.vars.get(name).copied()
    }

    /// Returns the bound names that are similar to the given name, sorted.
    ///
    /// A name is similar if it is one edit away, and that edit does not replace all of it: `x` is
    /// not similar to `y`, but `yy` is.
    pub fn get_similar_vars(&self, name: &str) -> Vec<&str> {
        let mut similar = self.vars
            .keys()
            .map(String::as_str)
            .filter(|n| {
                let distance = levenshtein(n, name);
                distance < 2 && distance < n.len().max(name.len())
            })
            .collect::<Vec<_>>();
        similar.sort_unstable();
        similar
    }

    /// The number of bound variables.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Returns true if no variables are bound.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for Env {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().map(|(name, value)| (name.into(), value)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_and_lookup() {
        let mut env = Env::new();
        assert!(env.is_empty());

        env.add_var("x", 4.0);
        env.add_var("x", 5.0);
        assert_eq!(env.get_var("x"), Some(5.0));
        assert_eq!(env.get_var("y"), None);
        assert_eq!(env.len(), 1);
    }

    #[test]
    fn collect_pairs() {
        let env = [("x", 1.0), ("y", 2.0)].into_iter().collect::<Env>();
        assert_eq!(env, Env::new().with_var("y", 2.0).with_var("x", 1.0));
    }

    #[test]
    fn similar_names() {
        let env = Env::new()
            .with_var("x1", 1.0)
            .with_var("x2", 2.0)
            .with_var("theta", 3.0);
        assert_eq!(env.get_similar_vars("x"), vec!["x1", "x2"]);
        assert!(env.get_similar_vars("phi").is_empty());
    }

    #[test]
    fn single_letters_are_not_similar() {
        let env = Env::new()
            .with_var("x", 1.0)
            .with_var("yy", 2.0)
            .with_var("z", 3.0);
        assert_eq!(env.get_similar_vars("y"), vec!["yy"]);
        assert!(env.get_similar_vars("w").is_empty());
    }
}
