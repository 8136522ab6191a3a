//! The commands understood by the REPL.
//!
//! Each line holds one command: a name followed by its arguments, all written in the same nested
//! prefix notation as expressions. Blank lines and lines starting with `#` are skipped.

use crate::error::{InvalidBinding, UnknownCommand, WrongArgumentCount};
use levenshtein::levenshtein;
use symex_core::{build, derive, error::ExpectedName, simplify, simplify_with_steps, Env, Node, Seq, SeqKind};
use symex_error::Error;
use symex_reader::Reader;
use tracing::debug;

/// The name and usage of every command.
pub const COMMANDS: [(&str, &str); 6] = [
    ("eval", "eval EXPR [name, value]..."),
    ("simplify", "simplify EXPR"),
    ("steps", "steps EXPR"),
    ("derive", "derive EXPR name"),
    ("exact", "exact EXPR"),
    ("eq", "eq EXPR EXPR"),
];

/// A command read from one line of input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Evaluate an expression with the given variables bound.
    Eval(Node, Env),

    /// Simplify an expression.
    Simplify(Node),

    /// Simplify an expression, also listing the rules that were applied.
    Steps(Node),

    /// Differentiate an expression with respect to a variable.
    Derive(Node, String),

    /// Check if an expression is free of variables.
    Exact(Node),

    /// Check if two expressions are structurally equal.
    Eq(Node, Node),
}

/// Checks that a command was given an argument count in the given range.
fn check_count(
    name: &'static str,
    args: &[Seq],
    count: std::ops::RangeInclusive<usize>,
    expected: &'static str,
    span: std::ops::Range<usize>,
) -> Result<(), Error> {
    if count.contains(&args.len()) {
        return Ok(());
    }

    let usage = COMMANDS
        .iter()
        .find(|(command, _)| *command == name)
        .map_or(name, |(_, usage)| *usage);
    Err(Error::new(vec![span], WrongArgumentCount { command: name, expected, usage, found: args.len() }))
}

/// Reads a `[name, value]` binding.
fn read_binding(seq: &Seq) -> Result<(&str, f64), Error> {
    let invalid = || Error::new(vec![seq.span.clone()], InvalidBinding);
    match seq.as_list().ok_or_else(invalid)? {
        [name, value] => match (name.as_name(), &value.kind) {
            (Some(name), SeqKind::Number(value)) => Ok((name, *value)),
            _ => Err(invalid()),
        },
        _ => Err(invalid()),
    }
}

/// Reads a variable name argument.
fn read_name(seq: &Seq) -> Result<String, Error> {
    seq.as_name()
        .map(str::to_string)
        .ok_or_else(|| Error::new(vec![seq.span.clone()], ExpectedName { found: seq.describe() }))
}

impl Command {
    /// Reads a command from a line of input. Returns [`None`] if the line is blank or a comment.
    pub fn parse(input: &str) -> Result<Option<Self>, Error> {
        if input.trim_start().starts_with('#') {
            return Ok(None);
        }

        let elements = Reader::new(input).read_all()?;
        let Some((head, args)) = elements.split_first() else {
            return Ok(None);
        };

        let name = head.as_name().ok_or_else(|| {
            Error::new(vec![head.span.clone()], UnknownCommand {
                name: head.to_string(),
                suggestions: Vec::new(),
            })
        })?;
        let span = head.span.start..elements.last().map_or(head.span.end, |last| last.span.end);
        debug!(command = name, args = args.len(), "read command");

        let command = match name {
            "eval" => {
                check_count("eval", args, 1..=usize::MAX, "an expression and bindings", span)?;
                let mut env = Env::new();
                for binding in &args[1..] {
                    let (name, value) = read_binding(binding)?;
                    env.add_var(name, value);
                }
                Self::Eval(build(&args[0])?, env)
            },
            "simplify" => {
                check_count("simplify", args, 1..=1, "one expression", span)?;
                Self::Simplify(build(&args[0])?)
            },
            "steps" => {
                check_count("steps", args, 1..=1, "one expression", span)?;
                Self::Steps(build(&args[0])?)
            },
            "derive" => {
                check_count("derive", args, 2..=2, "an expression and a variable name", span)?;
                Self::Derive(build(&args[0])?, read_name(&args[1])?)
            },
            "exact" => {
                check_count("exact", args, 1..=1, "one expression", span)?;
                Self::Exact(build(&args[0])?)
            },
            "eq" => {
                check_count("eq", args, 2..=2, "two expressions", span)?;
                Self::Eq(build(&args[0])?, build(&args[1])?)
            },
            _ => {
                let suggestions = COMMANDS
                    .iter()
                    .map(|(command, _)| *command)
                    .filter(|command| levenshtein(command, name) <= 2)
                    .map(str::to_string)
                    .collect();
                return Err(Error::new(vec![head.span.clone()], UnknownCommand {
                    name: name.to_string(),
                    suggestions,
                }));
            },
        };

        Ok(Some(command))
    }

    /// Runs the command, returning the text to print.
    pub fn run(&self) -> Result<String, Error> {
        Ok(match self {
            Self::Eval(node, env) => node.evaluate(env)?.to_string(),
            Self::Simplify(node) => simplify(node).to_string(),
            Self::Steps(node) => {
                let (simplified, steps) = simplify_with_steps(node);
                let mut output = simplified.to_string();
                output.extend(steps.iter().map(|step| format!("\n  {:?}", step)));
                output
            },
            Self::Derive(node, variable) => derive(node, variable).to_string(),
            Self::Exact(node) => node.is_exact().to_string(),
            Self::Eq(left, right) => (left == right).to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use symex_core::error::{TrailingOperand, UnboundVariable};

    /// Reads and runs one line.
    fn run(input: &str) -> Result<Option<String>, Error> {
        Command::parse(input)?.map(|command| command.run()).transpose()
    }

    #[test]
    fn eval() {
        assert_eq!(run("eval [+, [number, 3], [variable, x]] [x, 4]").unwrap().unwrap(), "7");
        assert_eq!(run("eval [sin, [number, 0]]").unwrap().unwrap(), "0");
        assert_eq!(run("eval [*, [variable, a], [variable, b]] [a, 2] [\"b\", -1.5]").unwrap().unwrap(), "-3");
    }

    #[test]
    fn eval_unbound_variable() {
        let err = run("eval [variable, x] [y, 1]").unwrap_err();
        assert!(err.is::<UnboundVariable>());
    }

    #[test]
    fn eval_bad_binding() {
        let err = run("eval [number, 1] [x]").unwrap_err();
        assert!(err.is::<InvalidBinding>());
        assert_eq!(err.spans, vec![17..20]);
    }

    #[test]
    fn simplify_and_steps() {
        assert_eq!(
            run("simplify [*, [number, 1], [variable, x]]").unwrap().unwrap(),
            "[variable, \"x\"]",
        );
        assert_eq!(
            run("steps [+, [variable, x], [number, 0]]").unwrap().unwrap(),
            "[variable, \"x\"]\n  AddZero",
        );
    }

    #[test]
    fn derive_and_predicates() {
        assert_eq!(run("derive [sin, [variable, x]] x").unwrap().unwrap(), "[cos, [variable, \"x\"]]");
        assert_eq!(run("exact [cos, [number, 1]]").unwrap().unwrap(), "true");
        assert_eq!(run("exact [cos, [variable, x]]").unwrap().unwrap(), "false");
        assert_eq!(
            run("eq [+, [number, 1], [variable, x]] [+, [variable, x], [number, 1]]").unwrap().unwrap(),
            "false",
        );
    }

    #[test]
    fn skipped_lines() {
        assert_eq!(run("").unwrap(), None);
        assert_eq!(run("   ").unwrap(), None);
        assert_eq!(run("# eval [number, 1]").unwrap(), None);
    }

    #[test]
    fn unknown_command() {
        let err = run("evl [number, 1]").unwrap_err();
        let kind = err.downcast_ref::<UnknownCommand>().unwrap();
        assert!(kind.suggestions.contains(&"eval".to_string()));
        assert_eq!(err.spans, vec![0..3]);
    }

    #[test]
    fn wrong_argument_count() {
        let err = run("derive [variable, x]").unwrap_err();
        assert_eq!(err.downcast_ref::<WrongArgumentCount>().unwrap().found, 1);
        assert!(run("eval").unwrap_err().is::<WrongArgumentCount>());
    }

    #[test]
    fn demo_script_runs() {
        for line in include_str!("../../demos/basics.symex").lines() {
            assert!(run(line).is_ok(), "failed to run `{}`", line);
        }
    }

    #[test]
    fn build_errors_point_into_line() {
        let input = "simplify [sin, [number, 1], [number, 2]]";
        let err = run(input).unwrap_err();
        assert!(err.is::<TrailingOperand>());
        assert_eq!(&input[err.spans[0].clone()], "[number, 2]");
    }
}
