use ariadne::{Fmt, Source};
use symex_attrs::ErrorKind;
use symex_error::{Error, EXPR};
use tracing::error;

/// Report the error to stderr, highlighting the given input.
///
/// The `ariadne` crate's [`Report`] type actually does not have a `Display` implementation, so
/// we can only use its `eprint` method to print to stderr.
///
/// [`Report`]: https://docs.rs/ariadne/latest/ariadne/struct.Report.html
pub fn report_to_stderr(err: &Error, src_id: &str, input: &str) {
    let report = err.build_report(src_id);
    if let Err(io_err) = report.eprint((src_id, Source::from(input))) {
        error!(%io_err, %err, "could not write error report");
    }
}

/// The first element of a line is not a command.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown command `{}`", self.name),
    labels = ["this command"],
    help = if self.suggestions.is_empty() {
        format!("the commands are {}", crate::command::COMMANDS.map(|(name, _)| name).join(", "))
    } else {
        format!(
            "did you mean {}?",
            self.suggestions.iter()
                .map(|s| format!("`{}`", s.fg(EXPR)))
                .collect::<Vec<_>>()
                .join(" or "),
        )
    },
)]
pub struct UnknownCommand {
    /// The name that was given.
    pub name: String,

    /// Commands with similar names.
    pub suggestions: Vec<String>,
}

/// A command was given the wrong number of arguments.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` takes {}", self.command, self.expected),
    labels = [format!("found {} argument(s)", self.found)],
    help = format!("usage: {}", self.usage.fg(EXPR)),
)]
pub struct WrongArgumentCount {
    /// The name of the command.
    pub command: &'static str,

    /// A description of the arguments the command takes.
    pub expected: &'static str,

    /// How the command is written.
    pub usage: &'static str,

    /// The number of arguments that were given.
    pub found: usize,
}

/// A variable binding given to `eval` is not a `[name, value]` pair.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "invalid variable binding",
    labels = ["this binding"],
    help = format!("bind variables with a name and a number, such as {}", "[x, 4]".fg(EXPR)),
)]
pub struct InvalidBinding;
