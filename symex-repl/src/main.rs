mod command;
mod error;

use command::Command;
use error::report_to_stderr;
use rustyline::{error::ReadlineError, DefaultEditor};
use std::{io::{self, IsTerminal, Read}, process::ExitCode};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Reads, runs and prints the result of one line of input. Returns false if the line failed.
fn execute_line(src_id: &str, input: &str) -> bool {
    let result = Command::parse(input)
        .and_then(|command| command.map(|command| command.run()).transpose());

    match result {
        Ok(Some(output)) => println!("{}", output),
        Ok(None) => (), // blank line or comment
        Err(err) => {
            report_to_stderr(&err, src_id, input);
            return false;
        },
    }

    true
}

/// Runs every line of a script. Every line is run even if an earlier one fails.
fn execute(source: &str) -> ExitCode {
    let mut failed = 0;
    for (i, line) in source.lines().enumerate() {
        let src_id = format!("line {}", i + 1);
        if !execute_line(&src_id, line) {
            failed += 1;
        }
    }

    if failed == 0 {
        ExitCode::SUCCESS
    } else {
        info!(failed, "script finished with errors");
        ExitCode::FAILURE
    }
}

/// Reads one line in interactive mode and runs it.
fn process_line(rl: &mut DefaultEditor) -> Result<(), ReadlineError> {
    let input = rl.readline("> ")?;
    if input.trim().is_empty() {
        return Ok(());
    }

    rl.add_history_entry(&input)?;

    execute_line("input", &input);
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let mut args = std::env::args();
    args.next();

    if let Some(filename) = args.next() {
        // run script file
        match std::fs::read_to_string(&filename) {
            Ok(source) => execute(&source),
            Err(err) => {
                eprintln!("could not read `{}`: {}", filename, err);
                ExitCode::FAILURE
            },
        }
    } else if !io::stdin().is_terminal() {
        // read script from stdin
        let mut source = String::new();
        if let Err(err) = io::stdin().read_to_string(&mut source) {
            eprintln!("could not read stdin: {}", err);
            return ExitCode::FAILURE;
        }

        execute(&source)
    } else {
        // run the repl / interactive mode
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(err) => {
                eprintln!("{}", err);
                return ExitCode::FAILURE;
            },
        };

        loop {
            if let Err(err) = process_line(&mut rl) {
                match err {
                    ReadlineError::Eof | ReadlineError::Interrupted => (),
                    _ => eprintln!("{}", err),
                }
                break;
            }
        }

        ExitCode::SUCCESS
    }
}
