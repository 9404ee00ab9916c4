use std::io::Write;

use rustyline::{DefaultEditor, error::ReadlineError};

use crate::{
    evaluate_line,
    reporting::{Diagnostic, Reporter},
};

/// What the read loop should do after a command has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Keep reading input.
    Continue,
    /// End the loop.
    Quit,
}

/// The action behind a dot command. It receives the full command table so
/// commands like `.help` can describe their siblings.
pub type CommandAction = fn(&[ReplCommand]) -> CommandOutcome;

/// A dot-prefixed command the read loop dispatches by name.
///
/// The table of commands is plain data handed to [`run_repl`], so callers
/// can extend or replace it without touching the loop itself.
pub struct ReplCommand {
    /// The name typed after the leading dot.
    pub name: &'static str,
    /// One-line description shown by `.help`.
    pub description: &'static str,
    /// The action to run.
    pub action: CommandAction,
}

/// The built-in command table: `.help`, `.quit` and `.clear`.
#[must_use]
pub fn default_commands() -> Vec<ReplCommand> {
    vec![ReplCommand { name: "help",
                       description: "List the available commands.",
                       action: help, },
         ReplCommand { name: "quit",
                       description: "Exit the calculator.",
                       action: |_| CommandOutcome::Quit, },
         ReplCommand { name: "clear",
                       description: "Clear the terminal screen.",
                       action: clear, }]
}

/// Runs the interactive loop until `.quit` or end of input.
///
/// Every line is either a dot command dispatched against `commands` or an
/// expression fed through the pipeline. Results print as `\t=\t<value>`;
/// failures and the lexer's non-fatal reports print as diagnostics and the
/// loop keeps going.
///
/// # Errors
/// Returns a readline error when the terminal cannot be driven; Ctrl-C and
/// Ctrl-D end the loop normally.
pub fn run_repl(commands: &[ReplCommand]) -> rustyline::Result<()> {
    let mut editor = DefaultEditor::new()?;

    loop {
        let line = match editor.readline("[numera] > ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(error) => return Err(error),
        };
        let _ = editor.add_history_entry(line.as_str());

        if let Some(name) = line.strip_prefix('.') {
            match run_command(commands, name) {
                CommandOutcome::Continue => continue,
                CommandOutcome::Quit => break,
            }
        }

        let mut reporter = Reporter::new();
        match evaluate_line(&line, &mut reporter) {
            Ok(value) => println!("\t=\t{value}"),
            Err(error) => reporter.report(error.to_string()),
        }

        for diagnostic in reporter.drain() {
            eprintln!("{diagnostic}");
        }
    }

    Ok(())
}

fn run_command(commands: &[ReplCommand], name: &str) -> CommandOutcome {
    match commands.iter().find(|command| command.name == name) {
        Some(command) => (command.action)(commands),
        None => {
            eprintln!("{}", Diagnostic::new(format!("Unknown command: {name}")));
            CommandOutcome::Continue
        },
    }
}

fn help(commands: &[ReplCommand]) -> CommandOutcome {
    for command in commands {
        println!(".{}\t{}", command.name, command.description);
    }
    CommandOutcome::Continue
}

fn clear(_: &[ReplCommand]) -> CommandOutcome {
    print!("\u{1b}[H\u{1b}[2J");
    let _ = std::io::stdout().flush();
    CommandOutcome::Continue
}
