//! Shell entry points: a line-edited interactive loop and a stdin-driven
//! script mode (enabled by `SUBTALLY_CLI_SCRIPT`) used by integration tests.
//!
//! Both modes feed whole lines to [`ShellContext::execute_line`]; the loop
//! here only decides where lines come from and how failures are surfaced.

use std::io::{self, BufRead};

use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::Validator,
    Cmd, Context as ReadlineContext, Editor, Helper, KeyEvent,
};

use crate::cli::core::{CliError, CliMode, LoopControl, ShellContext};
use crate::cli::output;

pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os("SUBTALLY_CLI_SCRIPT").is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let mut context = ShellContext::new(mode)?;
    match mode {
        CliMode::Script => drive_stdin(&mut context),
        CliMode::Interactive => drive_readline(&mut context),
    }
}

/// Runs one input line, reporting command failures without leaving the loop.
fn step(context: &mut ShellContext, line: &str) -> LoopControl {
    match context.execute_line(line) {
        Ok(control) => control,
        Err(err) => {
            output::error(err);
            LoopControl::Continue
        }
    }
}

fn drive_stdin(context: &mut ShellContext) -> Result<(), CliError> {
    for line in io::stdin().lock().lines() {
        if step(context, &line?) == LoopControl::Exit {
            break;
        }
    }
    Ok(())
}

fn drive_readline(context: &mut ShellContext) -> Result<(), CliError> {
    let mut editor = Editor::<ShellCompleter, DefaultHistory>::new()?;
    editor.set_helper(Some(ShellCompleter::new(context.command_names())));
    editor.bind_sequence(KeyEvent::from('?'), Cmd::Complete);

    while context.running {
        match editor.readline(&context.prompt()) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                editor.add_history_entry(line).ok();
                if step(context, line) == LoopControl::Exit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                if context.confirm_exit() {
                    break;
                }
            }
            Err(ReadlineError::Eof) => {
                output::info("Exiting shell.");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

const DISPLAY_CHOICES: &[&str] = &["day", "month", "year"];
const BILLING_CHOICES: &[&str] = &["month", "year"];

/// Tab completion for the shell. The first token completes from the command
/// registry; enum-valued arguments (`period <...>`, the cadence of `add`)
/// complete from their closed sets. Row numbers and free text get nothing.
struct ShellCompleter {
    commands: Vec<&'static str>,
}

impl ShellCompleter {
    fn new(mut commands: Vec<&'static str>) -> Self {
        commands.sort_unstable();
        Self { commands }
    }

    fn argument_choices(command: &str, index: usize) -> &'static [&'static str] {
        match (command, index) {
            ("period", 1) => DISPLAY_CHOICES,
            // add <name> <price> <month|year>
            ("add", 3) => BILLING_CHOICES,
            _ => &[],
        }
    }
}

impl Helper for ShellCompleter {}

impl Completer for ShellCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let prefix = &line[..pos];
        let start = prefix
            .rfind(char::is_whitespace)
            .map(|idx| idx + 1)
            .unwrap_or(0);
        let word = prefix[start..].to_ascii_lowercase();

        let mut earlier = prefix[..start].split_whitespace();
        let pool: &[&'static str] = match earlier.next() {
            None => &self.commands,
            Some(command) => {
                let index = 1 + earlier.count();
                Self::argument_choices(&command.to_ascii_lowercase(), index)
            }
        };

        let candidates = pool
            .iter()
            .filter(|choice| choice.starts_with(&word))
            .map(|choice| Pair {
                display: choice.to_string(),
                replacement: choice.to_string(),
            })
            .collect();
        Ok((start, candidates))
    }
}

impl Hinter for ShellCompleter {
    type Hint = String;
}

impl Highlighter for ShellCompleter {}

impl Validator for ShellCompleter {}
