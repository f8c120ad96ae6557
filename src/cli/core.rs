//! Core CLI loop, dispatch, and shell context helpers.

use std::io;

use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Confirm};
use strsim::levenshtein;
use thiserror::Error;
use uuid::Uuid;

use crate::cli::forms::{format_amount, run_add_wizard, FormResult, ValidationError};
use crate::cli::output;
use crate::cli::state::CliState;
use crate::domain::DisplayPeriod;
use crate::errors::TrackerError;
use crate::tracker::totals;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

/// Errors that abort the shell itself.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Readline(#[from] rustyline::error::ReadlineError),
}

/// Errors produced by individual commands; reported and recovered from.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Tracker(#[from] TrackerError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        CommandError::InvalidArguments(err.message)
    }
}

pub type CommandResult = Result<(), CommandError>;

const COMMANDS: &[(&str, &str)] = &[
    ("add", "add [name price month|year]  record a subscription (no args: guided form)"),
    ("list", "list                         show entries and the current total"),
    ("toggle", "toggle <row>                 include or exclude an entry"),
    ("remove", "remove <row>                 delete an entry"),
    ("period", "period <day|month|year>      set the display period"),
    ("total", "total                        print the aggregate cost"),
    ("json", "json                         dump the tracker state as JSON"),
    ("help", "help                         show this overview"),
    ("exit", "exit                         leave the shell"),
];

/// Shell session: tracker state plus interactive metadata.
pub struct ShellContext {
    mode: CliMode,
    pub(crate) state: CliState,
    theme: ColorfulTheme,
    pub(crate) running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        Ok(Self {
            mode,
            state: CliState::new(),
            theme: ColorfulTheme::default(),
            running: true,
        })
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        COMMANDS.iter().map(|(name, _)| *name).collect()
    }

    pub(crate) fn prompt(&self) -> String {
        format!("subtally ({})> ", self.state.display_period)
    }

    /// Tokenizes one input line and dispatches it. Blank lines are no-ops;
    /// `exit` flips [`Self::running`] so both loop drivers stop.
    pub(crate) fn execute_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = shell_words::split(line)
            .map_err(|err| CommandError::InvalidArguments(err.to_string()))?;
        let Some((raw, rest)) = tokens.split_first() else {
            return Ok(LoopControl::Continue);
        };

        let command = raw.to_lowercase();
        let args: Vec<&str> = rest.iter().map(String::as_str).collect();
        let control = self.dispatch(&command, raw, &args)?;
        if control == LoopControl::Exit {
            self.running = false;
        }
        Ok(control)
    }

    fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        match command {
            "add" => self.cmd_add(args)?,
            "list" | "ls" => self.cmd_list(),
            "toggle" => self.cmd_toggle(args)?,
            "remove" | "rm" | "delete" => self.cmd_remove(args)?,
            "period" => self.cmd_period(args)?,
            "total" => self.cmd_total(),
            "json" => self.cmd_json()?,
            "help" => self.cmd_help(),
            "exit" | "quit" => return Ok(LoopControl::Exit),
            _ => self.suggest_command(raw),
        }
        Ok(LoopControl::Continue)
    }

    fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let mut suggestions: Vec<_> = self
            .command_names()
            .into_iter()
            .map(|name| (levenshtein(name, input), name))
            .collect();
        suggestions.sort_by_key(|(distance, _)| *distance);

        if let Some((distance, best)) = suggestions.first() {
            if *distance <= 3 {
                output::info(format!("Suggestion: `{}`?", best));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> bool {
        if self.mode == CliMode::Script {
            return true;
        }
        // A broken prompt should not trap the user in the shell.
        Confirm::with_theme(&self.theme)
            .with_prompt("Exit shell?")
            .default(true)
            .interact()
            .unwrap_or(true)
    }

    fn cmd_add(&mut self, args: &[&str]) -> CommandResult {
        match args {
            [] => {
                if self.mode == CliMode::Script {
                    return Err(CommandError::InvalidArguments(
                        "Usage: add <name> <price> <month|year>".into(),
                    ));
                }
                match run_add_wizard(&self.theme, &mut self.state.draft)? {
                    FormResult::Completed(()) => self.commit_draft(),
                    FormResult::Cancelled => {
                        output::info("Add cancelled.");
                        Ok(())
                    }
                }
            }
            [name, price, period] => {
                self.state.draft.name = (*name).to_string();
                self.state.draft.price = (*price).to_string();
                self.state.draft.period = period.parse()?;
                self.commit_draft()
            }
            _ => Err(CommandError::InvalidArguments(
                "Usage: add <name> <price> <month|year>".into(),
            )),
        }
    }

    /// Validates the draft, stores the entry, and resets the fields. The
    /// draft keeps its values when validation fails.
    fn commit_draft(&mut self) -> CommandResult {
        let subscription = self.state.draft.commit()?;
        let name = subscription.name.clone();
        self.state.tracker.add(subscription);
        self.state.draft.reset();
        output::success(format!("Added `{}`.", name));
        Ok(())
    }

    fn cmd_list(&self) {
        if self.state.tracker.is_empty() {
            output::info("No subscriptions recorded.");
            return;
        }
        for (index, sub) in self.state.tracker.subscriptions().iter().enumerate() {
            let mark = if sub.enabled { "[x]" } else { "[ ]" };
            let line = format!(
                "{:>3} {} {}  {} / {}",
                index + 1,
                mark,
                sub.name,
                format_amount(sub.price),
                sub.period.label()
            );
            if sub.enabled {
                println!("{line}");
            } else {
                println!("{}", line.dimmed());
            }
        }
        self.cmd_total();
    }

    fn cmd_toggle(&mut self, args: &[&str]) -> CommandResult {
        let id = self.resolve_row(args, "Usage: toggle <row>")?;
        let enabled = self.state.tracker.toggle(id)?;
        let name = self.entry_name(id);
        if enabled {
            output::success(format!("`{}` counts toward the total again.", name));
        } else {
            output::info(format!("`{}` is excluded from the total.", name));
        }
        Ok(())
    }

    fn cmd_remove(&mut self, args: &[&str]) -> CommandResult {
        let id = self.resolve_row(args, "Usage: remove <row>")?;
        let removed = self.state.tracker.remove(id)?;
        output::success(format!("Removed `{}`.", removed.name));
        Ok(())
    }

    fn cmd_period(&mut self, args: &[&str]) -> CommandResult {
        let raw = args.first().ok_or_else(|| {
            CommandError::InvalidArguments("Usage: period <day|month|year>".into())
        })?;
        let period: DisplayPeriod = raw.parse()?;
        self.state.display_period = period;
        output::info(format!("Display period set to {}.", period));
        Ok(())
    }

    fn cmd_total(&self) {
        let period = self.state.display_period;
        let amount = totals::total(self.state.tracker.subscriptions(), period);
        println!("Total: {} / {}", format_amount(amount), period.label());
    }

    fn cmd_json(&self) -> CommandResult {
        let json = serde_json::to_string_pretty(&self.state.tracker)?;
        println!("{json}");
        Ok(())
    }

    fn cmd_help(&self) {
        output::section("Commands");
        for (_, description) in COMMANDS {
            println!("  {description}");
        }
    }

    /// Resolves a 1-based row argument to the stable id of the entry shown on
    /// that row. Rows are display positions only; mutation goes through ids.
    fn resolve_row(&self, args: &[&str], usage: &str) -> Result<Uuid, CommandError> {
        let raw = args
            .first()
            .ok_or_else(|| CommandError::InvalidArguments(usage.into()))?;
        let row: usize = raw.parse().map_err(|_| {
            CommandError::InvalidArguments(format!("`{raw}` is not a row number"))
        })?;
        let subscriptions = self.state.tracker.subscriptions();
        if row == 0 || row > subscriptions.len() {
            return Err(CommandError::InvalidArguments(format!(
                "Row {} is out of range (the list has {} entries)",
                row,
                subscriptions.len()
            )));
        }
        Ok(subscriptions[row - 1].id)
    }

    fn entry_name(&self, id: Uuid) -> String {
        self.state
            .tracker
            .get(id)
            .map(|sub| sub.name.clone())
            .unwrap_or_else(|| id.to_string())
    }

    #[cfg(test)]
    pub(crate) fn entry(&self, row: usize) -> Option<&crate::domain::Subscription> {
        self.state.tracker.subscriptions().get(row - 1)
    }
}
