//! Command selection and dispatch.
//!
//! Only the first argument names the command; anything after it is ignored.
//! Help and version flags are disabled so every other input falls through to
//! the usage line.

use crate::commands;
use crate::download::Fetcher;
use crate::paths::{Artifacts, Layout};
use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::ffi::OsString;

#[derive(Parser)]
#[command(
    name = "jstd",
    about = "Install and drive JsTestDriver for the current project",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Command to run
    #[arg(value_enum)]
    pub command: Option<Command>,

    /// Ignored
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub rest: Vec<OsString>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Download the runner and coverage plugin into ./jstestdriver
    Setup,

    /// Start the capture server on port 2309 with google-chrome
    Runserver,

    /// Run all tests against the captured browsers
    Runtests,
}

/// Outcome of reading the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// A known command was given
    Run(Command),
    /// Missing, unknown or malformed command
    Usage,
}

pub fn usage() -> String {
    let names: Vec<String> = Command::value_variants()
        .iter()
        .filter_map(|command| command.to_possible_value())
        .map(|value| value.get_name().to_string())
        .collect();
    format!("Choose a command, one of: {}", names.join(", "))
}

/// Parse `args` (including the program name) into a selection.
pub fn select<I, T>(args: I) -> Selection
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(Cli {
            command: Some(command),
            ..
        }) => Selection::Run(command),
        _ => Selection::Usage,
    }
}

/// Run `command` once against the working directory.
///
/// Returns the exit code the process should end with.
pub fn run(command: Command) -> Result<i32> {
    let artifacts = Artifacts::default();
    let layout = Layout::current(&artifacts)?;

    match command {
        Command::Setup => {
            let fetcher = Fetcher::new()?;
            commands::setup::execute(&layout, &artifacts, &fetcher)?;
            Ok(0)
        }
        Command::Runserver => commands::runserver::execute(&layout),
        Command::Runtests => commands::runtests::execute(&layout),
    }
}
