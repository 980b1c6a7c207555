// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, io, path::PathBuf, process::ExitCode};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use jiff::civil::Date;
use taskcal_core::APP_NAME;
use tracing_subscriber::EnvFilter;

use crate::cmd_next::CmdNext;
use crate::cmd_rule::CmdRule;
use crate::cmd_task::{CmdTaskDone, CmdTaskNormalize, CmdTaskUpdate};
use crate::config::parse_config;

/// Run the taskcal command-line interface.
pub async fn run() -> ExitCode {
    init_tracing();
    let result = match Cli::parse() {
        Ok(cli) => cli.run().await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so that stdout only carries command output.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Next-occurrence engine for recurring tasks.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(true)
            .arg_required_else_help(true)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/taskcal/config.toml on Linux and MacOS, \
%APPDATA%/taskcal/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath)
                    .global(true),
            )
            .subcommand(CmdNext::command())
            .subcommand(CmdRule::command())
            .subcommand(
                Command::new("task")
                    .alias("t")
                    .about("Validate and complete tasks")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdTaskNormalize::command())
                    .subcommand(CmdTaskUpdate::command())
                    .subcommand(CmdTaskDone::command()),
            )
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(&matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(&matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::{Next, Rule, TaskDone, TaskNormalize, TaskUpdate};
        let command = match matches.subcommand() {
            Some((CmdNext::NAME, matches)) => Next(CmdNext::from(matches)),
            Some((CmdRule::NAME, matches)) => Rule(CmdRule::from(matches)),
            Some(("task", matches)) => match matches.subcommand() {
                Some((CmdTaskNormalize::NAME, matches)) => {
                    TaskNormalize(CmdTaskNormalize::from(matches))
                }
                Some((CmdTaskUpdate::NAME, matches)) => TaskUpdate(CmdTaskUpdate::from(matches)),
                Some((CmdTaskDone::NAME, matches)) => TaskDone(CmdTaskDone::from(matches)),
                Some((name, _)) => return Err(format!("unknown task command: {name}").into()),
                None => return Err("missing task command".into()),
            },
            Some((name, _)) => return Err(format!("unknown command: {name}").into()),
            None => return Err("missing command".into()),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Print the next date of a repeat rule
    Next(CmdNext),

    /// Check a repeat rule
    Rule(CmdRule),

    /// Validate a task before storing it
    TaskNormalize(CmdTaskNormalize),

    /// Validate an edit of a stored task
    TaskUpdate(CmdTaskUpdate),

    /// Mark a task as done
    TaskDone(CmdTaskDone),
}

impl Commands {
    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        use Commands::{Next, Rule, TaskDone, TaskNormalize, TaskUpdate};
        match self {
            Next(a)          => Self::run_with(config, |today| a.run(today)).await,
            TaskNormalize(a) => Self::run_with(config, |today| a.run(today)).await,
            TaskUpdate(a)    => Self::run_with(config, |today| a.run(today)).await,
            TaskDone(a)      => Self::run_with(config, |today| a.run(today)).await,
            Rule(a)          => a.run(),
        }
    }

    async fn run_with<F>(config: Option<PathBuf>, f: F) -> Result<(), Box<dyn Error>>
    where
        F: FnOnce(Date) -> Result<(), Box<dyn Error>>,
    {
        tracing::debug!("parsing configuration...");
        let config = parse_config(config).await?;
        let today = config.core.today();
        tracing::debug!(%today, "resolved reference date");
        f(today)
    }
}
