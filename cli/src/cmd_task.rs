// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use jiff::civil::Date;
use taskcal_core::{Completion, Task};

use crate::arg::TaskArgs;

/// Validate a task and print it, with its date brought up to date, as JSON.
#[derive(Debug, Clone)]
pub struct CmdTaskNormalize {
    pub task: Task,
}

impl CmdTaskNormalize {
    pub const NAME: &str = "normalize";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("n")
            .about("Validate a task before it is stored and print it as JSON")
            .arg(TaskArgs::title().required(true))
            .arg(TaskArgs::date())
            .arg(TaskArgs::comment())
            .arg(TaskArgs::repeat())
            .arg(TaskArgs::id())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            task: task_from(matches),
        }
    }

    pub fn run(self, today: Date) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "normalizing task...");
        println!("{}", self.normalize(today)?);
        Ok(())
    }

    pub fn normalize(mut self, today: Date) -> Result<String, Box<dyn Error>> {
        self.task.normalize(today)?;
        Ok(serde_json::to_string_pretty(&self.task)?)
    }
}

/// Validate an edit of a stored task and print it as JSON.
#[derive(Debug, Clone)]
pub struct CmdTaskUpdate {
    pub task: Task,
}

impl CmdTaskUpdate {
    pub const NAME: &str = "update";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("u")
            .about("Validate an edit of a stored task and print it as JSON")
            .arg(TaskArgs::id().required(true))
            .arg(TaskArgs::title().required(true))
            .arg(TaskArgs::date())
            .arg(TaskArgs::comment())
            .arg(TaskArgs::repeat())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            task: task_from(matches),
        }
    }

    pub fn run(self, today: Date) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "updating task...");
        println!("{}", self.update(today)?);
        Ok(())
    }

    pub fn update(mut self, today: Date) -> Result<String, Box<dyn Error>> {
        self.task.update(today)?;
        Ok(serde_json::to_string_pretty(&self.task)?)
    }
}

/// Decide what happens to a task that is marked done.
#[derive(Debug, Clone)]
pub struct CmdTaskDone {
    pub date: String,
    pub repeat: String,
}

impl CmdTaskDone {
    pub const NAME: &str = "done";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Mark a task as done, printing its next date or 'delete'")
            .arg(TaskArgs::date().required(true))
            .arg(TaskArgs::repeat())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            date: TaskArgs::get_date(matches).unwrap_or_default(),
            repeat: TaskArgs::get_repeat(matches).unwrap_or_default(),
        }
    }

    pub fn run(self, today: Date) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "completing task...");
        println!("{}", self.complete(today)?);
        Ok(())
    }

    pub fn complete(self, today: Date) -> Result<String, Box<dyn Error>> {
        let task = Task {
            date: self.date,
            repeat: self.repeat,
            ..Default::default()
        };
        Ok(match task.complete(today)? {
            Completion::Reschedule(date) => format!("reschedule {date}"),
            Completion::Delete => "delete".to_owned(),
        })
    }
}

fn task_from(matches: &ArgMatches) -> Task {
    Task {
        id: TaskArgs::get_id(matches).unwrap_or_default(),
        date: TaskArgs::get_date(matches).unwrap_or_default(),
        title: TaskArgs::get_title(matches).unwrap_or_default(),
        comment: TaskArgs::get_comment(matches).unwrap_or_default(),
        repeat: TaskArgs::get_repeat(matches).unwrap_or_default(),
    }
}
