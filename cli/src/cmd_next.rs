// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use jiff::civil::Date;
use taskcal_core::compute_next_date;

use crate::arg::TaskArgs;

#[derive(Debug, Clone)]
pub struct CmdNext {
    pub date: String,
    pub repeat: String,
    pub now: Option<Date>,
}

impl CmdNext {
    pub const NAME: &str = "next";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Print the next date of a repeating task")
            .arg(TaskArgs::date().required(true))
            .arg(TaskArgs::repeat().required(true))
            .arg(TaskArgs::now())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            date: TaskArgs::get_date(matches).unwrap_or_default(),
            repeat: TaskArgs::get_repeat(matches).unwrap_or_default(),
            now: TaskArgs::get_now(matches),
        }
    }

    pub fn run(self, today: Date) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "computing next date...");
        println!("{}", self.next_date(today)?);
        Ok(())
    }

    /// The next date after `--now`, or after `today` when it is not given.
    pub fn next_date(&self, today: Date) -> Result<String, Box<dyn Error>> {
        let now = self.now.unwrap_or(today);
        Ok(compute_next_date(now, &self.date, &self.repeat)?)
    }
}
