// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use clap::{Arg, ArgMatches, arg};
use jiff::civil::Date;
use taskcal_core::parse_date;

#[derive(Debug, Clone, Copy)]
pub struct TaskArgs;

impl TaskArgs {
    pub fn id() -> Arg {
        arg!(--id <ID> "Identifier of the stored task")
    }

    pub fn get_id(matches: &ArgMatches) -> Option<String> {
        matches.get_one("id").cloned()
    }

    pub fn title() -> Arg {
        arg!(-t --title <TITLE> "Title of the task")
    }

    pub fn get_title(matches: &ArgMatches) -> Option<String> {
        matches.get_one("title").cloned()
    }

    pub fn comment() -> Arg {
        arg!(--comment <COMMENT> "Comment of the task")
    }

    pub fn get_comment(matches: &ArgMatches) -> Option<String> {
        matches.get_one("comment").cloned()
    }

    pub fn date() -> Arg {
        arg!(-d --date <DATE> "Due date of the task (YYYYMMDD)")
    }

    pub fn get_date(matches: &ArgMatches) -> Option<String> {
        matches.get_one("date").cloned()
    }

    pub fn repeat() -> Arg {
        arg!(-r --repeat <RULE> "Repeat rule, e.g. 'd 5', 'y', 'w 1,3' or 'm -1 2,8'")
    }

    pub fn get_repeat(matches: &ArgMatches) -> Option<String> {
        matches.get_one("repeat").cloned()
    }

    pub fn now() -> Arg {
        arg!(--now <NOW> "Reference date (YYYYMMDD), defaults to today").value_parser(date_value)
    }

    pub fn get_now(matches: &ArgMatches) -> Option<Date> {
        matches.get_one("now").copied()
    }
}

fn date_value(s: &str) -> Result<Date, String> {
    parse_date(s).ok_or_else(|| format!("invalid date '{s}', expected YYYYMMDD"))
}
