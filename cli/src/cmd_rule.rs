// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg};
use taskcal_core::{RepeatRule, RuleKind};

#[derive(Debug, Clone)]
pub struct CmdRule {
    pub rule: String,
}

impl CmdRule {
    pub const NAME: &str = "rule";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Check a repeat rule and print its canonical form")
            .arg(arg!(rule: <RULE> "Repeat rule, e.g. 'm 15 3,6,9,12'"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            rule: matches.get_one::<String>("rule").cloned().unwrap_or_default(),
        }
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "checking repeat rule...");
        println!("{}", self.describe()?);
        Ok(())
    }

    pub fn describe(&self) -> Result<String, Box<dyn Error>> {
        let rule: RepeatRule = self.rule.parse()?;
        let kind = match rule.kind() {
            RuleKind::Daily => "daily",
            RuleKind::Yearly => "yearly",
            RuleKind::Weekly => "weekly",
            RuleKind::Monthly => "monthly",
        };
        Ok(format!("{rule} ({kind})"))
    }
}
