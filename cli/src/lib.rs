// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line interface for taskcal.

mod arg;
mod cli;
mod cmd_next;
mod cmd_rule;
mod cmd_task;
mod config;

pub use crate::cli::{Cli, Commands, run};
pub use crate::cmd_next::CmdNext;
pub use crate::cmd_rule::CmdRule;
pub use crate::cmd_task::{CmdTaskDone, CmdTaskNormalize, CmdTaskUpdate};
pub use crate::config::{Config, parse_config};
