// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Next-occurrence engine for recurring tasks.
//!
//! A task carries an anchor date and a compact repeat rule such as `d 5`,
//! `y`, `w 1,3` or `m -1 2,8`. [`compute_next_date`] returns the first date
//! matching the rule that is strictly after a reference date.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
#![allow(clippy::missing_errors_doc, clippy::must_use_candidate)]

mod advance;
mod config;
mod datetime;
mod error;
mod rule;
mod task;

pub use crate::advance::SEARCH_HORIZON_YEARS;
pub use crate::config::{APP_NAME, Config, ConfigDate};
pub use crate::datetime::{STABLE_FORMAT_DATEONLY, format_date, parse_date, today};
pub use crate::error::{Argument, RepeatError, TaskError};
pub use crate::rule::{DayToken, RepeatRule, RuleKind};
pub use crate::task::{Completion, Task};

use jiff::civil::Date;

/// Compute the next occurrence of `repeat`, anchored at `start`, strictly after `now`.
///
/// `start` and the result use the `YYYYMMDD` form. The rule is parsed on every call.
///
/// ```
/// use jiff::civil::date;
///
/// let next = taskcal_core::compute_next_date(date(2024, 1, 10), "20240110", "d 5").unwrap();
/// assert_eq!(next, "20240115");
/// ```
#[tracing::instrument(level = "debug", err)]
pub fn compute_next_date(now: Date, start: &str, repeat: &str) -> Result<String, RepeatError> {
    if repeat.trim().is_empty() {
        return Err(RepeatError::EmptyRule);
    }

    let start = parse_date(start).ok_or_else(|| RepeatError::InvalidAnchorDate {
        value: start.to_owned(),
    })?;
    let rule: RepeatRule = repeat.parse()?;
    let next = rule.next_after(start, now)?;
    Ok(format_date(next))
}
