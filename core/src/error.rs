// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::{self, Display};

use jiff::civil::Date;

use crate::rule::RuleKind;

/// Errors produced while parsing a repeat rule or computing the next date.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepeatError {
    /// The repeat rule text is empty or only whitespace.
    #[error("empty repeat rule")]
    EmptyRule,

    /// The anchor date is not an 8-digit `YYYYMMDD` calendar date.
    #[error("invalid date format: '{value}', expected YYYYMMDD")]
    InvalidAnchorDate {
        /// The rejected input
        value: String,
    },

    /// The first token does not name a known rule kind.
    #[error("unsupported repeat format {kind}")]
    UnsupportedRuleKind {
        /// The unknown kind token
        kind: String,
    },

    /// A rule kind requires a parameter that is absent.
    #[error("missing {argument} for '{kind}' rule")]
    MissingArgument {
        /// The rule being parsed
        kind: RuleKind,
        /// The absent parameter
        argument: Argument,
    },

    /// A numeric argument violates its bound.
    #[error("{argument} should be {}, got {value}", .argument.bounds())]
    OutOfRange {
        /// The parameter being parsed
        argument: Argument,
        /// The rejected value
        value: i64,
    },

    /// A token expected to be an integer is not one.
    #[error("invalid {argument}: '{token}'")]
    MalformedNumber {
        /// The parameter being parsed
        argument: Argument,
        /// The rejected token
        token: String,
    },

    /// A token follows a complete rule.
    #[error("unexpected argument '{token}' for '{kind}' rule")]
    UnexpectedArgument {
        /// The rule being parsed
        kind: RuleKind,
        /// The first surplus token
        token: String,
    },

    /// No date within the search horizon satisfies the rule.
    #[error("no date matches the repeat rule within {years} years after {after}")]
    NoMatchFound {
        /// The last date that was ruled out before searching
        after: Date,
        /// The search horizon
        years: i16,
    },

    /// Date arithmetic left the supported calendar range.
    #[error("date out of the supported range")]
    DateOutOfRange,
}

impl From<jiff::Error> for RepeatError {
    fn from(e: jiff::Error) -> Self {
        tracing::debug!(err = %e, "date arithmetic failed");
        Self::DateOutOfRange
    }
}

/// A positional parameter of a repeat rule, used to describe parse errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Argument {
    /// `d <interval>`
    Interval,

    /// An entry of `w <weekdays>`
    Weekday,

    /// An entry of the first list of `m <days> [<months>]`
    MonthDay,

    /// An entry of the second list of `m <days> [<months>]`
    Month,
}

impl Argument {
    /// The accepted values, for humans.
    pub const fn bounds(self) -> &'static str {
        match self {
            Argument::Interval => "between 1 and 400",
            Argument::Weekday => "between 1 and 7",
            Argument::MonthDay => "between 1 and 31, or -1 / -2",
            Argument::Month => "between 1 and 12",
        }
    }
}

impl Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Interval => write!(f, "interval"),
            Argument::Weekday => write!(f, "day of week"),
            Argument::MonthDay => write!(f, "day of month"),
            Argument::Month => write!(f, "month"),
        }
    }
}

/// Errors produced while normalizing or completing a task.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskError {
    /// The task has no title.
    #[error("title is required")]
    MissingTitle,

    /// An update of a stored task carries no id.
    #[error("task id is required")]
    MissingId,

    /// The task date is not an 8-digit `YYYYMMDD` calendar date.
    #[error("invalid date format: '{value}', expected YYYYMMDD")]
    InvalidDate {
        /// The rejected input
        value: String,
    },

    /// The repeat rule could not be parsed or evaluated.
    #[error("invalid repeat rule: {0}")]
    InvalidRepeat(#[from] RepeatError),
}
