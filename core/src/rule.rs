// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Repeat rule grammar.
//!
//! ```txt
//! rule     = daily / yearly / weekly / monthly
//! daily    = "d" SP interval                 ; 1..=400
//! yearly   = "y"
//! weekly   = "w" SP weekday *("," weekday)   ; 1 (Monday) ..= 7 (Sunday)
//! monthly  = "m" SP day *("," day) [SP month *("," month)]
//! day      = 1..=31 / "-1" / "-2"            ; last / second-to-last day of month
//! month    = 1..=12
//! ```
//!
//! Tokens are separated by any amount of whitespace.

use std::collections::BTreeSet;
use std::fmt::{self, Display};
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::error::{Argument, RepeatError};

const INTERVAL_RANGE: RangeInclusive<i64> = 1..=400;
const WEEKDAY_RANGE: RangeInclusive<i64> = 1..=7;
const MONTH_DAY_RANGE: RangeInclusive<i64> = 1..=31;
const MONTH_RANGE: RangeInclusive<i64> = 1..=12;

const DAY_LAST: i64 = -1;
const DAY_SECOND_TO_LAST: i64 = -2;

/// A parsed repeat rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RepeatRule {
    /// Every `interval` days after the anchor.
    Daily {
        /// Days between occurrences, 1 to 400
        interval: u16,
    },

    /// Every year on the anchor's month and day.
    Yearly,

    /// On the given days of the week.
    Weekly {
        /// ISO weekdays, 1 (Monday) to 7 (Sunday), never empty
        weekdays: BTreeSet<i8>,
    },

    /// On the given days of the month, optionally only in some months.
    Monthly {
        /// Days of the month, never empty
        days: BTreeSet<DayToken>,
        /// Months 1 to 12; empty means every month
        months: BTreeSet<i8>,
    },
}

impl RepeatRule {
    /// The kind of the rule.
    pub const fn kind(&self) -> RuleKind {
        match self {
            RepeatRule::Daily { .. } => RuleKind::Daily,
            RepeatRule::Yearly => RuleKind::Yearly,
            RepeatRule::Weekly { .. } => RuleKind::Weekly,
            RepeatRule::Monthly { .. } => RuleKind::Monthly,
        }
    }
}

impl FromStr for RepeatRule {
    type Err = RepeatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let kind: RuleKind = tokens.next().ok_or(RepeatError::EmptyRule)?.parse()?;

        let rule = match kind {
            RuleKind::Daily => {
                let token = tokens.next().ok_or(RepeatError::MissingArgument {
                    kind,
                    argument: Argument::Interval,
                })?;
                let interval = parse_number(token, Argument::Interval, INTERVAL_RANGE)?;
                RepeatRule::Daily { interval }
            }
            RuleKind::Yearly => RepeatRule::Yearly,
            RuleKind::Weekly => {
                let token = tokens.next().ok_or(RepeatError::MissingArgument {
                    kind,
                    argument: Argument::Weekday,
                })?;
                let weekdays = parse_list(token, |a| {
                    parse_number(a, Argument::Weekday, WEEKDAY_RANGE)
                })?;
                RepeatRule::Weekly { weekdays }
            }
            RuleKind::Monthly => {
                let token = tokens.next().ok_or(RepeatError::MissingArgument {
                    kind,
                    argument: Argument::MonthDay,
                })?;
                let days = parse_list(token, str::parse::<DayToken>)?;
                let months = match tokens.next() {
                    Some(token) => parse_list(token, |a| {
                        parse_number(a, Argument::Month, MONTH_RANGE)
                    })?,
                    None => BTreeSet::new(),
                };
                RepeatRule::Monthly { days, months }
            }
        };

        if let Some(token) = tokens.next() {
            return Err(RepeatError::UnexpectedArgument {
                kind,
                token: token.to_owned(),
            });
        }

        tracing::trace!(?rule, "parsed repeat rule");
        Ok(rule)
    }
}

impl Display for RepeatRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind())?;
        match self {
            RepeatRule::Daily { interval } => write!(f, " {interval}"),
            RepeatRule::Yearly => Ok(()),
            RepeatRule::Weekly { weekdays } => write!(f, " {}", join(weekdays)),
            RepeatRule::Monthly { days, months } => {
                write!(f, " {}", join(days))?;
                if !months.is_empty() {
                    write!(f, " {}", join(months))?;
                }
                Ok(())
            }
        }
    }
}

/// The kind of a repeat rule, i.e. its leading token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// `d`
    Daily,
    /// `y`
    Yearly,
    /// `w`
    Weekly,
    /// `m`
    Monthly,
}

const KIND_DAILY: &str = "d";
const KIND_YEARLY: &str = "y";
const KIND_WEEKLY: &str = "w";
const KIND_MONTHLY: &str = "m";

impl AsRef<str> for RuleKind {
    fn as_ref(&self) -> &str {
        match self {
            RuleKind::Daily => KIND_DAILY,
            RuleKind::Yearly => KIND_YEARLY,
            RuleKind::Weekly => KIND_WEEKLY,
            RuleKind::Monthly => KIND_MONTHLY,
        }
    }
}

impl Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for RuleKind {
    type Err = RepeatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            KIND_DAILY => Ok(RuleKind::Daily),
            KIND_YEARLY => Ok(RuleKind::Yearly),
            KIND_WEEKLY => Ok(RuleKind::Weekly),
            KIND_MONTHLY => Ok(RuleKind::Monthly),
            _ => Err(RepeatError::UnsupportedRuleKind { kind: s.to_owned() }),
        }
    }
}

/// A day specifier of a monthly rule.
///
/// The variant order makes sets list plain days first, then `-2`, then `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DayToken {
    /// A day of the month, 1 to 31.
    Day(i8),

    /// The day before the last day of the month, written `-2`.
    SecondToLastDay,

    /// The last day of the month, written `-1`.
    LastDay,
}

impl Display for DayToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayToken::Day(day) => write!(f, "{day}"),
            DayToken::SecondToLastDay => write!(f, "{DAY_SECOND_TO_LAST}"),
            DayToken::LastDay => write!(f, "{DAY_LAST}"),
        }
    }
}

impl FromStr for DayToken {
    type Err = RepeatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_integer(s, Argument::MonthDay)? {
            DAY_LAST => Ok(DayToken::LastDay),
            DAY_SECOND_TO_LAST => Ok(DayToken::SecondToLastDay),
            _ => parse_number(s, Argument::MonthDay, MONTH_DAY_RANGE).map(DayToken::Day),
        }
    }
}

fn parse_integer(token: &str, argument: Argument) -> Result<i64, RepeatError> {
    token.parse().map_err(|_| RepeatError::MalformedNumber {
        argument,
        token: token.to_owned(),
    })
}

fn parse_number<T: TryFrom<i64>>(
    token: &str,
    argument: Argument,
    range: RangeInclusive<i64>,
) -> Result<T, RepeatError> {
    let value = parse_integer(token, argument)?;
    let out_of_range = || RepeatError::OutOfRange { argument, value };
    if !range.contains(&value) {
        return Err(out_of_range());
    }
    T::try_from(value).map_err(|_| out_of_range())
}

/// Parse a comma-separated list; duplicates collapse and the first invalid entry fails the list.
fn parse_list<T, F>(token: &str, f: F) -> Result<BTreeSet<T>, RepeatError>
where
    T: Ord,
    F: Fn(&str) -> Result<T, RepeatError>,
{
    token.split(',').map(f).collect()
}

fn join<T: Display>(items: &BTreeSet<T>) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
