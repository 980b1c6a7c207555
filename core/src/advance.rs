// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Advancing an anchor date to the next occurrence of a repeat rule.

use std::collections::BTreeSet;

use jiff::civil::Date;
use jiff::{Span, ToSpan};

use crate::error::RepeatError;
use crate::rule::{DayToken, RepeatRule};

/// How far the monthly walk looks ahead before giving up.
///
/// Eight years covers the longest gap between two February 29ths
/// (e.g. 2096-02-29 to 2104-02-29), so every satisfiable rule is found.
pub const SEARCH_HORIZON_YEARS: i16 = 8;

const DAYS_PER_WEEK: usize = 7;

impl RepeatRule {
    /// The earliest date matching the rule that is strictly after both `start` and `now`.
    ///
    /// Daily and yearly rules step forward from `start`; weekly and
    /// monthly rules take the first matching day after `max(start, now)`.
    #[tracing::instrument(level = "debug", ret, err)]
    pub fn next_after(&self, start: Date, now: Date) -> Result<Date, RepeatError> {
        match self {
            RepeatRule::Daily { interval } => next_daily(start, now, *interval),
            RepeatRule::Yearly => next_yearly(start, now),
            RepeatRule::Weekly { weekdays } => next_weekly(start, now, weekdays),
            RepeatRule::Monthly { days, months } => next_monthly(start, now, days, months),
        }
    }
}

/// `start + k * interval` for the smallest `k >= 1` past `now`.
fn next_daily(start: Date, now: Date, interval: u16) -> Result<Date, RepeatError> {
    let interval = i64::from(interval);
    let steps = if now < start {
        1
    } else {
        let elapsed = i64::from(start.until(now)?.get_days());
        elapsed / interval + 1
    };

    let days = steps * interval;
    Ok(start.checked_add(Span::new().try_days(days)?)?)
}

/// Step one year at a time from `start` until past `now`.
///
/// Each step starts from the previous result, so a Feb 29 anchor that
/// overflowed to Mar 1 stays on Mar 1 in later years.
fn next_yearly(start: Date, now: Date) -> Result<Date, RepeatError> {
    let mut date = add_years(start, 1)?;
    while date <= now {
        date = add_years(date, 1)?;
    }
    Ok(date)
}

/// Move `date` by whole years, keeping month and day where the target year has
/// them. A missing day overflows into the next month, so Feb 29 becomes Mar 1.
fn add_years(date: Date, years: i16) -> Result<Date, RepeatError> {
    let year = date
        .year()
        .checked_add(years)
        .ok_or(RepeatError::DateOutOfRange)?;
    let first = Date::new(year, date.month(), 1)?;
    Ok(first.checked_add(i64::from(date.day() - 1).days())?)
}

fn next_weekly(start: Date, now: Date, weekdays: &BTreeSet<i8>) -> Result<Date, RepeatError> {
    let mut date = start.max(now);
    for _ in 0..DAYS_PER_WEEK {
        date = date.tomorrow()?;
        if weekdays.contains(&date.weekday().to_monday_one_offset()) {
            return Ok(date);
        }
    }

    // Only reachable with an empty weekday set, which the parser never produces.
    Err(RepeatError::NoMatchFound {
        after: start.max(now),
        years: 0,
    })
}

fn next_monthly(
    start: Date,
    now: Date,
    days: &BTreeSet<DayToken>,
    months: &BTreeSet<i8>,
) -> Result<Date, RepeatError> {
    let after = start.max(now);
    let horizon = after
        .checked_add(SEARCH_HORIZON_YEARS.years())
        .unwrap_or(Date::MAX);

    let mut date = after;
    while date < horizon {
        date = date.tomorrow()?;

        if !months.is_empty() && !months.contains(&date.month()) {
            tracing::trace!(%date, "skipping month");
            date = date.last_of_month();
            continue;
        }

        if matches_month_day(date, days) {
            return Ok(date);
        }
    }

    tracing::debug!(%after, ?days, ?months, "no matching day within search horizon");
    Err(RepeatError::NoMatchFound {
        after,
        years: SEARCH_HORIZON_YEARS,
    })
}

fn matches_month_day(date: Date, days: &BTreeSet<DayToken>) -> bool {
    let last = date.last_of_month().day();
    let day = date.day();
    days.contains(&DayToken::Day(day))
        || (day == last && days.contains(&DayToken::LastDay))
        || (day == last - 1 && days.contains(&DayToken::SecondToLastDay))
}
