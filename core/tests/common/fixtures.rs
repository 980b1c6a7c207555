// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::ToSpan;
use jiff::civil::Date;
use taskcal_core::{RepeatError, compute_next_date, parse_date};

/// Parse a `YYYYMMDD` literal, panicking on typos in the test itself.
pub fn ymd(s: &str) -> Date {
    parse_date(s).unwrap_or_else(|| panic!("bad test date: {s}"))
}

/// `compute_next_date` with the reference date given as `YYYYMMDD` too.
pub fn next(now: &str, start: &str, repeat: &str) -> Result<String, RepeatError> {
    compute_next_date(ymd(now), start, repeat)
}

/// Every day from `from` (inclusive) for `count` days.
pub fn each_day(from: Date, count: i64) -> impl Iterator<Item = Date> {
    (0..count).map(move |i| from.checked_add(i.days()).unwrap())
}
