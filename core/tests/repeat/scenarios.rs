// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Concrete next-date scenarios.

use taskcal_core::RepeatError;

use crate::common::next;

#[test]
fn daily_interval() {
    assert_eq!(next("20240110", "20240110", "d 5").unwrap(), "20240115");
}

#[test]
fn yearly_same_day_next_year() {
    assert_eq!(next("20240201", "20240115", "y").unwrap(), "20250115");
}

#[test]
fn weekly_monday_and_wednesday() {
    assert_eq!(next("20240304", "20240301", "w 1,3").unwrap(), "20240306");
}

#[test]
fn monthly_last_day_in_leap_february() {
    assert_eq!(next("20240227", "20240101", "m -1").unwrap(), "20240229");
}

#[test]
fn monthly_quarterly_fifteenth() {
    assert_eq!(
        next("20240501", "20240101", "m 15 3,6,9,12").unwrap(),
        "20240615"
    );
}

#[test]
fn empty_rule() {
    assert_eq!(
        next("20240101", "20240101", ""),
        Err(RepeatError::EmptyRule)
    );
}

#[test]
fn table_of_cases() {
    for (now, start, repeat, expected) in [
        ("20240126", "20240113", "d 7", "20240127"),
        ("20240126", "20240120", "d 20", "20240209"),
        ("20240126", "20240202", "d 30", "20240303"),
        ("20240126", "20231106", "m 13", "20240213"),
        ("20240126", "20240120", "m 25", "20240225"),
        ("20240126", "20240126", "w 1,2,3", "20240129"),
        ("20240126", "20240126", "w 7", "20240128"),
        ("20240126", "20240409", "m 31", "20240531"),
        ("20240126", "20240329", "m 10,17", "20240410"),
        ("20240126", "20230311", "m 07,19 05,6", "20240507"),
        ("20240126", "20230311", "m 1 1,2", "20240201"),
        ("20240126", "20240127", "m -1", "20240131"),
        ("20240126", "20240222", "m -2", "20240228"),
        ("20240126", "20240326", "m -1,-2", "20240330"),
        ("20240126", "20240201", "m -1,18", "20240218"),
        ("20240126", "20161001", "y", "20241001"),
        ("20240126", "20240229", "y", "20250301"),
        ("20280101", "20240229", "y", "20280301"),
        ("20280301", "20240229", "y", "20290301"),
        ("20240126", "20250701", "y", "20260701"),
    ] {
        assert_eq!(
            next(now, start, repeat).as_deref(),
            Ok(expected),
            "Failed for now={now} start={start} repeat='{repeat}'"
        );
    }
}
