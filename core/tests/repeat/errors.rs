// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Rejected inputs.

use taskcal_core::{Argument, RepeatError, RuleKind, SEARCH_HORIZON_YEARS};

use crate::common::{next, ymd};

#[test]
fn interval_bounds() {
    assert_eq!(next("20240101", "20240101", "d 400").unwrap(), "20250204");
    assert_eq!(
        next("20240101", "20240101", "d 401"),
        Err(RepeatError::OutOfRange {
            argument: Argument::Interval,
            value: 401
        })
    );
    assert_eq!(
        next("20240101", "20240101", "d 0"),
        Err(RepeatError::OutOfRange {
            argument: Argument::Interval,
            value: 0
        })
    );
}

#[test]
fn invalid_anchor_dates() {
    for start in ["", "2024011", "20240230", "2024-01-01", "abcdefgh"] {
        assert_eq!(
            next("20240101", start, "d 1"),
            Err(RepeatError::InvalidAnchorDate {
                value: start.to_owned()
            }),
            "Failed for start='{start}'"
        );
    }
}

#[test]
fn malformed_rules() {
    for (repeat, check) in [
        ("k 34", "unsupported"),
        ("ooo", "unsupported"),
        ("d", "missing"),
        ("d x", "invalid"),
        ("w", "missing"),
        ("w 1,8", "should be"),
        ("w 0", "should be"),
        ("m", "missing"),
        ("m 32", "should be"),
        ("m -3", "should be"),
        ("m 15 13", "should be"),
        ("m 1,a", "invalid"),
        ("y 1", "unexpected"),
    ] {
        let err = next("20240126", "20240126", repeat).unwrap_err();
        assert!(
            err.to_string().contains(check),
            "'{repeat}' gave '{err}', expected it to mention '{check}'"
        );
    }
}

#[test]
fn missing_argument_names_the_rule() {
    assert_eq!(
        next("20240126", "20240126", "m"),
        Err(RepeatError::MissingArgument {
            kind: RuleKind::Monthly,
            argument: Argument::MonthDay
        })
    );
}

#[test]
fn unsatisfiable_monthly_rule() {
    assert_eq!(
        next("20240126", "20240101", "m 31 2,4,6,9,11"),
        Err(RepeatError::NoMatchFound {
            after: ymd("20240126"),
            years: SEARCH_HORIZON_YEARS
        })
    );
}
