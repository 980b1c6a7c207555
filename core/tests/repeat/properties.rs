// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Properties checked over ranges of anchors and reference dates.

use jiff::ToSpan;
use taskcal_core::{RepeatRule, format_date, parse_date};

use crate::common::{each_day, next, ymd};

#[test]
fn daily_is_smallest_step_past_now() {
    let anchor = ymd("20231220");
    for interval in [1_i64, 2, 7, 30, 400] {
        let repeat = format!("d {interval}");
        for now in each_day(ymd("20231201"), 90) {
            let got = ymd(&next(&format_date(now), "20231220", &repeat).unwrap());
            let steps = anchor.until(got).unwrap().get_days();
            assert!(got > now, "{repeat}: {got} not after {now}");
            assert!(steps > 0 && i64::from(steps) % interval == 0, "{repeat}: {got}");
            let previous = got.checked_sub(interval.days()).unwrap();
            assert!(
                previous == anchor || previous <= now,
                "{repeat}: {previous} would already be past {now}"
            );
        }
    }
}

#[test]
fn weekly_is_earliest_matching_weekday() {
    for repeat in ["w 1", "w 2,4", "w 6,7", "w 1,2,3,4,5,6,7"] {
        let RepeatRule::Weekly { weekdays } = repeat.parse::<RepeatRule>().unwrap() else {
            unreachable!()
        };
        for now in each_day(ymd("20240101"), 60) {
            let got = ymd(&next(&format_date(now), "20231225", repeat).unwrap());
            assert!(got > now);
            assert!(weekdays.contains(&got.weekday().to_monday_one_offset()));
            for skipped in each_day(now.tomorrow().unwrap(), now.until(got).unwrap().get_days().into()) {
                if skipped < got {
                    assert!(
                        !weekdays.contains(&skipped.weekday().to_monday_one_offset()),
                        "{repeat}: skipped {skipped} before {got}"
                    );
                }
            }
        }
    }
}

#[test]
fn monthly_last_day_is_always_month_end() {
    for now in each_day(ymd("20230101"), 800) {
        let got = ymd(&next(&format_date(now), "20221231", "m -1").unwrap());
        assert!(got > now);
        assert_eq!(got, got.last_of_month(), "{got} is not a month end");
        // The first month end after `now` is the one of the month holding `now + 1`.
        assert!(got.first_of_month() <= now.tomorrow().unwrap());
    }
}

#[test]
fn second_to_last_day_boundaries() {
    assert_eq!(next("20230201", "20230101", "m -2").unwrap(), "20230227");
    assert_eq!(next("20240201", "20240101", "m -2").unwrap(), "20240228");
    assert_eq!(next("20240701", "20240101", "m -2").unwrap(), "20240730");
    assert_eq!(next("20240601", "20240101", "m -2").unwrap(), "20240629");
}

#[test]
fn result_round_trips_through_text() {
    for (start, repeat) in [
        ("20240110", "d 5"),
        ("20240115", "y"),
        ("20240301", "w 1,3"),
        ("20240101", "m -1"),
        ("20240101", "m 15 3,6,9,12"),
        ("20240229", "y"),
    ] {
        for now in each_day(ymd("20240101"), 400) {
            let text = next(&format_date(now), start, repeat).unwrap();
            let got = parse_date(&text).unwrap();
            assert_eq!(format_date(got), text);

            let earlier = format_date(got.yesterday().unwrap());
            assert_eq!(
                next(&earlier, start, repeat).unwrap(),
                text,
                "start={start} repeat='{repeat}' now={now}"
            );
        }
    }
}
