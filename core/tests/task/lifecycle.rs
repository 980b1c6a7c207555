// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Create, update and complete flows for tasks.

use taskcal_core::{Completion, RepeatError, Task, TaskError};

use crate::common::ymd;

fn draft(date: &str, repeat: &str) -> Task {
    Task {
        date: date.to_owned(),
        title: "Pay rent".to_owned(),
        comment: "before noon".to_owned(),
        repeat: repeat.to_owned(),
        ..Default::default()
    }
}

#[test]
fn create_then_complete_repeating_task() {
    let today = ymd("20240126");

    let mut task = draft("20231231", "m 1");
    task.normalize(today).unwrap();
    assert_eq!(task.date, "20240201");

    // Completed early, it still moves to the occurrence after the stored date.
    assert_eq!(
        task.complete(today).unwrap(),
        Completion::Reschedule("20240301".to_owned())
    );
}

#[test]
fn create_then_complete_one_off_task() {
    let today = ymd("20240126");

    let mut task = draft("", "");
    task.normalize(today).unwrap();
    assert_eq!(task.date, "20240126");
    assert_eq!(task.complete(today).unwrap(), Completion::Delete);
}

#[test]
fn update_keeps_other_fields() {
    let today = ymd("20240126");

    let mut task = draft("20240101", "w 5");
    task.id = "42".to_owned();
    task.normalize(today).unwrap();
    assert_eq!(task.id, "42");
    assert_eq!(task.title, "Pay rent");
    assert_eq!(task.comment, "before noon");
    assert_eq!(task.repeat, "w 5");
    assert_eq!(task.date, "20240202");
}

#[test]
fn update_without_id_is_rejected() {
    let today = ymd("20240126");

    let mut task = draft("20240101", "w 5");
    assert_eq!(task.update(today), Err(TaskError::MissingId));

    task.id = "42".to_owned();
    task.update(today).unwrap();
    assert_eq!(task.date, "20240202");
}

#[test]
fn invalid_repeat_rejects_task() {
    let mut task = draft("20240126", "x 1");
    assert_eq!(
        task.normalize(ymd("20240126")),
        Err(TaskError::InvalidRepeat(RepeatError::UnsupportedRuleKind {
            kind: "x".to_owned()
        }))
    );
    // Failed normalization leaves the date untouched.
    assert_eq!(task.date, "20240126");
}

#[test]
fn round_trips_through_json() {
    let mut task = draft("20240101", "d 3");
    task.normalize(ymd("20240126")).unwrap();

    let json = serde_json::to_string(&task).unwrap();
    let back: Task = serde_json::from_str(&json).unwrap();
    assert_eq!(back, task);
}
