// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::Date;

use crate::datetime::{format_date, parse_date};
use crate::error::TaskError;
use crate::rule::RepeatRule;

/// A stored task, as exchanged with the persistence and request layers.
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Task {
    /// Opaque identifier assigned by storage; empty for new tasks.
    #[serde(default)]
    pub id: String,

    /// Due date in `YYYYMMDD`; empty means today.
    #[serde(default)]
    pub date: String,

    /// Title, required.
    pub title: String,

    /// Free-form comment.
    #[serde(default)]
    pub comment: String,

    /// Repeat rule text; empty for one-off tasks.
    #[serde(default)]
    pub repeat: String,
}

/// What to do with a task once it is marked done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Move the task to the given `YYYYMMDD` date.
    Reschedule(String),

    /// One-off task, remove it.
    Delete,
}

impl Task {
    /// Validate the task and bring its date up to date before it is stored.
    ///
    /// A date in the past moves to the next occurrence after `today` when the
    /// task repeats, and to `today` otherwise. A task due today is kept.
    #[tracing::instrument(level = "debug", skip(self), fields(date = %self.date, repeat = %self.repeat))]
    pub fn normalize(&mut self, today: Date) -> Result<(), TaskError> {
        if self.title.trim().is_empty() {
            return Err(TaskError::MissingTitle);
        }

        let date = if self.date.is_empty() {
            today
        } else {
            parse_date(&self.date).ok_or_else(|| TaskError::InvalidDate {
                value: self.date.clone(),
            })?
        };

        let rule = self.rule()?;
        let date = match &rule {
            Some(rule) if date < today => rule.next_after(date, today)?,
            None if date < today => today,
            _ => date,
        };

        // A rule that parses can still be unsatisfiable, reject it up front.
        if let Some(rule) = &rule {
            rule.next_after(date, today)?;
        }

        self.date = format_date(date);
        tracing::debug!(date = %self.date, "normalized task");
        Ok(())
    }

    /// Validate an edit of a stored task. Same as [`Task::normalize`], but
    /// the task must name the stored record it replaces.
    pub fn update(&mut self, today: Date) -> Result<(), TaskError> {
        if self.id.trim().is_empty() {
            return Err(TaskError::MissingId);
        }
        self.normalize(today)
    }

    /// Decide what happens to the task when it is marked done on `today`.
    #[tracing::instrument(level = "debug", skip(self), fields(id = %self.id))]
    pub fn complete(&self, today: Date) -> Result<Completion, TaskError> {
        let Some(rule) = self.rule()? else {
            return Ok(Completion::Delete);
        };

        let date = parse_date(&self.date).ok_or_else(|| TaskError::InvalidDate {
            value: self.date.clone(),
        })?;
        let next = rule.next_after(date, today)?;
        Ok(Completion::Reschedule(format_date(next)))
    }

    fn rule(&self) -> Result<Option<RepeatRule>, TaskError> {
        if self.repeat.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(self.repeat.parse()?))
    }
}
