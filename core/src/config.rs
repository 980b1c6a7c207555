// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use jiff::civil::Date;
use serde::de;

use crate::datetime::{self, parse_date};

/// The name of the application.
pub const APP_NAME: &str = "taskcal";

/// Configuration for the scheduling core.
#[derive(Debug, Default, Clone, Copy, serde::Deserialize)]
pub struct Config {
    /// Reference date used in place of the system clock, e.g. for reproducible runs.
    #[serde(default)]
    pub today: Option<ConfigDate>,
}

impl Config {
    /// The reference date: the pinned one if configured, otherwise the current local date.
    pub fn today(&self) -> Date {
        match self.today {
            Some(ConfigDate(date)) => date,
            None => datetime::today(),
        }
    }
}

/// A `YYYYMMDD` date in the configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigDate(pub Date);

impl<'de> serde::Deserialize<'de> for ConfigDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct DateVisitor;

        impl de::Visitor<'_> for DateVisitor {
            type Value = ConfigDate;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str(r#"an 8-digit date string like "20240110""#)
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                parse_date(value)
                    .map(ConfigDate)
                    .ok_or_else(|| de::Error::invalid_value(de::Unexpected::Str(value), &self))
            }
        }

        deserializer.deserialize_str(DateVisitor)
    }
}
