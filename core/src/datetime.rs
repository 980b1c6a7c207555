// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::Zoned;
use jiff::civil::Date;

/// NOTE: Task dates are stored in this form, so it must stay stable across versions.
pub const STABLE_FORMAT_DATEONLY: &str = "%Y%m%d";

/// Parse an 8-digit `YYYYMMDD` date.
///
/// Only ASCII digits are accepted, so signs, separators and surrounding
/// whitespace are all rejected.
pub fn parse_date(s: &str) -> Option<Date> {
    let bytes = s.as_bytes();
    if bytes.len() != 8 || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }

    // All digits, so slicing on byte offsets is safe and the numbers fit.
    let year: i16 = s.get(0..4)?.parse().ok()?;
    let month: i8 = s.get(4..6)?.parse().ok()?;
    let day: i8 = s.get(6..8)?.parse().ok()?;
    Date::new(year, month, day).ok()
}

/// Format a date as `YYYYMMDD`.
pub fn format_date(date: Date) -> String {
    date.strftime(STABLE_FORMAT_DATEONLY).to_string()
}

/// The current date in the system time zone.
pub fn today() -> Date {
    Zoned::now().date()
}
