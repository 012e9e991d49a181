//! Strict parsing and formatting for stored dates and times of day.
//!
//! Due dates are persisted as `YYYY-MM-DD` and schedule times as
//! `HH:MM:SS`. Both formats are fixed-width, so string order and
//! chronological order agree for every value accepted here.

use jiff::civil::{Date, Time};

use crate::error::{Result, TrackerError};

/// Format of persisted due dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format of persisted schedule times.
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Parses a `YYYY-MM-DD` date for the named field.
pub fn parse_date(field: &'static str, value: &str) -> Result<Date> {
    let invalid = || TrackerError::InvalidDateFormat {
        field,
        value: value.to_string(),
        expected: "YYYY-MM-DD",
    };

    if !has_shape(value, &[4, 2, 2], b'-') {
        return Err(invalid());
    }
    Date::strptime(DATE_FORMAT, value).map_err(|_| invalid())
}

/// Parses an `HH:MM:SS` time of day for the named field.
pub fn parse_time(field: &'static str, value: &str) -> Result<Time> {
    let invalid = || TrackerError::InvalidDateFormat {
        field,
        value: value.to_string(),
        expected: "HH:MM:SS",
    };

    if !has_shape(value, &[2, 2, 2], b':') {
        return Err(invalid());
    }
    let time = Time::strptime(TIME_FORMAT, value).map_err(|_| invalid())?;

    // strptime clamps a leap second to :59; only exact values are accepted.
    if format_time(time) != value {
        return Err(invalid());
    }
    Ok(time)
}

/// Formats a date the way it is stored.
pub fn format_date(date: Date) -> String {
    date.strftime(DATE_FORMAT).to_string()
}

/// Formats a time of day the way it is stored.
pub fn format_time(time: Time) -> String {
    time.strftime(TIME_FORMAT).to_string()
}

/// Checks for digit groups of the given widths joined by `sep`.
fn has_shape(value: &str, widths: &[usize], sep: u8) -> bool {
    let groups: Vec<&[u8]> = value.as_bytes().split(|b| *b == sep).collect();
    groups.len() == widths.len()
        && groups
            .iter()
            .zip(widths)
            .all(|(group, width)| group.len() == *width && group.iter().all(u8::is_ascii_digit))
}
