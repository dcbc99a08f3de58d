use chrono::{NaiveDate, NaiveTime};

use crate::{CalendarError, Result};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%I:%M %p";

/// Parses a `YYYY-MM-DD` calendar date. The year must be exactly four digits.
pub fn parse_date<S: AsRef<str>>(s: S) -> Result<NaiveDate> {
    let raw = s.as_ref().trim();
    let invalid = || CalendarError::InvalidDate(raw.into());

    let year = raw.split('-').next().unwrap_or_default();
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| invalid())
}

/// Parses a 12-hour `HH:MM AM/PM` clock time. The meridiem has to be
/// separated from the minutes by whitespace.
pub fn parse_time<S: AsRef<str>>(s: S) -> Result<NaiveTime> {
    let raw = s.as_ref().trim();
    let invalid = || CalendarError::InvalidTime(raw.into());

    match raw.rsplit_once(char::is_whitespace) {
        Some((clock, meridiem)) if !clock.trim_end().is_empty() && !meridiem.is_empty() => {}
        _ => return Err(invalid()),
    }

    NaiveTime::parse_from_str(raw, TIME_FORMAT).map_err(|_| invalid())
}

/// `HH:MM` in 24-hour form. Sorts lexicographically in clock order.
#[must_use]
pub(crate) fn to_24h(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
