use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("Invalid date format. Please enter the date in YYYY-MM-DD format.")]
    InvalidDate(String),

    #[error("Invalid time format. Please enter the time in HH:MM AM/PM format.")]
    InvalidTime(String),

    #[error("End time must be after start time.")]
    EndNotAfterStart { start: NaiveTime, end: NaiveTime },

    #[error("Task/Event not found in the calendar.")]
    NotFound { date: NaiveDate, title: String },
}

pub type Result<T, E = CalendarError> = std::result::Result<T, E>;
