mod calendar;
mod error;
mod parser;
mod structs;

#[cfg(feature = "ics")]
mod ics;

pub use error::{CalendarError, Result};
pub use parser::{format_date, parse_date, parse_time, DATE_FORMAT, TIME_FORMAT};
pub use structs::{Calendar, ClockTime, Event, EventPatch};
