use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{CalendarError, Result};

/// A 12-hour clock time together with the text it was entered as.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(into = "String", try_from = "String")
)]
pub struct ClockTime {
    time: NaiveTime,
    text: String,
}

impl ClockTime {
    #[must_use]
    pub fn time(&self) -> NaiveTime {
        self.time
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn to_24h(&self) -> String {
        crate::parser::to_24h(self.time)
    }
}

impl FromStr for ClockTime {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim();
        Ok(Self {
            time: crate::parse_time(text)?,
            text: text.into(),
        })
    }
}

impl TryFrom<String> for ClockTime {
    type Error = CalendarError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<ClockTime> for String {
    fn from(clock: ClockTime) -> Self {
        clock.text
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A titled time block on a single day. `start` is always strictly before `end`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(try_from = "RawEvent"))]
pub struct Event {
    pub(crate) title: String,
    pub(crate) start: ClockTime,
    pub(crate) end: ClockTime,
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawEvent {
    title: String,
    start: ClockTime,
    end: ClockTime,
}

#[cfg(feature = "serde")]
impl TryFrom<RawEvent> for Event {
    type Error = CalendarError;

    fn try_from(raw: RawEvent) -> Result<Self> {
        Event::new(raw.title, raw.start, raw.end)
    }
}

impl Event {
    pub fn new<S: Into<String>>(title: S, start: ClockTime, end: ClockTime) -> Result<Self> {
        if start.time >= end.time {
            return Err(CalendarError::EndNotAfterStart {
                start: start.time,
                end: end.time,
            });
        }

        Ok(Self {
            title: title.into(),
            start,
            end,
        })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn start(&self) -> &ClockTime {
        &self.start
    }

    #[must_use]
    pub fn end(&self) -> &ClockTime {
        &self.end
    }
}

/// Optional replacement values for an existing event. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventPatch {
    pub title: Option<String>,
    pub start: Option<ClockTime>,
    pub end: Option<ClockTime>,
}

/// Events keyed by date. Insertion order is kept within a day, and a day whose
/// events were all removed stays in the map with an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Calendar {
    pub(crate) days: BTreeMap<NaiveDate, Vec<Event>>,
}
