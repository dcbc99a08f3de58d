use chrono::{NaiveDate, NaiveTime};
use log::debug;

use crate::{Calendar, CalendarError, Event, EventPatch, Result};

const DEMO_DATA: &[(&str, &str, &str, &str)] = &[
    ("2024-03-15", "Meeting with Client", "09:00 AM", "10:00 AM"),
    ("2024-03-15", "Presentation", "04:00 PM", "05:00 PM"),
    ("2024-03-16", "Project Deadline", "02:00 PM", "03:00 PM"),
];

impl Calendar {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A calendar seeded with a handful of placeholder events.
    #[must_use]
    pub fn with_demo_data() -> Self {
        let mut calendar = Self::new();

        for &(date, title, start, end) in DEMO_DATA {
            let parsed = crate::parse_date(date).and_then(|date| {
                let event = Event::new(title, start.parse()?, end.parse()?)?;
                Ok((date, event))
            });

            match parsed {
                Ok((date, event)) => calendar.add(date, event),
                Err(err) => debug!("Skipping demo event {title:?}: {err}"),
            }
        }

        calendar
    }

    #[must_use]
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.days.contains_key(&date)
    }

    /// Events stored for `date` in insertion order, or `None` if the date was never used.
    #[must_use]
    pub fn events(&self, date: NaiveDate) -> Option<&[Event]> {
        self.days.get(&date).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &Event)> + '_ {
        self.days
            .iter()
            .flat_map(|(date, events)| events.iter().map(move |event| (*date, event)))
    }

    /// Total number of stored events across all dates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn add(&mut self, date: NaiveDate, event: Event) {
        debug!("Adding {:?} on {date}", event.title);
        self.days.entry(date).or_default().push(event);
    }

    /// Index of the first event on `date` titled `title`.
    #[must_use]
    pub fn find(&self, date: NaiveDate, title: &str) -> Option<usize> {
        self.days
            .get(&date)?
            .iter()
            .position(|event| event.title == title)
    }

    #[must_use]
    pub fn get(&self, date: NaiveDate, title: &str) -> Option<&Event> {
        let index = self.find(date, title)?;
        self.days.get(&date)?.get(index)
    }

    /// Applies `patch` to the first event on `date` titled `title`.
    ///
    /// Either every field of the patch is applied or none is: if the resulting
    /// start is not strictly before the resulting end the event is left untouched.
    pub fn edit(&mut self, date: NaiveDate, title: &str, patch: EventPatch) -> Result<&Event> {
        let event = self.lookup_mut(date, title)?;

        let start = patch.start.as_ref().unwrap_or(&event.start).time();
        let end = patch.end.as_ref().unwrap_or(&event.end).time();
        check_order(start, end)?;

        if let Some(new_title) = patch.title {
            event.title = new_title;
        }
        if let Some(new_start) = patch.start {
            event.start = new_start;
        }
        if let Some(new_end) = patch.end {
            event.end = new_end;
        }

        debug!("Edited {title:?} on {date}");
        Ok(&*event)
    }

    /// Removes the first event on `date` titled `title`, leaving any later
    /// events with the same title in place.
    pub fn remove(&mut self, date: NaiveDate, title: &str) -> Result<Event> {
        let index = self
            .find(date, title)
            .ok_or_else(|| not_found(date, title))?;

        let events = self
            .days
            .get_mut(&date)
            .ok_or_else(|| not_found(date, title))?;

        debug!("Removing {title:?} on {date}");
        Ok(events.remove(index))
    }

    fn lookup_mut(&mut self, date: NaiveDate, title: &str) -> Result<&mut Event> {
        self.days
            .get_mut(&date)
            .and_then(|events| events.iter_mut().find(|event| event.title == title))
            .ok_or_else(|| not_found(date, title))
    }
}

fn check_order(start: NaiveTime, end: NaiveTime) -> Result<()> {
    if start < end {
        Ok(())
    } else {
        Err(CalendarError::EndNotAfterStart { start, end })
    }
}

fn not_found(date: NaiveDate, title: &str) -> CalendarError {
    CalendarError::NotFound {
        date,
        title: title.into(),
    }
}
