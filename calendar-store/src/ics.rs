use std::borrow::Cow;

use chrono::NaiveDate;
use ics::properties::{DtEnd, DtStart, Summary};

use crate::{Calendar, Event};

impl Calendar {
    /// Renders every stored event as a VEVENT in floating local time.
    #[must_use]
    pub fn to_ics<'a, S: Into<Cow<'a, str>>>(&'a self, name: S) -> ics::ICalendar<'a> {
        let mut icalendar = ics::ICalendar::new("2.0", name);

        for (date, event) in self.iter() {
            icalendar.add_event(event.to_ics(date));
        }

        icalendar
    }
}

impl Event {
    #[must_use]
    pub fn to_ics(&self, date: NaiveDate) -> ics::Event<'_> {
        let day = date.format("%Y%m%d");
        let start = format!("{day}T{}00", self.start.to_24h().replace(':', ""));
        let end = format!("{day}T{}00", self.end.to_24h().replace(':', ""));

        let id = format!("{}_{}", start, self.title.replace(' ', "-"));

        let mut ics_event = ics::Event::new(id, start.clone());

        ics_event.push(DtStart::new(start));
        ics_event.push(DtEnd::new(end));
        ics_event.push(Summary::new(&self.title));

        ics_event
    }
}
