//! The four interactive menu operations. Each one does its own prompting and
//! reports validation failures to the console before returning to the menu.

use std::io::{self, BufRead, Write};

use calendar_store::{
    format_date, parse_date, Calendar, CalendarError, ClockTime, Event, EventPatch,
};
use chrono::NaiveDate;
use log::{debug, info};

use crate::Console;

const NOT_FOUND: &str = "Task/Event not found in the calendar.";

macro_rules! read_or_return {
    ($console:expr, $message:expr) => {
        match $console.prompt($message)? {
            Some(line) => line,
            None => {
                debug!("Input closed during prompt {:?}", $message);
                return Ok(());
            }
        }
    };
}

enum ViewState {
    AwaitingDate,
    Found(NaiveDate),
    Cancelled,
}

pub fn view<R: BufRead, W: Write>(calendar: &Calendar, console: &mut Console<R, W>) -> io::Result<()> {
    let mut state = ViewState::AwaitingDate;

    let date = loop {
        state = match state {
            ViewState::AwaitingDate => {
                match console.prompt(
                    "Enter the date (YYYY-MM-DD) to view (or 'exit' to return to the main menu): ",
                )? {
                    None => ViewState::Cancelled,
                    Some(raw) if raw.trim().eq_ignore_ascii_case("exit") => ViewState::Cancelled,
                    Some(raw) => match parse_date(&raw) {
                        Ok(date) if calendar.contains_date(date) => ViewState::Found(date),
                        _ => {
                            console.say(
                                "No tasks or events scheduled for the selected date. Please try again.",
                            )?;
                            ViewState::AwaitingDate
                        }
                    },
                }
            }
            ViewState::Found(date) => break date,
            ViewState::Cancelled => return Ok(()),
        };
    };

    console.blank()?;
    console.say(format_args!("Tasks/Events for {}:", format_date(date)))?;

    match calendar.events(date) {
        Some(events) if !events.is_empty() => {
            for event in events {
                console.say(format_args!("Title: {}", event.title()))?;
                console.say(format_args!("Start Time: {}", event.start()))?;
                console.say(format_args!("End Time: {}", event.end()))?;
                console.blank()?;
            }
        }
        _ => console.say("No tasks/events scheduled for this date.")?,
    }

    Ok(())
}

pub fn add<R: BufRead, W: Write>(calendar: &mut Calendar, console: &mut Console<R, W>) -> io::Result<()> {
    console.say("Add Task/Event:")?;

    let raw_date = read_or_return!(console, "Enter the date (YYYY-MM-DD): ");
    let date = match parse_date(&raw_date) {
        Ok(date) => date,
        Err(err) => return console.say(err),
    };

    let title = read_or_return!(console, "Enter the title: ").trim().to_owned();
    let raw_start = read_or_return!(console, "Enter the start time (HH:MM AM/PM): ");
    let raw_end = read_or_return!(console, "Enter the end time (HH:MM AM/PM): ");

    let times = raw_start
        .parse::<ClockTime>()
        .and_then(|start| Ok((start, raw_end.parse::<ClockTime>()?)));
    let event = match times.and_then(|(start, end)| Event::new(title, start, end)) {
        Ok(event) => event,
        Err(err @ CalendarError::EndNotAfterStart { .. }) => {
            debug!("Rejected new event: {err:?}");
            return console.say("End time must be after the start time. Please enter valid times.");
        }
        Err(err) => {
            debug!("Rejected new event: {err:?}");
            return console.say(err);
        }
    };

    info!("Adding {:?} on {date}", event.title());
    calendar.add(date, event);
    console.say("Task/Event added successfully!")
}

pub fn edit<R: BufRead, W: Write>(calendar: &mut Calendar, console: &mut Console<R, W>) -> io::Result<()> {
    console.say("Edit Task/Event:")?;

    let raw_date = read_or_return!(
        console,
        "Enter the date (YYYY-MM-DD) of the task/event to edit: "
    );
    let title = read_or_return!(console, "Enter the title of the Task/Event to edit: ");
    let title = title.trim();

    let Some(date) = locate(calendar, &raw_date, title) else {
        return console.say(NOT_FOUND);
    };

    let new_title = read_or_return!(
        console,
        "Enter the new title (or leave empty to keep current title): "
    );
    let new_start = read_or_return!(
        console,
        "Enter the start time (HH:MM AM/PM) (leave empty to keep current time): "
    );
    let new_end = read_or_return!(
        console,
        "Enter the new end time (HH:MM AM/PM) (leave empty to keep current end time): "
    );

    let mut patch = EventPatch::default();

    let new_title = new_title.trim();
    if !new_title.is_empty() {
        patch.title = Some(new_title.to_owned());
    }

    let new_start = new_start.trim();
    if !new_start.is_empty() {
        match new_start.parse::<ClockTime>() {
            Ok(start) => patch.start = Some(start),
            Err(_) => {
                return console
                    .say("Invalid start time format. Please enter the time in HH:MM AM/PM format.")
            }
        }
    }

    let new_end = new_end.trim();
    if !new_end.is_empty() {
        match new_end.parse::<ClockTime>() {
            Ok(end) => patch.end = Some(end),
            Err(_) => {
                return console
                    .say("Invalid end time format. Please enter the time in HH:MM AM/PM format.")
            }
        }
    }

    match calendar.edit(date, title, patch) {
        Ok(event) => {
            info!("Edited {title:?} on {date}, now {:?}", event.title());
            console.say("Task/Event edited successfully!")
        }
        Err(err @ CalendarError::EndNotAfterStart { .. }) => {
            debug!("Rejected edit: {err:?}");
            console.say("End time must be after start time. Please enter a valid end time.")
        }
        Err(_) => console.say(NOT_FOUND),
    }
}

pub fn delete<R: BufRead, W: Write>(
    calendar: &mut Calendar,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    console.say("Delete Task/Event:")?;

    let raw_date = read_or_return!(
        console,
        "Enter the date (YYYY-MM-DD) of the task/event to delete: "
    );
    let title = read_or_return!(console, "Enter the title of the Task/Event to delete: ");
    let title = title.trim();

    let Some(date) = locate(calendar, &raw_date, title) else {
        return console.say(NOT_FOUND);
    };

    let confirmation = read_or_return!(
        console,
        &format!(
            "Are you sure you want to delete '{title}' scheduled for {}? (yes/no): ",
            format_date(date)
        )
    );

    if !confirmation.trim().eq_ignore_ascii_case("yes") {
        return console.say("Deletion canceled.");
    }

    match calendar.remove(date, title) {
        Ok(_) => {
            info!("Deleted {title:?} on {date}");
            console.say("Task/Event deleted successfully!")
        }
        Err(_) => console.say(NOT_FOUND),
    }
}

/// The parsed date, if it holds an event titled `title`.
fn locate(calendar: &Calendar, raw_date: &str, title: &str) -> Option<NaiveDate> {
    parse_date(raw_date)
        .ok()
        .filter(|date| calendar.get(*date, title).is_some())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn date(raw: &str) -> NaiveDate {
        parse_date(raw).unwrap()
    }

    fn drive<F>(calendar: &mut Calendar, input: &str, op: F) -> String
    where
        F: FnOnce(&mut Calendar, &mut Console<Cursor<String>, Vec<u8>>) -> io::Result<()>,
    {
        let mut console = Console::new(Cursor::new(input.to_owned()), Vec::new());
        op(calendar, &mut console).unwrap();
        String::from_utf8(console.into_output()).unwrap()
    }

    fn titles(calendar: &Calendar, day: &str) -> Vec<String> {
        calendar
            .events(date(day))
            .unwrap_or_default()
            .iter()
            .map(|event| event.title().to_owned())
            .collect()
    }

    #[test]
    fn view_lists_events_in_order() {
        let mut calendar = Calendar::with_demo_data();
        let output = drive(&mut calendar, "2024-03-15\n", |c, io| view(c, io));

        let expected = "\nTasks/Events for 2024-03-15:\n\
            Title: Meeting with Client\nStart Time: 09:00 AM\nEnd Time: 10:00 AM\n\n\
            Title: Presentation\nStart Time: 04:00 PM\nEnd Time: 05:00 PM\n\n";
        assert!(output.ends_with(expected), "{output}");
    }

    #[test]
    fn view_retries_unknown_dates() {
        let mut calendar = Calendar::with_demo_data();
        let output = drive(&mut calendar, "2030-01-01\nnonsense\n2024-03-16\n", |c, io| {
            view(c, io)
        });

        assert_eq!(
            output
                .matches("No tasks or events scheduled for the selected date. Please try again.")
                .count(),
            2
        );
        assert!(output.contains("Title: Project Deadline"));
    }

    #[test]
    fn view_exit_is_case_insensitive() {
        let mut calendar = Calendar::with_demo_data();
        let output = drive(&mut calendar, "2030-01-01\nExIt\n", |c, io| view(c, io));

        assert!(!output.contains("Tasks/Events for"));
    }

    #[test]
    fn view_stops_at_end_of_input() {
        let mut calendar = Calendar::with_demo_data();
        let output = drive(&mut calendar, "2030-01-01\n", |c, io| view(c, io));

        assert!(!output.contains("Tasks/Events for"));
    }

    #[test]
    fn view_reports_emptied_date() {
        let mut calendar = Calendar::with_demo_data();
        calendar.remove(date("2024-03-16"), "Project Deadline").unwrap();

        let output = drive(&mut calendar, "2024-03-16\n", |c, io| view(c, io));
        assert!(output.ends_with("No tasks/events scheduled for this date.\n"));
    }

    #[test]
    fn add_appends_event() {
        let mut calendar = Calendar::with_demo_data();
        let output = drive(
            &mut calendar,
            "2024-03-15\n  Lunch  \n12:00 PM\n01:00 PM\n",
            |c, io| add(c, io),
        );

        assert!(output.ends_with("Task/Event added successfully!\n"));
        assert_eq!(
            titles(&calendar, "2024-03-15"),
            ["Meeting with Client", "Presentation", "Lunch"]
        );
    }

    #[test]
    fn add_rejects_bad_input_without_mutation() {
        let cases = [
            ("2024-13-15\n", "Invalid date format"),
            ("2024-03-15\nBad\n2 PM\n03:00 PM\n", "Invalid time format"),
            ("2024-03-15\nBad\n02:00 PM\n15:00\n", "Invalid time format"),
            (
                "2024-03-15\nBad\n02:00 PM\n01:00 PM\n",
                "End time must be after the start time. Please enter valid times.",
            ),
            ("2024-03-15\nBad\n02:00 PM\n02:00 PM\n", "End time must be after"),
        ];

        for (input, message) in cases {
            let mut calendar = Calendar::with_demo_data();
            let output = drive(&mut calendar, input, |c, io| add(c, io));

            assert!(output.contains(message), "{input:?}: {output}");
            assert!(!output.contains("added successfully"));
            assert_eq!(calendar, Calendar::with_demo_data(), "{input:?}");
        }
    }

    #[test]
    fn add_creates_new_date() {
        let mut calendar = Calendar::new();
        drive(&mut calendar, "2025-01-01\nParty\n08:00 PM\n11:30 PM\n", |c, io| {
            add(c, io)
        });

        assert_eq!(titles(&calendar, "2025-01-01"), ["Party"]);
    }

    #[test]
    fn add_keeps_entered_time_text() {
        let mut calendar = Calendar::with_demo_data();
        drive(&mut calendar, "2024-03-15\nY\n9:00 am\n10:00 am\n", |c, io| {
            add(c, io)
        });

        let output = drive(&mut calendar, "2024-03-15\n", |c, io| view(c, io));
        assert!(
            output.ends_with("Title: Y\nStart Time: 9:00 am\nEnd Time: 10:00 am\n\n"),
            "{output}"
        );
    }

    #[test]
    fn add_rejects_loose_formats() {
        for input in [
            "24-03-15\nX\n09:00 AM\n10:00 AM\n",
            "+2024-03-15\nX\n09:00 AM\n10:00 AM\n",
            "2024-03-15\nX\n09:00AM\n10:00AM\n",
        ] {
            let mut calendar = Calendar::with_demo_data();
            let output = drive(&mut calendar, input, |c, io| add(c, io));

            assert!(output.contains("Invalid"), "{input:?}: {output}");
            assert_eq!(calendar, Calendar::with_demo_data(), "{input:?}");
        }
    }

    #[test]
    fn edit_with_empty_fields_keeps_event() {
        let mut calendar = Calendar::with_demo_data();
        let output = drive(
            &mut calendar,
            "2024-03-16\nProject Deadline\n\n\n\n",
            |c, io| edit(c, io),
        );

        assert!(output.ends_with("Task/Event edited successfully!\n"));
        assert_eq!(calendar, Calendar::with_demo_data());
    }

    #[test]
    fn edit_updates_provided_fields() {
        let mut calendar = Calendar::with_demo_data();
        drive(
            &mut calendar,
            "2024-03-16\nProject Deadline\nShip It\n\n05:00 PM\n",
            |c, io| edit(c, io),
        );

        let event = calendar.get(date("2024-03-16"), "Ship It").unwrap();
        assert_eq!(event.start().as_str(), "02:00 PM");
        assert_eq!(event.end().as_str(), "05:00 PM");
    }

    #[test]
    fn edit_rejects_end_before_start() {
        let mut calendar = Calendar::with_demo_data();
        let output = drive(
            &mut calendar,
            "2024-03-16\nProject Deadline\n\n\n01:00 PM\n",
            |c, io| edit(c, io),
        );

        assert!(output.contains("End time must be after start time. Please enter a valid end time."));
        assert!(!output.contains("edited successfully"));
        let event = calendar.get(date("2024-03-16"), "Project Deadline").unwrap();
        assert_eq!(event.end().as_str(), "03:00 PM");
    }

    #[test]
    fn edit_failure_keeps_title() {
        let mut calendar = Calendar::with_demo_data();
        let output = drive(
            &mut calendar,
            "2024-03-16\nProject Deadline\nRenamed\nlater\n\n",
            |c, io| edit(c, io),
        );

        assert!(output.contains("Invalid start time format"));
        assert_eq!(calendar, Calendar::with_demo_data());
    }

    #[test]
    fn edit_unknown_event() {
        for input in ["2024-03-16\nNope\n", "2030-01-01\nProject Deadline\n", "junk\nx\n"] {
            let mut calendar = Calendar::with_demo_data();
            let output = drive(&mut calendar, input, |c, io| edit(c, io));

            assert!(output.ends_with("Task/Event not found in the calendar.\n"), "{input:?}");
            assert!(!output.contains("Enter the new title"));
        }
    }

    #[test]
    fn delete_requires_yes() {
        for answer in ["no", "y", "", "yes please"] {
            let mut calendar = Calendar::with_demo_data();
            let output = drive(
                &mut calendar,
                &format!("2024-03-15\nPresentation\n{answer}\n"),
                |c, io| delete(c, io),
            );

            assert!(output.ends_with("Deletion canceled.\n"), "{answer:?}");
            assert_eq!(calendar.len(), 3);
        }
    }

    #[test]
    fn delete_removes_first_match() {
        let mut calendar = Calendar::with_demo_data();
        drive(
            &mut calendar,
            "2024-03-15\nDup\n01:00 PM\n02:00 PM\n",
            |c, io| add(c, io),
        );
        drive(
            &mut calendar,
            "2024-03-15\nDup\n06:00 PM\n07:00 PM\n",
            |c, io| add(c, io),
        );

        let output = drive(&mut calendar, "2024-03-15\nDup\nYES\n", |c, io| {
            delete(c, io)
        });

        assert!(output.contains(
            "Are you sure you want to delete 'Dup' scheduled for 2024-03-15? (yes/no): "
        ));
        assert!(output.ends_with("Task/Event deleted successfully!\n"));
        let remaining = calendar.get(date("2024-03-15"), "Dup").unwrap();
        assert_eq!(remaining.start().as_str(), "06:00 PM");
        assert_eq!(calendar.len(), 4);
    }

    #[test]
    fn delete_unknown_event() {
        let mut calendar = Calendar::with_demo_data();
        let output = drive(&mut calendar, "2024-03-15\nLunch\n", |c, io| delete(c, io));

        assert!(output.ends_with("Task/Event not found in the calendar.\n"));
        assert_eq!(calendar.len(), 3);
    }
}
