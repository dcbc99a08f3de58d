use std::io::{self, BufRead, Write};

use calendar_store::Calendar;
use log::{debug, info};

use crate::{commands, Console};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    View,
    Add,
    Edit,
    Delete,
    Exit,
}

impl TryFrom<&str> for MenuChoice {
    type Error = ();

    /// Accepts only a plain string of digits naming an option between 1 and 5.
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(());
        }

        match s.parse::<u64>().map_err(|_| ())? {
            1 => Ok(Self::View),
            2 => Ok(Self::Add),
            3 => Ok(Self::Edit),
            4 => Ok(Self::Delete),
            5 => Ok(Self::Exit),
            _ => Err(()),
        }
    }
}

pub fn display_menu<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<()> {
    console.say("Main Menu:")?;
    console.say("1. View Calendar")?;
    console.say("2. Add Task/Event")?;
    console.say("3. Edit Task/Event")?;
    console.say("4. Delete Task/Event")?;
    console.say("5. Exit")
}

/// Prompts until a valid option is entered. End of input counts as `Exit`.
pub fn get_choice<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<MenuChoice> {
    loop {
        let Some(raw) = console.prompt("Enter Your Choice: ")? else {
            debug!("Input closed at the menu");
            return Ok(MenuChoice::Exit);
        };

        match MenuChoice::try_from(raw.as_str()) {
            Ok(choice) => return Ok(choice),
            Err(()) => console.say("Invalid choice. Please enter a number between 1 and 5.")?,
        }
    }
}

/// Runs the menu loop until the user exits.
pub fn run<R: BufRead, W: Write>(
    calendar: &mut Calendar,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    loop {
        display_menu(console)?;
        let choice = get_choice(console)?;
        debug!("Menu choice: {choice:?}");

        match choice {
            MenuChoice::View => commands::view(calendar, console)?,
            MenuChoice::Add => commands::add(calendar, console)?,
            MenuChoice::Edit => commands::edit(calendar, console)?,
            MenuChoice::Delete => commands::delete(calendar, console)?,
            MenuChoice::Exit => {
                console.say("Exiting the program. Goodbye!")?;
                info!("Exiting with {} events in the calendar", calendar.len());
                return Ok(());
            }
        }
    }
}
