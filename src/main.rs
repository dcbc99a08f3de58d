use std::env;
use std::io::{self, Write};

use anyhow::Result;
use calendar_store::Calendar;
use log::info;

use calendar_console::cli::{self, DumpFormat};
use calendar_console::Console;

const LOG_ENV: &str = "CALENDAR_LOG";

fn setup_logging() {
    if env::var(LOG_ENV).is_err() {
        env::set_var(LOG_ENV, "warn");
    }

    pretty_env_logger::init_custom_env(LOG_ENV);
}

fn dump(calendar: &Calendar, format: DumpFormat) -> Result<()> {
    let mut stdout = io::stdout().lock();

    match format {
        DumpFormat::Json => {
            serde_json::to_writer_pretty(&mut stdout, calendar)?;
            writeln!(stdout)?;
        }
        DumpFormat::Ics => write!(stdout, "{}", calendar.to_ics(env!("CARGO_PKG_NAME")))?,
    }

    Ok(stdout.flush()?)
}

fn main() -> Result<()> {
    let args = cli::parse(env::args().skip(1).collect());

    setup_logging();

    let mut calendar = if args.empty {
        Calendar::new()
    } else {
        Calendar::with_demo_data()
    };
    info!("Starting with {} events", calendar.len());

    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
    calendar_console::run(&mut calendar, &mut console)?;
    drop(console);

    if let Some(format) = args.dump {
        info!("Dumping calendar as {format}");
        dump(&calendar, format)?;
    }

    Ok(())
}
