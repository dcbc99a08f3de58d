use std::fmt;
use std::process;
use std::str::FromStr;

use getopts::Options;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DumpFormat {
    Json,
    Ics,
}

impl FromStr for DumpFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "ics" => Ok(Self::Ics),
            other => Err(format!("unknown format '{other}', expected 'json' or 'ics'")),
        }
    }
}

impl fmt::Display for DumpFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Json => "json",
            Self::Ics => "ics",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub empty: bool,
    pub dump: Option<DumpFormat>,
}

fn opts() -> Options {
    let mut opts = Options::new();
    opts.optflag(
        "h",
        "help",
        concat!("Print the help output of ", env!("CARGO_PKG_NAME")),
    );
    opts.optflag(
        "e",
        "empty",
        "Start with an empty calendar instead of the demo events",
    );
    opts.optopt(
        "d",
        "dump",
        "Print the calendar to stdout on exit (json or ics)",
        "FORMAT",
    );
    opts
}

pub enum Parsed {
    Run(Args),
    Help(String),
}

/// Parses the arguments following the program name.
pub fn try_parse<I: IntoIterator<Item = String>>(args: I) -> Result<Parsed, String> {
    let opts = opts();

    let matches = opts.parse(args).map_err(|fail| fail.to_string())?;

    if matches.opt_present("help") {
        return Ok(Parsed::Help(
            opts.usage(&opts.short_usage(env!("CARGO_PKG_NAME"))),
        ));
    }

    if let Some(extra) = matches.free.first() {
        return Err(format!("Unexpected argument '{extra}'"));
    }

    let dump = matches
        .opt_get::<DumpFormat>("dump")
        .map_err(|err| format!("Provided value for option 'dump' is invalid: {err}"))?;

    Ok(Parsed::Run(Args {
        empty: matches.opt_present("empty"),
        dump,
    }))
}

pub fn parse(args: Vec<String>) -> Args {
    match try_parse(args) {
        Ok(Parsed::Run(args)) => args,
        Ok(Parsed::Help(usage)) => {
            println!("{usage}");
            process::exit(0);
        }
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}
