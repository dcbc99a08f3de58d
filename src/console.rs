use std::fmt::Display;
use std::io::{self, BufRead, Write};

/// Line-oriented terminal I/O. Running out of input is reported as `None`
/// rather than as an error so callers can treat it as a cancellation.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `message` without a newline and reads one line, stripping the line terminator.
    pub fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(len);
        Ok(Some(line))
    }

    pub fn say<D: Display>(&mut self, message: D) -> io::Result<()> {
        writeln!(self.output, "{message}")
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.output)
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
