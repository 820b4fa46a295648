#![forbid(unsafe_code)]

//! Human-readable progress output with colorization support

use std::io::{self, Write};
use std::path::Path;
use termcolor::{Buffer, Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

enum Sink {
    Stdout(StandardStream),
    Buffer(Buffer),
}

/// Writes progress and failure messages to stdout
///
/// One `Formatting <path>` line is written per target. The only failure
/// reported here is a formatter that could not be found.
pub struct HumanReporter {
    sink: Sink,
}

impl HumanReporter {
    /// Creates a reporter writing to stdout
    pub fn stdout(color_choice: ColorChoice) -> Self {
        HumanReporter {
            sink: Sink::Stdout(StandardStream::stdout(color_choice)),
        }
    }

    /// Creates a reporter collecting output in memory
    pub fn buffered(color_choice: ColorChoice) -> Self {
        let buffer = match color_choice {
            ColorChoice::Always | ColorChoice::AlwaysAnsi => Buffer::ansi(),
            ColorChoice::Auto | ColorChoice::Never => Buffer::no_color(),
        };
        HumanReporter {
            sink: Sink::Buffer(buffer),
        }
    }

    /// Announce that `path` is about to be formatted
    pub fn formatting(&mut self, path: &Path) -> io::Result<()> {
        let out = self.writer();
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
        write!(out, "Formatting")?;
        out.reset()?;
        writeln!(out, " {}", path.display())?;
        out.flush()
    }

    /// Tell the user the formatter executable is missing
    pub fn formatter_unavailable(&mut self, program: &str) -> io::Result<()> {
        let out = self.writer();
        out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
        write!(out, "Error:")?;
        out.reset()?;
        writeln!(out, " {} is not available!", program)?;
        out.flush()
    }

    /// Text collected so far by a buffered reporter (empty for stdout)
    pub fn contents(&self) -> String {
        match &self.sink {
            Sink::Buffer(buffer) => String::from_utf8_lossy(buffer.as_slice()).into_owned(),
            Sink::Stdout(_) => String::new(),
        }
    }

    fn writer(&mut self) -> &mut dyn WriteColor {
        match &mut self.sink {
            Sink::Stdout(stream) => stream as &mut dyn WriteColor,
            Sink::Buffer(buffer) => buffer,
        }
    }
}
