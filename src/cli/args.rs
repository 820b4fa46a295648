//! Command-line definition

use clap::{Parser, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Format C++ sources in place with clang-format
///
/// Without PATHS, every .cc and .hh file under src/ and test/ is formatted.
/// With PATHS, exactly those files are formatted and nothing is walked.
/// Options go before PATHS: everything from the first path on is taken as
/// a path, including arguments starting with '-'. Use `--` for a path that
/// would otherwise read as an option.
#[derive(Debug, Parser)]
#[command(name = "ccfmt", version, about)]
pub struct Cli {
    /// Files to format instead of walking the source roots
    #[arg(value_name = "PATHS", allow_hyphen_values = true)]
    pub paths: Vec<PathBuf>,

    /// Formatter executable to run (overrides the config file)
    #[arg(long, value_name = "EXE")]
    pub formatter: Option<String>,

    /// Configuration file (defaults to ./ccfmt.toml when present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// When to color output
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Color when stdout is a terminal
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Resolve to a termcolor choice, checking whether stdout is a terminal
    pub fn to_termcolor(self) -> termcolor::ColorChoice {
        self.resolve(std::io::stdout().is_terminal())
    }

    fn resolve(self, is_terminal: bool) -> termcolor::ColorChoice {
        match self {
            ColorChoice::Always => termcolor::ColorChoice::Always,
            ColorChoice::Never => termcolor::ColorChoice::Never,
            ColorChoice::Auto if is_terminal => termcolor::ColorChoice::Auto,
            ColorChoice::Auto => termcolor::ColorChoice::Never,
        }
    }
}
