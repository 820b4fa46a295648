#![forbid(unsafe_code)]

use ccfmt::cli::Cli;
use ccfmt::config::FormatConfig;
use ccfmt::engine::{ExternalFormatter, LaunchError, RunError, Runner, Targets};
use ccfmt::logging;
use ccfmt::output::HumanReporter;
use clap::Parser;
use std::path::Path;
use std::process::ExitCode;

/// Exit codes
const EXIT_SUCCESS: u8 = 0;
const EXIT_FORMATTER_MISSING: u8 = 1;
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_cli_logger(cli.verbose);

    ExitCode::from(run(cli))
}

fn run(cli: Cli) -> u8 {
    let config = match FormatConfig::discover(cli.config.as_deref(), Path::new(".")) {
        Ok(config) => config.with_formatter(cli.formatter),
        Err(e) => {
            eprintln!("Error: {}", e);
            return EXIT_ERROR;
        }
    };

    let mut reporter = HumanReporter::stdout(cli.color.to_termcolor());
    let targets = Targets::select(cli.paths, &config);
    let mut runner = Runner::new(ExternalFormatter::from_config(&config));

    match runner.run(&targets, &mut reporter) {
        Ok(_) => EXIT_SUCCESS,
        Err(RunError::Launch(LaunchError::NotFound { program })) => {
            if let Err(e) = reporter.formatter_unavailable(&program) {
                eprintln!("Error: {}", e);
            }
            EXIT_FORMATTER_MISSING
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_ERROR
        }
    }
}
