#![forbid(unsafe_code)]

//! Launching the external formatter on a single file

use crate::config::FormatConfig;
use std::io;
use std::path::Path;
use std::process::Command;
use thiserror::Error;

/// Failure to start the formatter process
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The executable could not be found
    #[error("{program} is not available")]
    NotFound { program: String },

    /// Any other failure while spawning the process
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
}

impl LaunchError {
    fn from_io(program: &str, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            LaunchError::NotFound {
                program: program.to_string(),
            }
        } else {
            LaunchError::Spawn {
                program: program.to_string(),
                source,
            }
        }
    }
}

/// Result of a formatter run that was successfully launched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationOutcome {
    /// The formatter exited successfully
    Formatted,
    /// The formatter ran but reported failure (`None` when killed by a signal)
    FormatterFailed { code: Option<i32> },
}

/// Something that formats one file at a time
pub trait Invoker {
    fn invoke(&mut self, path: &Path) -> Result<InvocationOutcome, LaunchError>;
}

/// Runs `<formatter> <in-place flag> <path>` and waits for it
#[derive(Debug, Clone)]
pub struct ExternalFormatter {
    program: String,
    in_place_flag: String,
}

impl ExternalFormatter {
    pub fn new(program: impl Into<String>, in_place_flag: impl Into<String>) -> Self {
        ExternalFormatter {
            program: program.into(),
            in_place_flag: in_place_flag.into(),
        }
    }

    pub fn from_config(config: &FormatConfig) -> Self {
        Self::new(config.formatter.clone(), config.in_place_flag.clone())
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Invoker for ExternalFormatter {
    fn invoke(&mut self, path: &Path) -> Result<InvocationOutcome, LaunchError> {
        tracing::debug!(program = %self.program, path = %path.display(), "invoking formatter");

        // The formatter's stdio is inherited so its diagnostics reach the user
        let status = Command::new(&self.program)
            .arg(&self.in_place_flag)
            .arg(path)
            .status()
            .map_err(|e| LaunchError::from_io(&self.program, e))?;

        if status.success() {
            Ok(InvocationOutcome::Formatted)
        } else {
            tracing::info!(
                path = %path.display(),
                code = ?status.code(),
                "formatter reported failure"
            );
            Ok(InvocationOutcome::FormatterFailed {
                code: status.code(),
            })
        }
    }
}
